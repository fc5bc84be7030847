use crate::graphql::RoomqlSchema;
use anyhow::{Context, Result};

use super::CommandContext;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let schema = ctx.schema();
    let response = execute(&schema, &query, variables)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Runs one document against the schema on a fresh runtime.
pub(super) fn execute(
    schema: &RoomqlSchema,
    query: &str,
    variables: Option<String>,
) -> Result<async_graphql::Response> {
    let vars: async_graphql::Variables = match variables {
        Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object")?,
        None => async_graphql::Variables::default(),
    };

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "document returned errors");
    }
    Ok(response)
}
