use crate::graphql::{GRAPHQL_PATH, run_server};
use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| ctx.config.server.host.clone());
    let port = port.unwrap_or(ctx.config.server.port);
    let schema = ctx.schema();

    let url = format!("http://{}:{}{}", host, port, GRAPHQL_PATH);
    println!("{} GraphQL server on {}", "Starting".green(), url.cyan());
    println!("GraphiQL: {}", url);
    println!("Store:    {}", ctx.config.store.backend.to_string().yellow());

    tokio::runtime::Runtime::new()?
        .block_on(async { run_server(schema, &host, port).await })
        .with_context(|| format!("Failed to serve on {}:{}", host, port))?;
    Ok(())
}
