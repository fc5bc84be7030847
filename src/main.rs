use anyhow::{Context, Result};
use clap::Parser;

use roomql::cli::handlers::{self, CommandContext};
use roomql::cli::{Cli, Commands};
use roomql::config::RoomqlConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    roomql::logging::init(cli.verbose, cli.log_file.clone());

    let ctx = CommandContext::new(load_config(&cli)?);

    match cli.command {
        Commands::Serve { host, port } => handlers::handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handlers::handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handlers::handle_mutate(ctx, mutation, variables),
        Commands::Schema => handlers::handle_schema(ctx),
    }
}

fn load_config(cli: &Cli) -> Result<RoomqlConfig> {
    let mut config = match &cli.config {
        Some(path) => RoomqlConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir()?;
            RoomqlConfig::discover(&cwd).context("Failed to load roomql configuration")?
        }
    };

    if let Some(store) = cli.store {
        config.store.backend = store;
    }
    tracing::debug!(backend = %config.store.backend, "configuration loaded");
    Ok(config)
}
