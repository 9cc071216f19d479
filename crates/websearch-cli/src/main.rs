use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error};

use websearch_cli::{
    cli::{Cli, Commands},
    commands, logging,
};
use websearch_config::WebSearchConfig;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<bool> {
    let cli = Cli::parse();

    let config =
        WebSearchConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    logging::init(&config.logging, cli.verbose, cli.log_file.as_deref())?;
    debug!("Effective configuration: {:?}", config);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => commands::serve::execute(config).await?,
        Commands::Search { query, limit } => {
            commands::search::execute(config, query, limit).await?
        }
        Commands::Selftest => return commands::selftest::execute(config).await,
        Commands::Config => commands::config::execute(&config)?,
    }

    Ok(true)
}
