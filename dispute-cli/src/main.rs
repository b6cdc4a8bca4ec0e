mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Command};
use dispute_core::agent::AgentClient;
use dispute_core::config::AgentsConfig;
use dispute_core::inputs::ResolutionOrder;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);
    debug!(command = ?cli.command, config = ?cli.config, "CLI arguments parsed");

    let mut config = AgentsConfig::load(cli.config.as_deref())?;
    apply_cli_overrides(&cli, &mut config);
    debug!(?config, "Agent configuration resolved");

    let client = AgentClient::from_config(config);

    let output = match cli.command {
        Command::Ask {
            responder,
            message,
            context,
        } => commands::ask(&client, responder, message, context.as_deref()).await?,
        Command::Investigate { input, summarize } => {
            commands::investigate(&client, &input, summarize).await?
        }
        Command::Resolve {
            dispute,
            decision,
            amount,
            notes,
        } => {
            let order = ResolutionOrder {
                dispute_id: dispute,
                decision,
                provisional_credit_amount: amount,
                analyst_notes: notes,
            };
            commands::resolve(&client, order).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_tracing(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn apply_cli_overrides(cli: &Cli, config: &mut AgentsConfig) {
    if let Some(endpoint) = cli.endpoint.as_deref().filter(|e| !e.trim().is_empty()) {
        info!(endpoint, "Overriding dispatch endpoint based on CLI flag");
        config.endpoint = endpoint.trim().to_string();
    }
    if let Some(secs) = cli.timeout_secs {
        info!(timeout_secs = secs, "Overriding agent timeout based on CLI flag");
        config.timeout = Duration::from_secs(secs);
    }
}
