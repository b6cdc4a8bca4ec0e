use clap::{Parser, Subcommand};
use dispute_core::domain::Decision;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dispute-desk",
    version,
    about = "Card-dispute triage agents from the command line"
)]
pub struct Cli {
    /// TOML file with endpoint, timeout and responder identifiers
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Dispatch endpoint (overrides config and AGENT_API_BASE_URL)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
    /// Per-call timeout in seconds
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,
    /// Silence log output on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send an instruction to any responder and print the parsed reply
    Ask {
        #[arg(long)]
        responder: String,
        #[arg(long)]
        message: String,
        /// JSON file whose top-level object is sent as context data
        #[arg(long)]
        context: Option<PathBuf>,
    },
    /// Investigate a dispute described by a JSON file
    Investigate {
        #[arg(long)]
        input: PathBuf,
        /// Also ask the case manager for an intake summary
        #[arg(long)]
        summarize: bool,
    },
    /// Execute an analyst decision on a dispute
    Resolve {
        #[arg(long)]
        dispute: String,
        /// approve or deny
        #[arg(long)]
        decision: Decision,
        #[arg(long)]
        amount: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
    },
}
