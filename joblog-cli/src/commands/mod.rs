//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod logs;
pub mod send;
mod stats;

pub use logs::LogsCommands;
pub use send::SendArgs;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Send a job-log record to the fixed endpoint (the default when no command is given)
    Send(SendArgs),
    /// Inspect logged jobs
    Logs {
        #[command(subcommand)]
        command: LogsCommands,
    },
    /// Show per-category upload statistics
    Stats,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Send(SendArgs::default())
    }
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module. Sends always go to
/// the fixed logging endpoint and print to stdout.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Send(args) => {
            send::handle_send_command(args, &send::log_sender(), &mut std::io::stdout()).await
        }
        Commands::Logs { command } => logs::handle_logs_command(command, config).await,
        Commands::Stats => stats::handle_stats_command(config).await,
    }
}
