//! Logs command handlers
//!
//! Lists and searches the job logs the backend has collected.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use joblog_client::BackendClient;
use joblog_core::domain::job_log::JobLogRecord;

use crate::config::Config;

/// Logs subcommands
#[derive(Subcommand)]
pub enum LogsCommands {
    /// List every logged job
    List,
    /// Find logged jobs by job number
    Search {
        /// Exact job number to match
        job_number: String,
    },
}

/// Handle logs commands
///
/// # Arguments
/// * `command` - The logs command to execute
/// * `config` - The CLI configuration
pub async fn handle_logs_command(command: LogsCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        LogsCommands::List => list_logs(&client).await,
        LogsCommands::Search { job_number } => search_logs(&client, &job_number).await,
    }
}

async fn list_logs(client: &BackendClient) -> Result<()> {
    let logs = client.list_job_logs().await?;

    if logs.is_empty() {
        println!("{}", "No job logs recorded.".yellow());
    } else {
        println!("{}", format!("Found {} job log(s):", logs.len()).bold());
        println!();
        for record in &logs {
            print_log_summary(record);
        }
    }

    Ok(())
}

async fn search_logs(client: &BackendClient, job_number: &str) -> Result<()> {
    let logs = client.search_job_logs(job_number).await?;

    if logs.is_empty() {
        println!(
            "{}",
            format!("No job logs found for {}.", job_number).yellow()
        );
    } else {
        println!(
            "{}",
            format!("Found {} job log(s) for {}:", logs.len(), job_number).bold()
        );
        println!();
        for record in &logs {
            print_log_summary(record);
        }
    }

    Ok(())
}

/// Print a job log summary
fn print_log_summary(record: &JobLogRecord) {
    println!("  {} Job {}", "▸".cyan(), record.job_number.bold());
    println!("    Status:     {}", colorize_status(record));
    println!("    Date:       {}", record.date_time.dimmed());
    if !record.order_type.is_empty() {
        println!("    Order Type: {}", record.order_type);
    }
    if let Some(category) = &record.category {
        println!("    Category:   {}", category);
    }
    if !record.error.is_empty() {
        println!("    Error:      {}", record.error.red());
    }
    println!();
}

/// Colorize a free-form status label for display
fn colorize_status(record: &JobLogRecord) -> ColoredString {
    if record.is_success() {
        record.status.green()
    } else if record.status.eq_ignore_ascii_case("failure") {
        record.status.red()
    } else {
        record.status.yellow()
    }
}
