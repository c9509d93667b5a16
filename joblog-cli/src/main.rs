//! Joblog CLI
//!
//! Sends job-log records to the Speedpack Express logging backend and reads
//! back what it has collected. Run without a subcommand it posts the built-in
//! test record and prints the raw status code and response.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use joblog_client::DEFAULT_BACKEND_URL;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "joblog")]
#[command(about = "Speedpack Express job-log CLI", long_about = None)]
struct Cli {
    /// Backend URL for `logs` and `stats`; sends always use the fixed endpoint
    #[arg(long, env = "JOBLOG_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "joblog_cli=info,joblog_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        backend_url: cli.backend_url,
    };
    config.validate()?;

    handle_command(cli.command.unwrap_or_default(), &config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::LogsCommands;
    use crate::commands::send::{handle_send_command, log_sender, tests::spawn_log_backend};
    use axum::http::StatusCode;
    use joblog_client::LOG_ENDPOINT;

    #[test]
    fn test_backend_url_does_not_redirect_sends() {
        let cli = Cli::try_parse_from(["joblog", "--backend-url", "http://elsewhere.invalid"])
            .unwrap();
        assert_eq!(cli.backend_url, "http://elsewhere.invalid");
        assert!(cli.command.is_none());
        assert_eq!(log_sender().endpoint(), LOG_ENDPOINT);
    }

    #[tokio::test]
    async fn test_no_subcommand_prints_report_for_test_record() {
        let (backend, received) = spawn_log_backend(StatusCode::OK, "OK").await;
        let cli = Cli::try_parse_from(["joblog"]).unwrap();

        let Commands::Send(args) = cli.command.unwrap_or_default() else {
            panic!("expected the default command to send");
        };
        let mut out = Vec::new();
        handle_send_command(args, &backend.job_log_sender(), &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Status Code: 200\nResponse: OK\n");
        let received = received.lock().unwrap();
        assert_eq!(received[0]["jobNumber"], "TEST123");
        assert_eq!(received[0]["status"], "failure");
        assert_eq!(received[0]["error"], "Test error message");
    }

    #[test]
    fn test_parse_send_overrides() {
        let cli = Cli::try_parse_from([
            "joblog",
            "--backend-url",
            "http://localhost:3000",
            "send",
            "--job-number",
            "J-1",
            "--status",
            "success",
            "--category",
            "Pallets",
        ])
        .unwrap();

        assert_eq!(cli.backend_url, "http://localhost:3000");
        match cli.command {
            Some(Commands::Send(args)) => {
                assert_eq!(args.job_number, "J-1");
                assert_eq!(args.status, "success");
                assert_eq!(args.error, "Test error message");
                assert_eq!(args.category.as_deref(), Some("Pallets"));
            }
            _ => panic!("expected send command"),
        }
    }

    #[test]
    fn test_parse_logs_search() {
        let cli = Cli::try_parse_from(["joblog", "logs", "search", "TEST123"]).unwrap();
        match cli.command {
            Some(Commands::Logs {
                command: LogsCommands::Search { job_number },
            }) => assert_eq!(job_number, "TEST123"),
            _ => panic!("expected logs search command"),
        }
    }
}
