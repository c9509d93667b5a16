//! Send command handler
//!
//! Builds a job-log record from the flags (falling back to the built-in test
//! values) and posts it, printing the raw status code and response.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use joblog_client::JobLogSender;
use joblog_core::domain::job_log::{JobLogRecord, TEST_JOB_NUMBER};
use tracing::{info, warn};

const DEFAULT_STATUS: &str = "failure";
const DEFAULT_ERROR: &str = "Test error message";
const DEFAULT_ORDER_TYPE: &str = "Local Delivery";

/// Fields of the record to send
#[derive(Args, Debug, Clone)]
pub struct SendArgs {
    /// Job identifier
    #[arg(long, default_value = TEST_JOB_NUMBER)]
    pub job_number: String,

    /// Status label (e.g. success, failure)
    #[arg(long, default_value = DEFAULT_STATUS)]
    pub status: String,

    /// Error description, empty when not applicable
    #[arg(long, default_value = DEFAULT_ERROR)]
    pub error: String,

    /// Order classification
    #[arg(long, default_value = DEFAULT_ORDER_TYPE)]
    pub order_type: String,

    /// Category whose upload counters the backend should update
    #[arg(long)]
    pub category: Option<String>,

    /// Timestamp to send instead of the current UTC time
    #[arg(long)]
    pub date_time: Option<String>,
}

impl Default for SendArgs {
    fn default() -> Self {
        Self {
            job_number: TEST_JOB_NUMBER.to_string(),
            status: DEFAULT_STATUS.to_string(),
            error: DEFAULT_ERROR.to_string(),
            order_type: DEFAULT_ORDER_TYPE.to_string(),
            category: None,
            date_time: None,
        }
    }
}

impl SendArgs {
    /// Assemble the record, stamping it now unless a timestamp was given
    pub fn into_record(self) -> JobLogRecord {
        let mut record =
            JobLogRecord::new(self.job_number, self.status, self.error, self.order_type);
        if let Some(date_time) = self.date_time {
            record = record.with_date_time(date_time);
        }
        if let Some(category) = self.category {
            record = record.with_category(category);
        }
        record
    }
}

/// Sender for the fixed logging endpoint
///
/// Sends never go through `--backend-url`; only read commands honor it.
pub fn log_sender() -> JobLogSender {
    JobLogSender::new()
}

/// Handle the send command
///
/// Transport failures propagate to `main`; any HTTP status is written to `out`
/// as-is.
pub async fn handle_send_command<W: Write>(
    args: SendArgs,
    sender: &JobLogSender,
    out: &mut W,
) -> Result<()> {
    let record = args.into_record();

    let missing = record.missing_required_fields();
    if !missing.is_empty() {
        warn!(
            "Sending job log without {}; the backend will likely reject it",
            missing.join(", ")
        );
    }

    info!("Sending job log {} to {}", record.job_number, sender.endpoint());

    sender.send_and_report(&record, out).await?;

    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Bytes;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::post;
    use joblog_client::{BackendClient, LOG_ENDPOINT};
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    pub(crate) async fn spawn_log_backend(
        status: StatusCode,
        body: &'static str,
    ) -> (BackendClient, Arc<Mutex<Vec<Value>>>) {
        let received: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
        let state = received.clone();
        let app = Router::new()
            .route(
                "/api/log-job",
                post(
                    move |State(state): State<Arc<Mutex<Vec<Value>>>>, raw: Bytes| async move {
                        let parsed: Value = serde_json::from_slice(&raw).unwrap_or(Value::Null);
                        state.lock().unwrap().push(parsed);
                        (status, body)
                    },
                ),
            )
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind log backend");
        let addr = listener.local_addr().expect("get addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        (BackendClient::new(format!("http://{}", addr)), received)
    }

    #[test]
    fn test_log_sender_targets_fixed_endpoint() {
        assert_eq!(log_sender().endpoint(), LOG_ENDPOINT);
    }

    #[tokio::test]
    async fn test_send_writes_two_line_report() {
        let (backend, received) = spawn_log_backend(StatusCode::OK, "OK").await;

        let mut out = Vec::new();
        handle_send_command(SendArgs::default(), &backend.job_log_sender(), &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Status Code: 200\nResponse: OK\n");
        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0]["jobNumber"], "TEST123");
        assert_eq!(received[0]["orderType"], "Local Delivery");
    }

    #[tokio::test]
    async fn test_send_reports_server_error_without_failing() {
        let (backend, _) = spawn_log_backend(StatusCode::BAD_REQUEST, "rejected").await;

        let args = SendArgs {
            job_number: String::new(),
            ..SendArgs::default()
        };
        let mut out = Vec::new();
        handle_send_command(args, &backend.job_log_sender(), &mut out)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Status Code: 400\nResponse: rejected\n"
        );
    }

    #[test]
    fn test_default_args_build_test_record() {
        let record = SendArgs::default().into_record();
        let expected = JobLogRecord::test_record();

        assert_eq!(record.job_number, expected.job_number);
        assert_eq!(record.status, expected.status);
        assert_eq!(record.error, expected.error);
        assert_eq!(record.order_type, expected.order_type);
        assert_eq!(record.category, None);
        assert!(record.date_time.ends_with("+00:00"));
    }

    #[test]
    fn test_explicit_fields_pass_through() {
        let args = SendArgs {
            job_number: "J-204".to_string(),
            status: "success".to_string(),
            error: String::new(),
            order_type: "Interstate".to_string(),
            category: Some("Pallets".to_string()),
            date_time: Some("2025-06-01T12:00:00+00:00".to_string()),
        };

        let record = args.into_record();
        assert_eq!(record.date_time, "2025-06-01T12:00:00+00:00");
        assert_eq!(record.category.as_deref(), Some("Pallets"));
        assert_eq!(record.error, "");
    }
}
