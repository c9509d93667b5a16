//! Joblog HTTP Client
//!
//! A small, type-safe HTTP client for the Speedpack Express logging backend.
//!
//! Two entry points:
//! - [`JobLogSender`] posts a job-log record to a fixed endpoint and hands back
//!   the raw status code and body.
//! - [`BackendClient`] reads what the backend has collected (logged jobs,
//!   per-category performance counters).
//!
//! # Example
//!
//! ```no_run
//! use joblog_client::JobLogSender;
//! use joblog_core::domain::job_log::JobLogRecord;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let sender = JobLogSender::new();
//!     sender
//!         .send_and_report(&JobLogRecord::test_record(), &mut std::io::stdout())
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;
mod sender;
mod stats;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use sender::{JobLogResponse, JobLogSender, LOG_ENDPOINT};

use joblog_core::dto::job_log::ErrorBody;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Base URL of the production backend
pub const DEFAULT_BACKEND_URL: &str = "https://speedpack-express-website-backend.onrender.com";

/// HTTP client for the logging backend's API
///
/// Groups the backend endpoints:
/// - Job-log submission (through [`BackendClient::job_log_sender`])
/// - Logged job listing and search
/// - Performance statistics
#[derive(Debug, Clone)]
pub struct BackendClient {
    /// Base URL of the backend (e.g., "http://localhost:3000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl BackendClient {
    /// Create a new backend client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend (e.g., "http://localhost:3000")
    ///
    /// # Example
    /// ```
    /// use joblog_client::BackendClient;
    ///
    /// let client = BackendClient::new("http://localhost:3000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new backend client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend
    /// * `client` - A configured reqwest Client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// A sender posting to this backend's `/api/log-job`, sharing the HTTP client
    pub fn job_log_sender(&self) -> JobLogSender {
        JobLogSender::with_endpoint(
            format!("{}/api/log-job", self.base_url),
            self.client.clone(),
        )
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-success statuses become `ApiError`, carrying the backend's `error`
    /// field when the body has one and the raw text otherwise.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<ErrorBody>(&error_text)
                .map(|body| body.error)
                .unwrap_or(error_text);
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}
