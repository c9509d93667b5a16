//! Job-log submission

use std::io::Write;

use joblog_core::domain::job_log::JobLogRecord;
use reqwest::Client;
use tracing::debug;

use crate::error::Result;

/// Endpoint that accepts job-log records
pub const LOG_ENDPOINT: &str = "https://speedpack-express-website-backend.onrender.com/api/log-job";

/// Raw outcome of a job-log submission
///
/// Whatever the server answered, unmodified. A 4xx/5xx status is still a
/// response, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobLogResponse {
    pub status: u16,
    pub body: String,
}

impl JobLogResponse {
    /// Write the two-line `Status Code` / `Response` report
    pub fn report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Status Code: {}", self.status)?;
        writeln!(out, "Response: {}", self.body)
    }
}

/// Posts job-log records to a single, fixed endpoint
///
/// The endpoint is chosen at construction and never derived from the record.
/// The default HTTP client has no timeout, so a send may wait indefinitely.
#[derive(Debug, Clone)]
pub struct JobLogSender {
    endpoint: String,
    client: Client,
}

impl JobLogSender {
    /// Create a sender for the production logging endpoint
    ///
    /// # Example
    /// ```
    /// use joblog_client::{JobLogSender, LOG_ENDPOINT};
    ///
    /// let sender = JobLogSender::new();
    /// assert_eq!(sender.endpoint(), LOG_ENDPOINT);
    /// ```
    pub fn new() -> Self {
        Self::with_endpoint(LOG_ENDPOINT, Client::new())
    }

    /// Create a sender for another endpoint using a preconfigured client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL records are posted to
    /// * `client` - A configured reqwest Client
    pub fn with_endpoint(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    /// Get the URL records are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post a record and return the raw response
    ///
    /// # Arguments
    /// * `record` - The record to serialize as the JSON body
    ///
    /// # Returns
    /// The status code and body text, whatever the status
    ///
    /// # Errors
    /// `ClientError::RequestFailed` when no response could be obtained.
    ///
    /// # Example
    /// ```no_run
    /// # use joblog_client::JobLogSender;
    /// # use joblog_core::domain::job_log::JobLogRecord;
    /// # async fn example() -> anyhow::Result<()> {
    /// let sender = JobLogSender::new();
    /// let response = sender.send_job_log(&JobLogRecord::test_record()).await?;
    /// println!("{}", response.status);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_job_log(&self, record: &JobLogRecord) -> Result<JobLogResponse> {
        debug!(
            "Posting job log {} ({}) to {}",
            record.job_number, record.status, self.endpoint
        );

        let response = self.client.post(&self.endpoint).json(record).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("Backend answered {} for job {}", status, record.job_number);

        Ok(JobLogResponse { status, body })
    }

    /// Post a record and write the status code and body to `out`
    ///
    /// Nothing is written when the request fails.
    pub async fn send_and_report<W: Write>(
        &self,
        record: &JobLogRecord,
        out: &mut W,
    ) -> Result<JobLogResponse> {
        let response = self.send_job_log(record).await?;
        response.report(out)?;
        Ok(response)
    }
}

impl Default for JobLogSender {
    fn default() -> Self {
        Self::new()
    }
}
