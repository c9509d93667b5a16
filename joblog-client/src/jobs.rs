//! Logged-job read endpoints

use crate::BackendClient;
use crate::error::{ClientError, Result};
use joblog_core::domain::job_log::JobLogRecord;
use joblog_core::dto::job_log::SearchJobLogs;
use tracing::debug;

impl BackendClient {
    // =============================================================================
    // Logged Jobs
    // =============================================================================

    /// List every job log the backend holds in memory
    ///
    /// # Returns
    /// All logged records, oldest first
    pub async fn list_job_logs(&self) -> Result<Vec<JobLogRecord>> {
        let url = format!("{}/api/logs", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Find logged records with an exact job number
    ///
    /// # Arguments
    /// * `job_number` - Job number to match; must not be empty
    ///
    /// # Example
    /// ```no_run
    /// # use joblog_client::BackendClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = BackendClient::new("http://localhost:3000");
    /// let matches = client.search_job_logs("TEST123").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_job_logs(&self, job_number: &str) -> Result<Vec<JobLogRecord>> {
        if job_number.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "job number must not be empty".to_string(),
            ));
        }

        debug!("Searching job logs for {}", job_number);

        let url = format!("{}/api/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&SearchJobLogs {
                job_number: job_number.to_string(),
            })
            .send()
            .await?;

        self.handle_response(response).await
    }
}
