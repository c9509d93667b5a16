//! Performance statistics endpoint

use crate::BackendClient;
use crate::error::Result;
use joblog_core::domain::stats::PerformanceStat;

impl BackendClient {
    /// Fetch upload counters for every category
    pub async fn performance_stats(&self) -> Result<Vec<PerformanceStat>> {
        let url = format!("{}/api/performance-stats", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}
