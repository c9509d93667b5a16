//! Configuration module
//!
//! Handles CLI configuration: which backend the read commands talk to.
//! Sends ignore it and always target the fixed logging endpoint.

use anyhow::bail;
use joblog_client::BackendClient;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL queried by `logs` and `stats`
    pub backend_url: String,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.backend_url.is_empty() {
            bail!("backend_url cannot be empty");
        }

        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            bail!("backend_url must start with http:// or https://");
        }

        Ok(())
    }

    /// Client for the backend's read endpoints
    pub fn client(&self) -> BackendClient {
        BackendClient::new(&self.backend_url)
    }
}
