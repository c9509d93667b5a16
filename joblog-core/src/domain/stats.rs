//! Performance statistics domain types

use serde::{Deserialize, Serialize};

/// Upload counters for one job category
///
/// Field names follow the backend's table columns; extra columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceStat {
    pub category: String,
    #[serde(default)]
    pub successful_uploads: i64,
    #[serde(default)]
    pub failed_uploads: i64,
}

impl PerformanceStat {
    /// Total number of uploads recorded for the category
    pub fn total_uploads(&self) -> i64 {
        self.successful_uploads + self.failed_uploads
    }

    /// Share of successful uploads, or `None` when nothing was recorded
    pub fn success_rate(&self) -> Option<f64> {
        match self.total_uploads() {
            0 => None,
            total => Some(self.successful_uploads as f64 / total as f64),
        }
    }
}
