//! Job-log DTOs

use serde::{Deserialize, Serialize};

/// Query string for searching logged jobs by job number
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchJobLogs {
    pub job_number: String,
}

/// Body the backend returns for a rejected request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
