//! Job-log domain types

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Job number of the built-in test record
pub const TEST_JOB_NUMBER: &str = "TEST123";

/// A single job event as understood by the logging backend
///
/// Every field is an opaque string passed through unmodified. The five core
/// fields are always serialized; `category` only when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobLogRecord {
    pub job_number: String,
    pub date_time: String,
    pub status: String,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub order_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl JobLogRecord {
    /// Create a record stamped with the current UTC time
    pub fn new(
        job_number: impl Into<String>,
        status: impl Into<String>,
        error: impl Into<String>,
        order_type: impl Into<String>,
    ) -> Self {
        Self {
            job_number: job_number.into(),
            date_time: iso_timestamp(Utc::now()),
            status: status.into(),
            error: error.into(),
            order_type: order_type.into(),
            category: None,
        }
    }

    /// The record the stock test run sends: a failed local delivery
    pub fn test_record() -> Self {
        Self::new(
            TEST_JOB_NUMBER,
            "failure",
            "Test error message",
            "Local Delivery",
        )
    }

    /// Replace the timestamp with a caller-supplied value
    pub fn with_date_time(mut self, date_time: impl Into<String>) -> Self {
        self.date_time = date_time.into();
        self
    }

    /// Attach a category so the backend updates its per-category counters
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether the backend counts this record as a successful upload
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }

    /// Names of backend-required fields that are empty
    ///
    /// The backend rejects records with an empty `jobNumber`, `dateTime` or
    /// `status` with a 400. Whitespace counts as a value. Nothing here prevents
    /// sending such a record.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        [
            ("jobNumber", &self.job_number),
            ("dateTime", &self.date_time),
            ("status", &self.status),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Format a UTC instant as ISO-8601 with microseconds and a `+00:00` offset
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}
