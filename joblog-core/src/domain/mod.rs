//! Core domain types
//!
//! These types describe what the logging backend stores and reports. They are
//! shared between the client (for sending and decoding) and the CLI (for display).

pub mod job_log;
pub mod stats;
