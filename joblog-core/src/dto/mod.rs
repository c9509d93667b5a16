//! Data Transfer Objects for backend communication
//!
//! Lightweight request/response shapes that only exist on the wire.

pub mod job_log;
