//! Joblog Core
//!
//! Core types shared by the job-log client and CLI.
//!
//! This crate contains:
//! - Domain types: the job-log record and performance counters
//! - DTOs: query parameters and acknowledgements exchanged with the backend

pub mod domain;
pub mod dto;
