//! Error types for meeting-engine boundary validation.
//!
//! The query itself is total over well-formed input. These errors are raised
//! only by the helpers that turn untrusted input into engine types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error("Invalid time range: start {start} end {end} (expected 0 <= start <= end <= 1440)")]
    InvalidRange { start: u32, end: u32 },

    #[error("Invalid clock time: {0}")]
    InvalidClock(String),

    #[error("Invalid input JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchedulingError>;
