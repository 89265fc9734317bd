//! Harness error types.

use thiserror::Error;

/// Failures surfaced by report writing and log validation.
///
/// The core crate has no recoverable-error surface; everything fallible in
/// this workspace funnels through here.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("log line {line}: field '{field}': {message}")]
    InvalidLogLine {
        line: usize,
        field: String,
        message: String,
    },
}
