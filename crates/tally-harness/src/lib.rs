//! Reporting harness for tally assertion logs.
//!
//! This crate provides:
//! - Plain-text reports: [`render_plain`], [`analyze`], [`write_report`],
//!   and the report-then-drop composition [`run`]
//! - Machine-readable JSON reports: [`TestReport`]
//! - Structured JSONL check logs: [`LogEntry`], [`LogEmitter`],
//!   [`validate_log_line`]

#![forbid(unsafe_code)]

pub mod error;
pub mod log;
pub mod report;
pub mod summary;

pub use error::HarnessError;
pub use log::{LogEmitter, LogEntry, Outcome, entries_for, validate_log_line};
pub use report::{analyze, render_plain, run, write_report};
pub use summary::{RecordReport, TestReport};
