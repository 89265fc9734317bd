//! Structured JSONL log of check outcomes.
//!
//! Provides:
//! - [`LogEntry`]: canonical JSONL record with required + optional fields.
//! - [`entries_for`]: one entry per failure record plus a summary entry.
//! - [`LogEmitter`]: writes JSONL lines to any writer.
//! - [`validate_log_line`]: validates a single JSONL line against the schema.

use std::io::Write;

use serde::{Deserialize, Serialize};

use tally_core::Test;

use crate::error::HarnessError;

/// Check/test outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
}

/// Canonical structured log entry.
///
/// Required fields: `test`, `event`, `outcome`. Optional fields carry
/// per-record detail for `check_failed` events and counters for
/// `test_summary` events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    // Required
    pub test: String,
    pub event: String,
    pub outcome: Outcome,

    // Optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gotten: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<u32>,
}

impl LogEntry {
    /// Serialize to a single JSONL line (no trailing newline).
    pub fn to_jsonl(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Event name for a failure-record entry.
pub const EVENT_CHECK_FAILED: &str = "check_failed";
/// Event name for the per-test summary entry.
pub const EVENT_TEST_SUMMARY: &str = "test_summary";

/// Build the log entries for a test: one `check_failed` entry per record in
/// check order, then one `test_summary` entry.
#[must_use]
pub fn entries_for(test: &Test) -> Vec<LogEntry> {
    let mut entries = Vec::with_capacity(test.records().len() + 1);

    for record in test.records() {
        entries.push(LogEntry {
            test: test.name().to_string(),
            event: EVENT_CHECK_FAILED.to_string(),
            outcome: Outcome::Fail,
            kind: Some(record.kind().as_str().to_string()),
            line: Some(record.line()),
            gotten: Some(record.gotten().to_string()),
            expected: Some(record.expected().to_string()),
            context: Some(record.context().to_string()),
            passed: None,
            failed: None,
        });
    }

    entries.push(LogEntry {
        test: test.name().to_string(),
        event: EVENT_TEST_SUMMARY.to_string(),
        outcome: if test.is_success() {
            Outcome::Pass
        } else {
            Outcome::Fail
        },
        kind: None,
        line: None,
        gotten: None,
        expected: None,
        context: None,
        passed: Some(test.passed()),
        failed: Some(test.failed()),
    });

    entries
}

/// Writes structured JSONL log entries to a writer.
pub struct LogEmitter<W: Write> {
    writer: W,
}

impl<W: Write> LogEmitter<W> {
    /// Wrap a writer. Use a `Vec<u8>` for testing, a buffered file handle in
    /// production.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Emit one entry as a JSONL line.
    pub fn emit(&mut self, entry: &LogEntry) -> Result<(), HarnessError> {
        let line = entry.to_jsonl()?;
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    /// Emit every entry for a test. Returns the number of lines written.
    pub fn emit_test(&mut self, test: &Test) -> Result<usize, HarnessError> {
        let entries = entries_for(test);
        for entry in &entries {
            self.emit(entry)?;
        }
        Ok(entries.len())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), HarnessError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Recover the writer (e.g. a test buffer).
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Validate a single JSONL line against the schema.
///
/// Checks the required fields and enum vocabularies before deserializing, so
/// the error names the offending field instead of a serde path.
pub fn validate_log_line(line: &str, line_number: usize) -> Result<LogEntry, HarnessError> {
    let invalid = |field: &str, message: String| HarnessError::InvalidLogLine {
        line: line_number,
        field: field.to_string(),
        message,
    };

    let value: serde_json::Value = serde_json::from_str(line)
        .map_err(|e| invalid("<json>", format!("invalid JSON: {e}")))?;
    let obj = value
        .as_object()
        .ok_or_else(|| invalid("<root>", "expected JSON object".to_string()))?;

    for field in ["test", "event", "outcome"] {
        if !obj.contains_key(field) {
            return Err(invalid(field, "required field missing".to_string()));
        }
    }

    if let Some(outcome) = obj.get("outcome").and_then(|v| v.as_str())
        && !["pass", "fail"].contains(&outcome)
    {
        return Err(invalid("outcome", format!("invalid outcome: '{outcome}'")));
    }

    if let Some(event) = obj.get("event").and_then(|v| v.as_str())
        && ![EVENT_CHECK_FAILED, EVENT_TEST_SUMMARY].contains(&event)
    {
        return Err(invalid("event", format!("invalid event: '{event}'")));
    }

    // Failure entries must locate and type the failing check.
    if obj.get("event").and_then(|v| v.as_str()) == Some(EVENT_CHECK_FAILED) {
        for field in ["kind", "line", "gotten", "expected"] {
            if !obj.contains_key(field) {
                return Err(invalid(
                    field,
                    "check_failed entries must carry this field".to_string(),
                ));
            }
        }
    }

    Ok(serde_json::from_value(value)?)
}
