//! Machine-readable test reports.
//!
//! The plain renderer is for humans; tooling gets the same outcome as JSON.
//! Values are rendered to strings per the record's variant tag so the
//! artifact is stable across schema consumers.

use serde::{Deserialize, Serialize};

use tally_core::{Record, Test};

use crate::error::HarnessError;

/// One failure record, rendered for the report artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordReport {
    pub line: u32,
    /// Variant tag label: `int`, `uint`, `str`, or `bool`.
    pub kind: String,
    pub gotten: String,
    pub expected: String,
    pub context: String,
}

impl RecordReport {
    fn from_record(record: &Record) -> Self {
        Self {
            line: record.line(),
            kind: record.kind().as_str().to_string(),
            gotten: record.gotten().to_string(),
            expected: record.expected().to_string(),
            context: record.context().to_string(),
        }
    }
}

/// Complete outcome of one test session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestReport {
    pub name: String,
    /// `success` when no check failed, else `failed`.
    pub outcome: String,
    pub passed: u32,
    pub failed: u32,
    pub records: Vec<RecordReport>,
}

impl TestReport {
    /// Snapshot a test's outcome.
    #[must_use]
    pub fn from_test(test: &Test) -> Self {
        let outcome = if test.is_success() { "success" } else { "failed" };
        Self {
            name: test.name().to_string(),
            outcome: outcome.to_string(),
            passed: test.passed(),
            failed: test.failed(),
            records: test.records().iter().map(RecordReport::from_record).collect(),
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a report artifact back.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        Ok(serde_json::from_str(json)?)
    }
}
