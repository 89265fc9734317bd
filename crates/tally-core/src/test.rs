//! A named check session: pass/fail counters plus failure records.

use std::panic::Location;
use std::sync::Arc;

use crate::record::{Record, RecordStore};
use crate::value::Value;

/// Accumulator for one logical test case.
///
/// Created at the start of a case, mutated by every check against it, read by
/// a reporter, and released on drop (which frees the record store). A `Test`
/// is a plain owned value: it is not shared between threads.
///
/// Failed checks are data, not control flow: no check returns an error or
/// panics. Allocation failure during record growth aborts via the global
/// allocator policy.
#[derive(Debug)]
pub struct Test {
    name: String,
    context: String,
    records: RecordStore,
    passed: u32,
    failed: u32,
}

impl Test {
    /// Session with an explicit name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            context: String::new(),
            records: RecordStore::new(),
            passed: 0,
            failed: 0,
        }
    }

    /// Session named after the calling source location (`file:line`).
    #[must_use]
    #[track_caller]
    pub fn here() -> Self {
        let caller = Location::caller();
        Self::new(format!("{}:{}", caller.file(), caller.line()))
    }

    /// Attach a session-wide context string.
    ///
    /// Reserved: not read by checks or reports yet.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Compare two signed integers.
    pub fn check_int(
        &mut self,
        gotten: i64,
        expected: i64,
        line: u32,
        context: impl Into<Arc<str>>,
    ) {
        if gotten == expected {
            self.passed += 1;
            return;
        }
        self.fail(Value::Int(gotten), Value::Int(expected), line, context.into());
    }

    /// Compare two unsigned integers.
    pub fn check_uint(
        &mut self,
        gotten: u64,
        expected: u64,
        line: u32,
        context: impl Into<Arc<str>>,
    ) {
        if gotten == expected {
            self.passed += 1;
            return;
        }
        self.fail(
            Value::Uint(gotten),
            Value::Uint(expected),
            line,
            context.into(),
        );
    }

    /// Compare two strings by content.
    pub fn check_str(
        &mut self,
        gotten: &str,
        expected: &str,
        line: u32,
        context: impl Into<Arc<str>>,
    ) {
        if gotten == expected {
            self.passed += 1;
            return;
        }
        self.fail(
            Value::Str(gotten.to_string()),
            Value::Str(expected.to_string()),
            line,
            context.into(),
        );
    }

    /// Compare two booleans.
    pub fn check_bool(
        &mut self,
        gotten: bool,
        expected: bool,
        line: u32,
        context: impl Into<Arc<str>>,
    ) {
        if gotten == expected {
            self.passed += 1;
            return;
        }
        self.fail(
            Value::Bool(gotten),
            Value::Bool(expected),
            line,
            context.into(),
        );
    }

    fn fail(&mut self, gotten: Value, expected: Value, line: u32, context: Arc<str>) {
        self.failed += 1;
        self.records.push(Record::new(gotten, expected, line, context));
    }

    /// Session name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Session-wide context string (reserved).
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Failure records in check order.
    #[must_use]
    pub const fn records(&self) -> &RecordStore {
        &self.records
    }

    /// Number of checks that matched.
    #[must_use]
    pub const fn passed(&self) -> u32 {
        self.passed
    }

    /// Number of checks that mismatched.
    #[must_use]
    pub const fn failed(&self) -> u32 {
        self.failed
    }

    /// Total checks run against this session.
    #[must_use]
    pub const fn checks(&self) -> u32 {
        self.passed + self.failed
    }

    /// True when every check so far has matched.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueKind;

    #[test]
    fn counters_partition_checks() {
        let mut test = Test::new("counters");
        test.check_int(1, 1, 1, "");
        test.check_int(1, 2, 2, "");
        test.check_uint(7, 7, 3, "");
        test.check_bool(true, false, 4, "");
        test.check_str("a", "a", 5, "");

        assert_eq!(test.passed(), 3);
        assert_eq!(test.failed(), 2);
        assert_eq!(test.checks(), 5);
        assert_eq!(test.records().len(), 2);
        assert!(!test.is_success());
    }

    #[test]
    fn passing_checks_append_no_record() {
        let mut test = Test::new("boundaries");
        test.check_int(0, 0, 1, "zero");
        test.check_int(-1, -1, 2, "minus one");
        test.check_uint(0, 0, 3, "zero");
        test.check_uint(u64::MAX, u64::MAX, 4, "max");
        test.check_str("", "", 5, "empty");
        test.check_bool(true, true, 6, "true");

        assert_eq!(test.passed(), 6);
        assert_eq!(test.failed(), 0);
        assert!(test.records().is_empty());
        assert!(test.is_success());
    }

    #[test]
    fn failing_check_snapshots_operands() {
        let mut test = Test::new("snapshot");
        test.check_str("a", "b", 2, "cmp");

        let record = test.records().get(0).unwrap();
        assert_eq!(record.kind(), ValueKind::Str);
        assert_eq!(record.line(), 2);
        assert_eq!(record.context(), "cmp");
        assert_eq!(*record.gotten(), Value::Str("a".to_string()));
        assert_eq!(*record.expected(), Value::Str("b".to_string()));
    }

    #[test]
    fn records_keep_check_order() {
        let mut test = Test::new("order");
        test.check_int(1, 2, 10, "first");
        test.check_bool(false, true, 20, "second");
        test.check_uint(3, 4, 30, "third");

        let lines: Vec<u32> = test.records().iter().map(Record::line).collect();
        assert_eq!(lines, vec![10, 20, 30]);
        let kinds: Vec<ValueKind> = test.records().iter().map(Record::kind).collect();
        assert_eq!(kinds, vec![ValueKind::Int, ValueKind::Bool, ValueKind::Uint]);
    }

    #[test]
    fn here_names_the_call_site() {
        let test = Test::here();
        assert!(test.name().contains("test.rs"));
        assert!(test.name().contains(':'));
    }

    #[test]
    fn context_is_carried_but_unused() {
        let test = Test::new("ctx").with_context("session context");
        assert_eq!(test.context(), "session context");
        assert_eq!(test.checks(), 0);
    }
}
