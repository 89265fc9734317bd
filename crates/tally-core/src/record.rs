//! Failure records and their insertion-ordered store.

use std::slice;
use std::sync::Arc;

use crate::value::{Value, ValueKind};

/// One failed check: both operands, the source line, and a context string.
///
/// `gotten` and `expected` always carry the same variant; the typed check
/// operations are the only constructors and pair like with like. Records are
/// immutable after creation and live until the owning [`Test`] is dropped.
///
/// [`Test`]: crate::Test
#[derive(Debug, Clone)]
pub struct Record {
    context: Arc<str>,
    gotten: Value,
    expected: Value,
    line: u32,
}

impl Record {
    pub(crate) fn new(gotten: Value, expected: Value, line: u32, context: Arc<str>) -> Self {
        debug_assert_eq!(gotten.kind(), expected.kind());
        Self {
            context,
            gotten,
            expected,
            line,
        }
    }

    /// Context text supplied with the check.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Value the check observed.
    #[must_use]
    pub const fn gotten(&self) -> &Value {
        &self.gotten
    }

    /// Value the check wanted.
    #[must_use]
    pub const fn expected(&self) -> &Value {
        &self.expected
    }

    /// Source line of the failing check.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Variant tag shared by both operands.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.gotten.kind()
    }
}

/// Growable store of failure records; insertion order is report order.
///
/// Growth uses an increment-then-double step: when full, capacity moves to
/// `(capacity + 1) * 2` before the push.
/// Contents are preserved across growth; addresses are not, so nothing may
/// retain interior references across a push.
#[derive(Debug, Default)]
pub struct RecordStore {
    items: Vec<Record>,
}

impl RecordStore {
    /// Empty store; allocates nothing until the first failure.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub(crate) fn push(&mut self, record: Record) {
        if self.items.len() == self.items.capacity() {
            let grown = (self.items.capacity() + 1) * 2;
            self.items.reserve(grown - self.items.len());
        }
        self.items.push(record);
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no check has failed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current backing capacity. Only the growth *contract* is stable
    /// (amortized geometric, strictly increasing); exact values depend on
    /// allocator rounding.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Record at `index`, in insertion order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.items.get(index)
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.items.iter()
    }

    /// Records as a contiguous slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Record] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
