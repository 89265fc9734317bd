//! Context string factory: scratch formatting plus bulk release.
//!
//! Dynamic context messages are formatted into a fixed-capacity scratch
//! buffer, duplicated into shared handles, and tracked so one cleanup call
//! releases everything at process end. A [`StringFactory`] is an ordinary
//! value and can be used in isolation; [`make_context`] / [`factory_cleanup`]
//! operate on the process-wide instance behind a lock.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use parking_lot::Mutex;

/// Scratch buffer capacity in bytes. Renderings past this length truncate on
/// a UTF-8 boundary; truncation is accepted behavior, not an error.
pub const SCRATCH_CAPACITY: usize = 1024;

/// Formats context strings and tracks them for bulk release.
///
/// Every handle returned by [`make`](Self::make) is also recorded in the
/// tracked list exactly once. [`cleanup`](Self::cleanup) drops the factory's
/// references and the list storage itself; a record that still holds a
/// handle keeps that string alive, so reading a context after cleanup is
/// impossible rather than undefined.
#[derive(Debug)]
pub struct StringFactory {
    scratch: String,
    tracked: Vec<Arc<str>>,
}

impl StringFactory {
    /// Empty factory; the scratch buffer is allocated on first use.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scratch: String::new(),
            tracked: Vec::new(),
        }
    }

    /// Render `args` into the scratch buffer and hand out an owned copy.
    ///
    /// The tracked list grows with the same increment-then-double step as
    /// the record store.
    pub fn make(&mut self, args: fmt::Arguments<'_>) -> Arc<str> {
        self.scratch.clear();
        if self.scratch.capacity() < SCRATCH_CAPACITY {
            self.scratch.reserve(SCRATCH_CAPACITY);
        }
        let mut sink = CappedWriter {
            buf: &mut self.scratch,
            limit: SCRATCH_CAPACITY,
        };
        // CappedWriter never reports an error; overflow truncates.
        let _ = sink.write_fmt(args);

        let made: Arc<str> = Arc::from(self.scratch.as_str());
        if self.tracked.len() == self.tracked.capacity() {
            let grown = (self.tracked.capacity() + 1) * 2;
            self.tracked.reserve(grown - self.tracked.len());
        }
        self.tracked.push(Arc::clone(&made));
        made
    }

    /// Drop every tracked handle and the tracked-list storage.
    ///
    /// Idempotent: clearing an already-empty factory is a no-op.
    pub fn cleanup(&mut self) {
        self.tracked = Vec::new();
    }

    /// Number of strings currently tracked.
    #[must_use]
    pub fn tracked_len(&self) -> usize {
        self.tracked.len()
    }
}

impl Default for StringFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Appends up to `limit` bytes total, truncating on a char boundary.
struct CappedWriter<'a> {
    buf: &'a mut String,
    limit: usize,
}

impl fmt::Write for CappedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.limit.saturating_sub(self.buf.len());
        if room == 0 {
            return Ok(());
        }
        if s.len() <= room {
            self.buf.push_str(s);
            return Ok(());
        }
        let mut end = room;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        self.buf.push_str(&s[..end]);
        Ok(())
    }
}

static FACTORY: Mutex<StringFactory> = Mutex::new(StringFactory::new());

/// Format a context string through the process-wide factory.
///
/// The returned handle stays valid at least until [`factory_cleanup`];
/// records holding it keep it alive beyond that. Usually invoked via the
/// [`context!`](crate::context!) macro.
pub fn make_context(args: fmt::Arguments<'_>) -> Arc<str> {
    FACTORY.lock().make(args)
}

/// Release every string tracked by the process-wide factory.
///
/// Call once at process end, after the last report that might read
/// factory-produced context text.
pub fn factory_cleanup() {
    FACTORY.lock().cleanup()
}
