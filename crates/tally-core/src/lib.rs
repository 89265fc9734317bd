//! Embeddable assertion log.
//!
//! A caller builds a [`Test`], runs typed equality checks against it, and
//! hands it to a reporter (see the `tally-harness` crate). Each check either
//! bumps the pass counter or appends a failure [`Record`]; mismatches are
//! data, never control flow.
//!
//! This crate provides:
//! - [`Value`] / [`ValueKind`]: tagged operand snapshots
//! - [`Record`] / [`RecordStore`]: insertion-ordered failure records
//! - [`Test`]: pass/fail accumulator for one test case, with the four typed
//!   checks (`check_int`, `check_uint`, `check_str`, `check_bool`) and the
//!   line-capturing macro forms ([`check_int!`] et al.)
//! - [`context`]: scratch-formatted context strings with bulk release
//!
//! Everything is single-threaded by design: a [`Test`] is a plain owned
//! value. The process-wide string factory is the one piece of shared state
//! and sits behind a lock. Allocation failure aborts via the global
//! allocator policy; no growth path propagates an out-of-memory result.

#![forbid(unsafe_code)]

pub mod context;
mod macros;
pub mod record;
pub mod test;
pub mod value;

pub use context::{SCRATCH_CAPACITY, StringFactory, factory_cleanup, make_context};
pub use record::{Record, RecordStore};
pub use test::Test;
pub use value::{Value, ValueKind};
