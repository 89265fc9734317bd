//! Plain-text rendering of a test's outcome.
//!
//! The renderer is a pure read: a test moves from unevaluated to evaluated
//! only in the caller's eyes, and re-rendering produces identical text.

use std::fmt::Write as _;
use std::io;

use tally_core::Test;

use crate::error::HarnessError;

/// Render the report as a string.
///
/// Layout: the session name, then `[SUCCESS]` when nothing failed, otherwise
/// `[FAILED]` followed by each failure record in check order: its line, the
/// gotten and expected values rendered per the record's variant tag, and the
/// context text.
#[must_use]
pub fn render_plain(test: &Test) -> String {
    let mut out = String::new();

    write!(out, "{}:", test.name()).ok();
    if test.is_success() {
        writeln!(out, "\t\t[SUCCESS]").ok();
        return out;
    }
    writeln!(out, "\t\t[FAILED]").ok();

    for record in test.records() {
        writeln!(out, "\tline: {}:", record.line()).ok();
        writeln!(out, "\t\tgotten: {}", record.gotten()).ok();
        writeln!(out, "\t\texpected: {}", record.expected()).ok();
        writeln!(out, "\t\twith context: '{}'", record.context()).ok();
    }

    out
}

/// Print the report to stdout.
///
/// Read-only: calling it again re-prints the same report.
pub fn analyze(test: &Test) {
    print!("{}", render_plain(test));
}

/// Write the report to an arbitrary stream.
pub fn write_report(test: &Test, mut out: impl io::Write) -> Result<(), HarnessError> {
    out.write_all(render_plain(test).as_bytes())?;
    Ok(())
}

/// Report to stdout, then consume the test (releasing its record store).
pub fn run(test: Test) {
    analyze(&test);
}
