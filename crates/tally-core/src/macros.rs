//! Line-capturing wrappers around the typed checks.
//!
//! The function forms take an explicit source line; these macros inject
//! `line!()` so call sites read like plain assertions.

/// Compare two signed integers, capturing the call-site line.
#[macro_export]
macro_rules! check_int {
    ($test:expr, $gotten:expr, $expected:expr, $context:expr $(,)?) => {
        $test.check_int($gotten, $expected, line!(), $context)
    };
}

/// Compare two unsigned integers, capturing the call-site line.
#[macro_export]
macro_rules! check_uint {
    ($test:expr, $gotten:expr, $expected:expr, $context:expr $(,)?) => {
        $test.check_uint($gotten, $expected, line!(), $context)
    };
}

/// Compare two strings by content, capturing the call-site line.
#[macro_export]
macro_rules! check_str {
    ($test:expr, $gotten:expr, $expected:expr, $context:expr $(,)?) => {
        $test.check_str($gotten, $expected, line!(), $context)
    };
}

/// Compare two booleans, capturing the call-site line.
#[macro_export]
macro_rules! check_bool {
    ($test:expr, $gotten:expr, $expected:expr, $context:expr $(,)?) => {
        $test.check_bool($gotten, $expected, line!(), $context)
    };
}

/// Start a test session.
///
/// With no argument the session is named after the call site; with one
/// argument the name is explicit.
#[macro_export]
macro_rules! make_test {
    () => {
        $crate::Test::here()
    };
    ($name:expr $(,)?) => {
        $crate::Test::new($name)
    };
}

/// Format a context string through the process-wide factory.
///
/// The result stays valid until [`factory_cleanup`](crate::factory_cleanup).
#[macro_export]
macro_rules! context {
    ($($arg:tt)*) => {
        $crate::context::make_context(format_args!($($arg)*))
    };
}
