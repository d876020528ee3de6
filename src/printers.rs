// src/printers.rs

//! The trace-print macros.
//!
//! [`trace!`] prints `[<function>:<line>]<message>` to stdout when
//! cargo feature `trace` is enabled and compiles to an inert
//! expression when it is not. [`traceline!`] is the always-available
//! `String` form of the same line.
//!
//! The feature is resolved here, at the definition site, so a
//! downstream crate's own feature named `trace` has no effect on
//! these macros.
//!
//! [`trace!`]: crate::trace
//! [`traceline!`]: crate::traceline

use std::io::Write; // for `std::io::Stdout.flush`

// XXX: the two definitions are written out directly, not wrapped in a
//      helper macro; a `#[macro_export]` macro emitted by another
//      macro's expansion cannot be named by absolute path
//      https://github.com/rust-lang/rust/issues/52234

/// Print `[<function>:<line>]` then the `println!`-formatted
/// message to stdout, followed by a newline.
///
/// Active because this build of _fl-trace-print_ has feature
/// `trace` enabled. Without the feature this macro expands to
/// the unit expression and its arguments are never evaluated.
///
/// May be called with no arguments (prints only the prefix),
/// a bare format string, or a format string and arguments.
#[cfg(feature = "trace")]
#[macro_export]
macro_rules! trace {
    () => {
        ::std::println!("[{}:{}]", $crate::function_name!(), ::core::line!())
    };
    ($($args:tt)*) => {
        ::std::println!(
            "[{}:{}]{}",
            $crate::function_name!(),
            ::core::line!(),
            ::std::format_args!($($args)*),
        )
    };
}

/// Print `[<function>:<line>]` then the `println!`-formatted
/// message to stdout, followed by a newline.
///
/// Inert because this build of _fl-trace-print_ does not have
/// feature `trace` enabled: every call site expands to the
/// unit expression, nothing is printed, and the arguments are
/// never evaluated.
#[cfg(not(feature = "trace"))]
#[macro_export]
macro_rules! trace {
    () => {
        ()
    };
    ($($args:tt)*) => {
        ()
    };
}

/// The `String` an active [`trace!`] would print, without the trailing
/// newline: `[<function>:<line>]<message>`.
///
/// Always available, independent of feature `trace`. Backs the exact
/// output assertions in the tests and lets callers route trace text
/// somewhere other than stdout.
///
/// ```rust
/// fn checking() -> String {
///     ::fl_trace_print::traceline!("value={}", 5)
/// }
///
/// let line = checking();
/// assert!(line.starts_with("[checking:"));
/// assert!(line.ends_with("]value=5"));
/// ```
///
/// [`trace!`]: crate::trace
#[macro_export]
macro_rules! traceline {
    () => {
        ::std::format!("[{}:{}]", $crate::function_name!(), ::core::line!())
    };
    ($($args:tt)*) => {
        ::std::format!(
            "[{}:{}]{}",
            $crate::function_name!(),
            ::core::line!(),
            ::std::format_args!($($args)*),
        )
    };
}

/// Helper flush stdout; for callers that trace just before process
/// exit.
pub fn flush_trace() {
    #[allow(clippy::match_single_binding)]
    match std::io::stdout().flush() {
        _ => {}
    };
}
