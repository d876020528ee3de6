// src/lib.rs

//! _fl-trace-print_ is a small library for "function and line" trace
//! printing: debug prints prefixed with the enclosing function name and
//! the call-site line number, in the form `[<function>:<line>]<message>`.
//!
//! The [`trace!`] macro is active only when cargo feature `trace` is
//! enabled. Without the feature it compiles to an inert expression;
//! the format string and arguments are removed entirely, so argument
//! expressions are never evaluated and the call site costs nothing.
//!
//! ```rust
//! use ::fl_trace_print::{trace, traceline};
//!
//! fn connect(attempt: usize) -> String {
//!     // prints "[connect:<line>]attempt 3" under `--features trace`,
//!     // compiles to nothing otherwise
//!     trace!("attempt {}", attempt);
//!     traceline!("attempt {}", attempt)
//! }
//!
//! assert!(connect(3).starts_with("[connect:"));
//! ```
//!
//! [`traceline!`] is always available and returns the `String` that an
//! active [`trace!`] would print. [`function_name!`] is the underlying
//! `__FUNCTION__` analog.
//!
//! [`trace!`]: crate::trace
//! [`traceline!`]: crate::traceline
//! [`function_name!`]: crate::function_name

pub mod function_name;
pub mod printers;
#[cfg(test)]
pub mod tests;
