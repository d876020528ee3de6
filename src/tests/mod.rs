// src/tests/mod.rs

//! Tests for _fl-trace-print_.
//!
//! Tests are placed at `src/tests/`, inside the library. The author
//! concluded this is a reasonable trade-off of separation and access.
//!
//! Tests placed at top-level path `tests/` do not have crate-internal
//! visibility; the `#[doc(hidden)]` helpers behind the macros are
//! easiest to test from in here. The top-level `tests/` directory
//! holds one integration test that exercises the exported macros from
//! outside the crate.
