// src/function_name.rs

//! Macros to capture the name of the enclosing function, similar to
//! C `__FUNCTION__`.
//!
//! Rust has no built-in equivalent. The name is recovered from
//! [`core::any::type_name`] of a marker function `f` declared inside
//! the caller: the type name of that marker is the caller's full path
//! plus a trailing `::f` segment.

/// `type_name` of the marker function minus the trailing `::f`
/// segment and any `::{{closure}}` segments.
///
/// A closure has no name of its own so a call from within a closure
/// resolves to the nearest named enclosing function.
#[doc(hidden)]
pub fn function_name_full_from_type_name(type_name_: &str) -> &str {
    let mut name: &str = type_name_.strip_suffix("::f").unwrap_or(type_name_);
    while let Some(name_) = name.strip_suffix("::{{closure}}") {
        name = name_;
    }
    name
}

/// Last path segment of [`function_name_full_from_type_name`]; the bare
/// function name, akin to C `__FUNCTION__`.
#[doc(hidden)]
pub fn function_name_from_type_name(type_name_: &str) -> &str {
    let name: &str = function_name_full_from_type_name(type_name_);
    match name.rfind("::") {
        Some(at) => &name[at + 2..],
        None => name,
    }
}

/// Name of the enclosing function as a `&'static str`; the C
/// `__FUNCTION__` analog.
///
/// ```rust
/// fn started() -> &'static str {
///     ::fl_trace_print::function_name!()
/// }
///
/// assert_eq!(started(), "started");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::function_name::function_name_from_type_name(type_name_of(f))
    }};
}

/// Full module path of the enclosing function as a `&'static str`.
#[macro_export]
macro_rules! function_name_full {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::function_name::function_name_full_from_type_name(type_name_of(f))
    }};
}
