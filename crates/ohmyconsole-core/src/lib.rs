//! OhMyConsole Core
//!
//! The pure half of the OhMyConsole logger: everything that decides *what*
//! gets printed, with no knowledge of *where* it gets printed. Runs
//! identically in native and WASM builds.
//!
//! - [`namespace`] - colon-delimited namespace matching for the `DEBUG` filter
//! - [`arg`] - the dynamically-typed argument union and its coercions
//! - [`format`] - the `%s` / `%d` / `%j` / `%J` / `%%` substitution language
//!
//! # Example
//!
//! ```rust
//! use ohmyconsole_core::{args, format, matches};
//!
//! assert!(matches("main", "main:sub"));
//! assert!(!matches("main:sub", "main"));
//!
//! assert_eq!(format(&args!["%s", "foo", "bar"]), "foo bar");
//! assert_eq!(format(&args!["value=%d", "7"]), "value=7");
//! ```

pub mod arg;
pub mod format;
pub mod namespace;

// Re-export main types at crate root
pub use arg::Arg;
pub use format::{format, Directive};
pub use namespace::{matches, segments};

/// Build a `Vec<Arg>` from a heterogeneous list of values.
///
/// Every element goes through `Arg::from`, so anything with a `From` impl
/// (strings, numbers, booleans, `serde_json::Value`, `Option<T>`) can be mixed.
///
/// ```rust
/// use ohmyconsole_core::{args, Arg};
///
/// let v = args!["%d items", 3, true];
/// assert_eq!(v[1], Arg::Num(3.0));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($value)),+]
    };
}
