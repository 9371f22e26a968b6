//! # OhMyConsole
//!
//! A small namespaced console logger. Each logger is created for a
//! colon-delimited id (`"main:sub"`) and offers five levels: `debug`, `log`,
//! `warn`, `error` and `info`.
//!
//! - **debug** is only live when the `DEBUG` filter is a namespace prefix of
//!   the id (`DEBUG=main` enables `main` and `main:sub`, not `other`)
//! - arguments are formatted with `%s` / `%d` / `%j` / `%J` / `%%`
//! - every line is prefixed with `[YYYY/MM/DD-HH:MM:SS][id][level]` and
//!   colored for the console kind (ANSI, browser CSS, or none)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ohmyconsole::{args, json, logger};
//!
//! let log = logger("cache:get").unwrap();
//! log.info(&args!["hit ratio %d", 0.93]);
//! log.warn(&args!["evicted %j", json!({"key": "a"})]);
//!
//! // `None` unless DEBUG matches "cache:get"
//! let _ = log.debug(&args!["lookup took %dms", 12]);
//! ```
//!
//! For tests, build a [`LoggerFactory`] with a [`FixedProbe`],
//! a [`MemoryConsole`] and a [`FixedClock`].

pub mod clock;
pub mod color;
pub mod console;
pub mod env;
pub mod error;
pub mod level;
pub mod logger;
pub mod tracing;

// Re-export commonly used items at crate root
pub use clock::{Clock, FixedClock, LocalClock};
pub use color::Color;
pub use console::{Console, Line, MemoryConsole, Record, StdConsole, Stream};
pub use env::{EnvKind, Environment, EnvironmentProbe, FixedProbe, ShellProbe};
pub use error::{Error, Result};
pub use level::{Channel, Level};
pub use logger::{logger, Logger, LoggerFactory};

pub use ohmyconsole_core::{args, format, matches, Arg};
pub use serde_json::json;
