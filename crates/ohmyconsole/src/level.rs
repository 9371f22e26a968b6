//! The five log levels and their fixed channel table.

use crate::color::Color;
use std::fmt;

/// A log level. Also names the console channel a line is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Debug,
    Log,
    Warn,
    Error,
    Info,
}

impl Level {
    pub const ALL: [Level; 5] = [Level::Debug, Level::Log, Level::Warn, Level::Error, Level::Info];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Log => "log",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Info => "info",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Level::Debug => 0,
            Level::Log => 1,
            Level::Warn => 2,
            Level::Error => 3,
            Level::Info => 4,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything one logging function of a logger is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    /// Label printed in the line
    pub level: Level,
    /// Color of the `[level] message` segment
    pub color: Color,
    /// Console channel the line is written to
    pub origin: Level,
    /// Disabled channels print nothing
    pub enabled: bool,
}

impl Channel {
    /// Channel for `level`. Debug is routed through the `log` channel and
    /// only enabled when the debug filter matched.
    pub const fn new(level: Level, debug_enabled: bool) -> Self {
        let (color, origin, enabled) = match level {
            Level::Debug => (Color::Red, Level::Log, debug_enabled),
            Level::Log => (Color::Reset, Level::Log, true),
            Level::Warn => (Color::Yellow, Level::Warn, true),
            Level::Error => (Color::Red, Level::Error, true),
            Level::Info => (Color::Cyan, Level::Info, true),
        };
        Self {
            level,
            color,
            origin,
            enabled,
        }
    }
}
