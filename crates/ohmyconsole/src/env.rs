//! Host environment probing
//!
//! A logger needs two facts about the host when it is created: the debug
//! filter and what kind of console it is talking to. Both come from an
//! [`EnvironmentProbe`], chosen once at program start:
//!
//! - **Shell**: [`ShellProbe`] reads the `DEBUG` process variable
//! - **Browser**: provided by the `ohmyconsole-wasm` crate (`window.DEBUG`)
//! - **Fixed**: [`FixedProbe`] for hosts without either, and for tests

use crate::error::Error;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Name of the variable holding the debug filter.
pub const DEBUG_VAR: &str = "DEBUG";

/// The kind of console a logger writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvKind {
    /// Terminal: ANSI colors
    Shell,
    /// Browser devtools: `%c` styled output
    Browser,
    /// Anything else: plain text
    #[default]
    None,
}

impl EnvKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKind::Shell => "shell",
            EnvKind::Browser => "browser",
            EnvKind::None => "none",
        }
    }
}

impl fmt::Display for EnvKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shell" => Ok(EnvKind::Shell),
            "browser" => Ok(EnvKind::Browser),
            "none" => Ok(EnvKind::None),
            other => Err(Error::Config(format!(
                "unknown environment kind '{}', expected shell, browser or none",
                other
            ))),
        }
    }
}

/// What a probe reports at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Environment {
    pub debug_filter: Option<String>,
    pub kind: EnvKind,
}

/// Source of the debug filter and console kind.
///
/// Probes are queried once per logger creation; a logger never re-reads.
pub trait EnvironmentProbe: Send + Sync {
    /// Current debug filter, `None` when unset.
    fn debug_filter(&self) -> Option<String>;

    /// Console kind of this host.
    fn kind(&self) -> EnvKind;

    /// Read both facts together.
    fn snapshot(&self) -> Environment {
        Environment {
            debug_filter: self.debug_filter(),
            kind: self.kind(),
        }
    }
}

/// Probe for processes attached to a terminal.
#[derive(Debug, Clone)]
pub struct ShellProbe {
    var: Cow<'static, str>,
}

impl ShellProbe {
    pub fn new() -> Self {
        Self {
            var: Cow::Borrowed(DEBUG_VAR),
        }
    }

    /// Read the filter from `var` instead of `DEBUG`.
    pub fn with_var(var: impl Into<Cow<'static, str>>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for ShellProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentProbe for ShellProbe {
    fn debug_filter(&self) -> Option<String> {
        // Non-UTF-8 bytes are replaced; the rest of the filter still matches
        let filter = std::env::var_os(self.var.as_ref())
            .map(|value| value.to_string_lossy().into_owned());
        tracing::trace!(var = %self.var, filter = ?filter, "read debug filter");
        filter
    }

    fn kind(&self) -> EnvKind {
        EnvKind::Shell
    }
}

/// Probe returning preset values.
#[derive(Debug, Clone, Default)]
pub struct FixedProbe {
    env: Environment,
}

impl FixedProbe {
    pub fn new(kind: EnvKind) -> Self {
        Self {
            env: Environment {
                debug_filter: None,
                kind,
            },
        }
    }

    pub fn with_debug_filter(mut self, filter: impl Into<String>) -> Self {
        self.env.debug_filter = Some(filter.into());
        self
    }
}

impl EnvironmentProbe for FixedProbe {
    fn debug_filter(&self) -> Option<String> {
        self.env.debug_filter.clone()
    }

    fn kind(&self) -> EnvKind {
        self.env.kind
    }

    fn snapshot(&self) -> Environment {
        self.env.clone()
    }
}

/// Probe matching the build target: the shell probe natively, a plain
/// fixed probe on bare `wasm32` where there is no process environment.
pub fn default_probe() -> Arc<dyn EnvironmentProbe> {
    if cfg!(target_arch = "wasm32") {
        Arc::new(FixedProbe::new(EnvKind::None))
    } else {
        Arc::new(ShellProbe::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip_through_str() {
        for kind in [EnvKind::Shell, EnvKind::Browser, EnvKind::None] {
            assert_eq!(kind.as_str().parse::<EnvKind>().unwrap(), kind);
        }
        assert_eq!("SHELL".parse::<EnvKind>().unwrap(), EnvKind::Shell);
    }

    #[test]
    fn test_unknown_kind_is_config_error() {
        let err = "terminal".parse::<EnvKind>().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("terminal"));
    }

    #[test]
    fn test_fixed_probe() {
        let probe = FixedProbe::new(EnvKind::Browser).with_debug_filter("main");
        assert_eq!(
            probe.snapshot(),
            Environment {
                debug_filter: Some("main".into()),
                kind: EnvKind::Browser,
            }
        );
        assert_eq!(FixedProbe::default().snapshot(), Environment::default());
    }

    #[test]
    fn test_shell_probe_reads_variable() {
        // Unique name so parallel tests never race on it
        let var = "OHMYCONSOLE_TEST_SHELL_PROBE";
        let probe = ShellProbe::with_var(var);
        assert_eq!(probe.kind(), EnvKind::Shell);

        std::env::remove_var(var);
        assert_eq!(probe.debug_filter(), None);

        std::env::set_var(var, "main:sub");
        assert_eq!(probe.debug_filter().as_deref(), Some("main:sub"));
        std::env::remove_var(var);
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_probe_keeps_non_utf8_filter() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let var = "OHMYCONSOLE_TEST_SHELL_PROBE_BYTES";
        let probe = ShellProbe::with_var(var);

        std::env::set_var(var, OsStr::from_bytes(b"main:\xff"));
        assert_eq!(probe.debug_filter().as_deref(), Some("main:\u{fffd}"));
        std::env::remove_var(var);
    }

    #[test]
    fn test_shell_probe_defaults_to_debug() {
        assert_eq!(ShellProbe::default().var(), DEBUG_VAR);
    }
}
