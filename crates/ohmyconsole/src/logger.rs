//! Logger construction and dispatch
//!
//! [`LoggerFactory::create`] takes one environment snapshot, decides whether
//! `debug` is live for the id, and freezes the result into a [`Logger`].
//! Every logging call then formats its arguments, stamps the line, writes
//! it to the console and returns the uncolored line.

use crate::clock::{Clock, LocalClock};
use crate::console::{plain, Console, Line, StdConsole};
use crate::env::{default_probe, EnvKind, EnvironmentProbe};
use crate::error::{Error, Result};
use crate::level::{Channel, Level};
use ohmyconsole_core::{format, matches, Arg};
use std::fmt;
use std::sync::Arc;

/// Builds loggers against one probe, console and clock.
#[derive(Clone)]
pub struct LoggerFactory {
    probe: Arc<dyn EnvironmentProbe>,
    console: Arc<dyn Console>,
    clock: Arc<dyn Clock>,
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self {
            probe: default_probe(),
            console: Arc::new(StdConsole),
            clock: Arc::new(LocalClock),
        }
    }
}

impl LoggerFactory {
    /// Factory reading the environment through `probe`, writing to the
    /// process console.
    pub fn new(probe: impl EnvironmentProbe + 'static) -> Self {
        Self {
            probe: Arc::new(probe),
            ..Self::default()
        }
    }

    pub fn with_console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = console;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Create a logger for `id`.
    ///
    /// The id must be a string (the empty string is accepted); anything
    /// else fails with [`Error::InvalidArgument`].
    pub fn create(&self, id: impl Into<Arg>) -> Result<Logger> {
        let id = match id.into() {
            Arg::Str(id) => id,
            other => return Err(Error::InvalidArgument(other.to_string())),
        };

        let env = self.probe.snapshot();
        let debug_enabled = env
            .debug_filter
            .as_deref()
            .is_some_and(|filter| matches(filter, &id));

        tracing::debug!(id = %id, kind = %env.kind, debug_enabled, "created logger");

        Ok(Logger {
            id: Arc::from(id),
            kind: env.kind,
            channels: Level::ALL.map(|level| Channel::new(level, debug_enabled)),
            console: Arc::clone(&self.console),
            clock: Arc::clone(&self.clock),
        })
    }
}

/// Create a logger for `id` with the default factory.
///
/// ```rust,no_run
/// use ohmyconsole::{args, logger};
///
/// let log = logger("svc").unwrap();
/// let line = log.info(&args!["value=%d", 7]);
/// assert!(line.ends_with("[svc][info] value=7"));
/// ```
pub fn logger(id: impl Into<Arg>) -> Result<Logger> {
    LoggerFactory::default().create(id)
}

/// A namespaced set of five logging functions.
///
/// Cloning is cheap; clones share the id and the console.
#[derive(Clone)]
pub struct Logger {
    id: Arc<str>,
    kind: EnvKind,
    channels: [Channel; 5],
    console: Arc<dyn Console>,
    clock: Arc<dyn Clock>,
}

impl Logger {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Console kind captured when the logger was created.
    pub fn kind(&self) -> EnvKind {
        self.kind
    }

    pub fn debug_enabled(&self) -> bool {
        self.channel(Level::Debug).enabled
    }

    pub fn channel(&self, level: Level) -> Channel {
        self.channels[level.index()]
    }

    /// Log at `level`. Returns `None` when the level is disabled, which
    /// only happens for `debug`.
    pub fn emit(&self, level: Level, args: &[Arg]) -> Option<String> {
        let channel = self.channel(level);
        if !channel.enabled {
            return None;
        }
        Some(self.dispatch(channel, args))
    }

    /// Debug output, written only when the debug filter matched this
    /// logger's id. Returns `None` (and writes nothing) otherwise.
    pub fn debug(&self, args: &[Arg]) -> Option<String> {
        self.emit(Level::Debug, args)
    }

    pub fn log(&self, args: &[Arg]) -> String {
        self.dispatch(self.channel(Level::Log), args)
    }

    pub fn warn(&self, args: &[Arg]) -> String {
        self.dispatch(self.channel(Level::Warn), args)
    }

    pub fn error(&self, args: &[Arg]) -> String {
        self.dispatch(self.channel(Level::Error), args)
    }

    pub fn info(&self, args: &[Arg]) -> String {
        self.dispatch(self.channel(Level::Info), args)
    }

    fn dispatch(&self, channel: Channel, args: &[Arg]) -> String {
        let message = format(args);
        let timestamp = self.clock.timestamp();

        let line = Line::render(self.kind, &timestamp, &self.id, channel, &message);
        self.console.write(channel.origin, &line);

        plain(&timestamp, &self.id, channel.level, &message)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("debug_enabled", &self.debug_enabled())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::console::MemoryConsole;
    use crate::env::FixedProbe;
    use ohmyconsole_core::args;
    use pretty_assertions::assert_eq;

    fn fixed_clock() -> Arc<FixedClock> {
        let time = chrono::NaiveDate::from_ymd_opt(2016, 9, 27)
            .and_then(|d| d.and_hms_opt(17, 31, 22))
            .unwrap();
        Arc::new(FixedClock(time))
    }

    fn build(probe: FixedProbe) -> (LoggerFactory, Arc<MemoryConsole>) {
        let console = Arc::new(MemoryConsole::new());
        let factory = LoggerFactory::new(probe)
            .with_console(console.clone())
            .with_clock(fixed_clock());
        (factory, console)
    }

    #[test]
    fn test_rejects_non_string_id() {
        let (factory, _) = build(FixedProbe::new(EnvKind::None));
        let err = factory.create(42).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(err.to_string(), "invalid logger id: 42");
        assert!(factory.create(true).is_err());
        assert!(factory.create(Arg::Null).is_err());
    }

    #[test]
    fn test_accepts_empty_id() {
        let (factory, _) = build(FixedProbe::new(EnvKind::None));
        let logger = factory.create("").unwrap();
        assert_eq!(logger.log(&args!["x"]), "[2016/09/27-17:31:22][][log] x");
    }

    #[test]
    fn test_returns_plain_line_for_every_kind() {
        for kind in [EnvKind::Shell, EnvKind::Browser, EnvKind::None] {
            let (factory, console) = build(FixedProbe::new(kind));
            let logger = factory.create("svc").unwrap();
            assert_eq!(logger.kind(), kind);
            assert_eq!(
                logger.warn(&args!["careful"]),
                "[2016/09/27-17:31:22][svc][warn] careful"
            );
            assert_eq!(console.lines(Level::Warn).len(), 1);
        }
    }

    #[test]
    fn test_levels_write_to_their_channel() {
        let (factory, console) = build(FixedProbe::new(EnvKind::None));
        let logger = factory.create("svc").unwrap();

        logger.log(&args!["a"]);
        logger.warn(&args!["b"]);
        logger.error(&args!["c"]);
        logger.info(&args!["d"]);

        let origins: Vec<_> = console.records().into_iter().map(|r| r.origin).collect();
        assert_eq!(origins, vec![Level::Log, Level::Warn, Level::Error, Level::Info]);
    }

    #[test]
    fn test_debug_disabled_without_filter() {
        let (factory, console) = build(FixedProbe::new(EnvKind::Shell));
        let logger = factory.create("main").unwrap();
        assert!(!logger.debug_enabled());
        assert_eq!(logger.debug(&args!["x"]), None);
        assert!(console.is_empty());
    }

    #[test]
    fn test_debug_routed_through_log() {
        let (factory, console) = build(FixedProbe::new(EnvKind::Shell).with_debug_filter("main"));
        let logger = factory.create("main:sub").unwrap();

        let line = logger.debug(&args!["matches %s", "main"]);
        assert_eq!(
            line.as_deref(),
            Some("[2016/09/27-17:31:22][main:sub][debug] matches main")
        );
        assert_eq!(
            console.lines(Level::Log),
            vec![Line::Ansi(
                "\u{1b}[37m[2016/09/27-17:31:22]\u{1b}[32m[main:sub]\u{1b}[31m[debug] matches main\u{1b}[0m"
                    .into()
            )]
        );
    }

    #[test]
    fn test_emit_matches_named_methods() {
        let (factory, _) = build(FixedProbe::new(EnvKind::None));
        let logger = factory.create("svc").unwrap();
        assert_eq!(logger.emit(Level::Info, &args!["x"]), Some(logger.info(&args!["x"])));
        assert_eq!(logger.emit(Level::Debug, &args!["x"]), None);
    }

    #[test]
    fn test_snapshot_frozen_at_creation() {
        let (factory, _) = build(FixedProbe::new(EnvKind::None).with_debug_filter("main"));
        let logger = factory.create("main").unwrap();

        // A new factory with a different environment does not affect it
        let (other, _) = build(FixedProbe::new(EnvKind::Shell));
        let fresh = other.create("main").unwrap();

        assert!(logger.debug_enabled());
        assert_eq!(logger.kind(), EnvKind::None);
        assert!(!fresh.debug_enabled());
        assert_eq!(fresh.kind(), EnvKind::Shell);
    }

    #[test]
    fn test_same_instant_same_output() {
        let (factory, _) = build(FixedProbe::new(EnvKind::Shell));
        let logger = factory.create("svc").unwrap();
        let args = args!["%s=%d", "n", 3];
        assert_eq!(logger.info(&args), logger.info(&args));
    }
}
