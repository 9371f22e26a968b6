//! Output sinks
//!
//! A [`Console`] receives fully rendered [`Line`]s together with the name of
//! the channel they belong to (`log`, `warn`, `error`, `info`). Sinks exist
//! for:
//!
//! - **Std**: [`StdConsole`] - stdout for `log`/`info`, stderr for `warn`/`error`
//! - **Memory**: [`MemoryConsole`] - records lines, for tests and embedding
//! - **Browser**: devtools console (separate crate, WASM only)

use crate::color::Color;
use crate::env::EnvKind;
use crate::error::Result;
use crate::level::{Channel, Level};
use parking_lot::Mutex;
use std::borrow::Cow;
use std::io::Write;

/// A console line as it will be handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// No styling
    Plain(String),
    /// ANSI escape codes embedded in the text
    Ansi(String),
    /// `%c` template plus one CSS declaration per `%c`
    Styled {
        template: String,
        styles: Vec<&'static str>,
    },
}

impl Line {
    /// Render the line for a console of `kind`.
    pub fn render(kind: EnvKind, timestamp: &str, id: &str, channel: Channel, message: &str) -> Self {
        let level = channel.level;
        match kind {
            EnvKind::Shell => Line::Ansi(format!(
                "{}[{}]{}[{}]{}[{}] {}{}",
                Color::Gray.ansi(),
                timestamp,
                Color::Green.ansi(),
                id,
                channel.color.ansi(),
                level,
                message,
                Color::Reset.ansi(),
            )),
            EnvKind::Browser => Line::Styled {
                template: format!("%c[{}]%c[{}]%c[{}] {}", timestamp, id, level, message),
                styles: vec![Color::Gray.css(), Color::Green.css(), channel.color.css()],
            },
            EnvKind::None => Line::Plain(plain(timestamp, id, level, message)),
        }
    }

    /// Text for a sink that cannot apply CSS: `%c` markers are dropped.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Line::Plain(text) | Line::Ansi(text) => Cow::Borrowed(text),
            Line::Styled { template, styles } => {
                Cow::Owned(template.replacen("%c", "", styles.len()))
            }
        }
    }
}

/// The uncolored form of a line, returned by every logging call.
pub fn plain(timestamp: &str, id: &str, level: Level, message: &str) -> String {
    format!("[{}][{}][{}] {}", timestamp, id, level, message)
}

/// Destination for rendered lines.
pub trait Console: Send + Sync {
    /// Write one line to the channel named `origin`.
    fn try_write(&self, origin: Level, line: &Line) -> Result<()>;

    /// Write one line, ignoring failures.
    ///
    /// Logging must not fail the caller; a lost line is only reported
    /// through `tracing`.
    fn write(&self, origin: Level, line: &Line) {
        if let Err(e) = self.try_write(origin, line) {
            tracing::warn!(channel = %origin, error = %e, "console write failed");
        }
    }
}

/// Process stream a channel writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// `warn` and `error` go to stderr, everything else to stdout.
    pub const fn for_channel(origin: Level) -> Self {
        match origin {
            Level::Warn | Level::Error => Stream::Stderr,
            Level::Debug | Level::Log | Level::Info => Stream::Stdout,
        }
    }
}

/// Process stdout / stderr, split the way a JavaScript console splits them.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn try_write(&self, origin: Level, line: &Line) -> Result<()> {
        let text = line.text();
        match Stream::for_channel(origin) {
            Stream::Stderr => writeln!(std::io::stderr().lock(), "{}", text)?,
            Stream::Stdout => writeln!(std::io::stdout().lock(), "{}", text)?,
        }
        Ok(())
    }
}

/// One line captured by [`MemoryConsole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub origin: Level,
    pub line: Line,
}

/// Console that keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    records: Mutex<Vec<Record>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines written so far, oldest first.
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    /// Lines written to one channel.
    pub fn lines(&self, origin: Level) -> Vec<Line> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.origin == origin)
            .map(|r| r.line.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Console for MemoryConsole {
    fn try_write(&self, origin: Level, line: &Line) -> Result<()> {
        self.records.lock().push(Record {
            origin,
            line: line.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TS: &str = "2016/09/27-17:31:22";

    #[test]
    fn test_render_shell() {
        let line = Line::render(EnvKind::Shell, TS, "svc", Channel::new(Level::Warn, false), "hi");
        assert_eq!(
            line,
            Line::Ansi(
                "\u{1b}[37m[2016/09/27-17:31:22]\u{1b}[32m[svc]\u{1b}[33m[warn] hi\u{1b}[0m".into()
            )
        );
    }

    #[test]
    fn test_render_browser() {
        let line = Line::render(EnvKind::Browser, TS, "svc", Channel::new(Level::Info, false), "hi");
        assert_eq!(
            line,
            Line::Styled {
                template: "%c[2016/09/27-17:31:22]%c[svc]%c[info] hi".into(),
                styles: vec!["color: gray", "color: green", "color: cyan"],
            }
        );
        assert_eq!(line.text(), "[2016/09/27-17:31:22][svc][info] hi");
    }

    #[test]
    fn test_render_plain() {
        let line = Line::render(EnvKind::None, TS, "svc", Channel::new(Level::Debug, true), "hi");
        assert_eq!(line, Line::Plain("[2016/09/27-17:31:22][svc][debug] hi".into()));
    }

    #[test]
    fn test_styled_text_keeps_message_markers() {
        let line = Line::render(EnvKind::Browser, TS, "a", Channel::new(Level::Log, false), "100%c");
        assert_eq!(line.text(), "[2016/09/27-17:31:22][a][log] 100%c");
    }

    #[test]
    fn test_std_stream_routing() {
        assert_eq!(Stream::for_channel(Level::Warn), Stream::Stderr);
        assert_eq!(Stream::for_channel(Level::Error), Stream::Stderr);
        assert_eq!(Stream::for_channel(Level::Log), Stream::Stdout);
        assert_eq!(Stream::for_channel(Level::Info), Stream::Stdout);
        assert_eq!(Stream::for_channel(Level::Debug), Stream::Stdout);
    }

    #[test]
    fn test_std_console_writes() {
        let line = Line::Plain("[ts][svc][log] hi".into());
        for level in Level::ALL {
            assert!(StdConsole.try_write(level, &line).is_ok());
        }
    }

    #[test]
    fn test_memory_console() {
        let console = MemoryConsole::new();
        assert!(console.is_empty());

        console.write(Level::Log, &Line::Plain("one".into()));
        console.write(Level::Error, &Line::Plain("two".into()));

        assert_eq!(console.len(), 2);
        assert_eq!(console.lines(Level::Error), vec![Line::Plain("two".into())]);
        assert_eq!(console.records()[0].origin, Level::Log);

        console.clear();
        assert!(console.is_empty());
    }
}
