//! Color tags and their terminal / browser renderings.

/// Color applied to one segment of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Reset,
    Gray,
    Green,
    Red,
    Cyan,
    Yellow,
}

impl Color {
    /// ANSI escape sequence for terminals.
    pub const fn ansi(self) -> &'static str {
        match self {
            Color::Reset => "\u{1b}[0m",
            Color::Gray => "\u{1b}[37m",
            Color::Green => "\u{1b}[32m",
            Color::Red => "\u{1b}[31m",
            Color::Cyan => "\u{1b}[36m",
            Color::Yellow => "\u{1b}[33m",
        }
    }

    /// CSS declaration for `%c` styled browser console output.
    pub const fn css(self) -> &'static str {
        match self {
            Color::Reset => "color: black",
            Color::Gray => "color: gray",
            Color::Green => "color: green",
            Color::Red => "color: red",
            Color::Cyan => "color: cyan",
            // plain yellow is unreadable on a white console
            Color::Yellow => "color: #8a8a14",
        }
    }
}
