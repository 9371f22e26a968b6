//! printf-style formatting of log arguments
//!
//! When the first argument is a string it acts as a format string. Tokens
//! are a `%` followed by one of:
//!
//! | token | consumes | output |
//! |-------|----------|--------|
//! | `%s`  | 1 | string coercion |
//! | `%d`  | 1 | numeric coercion (`NaN` for non-numbers) |
//! | `%j`  | 1 | compact JSON |
//! | `%J`  | 1 | JSON indented by 4 spaces, wrapped in newlines |
//! | `%%`  | 0 | a literal `%` |
//!
//! Once the positional arguments run out every token, `%%` included, is
//! left as written. Arguments left over after the scan are appended, each
//! preceded by a single space.

use crate::arg::{js_number, Arg};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Substituted for a value that has no JSON encoding.
pub const CIRCULAR: &str = "[Circular]";

/// A substitution token recognized in a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Str,
    Number,
    Json,
    PrettyJson,
    Percent,
}

impl Directive {
    /// Directive for the character following a `%`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Directive::Str),
            'd' => Some(Directive::Number),
            'j' => Some(Directive::Json),
            'J' => Some(Directive::PrettyJson),
            '%' => Some(Directive::Percent),
            _ => None,
        }
    }

    /// The token as it appears in a format string.
    pub fn token(self) -> &'static str {
        match self {
            Directive::Str => "%s",
            Directive::Number => "%d",
            Directive::Json => "%j",
            Directive::PrettyJson => "%J",
            Directive::Percent => "%%",
        }
    }
}

/// Format a list of log arguments into one string.
///
/// Never fails: missing arguments leave tokens untouched, extra arguments
/// are appended, values without a JSON form become `[Circular]`.
///
/// ```rust
/// use ohmyconsole_core::{args, format};
///
/// assert_eq!(format(&args!["%s", "foo", "bar"]), "foo bar");
/// assert_eq!(format(&args!["%s and %s", "one"]), "one and %s");
/// assert_eq!(format(&args!["100%%", 1]), "100% 1");
/// ```
pub fn format(args: &[Arg]) -> String {
    let mut out = String::new();
    let mut next = 0;

    if let Some(Arg::Str(template)) = args.first() {
        next = 1;
        substitute(template, args, &mut next, &mut out);
    }

    for arg in &args[next..] {
        out.push(' ');
        out.push_str(&arg.to_string());
    }

    out
}

fn substitute(template: &str, args: &[Arg], next: &mut usize, out: &mut String) {
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        match after.chars().next().and_then(Directive::from_char) {
            Some(directive) => {
                if *next >= args.len() {
                    out.push_str(directive.token());
                } else {
                    expand(directive, args, next, out);
                }
                // Directive characters are all single-byte
                rest = &after[1..];
            }
            None => {
                out.push('%');
                rest = after;
            }
        }
    }

    out.push_str(rest);
}

fn expand(directive: Directive, args: &[Arg], next: &mut usize, out: &mut String) {
    if directive == Directive::Percent {
        out.push('%');
        return;
    }

    let arg = &args[*next];
    *next += 1;

    match directive {
        Directive::Str => out.push_str(&arg.to_string()),
        Directive::Number => out.push_str(&js_number(arg.to_number())),
        Directive::Json => match encode_json(arg, false) {
            Some(json) => out.push_str(&json),
            None => out.push_str(CIRCULAR),
        },
        Directive::PrettyJson => {
            out.push('\n');
            out.push_str(encode_json(arg, true).as_deref().unwrap_or(CIRCULAR));
            out.push('\n');
        }
        Directive::Percent => unreachable!("handled above"),
    }
}

/// JSON text substituted for `arg`, `None` when it cannot be encoded.
fn encode_json(arg: &Arg, pretty: bool) -> Option<String> {
    // undefined has no JSON form but is not an error either
    if let Arg::Undefined = arg {
        return Some(arg.to_string());
    }

    let value = arg.to_json_value()?;
    if !pretty {
        return serde_json::to_string(value.as_ref()).ok();
    }

    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser).ok()?;
    String::from_utf8(buf).ok()
}
