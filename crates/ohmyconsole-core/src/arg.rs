//! Dynamically-typed logging arguments
//!
//! Log calls take a heterogeneous list of values. [`Arg`] is the tagged union
//! those values are lowered into, and it carries the three coercions the
//! formatter needs:
//!
//! - string coercion ([`fmt::Display`]) for `%s` and trailing arguments
//! - numeric coercion ([`Arg::to_number`]) for `%d`
//! - JSON encoding ([`Arg::to_json_value`]) for `%j` / `%J`
//!
//! The coercions follow the loose rules of a browser console: `"42"` is a
//! number under `%d`, `"abc"` becomes `NaN`, objects print as
//! `[object Object]` and arrays as their comma-joined elements.

use serde::Serialize;
use serde_json::{Number, Value};
use std::borrow::Cow;
use std::fmt;

/// Display text of a structured value that has no better string form.
pub const OBJECT_TEXT: &str = "[object Object]";

/// Largest integer an f64 holds exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// One positional argument of a log call.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Num(f64),
    Bool(bool),
    Null,
    Undefined,
    /// Structured value (object, array or scalar) with a JSON encoding.
    Json(Value),
    /// Opaque value known only by its display text. It has no JSON
    /// encoding, so `%j` / `%J` fall back to the `[Circular]` sentinel.
    Other(String),
}

impl Arg {
    /// Lower any serializable value into an argument.
    ///
    /// Serialization happens eagerly. Scalars land on their native variants,
    /// so a serialized string can still act as a format string. A value
    /// serde_json refuses (for example a map with non-string keys) becomes
    /// [`Arg::Other`].
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        serde_json::to_value(value)
            .map(Arg::from_value)
            .unwrap_or_else(|_| Arg::Other(OBJECT_TEXT.to_string()))
    }

    /// Lower a decoded JSON value, mapping scalars onto their native
    /// variants. Arrays and objects stay structured.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(s) => Arg::Str(s),
            Value::Number(n) => Arg::Num(n.as_f64().unwrap_or(f64::NAN)),
            Value::Bool(b) => Arg::Bool(b),
            Value::Null => Arg::Null,
            structured => Arg::Json(structured),
        }
    }

    /// True for the string variant, the only variant that can act as a
    /// format string.
    pub fn is_str(&self) -> bool {
        matches!(self, Arg::Str(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Arg::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric coercion used by `%d`.
    pub fn to_number(&self) -> f64 {
        match self {
            Arg::Str(s) => parse_number(s),
            Arg::Num(n) => *n,
            Arg::Bool(b) => f64::from(u8::from(*b)),
            Arg::Null => 0.0,
            Arg::Undefined | Arg::Other(_) => f64::NAN,
            Arg::Json(value) => value_to_number(value),
        }
    }

    /// JSON form of the argument, or `None` when it has no encoding.
    pub fn to_json_value(&self) -> Option<Cow<'_, Value>> {
        match self {
            Arg::Str(s) => Some(Cow::Owned(Value::String(s.clone()))),
            Arg::Num(n) => Some(Cow::Owned(number_value(*n))),
            Arg::Bool(b) => Some(Cow::Owned(Value::Bool(*b))),
            Arg::Null => Some(Cow::Owned(Value::Null)),
            Arg::Json(value) => Some(Cow::Borrowed(value)),
            Arg::Undefined | Arg::Other(_) => None,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => f.write_str(s),
            Arg::Num(n) => f.write_str(&js_number(*n)),
            Arg::Bool(b) => write!(f, "{}", b),
            Arg::Null => f.write_str("null"),
            Arg::Undefined => f.write_str("undefined"),
            Arg::Json(value) => write_value(f, value),
            Arg::Other(text) => f.write_str(text),
        }
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Number(n) => write_json_number(f, n),
        Value::String(s) => f.write_str(s),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                // null elements print as nothing
                if !item.is_null() {
                    write_value(f, item)?;
                }
            }
            Ok(())
        }
        Value::Object(_) => f.write_str(OBJECT_TEXT),
    }
}

fn write_json_number(f: &mut fmt::Formatter<'_>, n: &Number) -> fmt::Result {
    if let Some(i) = n.as_i64() {
        write!(f, "{}", i)
    } else if let Some(u) = n.as_u64() {
        write!(f, "{}", u)
    } else {
        f.write_str(&js_number(n.as_f64().unwrap_or(f64::NAN)))
    }
}

fn value_to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Array(_) => parse_number(&Arg::Json(value.clone()).to_string()),
        Value::Object(_) => f64::NAN,
    }
}

/// JSON number for an f64: integral values encode without a fraction,
/// non-finite values encode as `null`.
fn number_value(n: f64) -> Value {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

/// Render a number the way a JavaScript console does.
///
/// ```rust
/// use ohmyconsole_core::arg::js_number;
///
/// assert_eq!(js_number(7.0), "7");
/// assert_eq!(js_number(1.5), "1.5");
/// assert_eq!(js_number(f64::NAN), "NaN");
/// assert_eq!(js_number(1e21), "1e+21");
/// ```
pub fn js_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }

    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

/// Parse a string the way JavaScript's `Number(string)` does.
///
/// Surrounding whitespace is ignored, the empty string is `0`, `0x` / `0o` /
/// `0b` prefixes select a radix, `Infinity` may carry a sign. Everything
/// that is not a plain decimal literal is `NaN`.
pub fn parse_number(input: &str) -> f64 {
    let s = input.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    // str::parse also accepts "inf" and "nan", which JS does not
    let decimal = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal || !s.bytes().any(|b| b.is_ascii_digit()) {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0f64, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

// ============================================================================
// Conversions
// ============================================================================

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Arg::Str(s.clone())
    }
}

impl From<char> for Arg {
    fn from(c: char) -> Self {
        Arg::Str(c.to_string())
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl From<()> for Arg {
    fn from(_: ()) -> Self {
        Arg::Undefined
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::from_value(value)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Arg::Null)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                fn from(n: $t) -> Self {
                    Arg::Num(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
