//! Browser bindings using wasm-bindgen
//!
//! Exports `OhMyConsole(id)` to JavaScript. The returned logger reads
//! `window.DEBUG` once at creation, writes `%c` styled lines to the devtools
//! console, and stamps them with the browser's local time.
//!
//! ```js
//! import init, { OhMyConsole } from "ohmyconsole_wasm";
//!
//! await init();
//! const logger = OhMyConsole("app:router");
//! logger.info(["navigated to %s", location.pathname]);
//! logger.debug(["state %J", state]); // false unless window.DEBUG matches
//! ```
//!
//! Arguments are passed as one array since wasm-bindgen exports cannot be
//! variadic.

use chrono::{NaiveDate, NaiveDateTime};
use js_sys::{Array, Date, Reflect, JSON};
use ohmyconsole::{
    Clock, Console, EnvKind, EnvironmentProbe, Level, Line, Logger, LoggerFactory,
    Result as ConsoleResult,
};
use ohmyconsole_core::arg::{js_number, OBJECT_TEXT};
use ohmyconsole_core::Arg;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

/// Global variable holding the debug filter.
const DEBUG_GLOBAL: &str = "DEBUG";

/// Probe reading `globalThis.DEBUG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserProbe;

impl EnvironmentProbe for BrowserProbe {
    fn debug_filter(&self) -> Option<String> {
        let value = Reflect::get(&js_sys::global(), &JsValue::from_str(DEBUG_GLOBAL)).ok()?;
        if let Some(s) = value.as_string() {
            return Some(s);
        }
        // A numeric filter still names a namespace segment
        value.as_f64().map(js_number)
    }

    fn kind(&self) -> EnvKind {
        EnvKind::Browser
    }
}

/// Devtools console. Styled lines keep their CSS arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

impl Console for BrowserConsole {
    fn try_write(&self, origin: Level, line: &Line) -> ConsoleResult<()> {
        let data = Array::new();
        match line {
            Line::Styled { template, styles } => {
                data.push(&JsValue::from_str(template));
                for style in styles {
                    data.push(&JsValue::from_str(style));
                }
            }
            other => {
                data.push(&JsValue::from_str(&other.text()));
            }
        }

        match origin {
            Level::Warn => web_sys::console::warn(&data),
            Level::Error => web_sys::console::error(&data),
            Level::Info => web_sys::console::info(&data),
            Level::Debug | Level::Log => web_sys::console::log(&data),
        }
        Ok(())
    }
}

/// Local time from the JavaScript `Date` object.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> NaiveDateTime {
        let d = Date::new_0();
        NaiveDate::from_ymd_opt(d.get_full_year() as i32, d.get_month() + 1, d.get_date())
            .and_then(|date| date.and_hms_opt(d.get_hours(), d.get_minutes(), d.get_seconds()))
            .unwrap_or_default()
    }
}

/// Lower a JavaScript value into a log argument.
///
/// Objects go through `JSON.stringify`. Functions and symbols, which it
/// maps to `undefined`, lower to [`Arg::Undefined`]. Values it throws on
/// (cycles, BigInt) become opaque and print as `[Circular]` under `%j`.
pub fn arg_from_js(value: &JsValue) -> Arg {
    if let Some(s) = value.as_string() {
        Arg::Str(s)
    } else if let Some(n) = value.as_f64() {
        Arg::Num(n)
    } else if let Some(b) = value.as_bool() {
        Arg::Bool(b)
    } else if value.is_null() {
        Arg::Null
    } else if value.is_undefined() {
        Arg::Undefined
    } else {
        match JSON::stringify(value) {
            Ok(json) if json.is_undefined() => Arg::Undefined,
            Ok(json) => json
                .as_string()
                .and_then(|json| serde_json::from_str(&json).ok())
                .map(Arg::Json)
                .unwrap_or_else(|| Arg::Other(OBJECT_TEXT.to_string())),
            Err(_) => Arg::Other(OBJECT_TEXT.to_string()),
        }
    }
}

fn lower(args: &Array) -> Vec<Arg> {
    args.iter().map(|value| arg_from_js(&value)).collect()
}

/// Create a logger. Throws when `id` is not a string.
#[wasm_bindgen(js_name = OhMyConsole)]
pub fn oh_my_console(id: JsValue) -> Result<JsLogger, JsValue> {
    // Route Rust panics to console.error instead of "RuntimeError: unreachable"
    console_error_panic_hook::set_once();

    let factory = LoggerFactory::new(BrowserProbe)
        .with_console(Arc::new(BrowserConsole))
        .with_clock(Arc::new(BrowserClock));

    factory
        .create(arg_from_js(&id))
        .map(|inner| JsLogger { inner })
        .map_err(|e| js_sys::Error::new(&e.to_string()).into())
}

/// Logger handle returned to JavaScript.
#[wasm_bindgen]
pub struct JsLogger {
    inner: Logger,
}

#[wasm_bindgen]
impl JsLogger {
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> String {
        self.inner.id().to_string()
    }

    /// Returns the line, or `false` when debug is off for this logger.
    pub fn debug(&self, args: &Array) -> JsValue {
        match self.inner.debug(&lower(args)) {
            Some(line) => JsValue::from_str(&line),
            None => JsValue::from_bool(false),
        }
    }

    pub fn log(&self, args: &Array) -> String {
        self.inner.log(&lower(args))
    }

    pub fn warn(&self, args: &Array) -> String {
        self.inner.warn(&lower(args))
    }

    pub fn error(&self, args: &Array) -> String {
        self.inner.error(&lower(args))
    }

    pub fn info(&self, args: &Array) -> String {
        self.inner.info(&lower(args))
    }
}
