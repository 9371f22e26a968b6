//! OhMyConsole browser bridge
//!
//! Exports `OhMyConsole(id)` to JavaScript through wasm-bindgen. The
//! returned logger reads `window.DEBUG`, writes `%c` styled lines to the
//! devtools console and stamps them with the browser's local time. See
//! [`browser`] for the pieces it is assembled from.

pub mod browser;

pub use browser::{arg_from_js, oh_my_console, BrowserClock, BrowserConsole, BrowserProbe, JsLogger};
