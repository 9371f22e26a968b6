//! Error types for OhMyConsole.

use thiserror::Error;

/// Common error type for logger construction and sink writes.
#[derive(Error, Debug)]
pub enum Error {
    /// Logger id was not a string
    #[error("invalid logger id: {0}")]
    InvalidArgument(String),

    /// Console write failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using OhMyConsole Error.
pub type Result<T> = std::result::Result<T, Error>;
