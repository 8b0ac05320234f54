//! Error handling module for the jscan CLI.
//!
//! Lexical defects in the scanned source are not errors here: they become
//! error tokens and diagnostics. This type covers everything around the scan.

use thiserror::Error;

/// Main error type for the jscan CLI application.
#[derive(Error, Debug)]
pub enum JscanError {
    /// Error when the configuration file is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when no usable input was selected.
    #[error("Input error: {0}")]
    Input(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when a TOML configuration file cannot be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using JscanError.
pub type Result<T> = std::result::Result<T, JscanError>;
