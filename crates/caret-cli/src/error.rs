//! Error types for CLI operations.
//!
//! [`CaretError`] wraps every failure the CLI can report, including the
//! diagnostics produced by a raise.

use std::io;

use thiserror::Error;

use caret::{ParseError, UnknownCode};

use crate::config::ConfigError;

/// The main error type for the caret CLI.
///
/// The `Parse` variant keeps the source text so the diagnostics can be
/// rendered with a snippet.
#[derive(Debug, Error)]
pub enum CaretError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    UnknownCode(#[from] UnknownCode),

    #[error("{err}")]
    Parse { err: ParseError, src: String },
}

impl CaretError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
