//! Per-session parser options.
//!
//! [`ParserOptions`] implements [`serde::Deserialize`] so it can be embedded
//! in configuration files; every field falls back to its default.

use serde::Deserialize;

/// How raised diagnostics are handled during a parse session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorMode {
    /// The first raise aborts the parse.
    #[default]
    Strict,
    /// Raises are recorded (outside lookahead) and parsing continues.
    Recovering,
}

impl ErrorMode {
    pub fn is_recovering(&self) -> bool {
        matches!(self, ErrorMode::Recovering)
    }
}

/// Options fixed for the lifetime of a parse session.
///
/// # Example
///
/// ```
/// use caret::options::{ErrorMode, ParserOptions};
///
/// let options = ParserOptions::default().with_error_recovery(true);
/// assert_eq!(options.mode(), ErrorMode::Recovering);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Record problems and keep parsing instead of stopping at the first one.
    error_recovery: bool,
}

impl ParserOptions {
    pub fn new(error_recovery: bool) -> Self {
        Self { error_recovery }
    }

    /// Returns a copy with error recovery switched on or off.
    pub fn with_error_recovery(mut self, error_recovery: bool) -> Self {
        self.error_recovery = error_recovery;
        self
    }

    pub fn error_recovery(&self) -> bool {
        self.error_recovery
    }

    /// The [`ErrorMode`] these options select.
    pub fn mode(&self) -> ErrorMode {
        if self.error_recovery {
            ErrorMode::Recovering
        } else {
            ErrorMode::Strict
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let options = ParserOptions::default();
        assert!(!options.error_recovery());
        assert_eq!(options.mode(), ErrorMode::Strict);
        assert!(!options.mode().is_recovering());
    }

    #[test]
    fn test_error_recovery_selects_recovering() {
        assert_eq!(ParserOptions::new(true).mode(), ErrorMode::Recovering);
        assert!(ParserOptions::new(true).mode().is_recovering());
    }
}
