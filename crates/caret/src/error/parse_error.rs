//! The abort signal and the error returned from a failed parse.
//!
//! [`Abort`] is what a strict-mode raise returns; [`ParseError`] is what the
//! driver hands back to the caller, wrapping one or more [`Diagnostic`]s.

use std::fmt;

use thiserror::Error;

use crate::error::Diagnostic;

/// A type alias for `Result<T, Abort>`.
pub type Result<T> = std::result::Result<T, Abort>;

/// Unwinds the current parse, carrying the diagnostic that caused it.
///
/// Returned from a raise in strict mode and meant to be propagated with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Abort(Box<Diagnostic>);

impl Abort {
    pub fn new(diagnostic: Diagnostic) -> Self {
        Self(Box::new(diagnostic))
    }

    pub fn diagnostic(&self) -> &Diagnostic {
        &self.0
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        *self.0
    }
}

/// Error type for a failed parse.
///
/// Wraps one or more diagnostics.
#[derive(Debug, Clone)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Create a new parse error from diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{}", first)?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Abort> for ParseError {
    fn from(abort: Abort) -> Self {
        Self {
            diagnostics: vec![abort.into_diagnostic()],
        }
    }
}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}
