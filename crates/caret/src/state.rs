//! Parser state read by the emitter.
//!
//! The tokenizer owns token boundaries and publishes them here through
//! [`ParseState::advance`]. The emitter only reads the anchors and the
//! lookahead flag, and appends to the error list.

use crate::{
    error::Diagnostic,
    location::{Anchor, TokenAnchors},
};

/// Mutable state of one parse session.
#[derive(Debug, Clone, Default)]
pub struct ParseState {
    anchors: TokenAnchors,
    lookahead: bool,
    errors: Vec<Diagnostic>,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchors(&self) -> &TokenAnchors {
        &self.anchors
    }

    /// Publish the boundaries of the token just read.
    pub fn advance(&mut self, start: Anchor, end: Anchor) {
        self.anchors.advance(start, end);
    }

    /// Whether the parser is currently speculating.
    pub fn is_lookahead(&self) -> bool {
        self.lookahead
    }

    /// Diagnostics recorded so far, in the order they were raised.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub(crate) fn set_anchors(&mut self, anchors: TokenAnchors) {
        self.anchors = anchors;
    }

    pub(crate) fn set_lookahead(&mut self, lookahead: bool) {
        self.lookahead = lookahead;
    }

    pub(crate) fn record(&mut self, diagnostic: Diagnostic) {
        self.errors.push(diagnostic);
    }

    pub(crate) fn into_errors(self) -> Vec<Diagnostic> {
        self.errors
    }
}
