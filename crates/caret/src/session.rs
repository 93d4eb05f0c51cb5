//! Raising diagnostics during a parse.
//!
//! A [`ParseSession`] ties together the source text, the session's
//! [`ErrorMode`] and its [`ParseState`]. Its raise methods resolve the
//! location, render the catalog template and then, depending on the mode,
//! either record the diagnostic and hand it back or abort the parse.
//!
//! # Example
//!
//! ```
//! use caret::{
//!     catalog::ErrorCode,
//!     options::ParserOptions,
//!     session::parse_with,
//! };
//!
//! let source = "let x;\nlet x;";
//! let options = ParserOptions::default().with_error_recovery(true);
//!
//! let parsed = parse_with(source, &options, |session| {
//!     session.raise(11, ErrorCode::VarRedeclaration, &[&"x"])?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     parsed.errors()[0].message(),
//!     "Identifier 'x' has already been declared (2:4)"
//! );
//! ```

use std::fmt;

use log::{debug, trace};

use crate::{
    catalog::ErrorCode,
    error::{Abort, Diagnostic, ErrorContext, ErrorData, ParseError, Result},
    location::{self, Anchor},
    options::{ErrorMode, ParserOptions},
    position::{Offset, Position},
    state::ParseState,
};

/// Diagnostic emitter for a single parse of a single source text.
#[derive(Debug)]
pub struct ParseSession<'src> {
    source: &'src str,
    mode: ErrorMode,
    state: ParseState,
}

impl<'src> ParseSession<'src> {
    /// Start a session over `source`. The mode is fixed from here on.
    pub fn new(source: &'src str, options: &ParserOptions) -> Self {
        Self {
            source,
            mode: options.mode(),
            state: ParseState::new(),
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn mode(&self) -> ErrorMode {
        self.mode
    }

    pub fn state(&self) -> &ParseState {
        &self.state
    }

    /// Publish the boundaries of the token just read.
    pub fn advance(&mut self, start: Anchor, end: Anchor) {
        self.state.advance(start, end);
    }

    /// Diagnostics recorded so far.
    pub fn errors(&self) -> &[Diagnostic] {
        self.state.errors()
    }

    /// Resolve `offset` without raising anything.
    pub fn position_of(&self, offset: Offset) -> Position {
        location::resolve(offset, self.state.anchors(), self.source)
    }

    /// Raise the diagnostic `code` at `offset`.
    ///
    /// # Errors
    ///
    /// In strict mode this always returns [`Abort`]; propagate it with `?`.
    pub fn raise(
        &mut self,
        offset: Offset,
        code: ErrorCode,
        params: &[&dyn fmt::Display],
    ) -> Result<Diagnostic> {
        self.raise_with_data(offset, ErrorData::new(), code, params)
    }

    /// Raise the diagnostic `code` at `offset` with extra [`ErrorData`].
    ///
    /// In recovering mode the diagnostic is recorded unless the session is in
    /// lookahead, and is returned either way so the caller can recover.
    ///
    /// # Errors
    ///
    /// In strict mode this always returns [`Abort`]; nothing is recorded.
    pub fn raise_with_data(
        &mut self,
        offset: Offset,
        data: ErrorData,
        code: ErrorCode,
        params: &[&dyn fmt::Display],
    ) -> Result<Diagnostic> {
        let loc = self.position_of(offset);
        let rendered = code.template().render(params);
        let context = ErrorContext::new(offset, loc, data);

        self.dispatch(Diagnostic::new(rendered, code, context))
    }

    fn dispatch(&mut self, diagnostic: Diagnostic) -> Result<Diagnostic> {
        match self.mode {
            ErrorMode::Recovering => {
                if self.state.is_lookahead() {
                    trace!(
                        code = diagnostic.template().as_str(),
                        offset = diagnostic.pos();
                        "Diagnostic suppressed during lookahead"
                    );
                } else {
                    debug!(
                        code = diagnostic.template().as_str(),
                        offset = diagnostic.pos(),
                        count = self.state.errors().len() + 1;
                        "Diagnostic recorded"
                    );
                    self.state.record(diagnostic.clone());
                }
                Ok(diagnostic)
            }
            ErrorMode::Strict => {
                debug!(
                    code = diagnostic.template().as_str(),
                    offset = diagnostic.pos();
                    "Diagnostic aborts parse"
                );
                Err(Abort::new(diagnostic))
            }
        }
    }

    /// Run `f` speculatively.
    ///
    /// Diagnostics raised inside `f` are returned to it but never recorded.
    /// The lookahead flag and the token anchors are restored when `f` returns,
    /// whatever it returns.
    pub fn lookahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let anchors = *self.state.anchors();
        let was_lookahead = self.state.is_lookahead();

        self.state.set_lookahead(true);
        let result = f(self);
        self.state.set_lookahead(was_lookahead);
        self.state.set_anchors(anchors);

        result
    }

    /// End the session, failing if any diagnostic was recorded.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] with every recorded diagnostic in order.
    pub fn finish(self) -> std::result::Result<(), ParseError> {
        let errors = self.into_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ParseError::new(errors))
        }
    }

    /// End the session and take the recorded diagnostics.
    pub fn into_errors(self) -> Vec<Diagnostic> {
        self.state.into_errors()
    }
}

/// The result of a parse that did not abort.
#[derive(Debug)]
pub struct Parsed<T> {
    value: T,
    errors: Vec<Diagnostic>,
}

impl<T> Parsed<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Diagnostics recorded in recovering mode. Always empty in strict mode.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
        (self.value, self.errors)
    }
}

/// Drive a parse of `source`, catching an [`Abort`] raised anywhere in `f`.
///
/// # Errors
///
/// Returns a [`ParseError`] holding the single aborting diagnostic when `f`
/// aborts.
pub fn parse_with<'src, T, F>(
    source: &'src str,
    options: &ParserOptions,
    f: F,
) -> std::result::Result<Parsed<T>, ParseError>
where
    F: FnOnce(&mut ParseSession<'src>) -> Result<T>,
{
    let mut session = ParseSession::new(source, options);

    match f(&mut session) {
        Ok(value) => {
            let errors = session.into_errors();
            debug!(errors = errors.len(); "Parse finished");
            Ok(Parsed { value, errors })
        }
        Err(abort) => {
            debug!(code = abort.diagnostic().template().as_str(); "Parse aborted");
            Err(abort.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recovering(source: &str) -> ParseSession<'_> {
        ParseSession::new(source, &ParserOptions::new(true))
    }

    fn strict(source: &str) -> ParseSession<'_> {
        ParseSession::new(source, &ParserOptions::new(false))
    }

    #[test]
    fn test_raise_formats_message_with_location() {
        let mut session = recovering("var x;\nvar x;");

        let diag = session
            .raise(11, ErrorCode::VarRedeclaration, &[&"x"])
            .unwrap();

        assert_eq!(diag.message(), "Identifier 'x' has already been declared (2:4)");
        assert_eq!(diag.pos(), 11);
        assert_eq!(diag.loc(), Position::new(2, 4));
        assert_eq!(diag.template(), ErrorCode::VarRedeclaration);
        assert!(diag.code().is_none());
        assert!(diag.missing_plugin().is_none());
    }

    #[test]
    fn test_raise_uses_anchor_position() {
        let source = "a\n  bb c";
        let mut session = recovering(source);
        session.advance(
            Anchor::new(4, Position::new(2, 2)),
            Anchor::new(6, Position::new(2, 4)),
        );

        let diag = session.raise(4, ErrorCode::UnexpectedToken, &[]).unwrap();

        assert_eq!(diag.message(), "Unexpected token '%' (2:2)");
    }

    #[test]
    fn test_recovering_records_in_order() {
        let mut session = recovering("abc def ghi");

        session.raise(0, ErrorCode::InvalidNumber, &[]).unwrap();
        session.raise(4, ErrorCode::IllegalReturn, &[]).unwrap();
        session.raise(8, ErrorCode::InvalidDigit, &[&8]).unwrap();

        let codes: Vec<_> = session.errors().iter().map(|d| d.template()).collect();
        assert_eq!(
            codes,
            vec![
                ErrorCode::InvalidNumber,
                ErrorCode::IllegalReturn,
                ErrorCode::InvalidDigit
            ]
        );
    }

    #[test]
    fn test_recovering_does_not_deduplicate() {
        let mut session = recovering("x");

        let first = session.raise(0, ErrorCode::ParamDupe, &[]).unwrap();
        let second = session.raise(0, ErrorCode::ParamDupe, &[]).unwrap();

        assert_eq!(first, second);
        assert_eq!(session.errors().len(), 2);
    }

    #[test]
    fn test_lookahead_suppresses_recording() {
        let mut session = recovering("a b");

        let diag =
            session.lookahead(|session| session.raise(2, ErrorCode::InvalidNumber, &[]));

        assert_eq!(diag.unwrap().message(), "Invalid number (1:2)");
        assert!(session.errors().is_empty());
        assert!(!session.state().is_lookahead());
    }

    #[test]
    fn test_lookahead_restores_anchors() {
        let source = "a b c";
        let mut session = recovering(source);
        session.advance(Anchor::scanned(source, 0), Anchor::scanned(source, 1));
        let before = *session.state().anchors();

        session.lookahead(|session| {
            session.advance(Anchor::scanned(source, 2), Anchor::scanned(source, 3));
            assert!(session.state().is_lookahead());
        });

        assert_eq!(*session.state().anchors(), before);
    }

    #[test]
    fn test_nested_lookahead_keeps_outer_flag() {
        let mut session = recovering("abc");

        session.lookahead(|session| {
            session.lookahead(|_| ());
            assert!(session.state().is_lookahead());
        });

        assert!(!session.state().is_lookahead());
    }

    #[test]
    fn test_recording_resumes_after_lookahead() {
        let mut session = recovering("abc");

        session
            .lookahead(|session| session.raise(0, ErrorCode::InvalidNumber, &[]))
            .unwrap();
        session.raise(1, ErrorCode::InvalidNumber, &[]).unwrap();

        assert_eq!(session.errors().len(), 1);
        assert_eq!(session.errors()[0].pos(), 1);
    }

    #[test]
    fn test_strict_aborts_without_recording() {
        let mut session = strict("let let = 1;");

        let abort = session
            .raise(4, ErrorCode::LetInLexicalBinding, &[])
            .unwrap_err();

        assert_eq!(abort.diagnostic().pos(), 4);
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_strict_aborts_during_lookahead() {
        let mut session = strict("x");

        let result =
            session.lookahead(|session| session.raise(0, ErrorCode::InvalidNumber, &[]));

        assert!(result.is_err());
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_raise_with_data_attaches_fields() {
        let mut session = recovering("import x from 'y';");
        let data = ErrorData::new()
            .with_code("BABEL_PARSER_SOURCETYPE_MODULE_REQUIRED")
            .with_missing_plugin(["importMeta"]);

        let diag = session
            .raise_with_data(0, data, ErrorCode::ImportOutsideModule, &[])
            .unwrap();

        assert_eq!(diag.code(), Some("BABEL_PARSER_SOURCETYPE_MODULE_REQUIRED"));
        assert_eq!(diag.missing_plugin(), Some(&["importMeta".to_string()][..]));
        assert_eq!(diag.pos(), 0);
        assert_eq!(diag.template(), ErrorCode::ImportOutsideModule);
    }

    #[test]
    fn test_position_of_has_no_side_effects() {
        let session = recovering("a\nb");

        assert_eq!(session.position_of(2), Position::new(2, 0));
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_finish() {
        assert!(recovering("x").finish().is_ok());

        let mut session = recovering("x");
        session.raise(0, ErrorCode::InvalidNumber, &[]).unwrap();
        let err = session.finish().unwrap_err();
        assert_eq!(err.diagnostics().len(), 1);
    }

    #[test]
    fn test_parse_with_strict_returns_single_diagnostic() {
        let options = ParserOptions::new(false);

        let result = parse_with("1 2 3", &options, |session| {
            session.raise(0, ErrorCode::InvalidNumber, &[])?;
            session.raise(2, ErrorCode::InvalidNumber, &[])?;
            Ok(())
        });

        let err = result.unwrap_err();
        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.diagnostics()[0].pos(), 0);
    }

    #[test]
    fn test_parse_with_recovering_collects() {
        let options = ParserOptions::new(true);

        let parsed = parse_with("1 2 3", &options, |session| {
            session.raise(0, ErrorCode::InvalidNumber, &[])?;
            session.raise(2, ErrorCode::InvalidNumber, &[])?;
            Ok("done")
        })
        .unwrap();

        assert_eq!(*parsed.value(), "done");
        assert!(parsed.has_errors());
        let (_, errors) = parsed.into_parts();
        assert_eq!(errors.len(), 2);
    }
}
