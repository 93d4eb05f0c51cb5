//! Diagnostic values and the errors that carry them.
//!
//! # Overview
//!
//! A [`Diagnostic`] is the value produced for every raised problem: the
//! rendered message plus an [`ErrorContext`] describing where it happened.
//! What happens to it depends on the session's mode:
//!
//! - in strict mode it is wrapped in an [`Abort`] and returned as `Err`, so
//!   `?` unwinds the parse up to the driver;
//! - in recovering mode it is handed back as `Ok` and, outside lookahead,
//!   also recorded by the session.
//!
//! The driver reports a failed parse as a [`ParseError`].

mod diagnostic;
mod parse_error;

pub use diagnostic::{Diagnostic, ErrorContext, ErrorData};
pub use parse_error::{Abort, ParseError, Result};
