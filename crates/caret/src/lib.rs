//! # caret
//!
//! Diagnostics for recursive-descent parsers: a fixed catalog of message
//! templates, offset to line/column resolution that reuses the positions of
//! the tokens around the parser, and a session that either aborts on the
//! first problem or records problems and lets parsing continue.
//!
//! ## Usage
//!
//! ```
//! use caret::{ErrorCode, ParserOptions, parse_with};
//!
//! let source = "function f(a, a) {}";
//!
//! // Strict: the first raise aborts the parse.
//! let err = parse_with(source, &ParserOptions::default(), |session| {
//!     session.raise(14, ErrorCode::ParamDupe, &[])?;
//!     Ok(())
//! })
//! .unwrap_err();
//! assert_eq!(err.to_string(), "Argument name clash (1:14)");
//!
//! // Recovering: the raise is recorded and parsing continues.
//! let options = ParserOptions::default().with_error_recovery(true);
//! let parsed = parse_with(source, &options, |session| {
//!     session.raise(14, ErrorCode::ParamDupe, &[])?;
//!     Ok(())
//! })
//! .unwrap();
//! assert_eq!(parsed.errors().len(), 1);
//! ```

pub mod catalog;
pub mod error;
pub mod location;
pub mod options;
pub mod position;
pub mod session;
pub mod state;

pub use catalog::{Catalog, ErrorCode, Template, UnknownCode};
pub use error::{Abort, Diagnostic, ErrorContext, ErrorData, ParseError};
pub use location::resolve;
pub use options::{ErrorMode, ParserOptions};
pub use position::{Offset, Position};
pub use session::{ParseSession, Parsed, parse_with};
