//! The diagnostic value and its location context.

use std::fmt;

use crate::{
    catalog::ErrorCode,
    position::{Offset, Position},
};

/// Optional data attached to a diagnostic at raise time.
///
/// # Example
///
/// ```
/// use caret::error::ErrorData;
///
/// let data = ErrorData::new()
///     .with_code("BABEL_PARSER_SOURCETYPE_MODULE_REQUIRED")
///     .with_missing_plugin(["importMeta"]);
/// assert_eq!(data.code(), Some("BABEL_PARSER_SOURCETYPE_MODULE_REQUIRED"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorData {
    code: Option<String>,
    missing_plugin: Option<Vec<String>>,
}

impl ErrorData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a machine-readable code for the diagnostic.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Name the plugins needed to parse the construct that was rejected.
    pub fn with_missing_plugin<I, S>(mut self, plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_plugin = Some(plugins.into_iter().map(Into::into).collect());
        self
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn missing_plugin(&self) -> Option<&[String]> {
        self.missing_plugin.as_deref()
    }
}

/// Where a diagnostic was raised, plus any [`ErrorData`] supplied with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    pos: Offset,
    loc: Position,
    code: Option<String>,
    missing_plugin: Option<Vec<String>>,
}

impl ErrorContext {
    pub fn new(pos: Offset, loc: Position, data: ErrorData) -> Self {
        let ErrorData {
            code,
            missing_plugin,
        } = data;
        Self {
            pos,
            loc,
            code,
            missing_plugin,
        }
    }

    /// The byte offset the diagnostic was raised at.
    pub fn pos(&self) -> Offset {
        self.pos
    }

    /// The resolved position of [`pos`](Self::pos).
    pub fn loc(&self) -> Position {
        self.loc
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn missing_plugin(&self) -> Option<&[String]> {
        self.missing_plugin.as_deref()
    }
}

/// A raised parse problem.
///
/// The message is the rendered catalog template followed by the location,
/// e.g. `Identifier 'x' has already been declared (2:3)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    message: String,
    template: ErrorCode,
    context: ErrorContext,
}

impl Diagnostic {
    /// Build a diagnostic from an already rendered template message.
    ///
    /// The location suffix is appended here.
    pub fn new(rendered: impl Into<String>, template: ErrorCode, context: ErrorContext) -> Self {
        let message = format!("{} ({})", rendered.into(), context.loc());
        Self {
            message,
            template,
            context,
        }
    }

    /// The full message, location suffix included.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The catalog entry this diagnostic was rendered from.
    pub fn template(&self) -> ErrorCode {
        self.template
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    pub fn pos(&self) -> Offset {
        self.context.pos()
    }

    pub fn loc(&self) -> Position {
        self.context.loc()
    }

    /// The code supplied through [`ErrorData::with_code`], if any.
    pub fn code(&self) -> Option<&str> {
        self.context.code()
    }

    pub fn missing_plugin(&self) -> Option<&[String]> {
        self.context.missing_plugin()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
