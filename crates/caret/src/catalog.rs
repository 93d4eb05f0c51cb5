//! The diagnostic catalog.
//!
//! Every message a parser can raise is declared once in the table at the
//! bottom of this module. Each entry pairs a stable code with a template whose
//! `%N` placeholders are filled from the parameters passed at raise time
//! (`N` is a zero-based parameter index).
//!
//! The table is compiled into static data: it is complete before any parse
//! starts, never changes afterwards, and can be read from any thread.
//!
//! # Example
//!
//! ```
//! use caret::catalog::{Catalog, ErrorCode};
//!
//! let template = ErrorCode::VarRedeclaration.template();
//! assert_eq!(template.render(&[&"x"]), "Identifier 'x' has already been declared");
//!
//! let same = Catalog::lookup("VarRedeclaration").unwrap();
//! assert_eq!(same, template);
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Text substituted for a `%N` placeholder that has no matching parameter.
pub const MISSING_PARAM: &str = "<missing>";

/// Returned when a code name is not part of the catalog.
///
/// Codes are fixed identifiers known when the calling code is written, so
/// this signals a defect in the caller rather than a problem in parsed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown diagnostic code `{0}`")]
pub struct UnknownCode(String);

impl UnknownCode {
    /// The name that failed to resolve.
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// A message template from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Template {
    code: ErrorCode,
    format: &'static str,
}

impl Template {
    /// The code this template is registered under.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The raw template text, placeholders included.
    pub fn format(&self) -> &'static str {
        self.format
    }

    /// Substitute `params` into the template.
    ///
    /// `%N` is replaced by the string form of `params[N]`. A placeholder
    /// without a matching parameter becomes [`MISSING_PARAM`]. A `%` that is
    /// not followed by a digit is copied through unchanged.
    pub fn render(&self, params: &[&dyn fmt::Display]) -> String {
        let mut out = String::with_capacity(self.format.len());
        let mut rest = self.format;

        while let Some(idx) = rest.find('%') {
            out.push_str(&rest[..idx]);
            let after = &rest[idx + 1..];
            let digits = after.bytes().take_while(|b| b.is_ascii_digit()).count();

            if digits == 0 {
                out.push('%');
                rest = after;
                continue;
            }

            let param = after[..digits]
                .parse::<usize>()
                .ok()
                .and_then(|index| params.get(index));
            match param {
                Some(param) => out.push_str(&param.to_string()),
                None => out.push_str(MISSING_PARAM),
            }
            rest = &after[digits..];
        }

        out.push_str(rest);
        out
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.format)
    }
}

/// Read access to the process-wide catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    /// Look up a template by its code name, e.g. `"VarRedeclaration"`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCode`] if no entry has that name.
    pub fn lookup(code: &str) -> Result<Template, UnknownCode> {
        code.parse::<ErrorCode>().map(|code| code.template())
    }

    /// All templates in declaration order.
    pub fn templates() -> impl Iterator<Item = Template> {
        ErrorCode::ALL.iter().map(|code| code.template())
    }

    /// Number of entries in the catalog.
    pub fn len() -> usize {
        ErrorCode::ALL.len()
    }
}

macro_rules! catalog {
    ($($(#[$meta:meta])* $name:ident => $format:expr,)*) => {
        /// Codes of every diagnostic in the catalog.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ErrorCode {
            $($(#[$meta])* $name,)*
        }

        impl ErrorCode {
            /// Every code, in declaration order.
            pub const ALL: &'static [ErrorCode] = &[$(ErrorCode::$name,)*];

            /// The stable name of this code (e.g. `"VarRedeclaration"`).
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ErrorCode::$name => stringify!($name),)*
                }
            }

            /// The raw template text for this code.
            pub fn format(&self) -> &'static str {
                match self {
                    $(ErrorCode::$name => $format,)*
                }
            }
        }

        impl FromStr for ErrorCode {
            type Err = UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($name) => Ok(ErrorCode::$name),)*
                    _ => Err(UnknownCode(s.to_string())),
                }
            }
        }
    };
}

impl ErrorCode {
    /// The catalog template registered for this code.
    pub fn template(self) -> Template {
        Template {
            code: self,
            format: self.format(),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Names follow V8's message templates where an equivalent exists.
catalog! {
    ArgumentsDisallowedInInitializer => "'arguments' is not allowed in class field initializer",
    AsyncFunctionInSingleStatementContext =>
        "Async functions can only be declared at the top level or inside a block",
    AwaitBindingIdentifier => "Can not use 'await' as identifier inside an async function",
    AwaitExpressionFormalParameter => "await is not allowed in async function parameters",
    AwaitNotInAsyncFunction => "Can not use keyword 'await' outside an async function",
    BadGetterArity => "getter must not have any formal parameters",
    BadSetterArity => "setter must have exactly one formal parameter",
    BadSetterRestParameter => "setter function argument must not be a rest parameter",
    ConstructorClassField => "Classes may not have a field named 'constructor'",
    ConstructorClassPrivateField => "Classes may not have a private field named '#constructor'",
    ConstructorIsAccessor => "Class constructor may not be an accessor",
    ConstructorIsAsync => "Constructor can't be an async function",
    ConstructorIsGenerator => "Constructor can't be a generator",
    /// `%0` is the declaration kind, e.g. `Const declarations`.
    DeclarationMissingInitializer => "%0 require an initialization value",
    DecoratorBeforeExport =>
        "Decorators must be placed *before* the 'export' keyword. You can set the 'decoratorsBeforeExport' option to false to use the 'export @decorator class {}' syntax",
    DecoratorConstructor =>
        "Decorators can't be used with a constructor. Did you mean '@dec class { ... }'?",
    DecoratorExportClass =>
        "Using the export keyword between a decorator and a class is not allowed. Please use `export @dec class` instead.",
    DecoratorSemicolon => "Decorators must not be followed by a semicolon",
    DeletePrivateField => "Deleting a private field is not allowed",
    DestructureNamedImport =>
        "ES2015 named imports do not destructure. Use another statement for destructuring after the import.",
    DuplicateConstructor => "Duplicate constructor in the same class",
    DuplicateDefaultExport => "Only one default export allowed per module.",
    DuplicateExport => "`%0` has already been exported. Exported identifiers must be unique.",
    DuplicateProto => "Redefinition of __proto__ property",
    DuplicateRegExpFlags => "Duplicate regular expression flag",
    ElementAfterRest => "Rest element must be last element",
    EscapedCharNotAnIdentifier => "Invalid Unicode escape",
    ForInOfLoopInitializer => "%0 loop variable declaration may not have an initializer",
    GeneratorInSingleStatementContext =>
        "Generators can only be declared at the top level or inside a block",
    IllegalBreakContinue => "Unsyntactic %0",
    IllegalLanguageModeDirective =>
        "Illegal 'use strict' directive in function with non-simple parameter list",
    IllegalReturn => "'return' outside of function",
    ImportCallArgumentTrailingComma => "Trailing comma is disallowed inside import(...) arguments",
    ImportCallArity => "import() requires exactly %0",
    ImportCallNotNewExpression => "Cannot use new with import(...)",
    ImportCallSpreadArgument => "... is not allowed in import()",
    ImportMetaOutsideModule => "import.meta may appear only with 'sourceType: \"module\"'",
    ImportOutsideModule => "'import' and 'export' may appear only with 'sourceType: \"module\"'",
    InvalidCodePoint => "Code point out of bounds",
    InvalidDigit => "Expected number in radix %0",
    InvalidEscapeSequence => "Bad character escape sequence",
    InvalidEscapeSequenceTemplate => "Invalid escape sequence in template",
    InvalidEscapedReservedWord => "Escape sequence in keyword %0",
    InvalidIdentifier => "Invalid identifier %0",
    InvalidLhs => "Invalid left-hand side in %0",
    InvalidLhsBinding => "Binding invalid left-hand side in %0",
    InvalidNumber => "Invalid number",
    InvalidOrUnexpectedToken => "Unexpected character '%0'",
    InvalidParenthesizedAssignment => "Invalid parenthesized assignment pattern",
    InvalidPrivateFieldResolution => "Private name #%0 is not defined",
    InvalidPropertyBindingPattern => "Binding member expression",
    InvalidRestAssignmentPattern => "Invalid rest operator's argument",
    LabelRedeclaration => "Label '%0' is already declared",
    LetInLexicalBinding =>
        "'let' is not allowed to be used as a name in 'let' or 'const' declarations.",
    MalformedRegExpFlags => "Invalid regular expression flag",
    MissingClassName => "A class name is required",
    MissingEqInAssignment => "Only '=' operator can be used for specifying default value.",
    MissingUnicodeEscape => "Expecting Unicode escape sequence \\uXXXX",
    MixingCoalesceWithLogical =>
        "Nullish coalescing operator(??) requires parens when mixing with logical operators",
    ModuleAttributeDifferentFromType => "The only accepted module attribute is `type`",
    ModuleAttributeInvalidValue => "Only string literals are allowed as module attribute values",
    ModuleAttributesWithDuplicateKeys =>
        "Duplicate key \"%0\" is not allowed in module attributes",
    ModuleExportUndefined => "Export '%0' is not defined",
    MultipleDefaultsInSwitch => "Multiple default clauses",
    NewlineAfterThrow => "Illegal newline after throw",
    NoCatchOrFinally => "Missing catch or finally clause",
    NumberIdentifier => "Identifier directly after number",
    NumericSeparatorInEscapeSequence =>
        "Numeric separators are not allowed inside unicode escape sequences or hex escape sequences",
    ObsoleteAwaitStar =>
        "await* has been removed from the async functions proposal. Use Promise.all() instead.",
    OptionalChainingNoNew => "constructors in/after an Optional Chain are not allowed",
    OptionalChainingNoTemplate => "Tagged Template Literals are not allowed in optionalChain",
    ParamDupe => "Argument name clash",
    PatternHasAccessor => "Object pattern can't contain getter or setter",
    PatternHasMethod => "Object pattern can't contain methods",
    PipelineBodyNoArrow =>
        "Unexpected arrow \"=>\" after pipeline body; arrow function in pipeline body must be parenthesized",
    PipelineBodySequenceExpression =>
        "Pipeline body may not be a comma-separated sequence expression",
    PipelineHeadSequenceExpression =>
        "Pipeline head should not be a comma-separated sequence expression",
    PipelineTopicUnused => "Pipeline is in topic style but does not use topic reference",
    PrimaryTopicNotAllowed =>
        "Topic reference was used in a lexical context without topic binding",
    PrimaryTopicRequiresSmartPipeline =>
        "Primary Topic Reference found but pipelineOperator not passed 'smart' for 'proposal' option.",
    PrivateNameRedeclaration => "Duplicate private name #%0",
    RecordExpressionBarIncorrectEndSyntaxType =>
        "Record expressions ending with '|}' are only allowed when the 'syntaxType' option of the 'recordAndTuple' plugin is set to 'bar'",
    RecordExpressionBarIncorrectStartSyntaxType =>
        "Record expressions starting with '{|' are only allowed when the 'syntaxType' option of the 'recordAndTuple' plugin is set to 'bar'",
    RecordExpressionHashIncorrectStartSyntaxType =>
        "Record expressions starting with '#{' are only allowed when the 'syntaxType' option of the 'recordAndTuple' plugin is set to 'hash'",
    RestTrailingComma => "Unexpected trailing comma after rest element",
    SloppyFunction =>
        "In non-strict mode code, functions can only be declared at top level, inside a block, or as the body of an if statement",
    StaticPrototype => "Classes may not have static property named prototype",
    StrictDelete => "Deleting local variable in strict mode",
    StrictEvalArguments => "Assigning to '%0' in strict mode",
    StrictEvalArgumentsBinding => "Binding '%0' in strict mode",
    StrictFunction =>
        "In strict mode code, functions can only be declared at top level or inside a block",
    StrictOctalLiteral => "Legacy octal literals are not allowed in strict mode",
    StrictWith => "'with' in strict mode",
    SuperNotAllowed =>
        "super() is only valid inside a class constructor of a subclass. Maybe a typo in the method name ('constructor') or not extending another class?",
    SuperPrivateField => "Private fields can't be accessed on super",
    TrailingDecorator => "Decorators must be attached to a class element",
    TupleExpressionBarIncorrectEndSyntaxType =>
        "Tuple expressions ending with '|]' are only allowed when the 'syntaxType' option of the 'recordAndTuple' plugin is set to 'bar'",
    TupleExpressionBarIncorrectStartSyntaxType =>
        "Tuple expressions starting with '[|' are only allowed when the 'syntaxType' option of the 'recordAndTuple' plugin is set to 'bar'",
    TupleExpressionHashIncorrectStartSyntaxType =>
        "Tuple expressions starting with '#[' are only allowed when the 'syntaxType' option of the 'recordAndTuple' plugin is set to 'hash'",
    UnexpectedArgumentPlaceholder => "Unexpected argument placeholder",
    UnexpectedAwaitAfterPipelineBody =>
        "Unexpected \"await\" after pipeline body; await must have parentheses in minimal proposal",
    UnexpectedDigitAfterHash => "Unexpected digit after hash token",
    UnexpectedImportExport => "'import' and 'export' may only appear at the top level",
    UnexpectedKeyword => "Unexpected keyword '%0'",
    UnexpectedLeadingDecorator => "Leading decorators must be attached to a class declaration",
    UnexpectedLexicalDeclaration =>
        "Lexical declaration cannot appear in a single-statement context",
    UnexpectedNewTarget => "new.target can only be used in functions",
    UnexpectedNumericSeparator => "A numeric separator is only allowed between two digits",
    UnexpectedPrivateField =>
        "Private names can only be used as the name of a class element (i.e. class C { #p = 42; #m() {} } )\n or a property of member expression (i.e. this.#p).",
    UnexpectedReservedWord => "Unexpected reserved word '%0'",
    UnexpectedSuper => "super is only allowed in object methods and classes",
    /// The `%` here is literal text; it is not followed by a parameter index.
    UnexpectedToken => "Unexpected token '%'",
    UnexpectedTokenUnaryExponentiation =>
        "Illegal expression. Wrap left hand side or entire exponentiation in parentheses.",
    UnsupportedBind => "Binding should be performed on object property.",
    UnsupportedDecoratorExport => "A decorated export must export a class declaration",
    UnsupportedDefaultExport =>
        "Only expressions, functions or classes are allowed as the `default` export.",
    UnsupportedImport => "import can only be used in import() or import.meta",
    /// `%0` is the meta object (`new` or `import`), `%1` the expected property.
    UnsupportedMetaProperty => "The only valid meta property for %0 is %0.%1",
    UnsupportedParameterDecorator => "Decorators cannot be used to decorate parameters",
    UnsupportedPropertyDecorator =>
        "Decorators cannot be used to decorate object literal properties",
    UnsupportedSuper =>
        "super can only be used with function calls (i.e. super()) or in property accesses (i.e. super.prop or super[prop])",
    UnterminatedComment => "Unterminated comment",
    UnterminatedRegExp => "Unterminated regular expression",
    UnterminatedString => "Unterminated string constant",
    UnterminatedTemplate => "Unterminated template",
    VarRedeclaration => "Identifier '%0' has already been declared",
    YieldBindingIdentifier => "Can not use 'yield' as identifier inside a generator",
    YieldInParameter => "yield is not allowed in generator parameters",
    ZeroDigitNumericSeparator => "Numeric separator can not be used after leading 0",
}
