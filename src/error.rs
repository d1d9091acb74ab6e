//! Error taxonomy for the query pipeline.
//!
//! Every failure the core can produce stems from a malformed query or a bad
//! set of replacement parameters, so all of them surface as [`UserError`].
//! [`SchemaError`] is the exception: it covers loading a schema file, which
//! is a deployment problem rather than a caller problem.

use thiserror::Error;

/// Position-carrying error raised while lexing or parsing a query.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} (at position {position})")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Character offset into the query text
    pub position: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        ParseError { kind, position }
    }
}

/// What went wrong while lexing or parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("Invalid final argument: did you forget to close your quotes?")]
    UnterminatedString,

    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(char),

    #[error("Invalid numeric literal '{0}'")]
    InvalidNumber(String),

    #[error("Query must be absolute (start with '/')")]
    RelativeQuery,

    #[error("Query root must be 's-ramp', found '{0}'")]
    InvalidRoot(String),

    #[error("Expected an artifact type after '//'")]
    EmptyRoot,

    #[error("Expected {expected}, found {found}")]
    Expected { expected: String, found: String },

    #[error("Unterminated predicate: expected ']'")]
    UnterminatedPredicate,

    #[error("Missing closing parenthesis")]
    MissingParen,

    #[error("Unterminated argument list: expected ')'")]
    UnterminatedArgumentList,

    #[error("Unexpected trailing input: {0}")]
    TrailingInput(String),

    #[error("Expression nested more than {0} levels deep")]
    TooDeep(usize),
}

/// Raised by a backend translator when the AST cannot be expressed in the
/// target query language.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranslationError {
    #[error("Invalid property namespace: '{0}'")]
    InvalidPropertyNamespace(String),

    #[error("Unresolved namespace prefix '{0}'")]
    UnresolvedPrefix(String),

    #[error("Function not supported: {0}")]
    UnsupportedFunction(String),

    #[error("Function '{0}' is not in the s-ramp namespace; did you mean fn:{0}?")]
    BadFunctionNamespace(String),

    #[error("Function '{function}' expects {expected} argument(s), got {actual}")]
    ArgumentCount {
        function: String,
        expected: String,
        actual: usize,
    },

    #[error("Function '{0}' expects a property reference (e.g. @name) argument")]
    ExpectedPropertyArgument(String),

    #[error("Function '{0}' expects a string literal argument")]
    ExpectedStringArgument(String),

    #[error("Function '{0}' expects an expression argument")]
    ExpectedExpressionArgument(String),

    #[error("Classifier arguments must be string literals")]
    InvalidClassifier,

    #[error("Failed to resolve classifier '{classifier}': {reason}")]
    Classification { classifier: String, reason: String },

    #[error("Operator '{op}' is not supported for {kind} property '{property}'")]
    UnsupportedOperator {
        op: String,
        kind: String,
        property: String,
    },

    #[error("Function '{0}' is only valid inside a relationship predicate")]
    OutsideRelationship(String),

    #[error("Function '{0}' cannot be used in a comparison")]
    NotComparable(String),

    #[error("Function '{0}' must be used in a comparison")]
    ComparisonRequired(String),

    #[error("Relationship predicates cannot be nested inside another relationship predicate")]
    NestedRelationship,

    #[error("Unsupported navigation step: {0}")]
    UnsupportedStep(String),

    #[error("No query has been translated yet")]
    NotTranslated,
}

/// Caller-caused failure. Never indicates a fault in the repository itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UserError {
    #[error("Not enough query replacement parameters provided ({placeholders} placeholders, {supplied} supplied)")]
    NotEnoughParams { placeholders: usize, supplied: usize },

    #[error("Too many query replacement parameters provided ({placeholders} placeholders, {supplied} supplied)")]
    TooManyParams { placeholders: usize, supplied: usize },

    #[error("Invalid replacement parameter: {0}")]
    InvalidParam(String),

    #[error("Query failed to parse: {0}")]
    Parse(#[from] ParseError),

    #[error("Query could not be translated: {0}")]
    Translation(#[from] TranslationError),
}

/// Failure to load a [`QuerySchema`](crate::schema::QuerySchema) from disk.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid schema: {0}")]
    Toml(#[from] toml::de::Error),
}
