//! CLI support for sramp-query
//!
//! Provides programmatic access to the command-line functionality so other
//! tools can embed it.

mod check;
mod docs;
mod translate;

pub use check::{execute_check, CheckOptions, CheckResult};
pub use docs::{get_doc_category, get_docs_overview, DocCategory};
pub use translate::{execute_ast, execute_format, execute_normalize, execute_translate, TranslateOptions};

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::error::{ParseError, SchemaError, TranslationError, UserError};
use crate::schema::QuerySchema;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Query(#[from] UserError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No query argument and nothing piped on stdin
    #[error("No query provided. Pass it as an argument or pipe it to stdin.")]
    NoQuery,

    #[error("Unknown category: '{0}'\nRun 'sramp-query docs' to see available categories.")]
    UnknownCategory(String),
}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        CliError::Query(e.into())
    }
}

impl From<TranslationError> for CliError {
    fn from(e: TranslationError) -> Self {
        CliError::Query(e.into())
    }
}

/// Built-in schema, or the one in `path` when given.
pub fn load_schema(path: Option<&Path>) -> Result<QuerySchema, CliError> {
    match path {
        Some(path) => Ok(QuerySchema::from_file(path)?),
        None => Ok(QuerySchema::default()),
    }
}
