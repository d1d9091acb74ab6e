//! Validate queries without running them

use super::CliError;
use crate::parser::parse_query;
use crate::schema::QuerySchema;
use crate::translate::{to_jcr_sql2, IdentityClassifications};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The query to validate
    pub query: String,
    /// Only validate syntax, don't translate
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug, PartialEq)]
pub enum CheckResult {
    /// The query parses
    SyntaxValid,
    /// The query parses and translates
    Valid,
}

/// Parse the query and, unless `syntax_only` is set, translate it as well so
/// unknown functions and bad namespaces are reported too.
pub fn execute_check(options: &CheckOptions, schema: &QuerySchema) -> Result<CheckResult, CliError> {
    let query = parse_query(&options.query, schema)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    to_jcr_sql2(&query, schema, &IdentityClassifications, None)?;
    Ok(CheckResult::Valid)
}
