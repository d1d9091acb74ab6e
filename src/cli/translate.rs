//! Format, parse, translate and re-serialize queries

use super::CliError;
use crate::params::{format_query, ReplacementParam};
use crate::parser::parse_query;
use crate::query::ArtifactQuery;
use crate::schema::QuerySchema;
use crate::serialize::to_xpath;
use crate::translate::{IdentityClassifications, OrderBy};

/// Options for the translate command
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// Query template, may contain `?` placeholders
    pub query: String,
    /// Values for the placeholders, in order
    pub params: Vec<ReplacementParam>,
    /// Reserved property to order by
    pub order_by: Option<String>,
    pub descending: bool,
}

/// Format, parse and translate to JCR-SQL2.
pub fn execute_translate(options: &TranslateOptions, schema: &QuerySchema) -> Result<String, CliError> {
    let mut query = ArtifactQuery::new(options.query.as_str()).params(options.params.iter().cloned());

    if let Some(property) = &options.order_by {
        query = query.order_by(OrderBy {
            property: property.clone(),
            ascending: !options.descending,
        });
    }

    Ok(query.to_backend_query(schema, &IdentityClassifications)?)
}

pub fn execute_format(template: &str, params: &[ReplacementParam]) -> Result<String, CliError> {
    Ok(format_query(template, params)?)
}

/// The parsed tree as JSON.
pub fn execute_ast(query: &str, schema: &QuerySchema, pretty: bool) -> Result<String, CliError> {
    let ast = parse_query(query, schema)?;
    let json = if pretty {
        serde_json::to_string_pretty(&ast)?
    } else {
        serde_json::to_string(&ast)?
    };
    Ok(json)
}

pub fn execute_normalize(query: &str, schema: &QuerySchema) -> Result<String, CliError> {
    Ok(to_xpath(&parse_query(query, schema)?))
}
