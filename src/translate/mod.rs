//! Backend translators.
//!
//! A translator is a stateful [`Visitor`](crate::visitor::Visitor): it walks
//! a parsed [`Query`](crate::ast::Query) once and accumulates the backend
//! query as it goes. The tree itself is never touched, so the same query can
//! be handed to any number of translators.

pub mod jcr_sql2;

pub use jcr_sql2::{to_jcr_sql2, JcrSql2Translator};

use crate::error::TranslationError;

/// Resolves classifier arguments of the `classifiedBy*` functions to the
/// values stored on artifacts (typically ontology URIs).
pub trait ClassificationResolver {
    fn resolve(&self, classifier: &str) -> Result<String, TranslationError>;
}

/// Stores classifiers exactly as written in the query.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityClassifications;

impl ClassificationResolver for IdentityClassifications {
    fn resolve(&self, classifier: &str) -> Result<String, TranslationError> {
        Ok(classifier.to_string())
    }
}

/// Result ordering on a reserved property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub property: String,
    pub ascending: bool,
}

impl OrderBy {
    pub fn ascending(property: impl Into<String>) -> Self {
        OrderBy {
            property: property.into(),
            ascending: true,
        }
    }

    pub fn descending(property: impl Into<String>) -> Self {
        OrderBy {
            property: property.into(),
            ascending: false,
        }
    }
}
