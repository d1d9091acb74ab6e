//! End-to-end query pipeline: template and parameters in, backend query out.

use std::time::Instant;

use tracing::debug;

use crate::ast::Query;
use crate::error::UserError;
use crate::params::{format_query, ReplacementParam};
use crate::parser::parse_query;
use crate::schema::QuerySchema;
use crate::serialize::to_xpath;
use crate::translate::{to_jcr_sql2, ClassificationResolver, OrderBy};

/// Storage engine that runs translated queries.
pub trait QueryBackend {
    type Hit;
    type Error;

    fn execute(&self, query: &str) -> Result<Vec<Self::Hit>, Self::Error>;
}

/// Failure of [`ArtifactQuery::execute`]: either the query was bad or the
/// backend failed to run it.
#[derive(Debug, thiserror::Error)]
pub enum ExecuteError<E> {
    #[error(transparent)]
    Query(#[from] UserError),

    #[error("Backend query failed: {0}")]
    Backend(E),
}

/// A query template with its ordered replacement parameters.
///
/// ```
/// use sramp_query::{ArtifactQuery, IdentityClassifications, QuerySchema};
///
/// let schema = QuerySchema::default();
/// let sql = ArtifactQuery::new("/s-ramp/xsd/XsdDocument[@name = ?]")
///     .param("foo")
///     .to_backend_query(&schema, &IdentityClassifications)
///     .unwrap();
/// assert!(sql.ends_with("AND (artifact.[sramp:name] = 'foo')"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactQuery {
    template: String,
    params: Vec<ReplacementParam>,
    order_by: Option<OrderBy>,
}

impl ArtifactQuery {
    pub fn new(template: impl Into<String>) -> Self {
        ArtifactQuery {
            template: template.into(),
            params: vec![],
            order_by: None,
        }
    }

    /// Append the value for the next `?`.
    pub fn param(mut self, param: impl Into<ReplacementParam>) -> Self {
        self.params.push(param.into());
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = ReplacementParam>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// The template with every placeholder replaced.
    pub fn formatted(&self) -> Result<String, UserError> {
        let text = format_query(&self.template, &self.params)?;
        debug!(query = %text, "formatted query");
        Ok(text)
    }

    pub fn parse(&self, schema: &QuerySchema) -> Result<Query, UserError> {
        let query = parse_query(&self.formatted()?, schema)?;
        debug!(query = %to_xpath(&query), "parsed query");
        Ok(query)
    }

    pub fn to_backend_query(
        &self,
        schema: &QuerySchema,
        classifications: &dyn ClassificationResolver,
    ) -> Result<String, UserError> {
        let query = self.parse(schema)?;
        Ok(to_jcr_sql2(
            &query,
            schema,
            classifications,
            self.order_by.clone(),
        )?)
    }

    pub fn execute<B: QueryBackend>(
        &self,
        backend: &B,
        schema: &QuerySchema,
        classifications: &dyn ClassificationResolver,
    ) -> Result<Vec<B::Hit>, ExecuteError<B::Error>> {
        let sql = self.to_backend_query(schema, classifications)?;

        let start = Instant::now();
        let hits = backend.execute(&sql).map_err(ExecuteError::Backend)?;
        debug!(
            hits = hits.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "backend query executed"
        );
        Ok(hits)
    }
}
