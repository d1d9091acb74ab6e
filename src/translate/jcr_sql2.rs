//! Translation of a parsed query into JCR-SQL2.
//!
//! ```text
//! /s-ramp/xsd/XsdDocument[@name = 'foo']
//! ```
//!
//! becomes
//!
//! ```text
//! SELECT artifact.* FROM [sramp:baseArtifactType] AS artifact
//!   WHERE artifact.[sramp:artifactType] = 'XsdDocument' AND (artifact.[sramp:name] = 'foo')
//! ```
//!
//! (on one line). Relationships inside a predicate join the relationship
//! node as `relationshipN`; a predicate on the relationship target becomes a
//! sub-select aliased `target`. A relationship step after the artifact set
//! (`/s-ramp/wsdl/WsdlDocument/importedXsds`) joins the target artifacts as
//! `artifactN` and selects those instead.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::ast::{
    AndExpr, Argument, ArtifactSet, ComparisonOp, EqualityExpr, Expr, ForwardPropertyStep,
    FunctionCall, Literal, Operand, OrExpr, Query, QName, Selector, Step, SubartifactSet,
};
use crate::error::TranslationError;
use crate::schema::{PropertyColumn, PropertyKind, QuerySchema, EXTENDED_MODEL, SRAMP_NS, XPATH_FUNCTIONS_NS};
use crate::translate::{ClassificationResolver, OrderBy};
use crate::value::quote_literal;
use crate::visitor::{self, Visitor};

static DATE_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap());

const BASE_ARTIFACT_TYPE: &str = "[sramp:baseArtifactType]";
const RELATIONSHIP_TYPE: &str = "[sramp:relationship]";
const ROOT_ALIAS: &str = "artifact";
const TARGET_ALIAS: &str = "target";

const CLASSIFIED_BY_ANY_OF: &str = "classifiedByAnyOf";
const CLASSIFIED_BY_ALL_OF: &str = "classifiedByAllOf";
const EXACTLY_CLASSIFIED_BY_ANY_OF: &str = "exactlyClassifiedByAnyOf";
const EXACTLY_CLASSIFIED_BY_ALL_OF: &str = "exactlyClassifiedByAllOf";
const GET_RELATIONSHIP_ATTRIBUTE: &str = "getRelationshipAttribute";
const GET_TARGET_ATTRIBUTE: &str = "getTargetAttribute";
const MATCHES: &str = "matches";
const NOT: &str = "not";

pub struct JcrSql2Translator<'a> {
    schema: &'a QuerySchema,
    classifications: &'a dyn ClassificationResolver,
    order_by: Option<OrderBy>,

    select_alias: String,
    from: String,
    filter: String,

    /// Alias property columns are read from
    artifact_context: String,
    /// Enclosing relationship while inside a relationship predicate
    relationship_context: Option<String>,
    /// Column of the property on the left of the comparison being emitted
    comparison_column: Option<PropertyColumn>,

    relationship_count: usize,
    artifact_count: usize,
    translated: bool,
}

impl<'a> JcrSql2Translator<'a> {
    pub fn new(schema: &'a QuerySchema, classifications: &'a dyn ClassificationResolver) -> Self {
        JcrSql2Translator {
            schema,
            classifications,
            order_by: None,
            select_alias: ROOT_ALIAS.to_string(),
            from: String::new(),
            filter: String::new(),
            artifact_context: ROOT_ALIAS.to_string(),
            relationship_context: None,
            comparison_column: None,
            relationship_count: 0,
            artifact_count: 1,
            translated: false,
        }
    }

    pub fn with_order_by(mut self, order_by: Option<OrderBy>) -> Self {
        self.order_by = order_by;
        self
    }

    /// The JCR-SQL2 query. Only available once a [`Query`] has been visited.
    pub fn result_query(&self) -> Result<String, TranslationError> {
        if !self.translated {
            return Err(TranslationError::NotTranslated);
        }

        let mut query = format!(
            "SELECT {}.* FROM {} WHERE {}",
            self.select_alias, self.from, self.filter
        );

        if let Some(order_by) = &self.order_by {
            match self.schema.core_column(&order_by.property) {
                Some(column) => {
                    query.push_str(&format!(
                        " ORDER BY {}.[{}] {}",
                        self.select_alias,
                        column,
                        if order_by.ascending { "ASC" } else { "DESC" }
                    ));
                }
                None => warn!(property = %order_by.property, "ignoring order by on unmapped property"),
            }
        }

        Ok(query)
    }

    fn push(&mut self, text: &str) {
        self.filter.push_str(text);
    }

    fn push_column(&mut self, alias: &str, column: &str) {
        self.filter.push_str(alias);
        self.filter.push_str(".[");
        self.filter.push_str(column);
        self.filter.push(']');
    }

    fn new_relationship_alias(&mut self) -> String {
        self.relationship_count += 1;
        format!("relationship{}", self.relationship_count)
    }

    fn new_artifact_alias(&mut self) -> String {
        self.artifact_count += 1;
        format!("artifact{}", self.artifact_count)
    }

    fn join_relationship(&mut self, alias: &str) {
        self.from.push_str(&format!(
            " JOIN {} AS {} ON ISCHILDNODE({}, {})",
            RELATIONSHIP_TYPE, alias, alias, self.artifact_context
        ));
    }

    fn push_relationship_type(&mut self, alias: &str, relationship_type: &str) {
        self.push_column(alias, "sramp:relationshipType");
        self.push(" = ");
        self.push(&quote_literal(relationship_type));
    }

    /// Namespace check and column lookup for `@name`.
    fn property_column(&self, name: &QName) -> Result<PropertyColumn, TranslationError> {
        match (&name.namespace, &name.prefix) {
            (Some(ns), _) if ns == SRAMP_NS => Ok(self.schema.property_column(&name.local_part)),
            (Some(ns), _) => Err(TranslationError::InvalidPropertyNamespace(ns.clone())),
            (None, Some(prefix)) => Err(TranslationError::UnresolvedPrefix(prefix.clone())),
            (None, None) => Ok(self.schema.property_column(&name.local_part)),
        }
    }

    fn function_namespace<'q>(&self, name: &'q QName) -> Result<&'q str, TranslationError> {
        match (&name.namespace, &name.prefix) {
            (Some(ns), _) => Ok(ns),
            (None, Some(prefix)) => Err(TranslationError::UnresolvedPrefix(prefix.clone())),
            (None, None) => Err(TranslationError::UnresolvedPrefix(
                self.schema.default_function_prefix.clone(),
            )),
        }
    }

    fn check_operator(
        &self,
        op: ComparisonOp,
        column: &PropertyColumn,
        property: &str,
    ) -> Result<(), TranslationError> {
        if column.kind == PropertyKind::Boolean && !op.is_equality() {
            return Err(TranslationError::UnsupportedOperator {
                op: op.symbol().to_string(),
                kind: column.kind.as_str().to_string(),
                property: property.to_string(),
            });
        }
        Ok(())
    }

    fn push_comparison(
        &mut self,
        alias: &str,
        column: PropertyColumn,
        op: ComparisonOp,
        right: &Literal,
    ) -> Result<(), TranslationError> {
        self.push_column(alias, &column.column);
        self.push(" ");
        self.push(sql_operator(op));
        self.push(" ");
        self.comparison_column = Some(column);
        let result = self.visit_literal(right);
        self.comparison_column = None;
        result
    }

    fn visit_top_level_step(&mut self, set: &SubartifactSet) -> Result<(), TranslationError> {
        let path = match &set.step {
            Step::Relationship(path) => path,
            Step::Property(step) => {
                return Err(TranslationError::UnsupportedStep(format!("@{}", step.name)));
            }
            Step::Function(call) => {
                return Err(TranslationError::UnsupportedStep(format!("{}()", call.name)));
            }
        };

        let relationship = self.new_relationship_alias();
        let artifact = self.new_artifact_alias();

        self.join_relationship(&relationship);
        self.from.push_str(&format!(
            " JOIN {} AS {} ON {}.[sramp:relationshipTarget] = {}.[jcr:uuid]",
            BASE_ARTIFACT_TYPE, artifact, relationship, artifact
        ));

        self.push(" AND ");
        self.push_relationship_type(&relationship, &path.relationship_type);

        self.artifact_context = artifact.clone();
        if let Some(predicate) = &set.predicate {
            self.push(" AND (");
            self.visit_predicate(predicate)?;
            self.push(")");
        }
        self.select_alias = artifact;
        Ok(())
    }

    /// `getRelationshipAttribute(., 'key') op literal` and the target variant.
    fn visit_other_attribute(
        &mut self,
        call: &FunctionCall,
        op: ComparisonOp,
        right: &Literal,
    ) -> Result<(), TranslationError> {
        let function = call.name.local_part.as_str();
        let relationship = self
            .relationship_context
            .clone()
            .ok_or_else(|| TranslationError::OutsideRelationship(call.name.to_string()))?;

        if call.arguments.len() != 2 {
            return Err(TranslationError::ArgumentCount {
                function: call.name.to_string(),
                expected: "2".to_string(),
                actual: call.arguments.len(),
            });
        }
        let key = string_argument(call, &call.arguments[1])?;

        let alias = if function == GET_RELATIONSHIP_ATTRIBUTE {
            relationship
        } else {
            self.artifact_context.clone()
        };
        let column = PropertyColumn {
            column: self.schema.other_attribute_column(key),
            kind: PropertyKind::Text,
        };
        self.push_comparison(&alias, column, op, right)
    }

    fn visit_classification(
        &mut self,
        call: &FunctionCall,
        column: &str,
        operator: &str,
    ) -> Result<(), TranslationError> {
        if call.arguments.len() < 2 {
            return Err(TranslationError::ArgumentCount {
                function: call.name.to_string(),
                expected: "at least 2".to_string(),
                actual: call.arguments.len(),
            });
        }

        let mut classifiers: Vec<String> = Vec::new();
        for argument in &call.arguments[1..] {
            let Argument::Literal(Literal::String(classifier)) = argument else {
                return Err(TranslationError::InvalidClassifier);
            };
            let resolved = self.classifications.resolve(classifier)?;
            if !classifiers.contains(&resolved) {
                classifiers.push(resolved);
            }
        }

        let grouped = classifiers.len() > 1;
        if grouped {
            self.push("(");
        }
        let alias = self.artifact_context.clone();
        for (i, classifier) in classifiers.iter().enumerate() {
            if i > 0 {
                self.push(" ");
                self.push(operator);
                self.push(" ");
            }
            self.push_column(&alias, column);
            self.push(" = ");
            self.push(&quote_literal(classifier));
        }
        if grouped {
            self.push(")");
        }
        Ok(())
    }

    fn visit_matches(&mut self, call: &FunctionCall) -> Result<(), TranslationError> {
        if call.arguments.len() != 2 {
            return Err(TranslationError::ArgumentCount {
                function: call.name.to_string(),
                expected: "2".to_string(),
                actual: call.arguments.len(),
            });
        }
        let pattern = string_argument(call, &call.arguments[1])?;
        let alias = self.artifact_context.clone();

        if call.arguments[0] == Argument::ContextItem {
            self.push(&format!("CONTAINS({}.*, {})", alias, quote_literal(pattern)));
            return Ok(());
        }

        let step = property_argument(call, &call.arguments[0])?;
        let column = self.property_column(&step.name)?;
        self.push_column(&alias, &column.column);
        self.push(" LIKE ");
        self.push(&quote_literal(&pattern.replace(".*", "%")));
        Ok(())
    }

    fn visit_not(&mut self, call: &FunctionCall) -> Result<(), TranslationError> {
        if call.arguments.len() != 1 {
            return Err(TranslationError::ArgumentCount {
                function: call.name.to_string(),
                expected: "1".to_string(),
                actual: call.arguments.len(),
            });
        }
        let Argument::Expr(expr) = &call.arguments[0] else {
            return Err(TranslationError::ExpectedExpressionArgument(call.name.to_string()));
        };
        self.push("NOT (");
        self.visit_expr(expr)?;
        self.push(")");
        Ok(())
    }

    fn is_other_attribute_function(call: &FunctionCall) -> bool {
        call.name.is(SRAMP_NS, GET_RELATIONSHIP_ATTRIBUTE)
            || call.name.is(SRAMP_NS, GET_TARGET_ATTRIBUTE)
    }
}

fn sql_operator(op: ComparisonOp) -> &'static str {
    match op {
        ComparisonOp::NotEqual => "<>",
        other => other.symbol(),
    }
}

fn string_argument<'q>(call: &FunctionCall, argument: &'q Argument) -> Result<&'q str, TranslationError> {
    match argument {
        Argument::Literal(Literal::String(s)) => Ok(s),
        _ => Err(TranslationError::ExpectedStringArgument(call.name.to_string())),
    }
}

/// A bare `@name` argument.
fn property_argument<'q>(
    call: &FunctionCall,
    argument: &'q Argument,
) -> Result<&'q ForwardPropertyStep, TranslationError> {
    match argument {
        Argument::Expr(Expr::Equality(EqualityExpr {
            left: Operand::Property(step),
            comparison: None,
        })) => Ok(step),
        _ => Err(TranslationError::ExpectedPropertyArgument(call.name.to_string())),
    }
}

impl Visitor for JcrSql2Translator<'_> {
    type Error = TranslationError;

    fn visit_query(&mut self, query: &Query) -> Result<(), TranslationError> {
        self.select_alias = ROOT_ALIAS.to_string();
        self.artifact_context = ROOT_ALIAS.to_string();
        self.relationship_context = None;
        self.from = format!("{} AS {}", BASE_ARTIFACT_TYPE, ROOT_ALIAS);
        self.filter.clear();
        self.relationship_count = 0;
        self.artifact_count = 1;
        self.translated = false;

        self.visit_artifact_set(&query.artifact_set)?;
        for set in &query.subartifact_sets {
            self.visit_top_level_step(set)?;
        }

        self.translated = true;
        Ok(())
    }

    fn visit_artifact_set(&mut self, set: &ArtifactSet) -> Result<(), TranslationError> {
        let alias = self.artifact_context.clone();
        match &set.selector {
            Selector::All => {
                self.push_column(&alias, "sramp:artifactModel");
                self.push(" LIKE '%'");
            }
            Selector::Model(model) => {
                self.push_column(&alias, "sramp:artifactModel");
                self.push(" = ");
                self.push(&quote_literal(model));
            }
            Selector::Type {
                model,
                artifact_type,
            } => {
                if model == EXTENDED_MODEL || !self.schema.is_known_type(artifact_type) {
                    self.push_column(&alias, "sramp:artifactType");
                    self.push(" IN ('ExtendedArtifactType', 'ExtendedDocument') AND ");
                    self.push_column(&alias, "sramp:extendedType");
                } else {
                    self.push_column(&alias, "sramp:artifactType");
                }
                self.push(" = ");
                self.push(&quote_literal(artifact_type));
            }
        }

        if let Some(predicate) = &set.predicate {
            self.push(" AND (");
            self.visit_predicate(predicate)?;
            self.push(")");
        }
        Ok(())
    }

    /// Relationship test inside a predicate.
    fn visit_subartifact_set(&mut self, set: &SubartifactSet) -> Result<(), TranslationError> {
        if self.relationship_context.is_some() {
            return Err(TranslationError::NestedRelationship);
        }
        let path = match &set.step {
            Step::Relationship(path) => path,
            Step::Property(step) => {
                return Err(TranslationError::UnsupportedStep(format!("@{}", step.name)));
            }
            Step::Function(call) => {
                return Err(TranslationError::UnsupportedStep(format!("{}()", call.name)));
            }
        };

        let relationship = self.new_relationship_alias();
        self.join_relationship(&relationship);

        let Some(predicate) = &set.predicate else {
            self.push_relationship_type(&relationship, &path.relationship_type);
            return Ok(());
        };

        self.push("(");
        self.push_relationship_type(&relationship, &path.relationship_type);
        self.push(&format!(
            " AND {}.[sramp:relationshipTarget] IN (SELECT [jcr:uuid] FROM {} AS {} WHERE ",
            relationship, BASE_ARTIFACT_TYPE, TARGET_ALIAS
        ));

        let outer_context = std::mem::replace(&mut self.artifact_context, TARGET_ALIAS.to_string());
        self.relationship_context = Some(relationship);
        let result = self.visit_predicate(predicate);
        self.relationship_context = None;
        self.artifact_context = outer_context;
        result?;

        self.push("))");
        Ok(())
    }

    fn visit_expr(&mut self, expr: &Expr) -> Result<(), TranslationError> {
        if let Expr::Group(inner) = expr {
            self.push("(");
            self.visit_expr(inner)?;
            self.push(")");
            return Ok(());
        }
        visitor::walk_expr(self, expr)
    }

    fn visit_or_expr(&mut self, expr: &OrExpr) -> Result<(), TranslationError> {
        self.visit_expr(&expr.left)?;
        self.push(" OR ");
        self.visit_expr(&expr.right)
    }

    fn visit_and_expr(&mut self, expr: &AndExpr) -> Result<(), TranslationError> {
        for (i, side) in [&expr.left, &expr.right].into_iter().enumerate() {
            if i > 0 {
                self.push(" AND ");
            }
            if let Expr::Or(_) = side.as_ref() {
                self.push("(");
                self.visit_expr(side)?;
                self.push(")");
            } else {
                self.visit_expr(side)?;
            }
        }
        Ok(())
    }

    fn visit_equality_expr(&mut self, expr: &EqualityExpr) -> Result<(), TranslationError> {
        match (&expr.left, &expr.comparison) {
            (Operand::Property(step), None) => {
                self.visit_forward_property_step(step)?;
                self.push(" LIKE '%'");
                Ok(())
            }
            (Operand::Property(step), Some(comparison)) => {
                let column = self.property_column(&step.name)?;
                self.check_operator(comparison.op, &column, &step.name.to_string())?;
                let alias = self.artifact_context.clone();
                self.push_comparison(&alias, column, comparison.op, &comparison.right)
            }
            (Operand::Function(call), Some(comparison)) => {
                if Self::is_other_attribute_function(call) {
                    self.visit_other_attribute(call, comparison.op, &comparison.right)
                } else {
                    Err(TranslationError::NotComparable(call.name.to_string()))
                }
            }
            (Operand::Function(call), None) => self.visit_function_call(call),
        }
    }

    fn visit_forward_property_step(
        &mut self,
        step: &ForwardPropertyStep,
    ) -> Result<(), TranslationError> {
        let column = self.property_column(&step.name)?;
        let alias = self.artifact_context.clone();
        self.push_column(&alias, &column.column);
        Ok(())
    }

    fn visit_function_call(&mut self, call: &FunctionCall) -> Result<(), TranslationError> {
        let namespace = self.function_namespace(&call.name)?;
        let local = call.name.local_part.as_str();

        if namespace == SRAMP_NS {
            match local {
                CLASSIFIED_BY_ALL_OF => self.visit_classification(call, "sramp:normalizedClassifiedBy", "AND"),
                CLASSIFIED_BY_ANY_OF => self.visit_classification(call, "sramp:normalizedClassifiedBy", "OR"),
                EXACTLY_CLASSIFIED_BY_ALL_OF => self.visit_classification(call, "sramp:classifiedBy", "AND"),
                EXACTLY_CLASSIFIED_BY_ANY_OF => self.visit_classification(call, "sramp:classifiedBy", "OR"),
                GET_RELATIONSHIP_ATTRIBUTE | GET_TARGET_ATTRIBUTE => {
                    Err(TranslationError::ComparisonRequired(call.name.to_string()))
                }
                MATCHES | NOT => Err(TranslationError::BadFunctionNamespace(local.to_string())),
                _ => Err(TranslationError::UnsupportedFunction(call.name.to_string())),
            }
        } else if namespace == XPATH_FUNCTIONS_NS {
            match local {
                MATCHES => self.visit_matches(call),
                NOT => self.visit_not(call),
                _ => Err(TranslationError::UnsupportedFunction(call.name.to_string())),
            }
        } else {
            Err(TranslationError::UnsupportedFunction(call.name.to_string()))
        }
    }

    fn visit_literal(&mut self, literal: &Literal) -> Result<(), TranslationError> {
        match literal {
            Literal::String(s) => {
                let is_date = self
                    .comparison_column
                    .as_ref()
                    .is_some_and(|c| c.kind == PropertyKind::Date)
                    && DATE_LITERAL.is_match(s);
                if is_date {
                    self.push(&format!("CAST({} AS DATE)", quote_literal(s)));
                } else {
                    self.push(&quote_literal(s));
                }
            }
            Literal::Number(n) => self.push(&n.to_string()),
        }
        Ok(())
    }
}

/// Translate `query` with a fresh translator.
pub fn to_jcr_sql2(
    query: &Query,
    schema: &QuerySchema,
    classifications: &dyn ClassificationResolver,
    order_by: Option<OrderBy>,
) -> Result<String, TranslationError> {
    let mut translator = JcrSql2Translator::new(schema, classifications).with_order_by(order_by);
    query.accept(&mut translator)?;
    let sql = translator.result_query()?;
    debug!(query = %sql, "translated to JCR-SQL2");
    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_query;
    use crate::translate::IdentityClassifications;

    fn translate(text: &str) -> Result<String, TranslationError> {
        let schema = QuerySchema::default();
        let query = parse_query(text, &schema).unwrap();
        to_jcr_sql2(&query, &schema, &IdentityClassifications, None)
    }

    #[test]
    fn result_before_visit_is_an_error() {
        let schema = QuerySchema::default();
        let translator = JcrSql2Translator::new(&schema, &IdentityClassifications);
        assert_eq!(translator.result_query(), Err(TranslationError::NotTranslated));
    }

    #[test]
    fn not_equal_becomes_sql_inequality() {
        assert_eq!(
            translate("/s-ramp/xsd[@name != 'a']").unwrap(),
            "SELECT artifact.* FROM [sramp:baseArtifactType] AS artifact WHERE artifact.[sramp:artifactModel] = 'xsd' AND (artifact.[sramp:name] <> 'a')"
        );
    }

    #[test]
    fn or_inside_and_is_parenthesized() {
        let sql = translate("/s-ramp[@a and (@b or @c)]").unwrap();
        assert!(sql.ends_with(
            "AND (artifact.[sramp-properties:a] LIKE '%' AND (artifact.[sramp-properties:b] LIKE '%' OR artifact.[sramp-properties:c] LIKE '%'))"
        ));
    }

    #[test]
    fn boolean_columns_reject_ordering_operators() {
        assert!(matches!(
            translate("/s-ramp[@derived > 'true']"),
            Err(TranslationError::UnsupportedOperator { .. })
        ));
    }

    #[test]
    fn classifiers_are_deduplicated_in_order() {
        let sql = translate("/s-ramp[s-ramp:classifiedByAllOf(., 'b', 'a', 'b')]").unwrap();
        assert!(sql.ends_with(
            "AND ((artifact.[sramp:normalizedClassifiedBy] = 'b' AND artifact.[sramp:normalizedClassifiedBy] = 'a'))"
        ));
    }
}
