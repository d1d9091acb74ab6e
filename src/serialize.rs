//! Renders a parsed query back into canonical query text.
//!
//! Whitespace is normalized, string literals are single-quoted with doubled
//! quotes, numbers use their canonical text and `//Type` is spelled out as
//! `/s-ramp/model/Type`. Parsing the output yields the same tree.

use std::convert::Infallible;

use crate::ast::{
    AndExpr, Argument, ArtifactSet, EqualityExpr, Expr, ForwardPropertyStep, FunctionCall,
    Literal, OrExpr, Predicate, Query, RelationshipPath, Selector, SubartifactSet,
};
use crate::visitor::{self, Visitor};

#[derive(Debug, Default)]
pub struct XPathSerializer {
    out: String,
}

impl XPathSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.out
    }

    /// `or` under `and` needs parentheses to keep its meaning.
    fn visit_and_operand(&mut self, expr: &Expr) -> Result<(), Infallible> {
        if let Expr::Or(_) = expr {
            self.out.push('(');
            self.visit_expr(expr)?;
            self.out.push(')');
            Ok(())
        } else {
            self.visit_expr(expr)
        }
    }
}

impl Visitor for XPathSerializer {
    type Error = Infallible;

    fn visit_query(&mut self, query: &Query) -> Result<(), Infallible> {
        self.visit_artifact_set(&query.artifact_set)?;
        for set in &query.subartifact_sets {
            self.out.push('/');
            self.visit_subartifact_set(set)?;
        }
        Ok(())
    }

    fn visit_artifact_set(&mut self, set: &ArtifactSet) -> Result<(), Infallible> {
        self.out.push_str("/s-ramp");
        match &set.selector {
            Selector::All => {}
            Selector::Model(model) => {
                self.out.push('/');
                self.out.push_str(model);
            }
            Selector::Type {
                model,
                artifact_type,
            } => {
                self.out.push('/');
                self.out.push_str(model);
                self.out.push('/');
                self.out.push_str(artifact_type);
            }
        }
        visitor::walk_artifact_set(self, set)
    }

    fn visit_subartifact_set(&mut self, set: &SubartifactSet) -> Result<(), Infallible> {
        visitor::walk_subartifact_set(self, set)
    }

    fn visit_predicate(&mut self, predicate: &Predicate) -> Result<(), Infallible> {
        self.out.push('[');
        self.visit_expr(&predicate.expr)?;
        self.out.push(']');
        Ok(())
    }

    fn visit_expr(&mut self, expr: &Expr) -> Result<(), Infallible> {
        if let Expr::Group(inner) = expr {
            self.out.push('(');
            self.visit_expr(inner)?;
            self.out.push(')');
            return Ok(());
        }
        visitor::walk_expr(self, expr)
    }

    fn visit_or_expr(&mut self, expr: &OrExpr) -> Result<(), Infallible> {
        self.visit_expr(&expr.left)?;
        self.out.push_str(" or ");
        self.visit_expr(&expr.right)
    }

    fn visit_and_expr(&mut self, expr: &AndExpr) -> Result<(), Infallible> {
        self.visit_and_operand(&expr.left)?;
        self.out.push_str(" and ");
        self.visit_and_operand(&expr.right)
    }

    fn visit_equality_expr(&mut self, expr: &EqualityExpr) -> Result<(), Infallible> {
        visitor::walk_operand(self, &expr.left)?;
        if let Some(comparison) = &expr.comparison {
            self.out.push(' ');
            self.out.push_str(comparison.op.symbol());
            self.out.push(' ');
            self.visit_literal(&comparison.right)?;
        }
        Ok(())
    }

    fn visit_relationship_path(&mut self, path: &RelationshipPath) -> Result<(), Infallible> {
        self.out.push_str(&path.relationship_type);
        Ok(())
    }

    fn visit_forward_property_step(&mut self, step: &ForwardPropertyStep) -> Result<(), Infallible> {
        self.out.push('@');
        self.out.push_str(&step.name.to_string());
        Ok(())
    }

    fn visit_function_call(&mut self, call: &FunctionCall) -> Result<(), Infallible> {
        self.out.push_str(&call.name.to_string());
        self.out.push('(');
        for (i, argument) in call.arguments.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.visit_argument(argument)?;
        }
        self.out.push(')');
        Ok(())
    }

    fn visit_argument(&mut self, argument: &Argument) -> Result<(), Infallible> {
        match argument {
            Argument::ContextItem => {
                self.out.push('.');
                Ok(())
            }
            _ => visitor::walk_argument(self, argument),
        }
    }

    fn visit_literal(&mut self, literal: &Literal) -> Result<(), Infallible> {
        self.out.push_str(&literal.to_string());
        Ok(())
    }
}

/// Canonical query text for `query`.
pub fn to_xpath(query: &Query) -> String {
    let mut serializer = XPathSerializer::new();
    match query.accept(&mut serializer) {
        Ok(()) => serializer.into_string(),
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_query;
    use crate::schema::QuerySchema;

    fn normalize(text: &str) -> String {
        to_xpath(&parse_query(text, &QuerySchema::default()).unwrap())
    }

    #[test]
    fn shorthand_is_spelled_out() {
        assert_eq!(normalize("//XsdDocument"), "/s-ramp/xsd/XsdDocument");
        assert_eq!(normalize("//MavenPom"), "/s-ramp/ext/MavenPom");
    }

    #[test]
    fn whitespace_and_quotes_are_normalized() {
        assert_eq!(
            normalize(r#"/s-ramp/xsd[ @name="it's"   and(@a=1 or @b)]"#),
            "/s-ramp/xsd[@name = 'it''s' and (@a = 1 or @b)]"
        );
    }

    #[test]
    fn functions_and_relationships() {
        assert_eq!(
            normalize("/s-ramp[s-ramp:classifiedByAnyOf(.,'a','b')]/relatedDocument[fn:matches(@name,'x.*')]"),
            "/s-ramp[s-ramp:classifiedByAnyOf(., 'a', 'b')]/relatedDocument[fn:matches(@name, 'x.*')]"
        );
    }
}
