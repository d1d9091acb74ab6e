//! Read-only traversal of the query AST.
//!
//! A traversal implements [`Visitor`] and overrides the `visit_*` methods for
//! the nodes it cares about. Every method defaults to the matching `walk_*`
//! function, which visits the node's children in grammar order (for an
//! `and` expression: left, then right). An override that still wants the
//! children visited calls the `walk_*` function itself.
//!
//! ```
//! use sramp_query::ast::ForwardPropertyStep;
//! use sramp_query::visitor::Visitor;
//! use sramp_query::{parse_query, QuerySchema};
//!
//! #[derive(Default)]
//! struct PropertyNames(Vec<String>);
//!
//! impl Visitor for PropertyNames {
//!     type Error = std::convert::Infallible;
//!
//!     fn visit_forward_property_step(&mut self, step: &ForwardPropertyStep) -> Result<(), Self::Error> {
//!         self.0.push(step.name.local_part.clone());
//!         Ok(())
//!     }
//! }
//!
//! let query = parse_query("/s-ramp[@name = 'a' or @version = '1']", &QuerySchema::default()).unwrap();
//! let mut names = PropertyNames::default();
//! query.accept(&mut names).unwrap();
//! assert_eq!(names.0, ["name", "version"]);
//! ```

use crate::ast::{
    AndExpr, Argument, ArtifactSet, EqualityExpr, Expr, ForwardPropertyStep, FunctionCall,
    Literal, Operand, OrExpr, Predicate, Query, RelationshipPath, Step, SubartifactSet,
};

pub trait Visitor {
    type Error;

    fn visit_query(&mut self, query: &Query) -> Result<(), Self::Error> {
        walk_query(self, query)
    }

    fn visit_artifact_set(&mut self, set: &ArtifactSet) -> Result<(), Self::Error> {
        walk_artifact_set(self, set)
    }

    fn visit_subartifact_set(&mut self, set: &SubartifactSet) -> Result<(), Self::Error> {
        walk_subartifact_set(self, set)
    }

    fn visit_predicate(&mut self, predicate: &Predicate) -> Result<(), Self::Error> {
        walk_predicate(self, predicate)
    }

    fn visit_expr(&mut self, expr: &Expr) -> Result<(), Self::Error> {
        walk_expr(self, expr)
    }

    fn visit_or_expr(&mut self, expr: &OrExpr) -> Result<(), Self::Error> {
        walk_or_expr(self, expr)
    }

    fn visit_and_expr(&mut self, expr: &AndExpr) -> Result<(), Self::Error> {
        walk_and_expr(self, expr)
    }

    fn visit_equality_expr(&mut self, expr: &EqualityExpr) -> Result<(), Self::Error> {
        walk_equality_expr(self, expr)
    }

    fn visit_relationship_path(&mut self, _path: &RelationshipPath) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_forward_property_step(
        &mut self,
        _step: &ForwardPropertyStep,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_function_call(&mut self, call: &FunctionCall) -> Result<(), Self::Error> {
        walk_function_call(self, call)
    }

    fn visit_argument(&mut self, argument: &Argument) -> Result<(), Self::Error> {
        walk_argument(self, argument)
    }

    fn visit_literal(&mut self, _literal: &Literal) -> Result<(), Self::Error> {
        Ok(())
    }
}

pub fn walk_query<V: Visitor + ?Sized>(visitor: &mut V, query: &Query) -> Result<(), V::Error> {
    visitor.visit_artifact_set(&query.artifact_set)?;
    for set in &query.subartifact_sets {
        visitor.visit_subartifact_set(set)?;
    }
    Ok(())
}

pub fn walk_artifact_set<V: Visitor + ?Sized>(
    visitor: &mut V,
    set: &ArtifactSet,
) -> Result<(), V::Error> {
    if let Some(predicate) = &set.predicate {
        visitor.visit_predicate(predicate)?;
    }
    Ok(())
}

pub fn walk_subartifact_set<V: Visitor + ?Sized>(
    visitor: &mut V,
    set: &SubartifactSet,
) -> Result<(), V::Error> {
    walk_step(visitor, &set.step)?;
    if let Some(predicate) = &set.predicate {
        visitor.visit_predicate(predicate)?;
    }
    Ok(())
}

pub fn walk_step<V: Visitor + ?Sized>(visitor: &mut V, step: &Step) -> Result<(), V::Error> {
    match step {
        Step::Relationship(path) => visitor.visit_relationship_path(path),
        Step::Property(property) => visitor.visit_forward_property_step(property),
        Step::Function(call) => visitor.visit_function_call(call),
    }
}

pub fn walk_predicate<V: Visitor + ?Sized>(
    visitor: &mut V,
    predicate: &Predicate,
) -> Result<(), V::Error> {
    visitor.visit_expr(&predicate.expr)
}

pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expr) -> Result<(), V::Error> {
    match expr {
        Expr::Or(or) => visitor.visit_or_expr(or),
        Expr::And(and) => visitor.visit_and_expr(and),
        Expr::Group(inner) => visitor.visit_expr(inner),
        Expr::Equality(eq) => visitor.visit_equality_expr(eq),
        Expr::Subartifact(set) => visitor.visit_subartifact_set(set),
    }
}

pub fn walk_or_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: &OrExpr) -> Result<(), V::Error> {
    visitor.visit_expr(&expr.left)?;
    visitor.visit_expr(&expr.right)
}

pub fn walk_and_expr<V: Visitor + ?Sized>(
    visitor: &mut V,
    expr: &AndExpr,
) -> Result<(), V::Error> {
    visitor.visit_expr(&expr.left)?;
    visitor.visit_expr(&expr.right)
}

pub fn walk_equality_expr<V: Visitor + ?Sized>(
    visitor: &mut V,
    expr: &EqualityExpr,
) -> Result<(), V::Error> {
    walk_operand(visitor, &expr.left)?;
    if let Some(comparison) = &expr.comparison {
        visitor.visit_literal(&comparison.right)?;
    }
    Ok(())
}

pub fn walk_operand<V: Visitor + ?Sized>(
    visitor: &mut V,
    operand: &Operand,
) -> Result<(), V::Error> {
    match operand {
        Operand::Property(step) => visitor.visit_forward_property_step(step),
        Operand::Function(call) => visitor.visit_function_call(call),
    }
}

pub fn walk_function_call<V: Visitor + ?Sized>(
    visitor: &mut V,
    call: &FunctionCall,
) -> Result<(), V::Error> {
    for argument in &call.arguments {
        visitor.visit_argument(argument)?;
    }
    Ok(())
}

pub fn walk_argument<V: Visitor + ?Sized>(
    visitor: &mut V,
    argument: &Argument,
) -> Result<(), V::Error> {
    match argument {
        Argument::ContextItem => Ok(()),
        Argument::Literal(literal) => visitor.visit_literal(literal),
        Argument::Expr(expr) => visitor.visit_expr(expr),
    }
}

macro_rules! accept {
    ($($node:ty => $method:ident),* $(,)?) => {
        $(
            impl $node {
                /// Dispatch to the matching [`Visitor`] method.
                pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
                    visitor.$method(self)
                }
            }
        )*
    };
}

accept! {
    Query => visit_query,
    ArtifactSet => visit_artifact_set,
    SubartifactSet => visit_subartifact_set,
    Predicate => visit_predicate,
    Expr => visit_expr,
    OrExpr => visit_or_expr,
    AndExpr => visit_and_expr,
    EqualityExpr => visit_equality_expr,
    RelationshipPath => visit_relationship_path,
    ForwardPropertyStep => visit_forward_property_step,
    FunctionCall => visit_function_call,
    Argument => visit_argument,
    Literal => visit_literal,
}
