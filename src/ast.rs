//! # S-RAMP Query Language - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for the S-RAMP artifact
//! query language, a restricted XPath dialect that selects artifacts by model
//! and type and filters them with predicates over properties, relationships
//! and classifications.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[query]** - Query root, artifact sets and navigation steps
//! - **[expressions]** - Predicate expressions, literals and function calls
//! - **[operators]** - Comparison operators
//!
//! The tree is built once by the parser and never mutated. Traversals are
//! written against [`Visitor`](crate::visitor::Visitor).
//!
//! ## Quick Start
//!
//! ```text
//! /s-ramp/xsd/XsdDocument[@name = 'foo']
//! ```
//!
//! Selects XSD documents whose name is `foo`.
//!
//! ## Core Concepts
//!
//! ### Artifact Set
//!
//! Every query starts at the `s-ramp` root and optionally narrows to a model
//! and a type:
//!
//! ```text
//! /s-ramp                   all artifacts
//! /s-ramp/wsdl              every artifact of the wsdl model
//! /s-ramp/wsdl/WsdlDocument one artifact type
//! //WsdlDocument            same, model looked up from the type
//! ```
//!
//! ### Predicates
//!
//! - **Comparison** `@version = '1.0'`, `@contentSize > 1000`
//! - **Existence** `@prop1` (property is set)
//! - **Relationship** `relatedDocument[@name = 'foo']`
//! - **Function** `s-ramp:classifiedByAnyOf(., 'Maine')`, `fn:matches(@name, 'acc.*')`
//!
//! Combine with `and` / `or` (`and` binds tighter) and group with `( )`.
//!
//! ## Examples
//!
//! ### Custom properties
//!
//! ```text
//! /s-ramp/xsd/XsdDocument[@maven.groupId = 'org.example' and @maven.version = '1.0.0']
//! ```
//!
//! ### Relationship navigation
//!
//! ```text
//! /s-ramp/wsdl/WsdlDocument[@name = 'orders']/importedXsds[@name = 'types']
//! ```
pub mod tokens;
pub mod expressions;
pub mod operators;
pub mod query;

pub use tokens::{Spanned, Token};
pub use expressions::{
    AndExpr, Argument, Comparison, EqualityExpr, Expr, ForwardPropertyStep, FunctionCall,
    Literal, Operand, OrExpr, QName,
};
pub use operators::ComparisonOp;
pub use query::{ArtifactSet, Predicate, Query, RelationshipPath, Selector, Step, SubartifactSet};
