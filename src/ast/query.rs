use serde::Serialize;

use crate::ast::{Expr, ForwardPropertyStep, FunctionCall};

/// Complete parsed query.
///
/// A base artifact set followed by zero or more navigation steps, applied
/// in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    /// Base selector
    pub artifact_set: ArtifactSet,

    /// Navigation steps after the base selector (`/relatedDocument`)
    pub subartifact_sets: Vec<SubartifactSet>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactSet {
    pub selector: Selector,
    pub predicate: Option<Predicate>,
}

/// Which artifacts the base set selects. A type always carries its model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    /// `/s-ramp`
    All,

    /// `/s-ramp/xsd`
    Model(String),

    /// `/s-ramp/xsd/XsdDocument` or `//XsdDocument`
    Type { model: String, artifact_type: String },
}

/// `[ Expr ]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Predicate {
    pub expr: Expr,
}

/// One navigation step with its optional predicate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubartifactSet {
    pub step: Step,
    pub predicate: Option<Predicate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Relationship(RelationshipPath),
    Property(ForwardPropertyStep),
    Function(FunctionCall),
}

/// Named relationship to traverse (`relatedDocument`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipPath {
    pub relationship_type: String,
}
