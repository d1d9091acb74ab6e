use std::fmt;

use serde::Serialize;

use crate::ast::{ComparisonOp, SubartifactSet};
use crate::value::{quote_literal, Number};

/// Boolean expression inside a predicate.
///
/// `and` binds tighter than `or`; both are left-associative, so
/// `a or b and c or d` is `(a or (b and c)) or d`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// `left or right`
    Or(OrExpr),

    /// `left and right`
    And(AndExpr),

    /// Parenthesized sub-expression
    ///
    /// # Example
    /// ```text
    /// [(@a = '1' or @b = '2') and @c]
    /// ```
    Group(Box<Expr>),

    /// Property or function, optionally compared with a literal
    ///
    /// # Examples
    /// ```text
    /// @name = 'foo'
    /// @prop1
    /// fn:matches(@name, 'foo.*')
    /// ```
    Equality(EqualityExpr),

    /// Relationship test, optionally with a predicate on the target
    ///
    /// # Examples
    /// ```text
    /// relatedDocument
    /// relatedDocument[@name = 'foo']
    /// ```
    Subartifact(Box<SubartifactSet>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrExpr {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AndExpr {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Exactly one left operand and, when `comparison` is present, exactly one
/// literal right operand. Without a comparison the expression is an
/// existence test.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EqualityExpr {
    pub left: Operand,
    pub comparison: Option<Comparison>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    Property(ForwardPropertyStep),
    Function(FunctionCall),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub op: ComparisonOp,
    pub right: Literal,
}

/// Typed literal value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    String(String),
    Number(Number),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => f.write_str(&quote_literal(s)),
            Literal::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One argument of a function call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Argument {
    /// The context item `.`
    ContextItem,
    Literal(Literal),
    Expr(Expr),
}

/// `@name` or `@prefix:name`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForwardPropertyStep {
    pub name: QName,
}

/// `prefix:name(arg, ...)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionCall {
    pub name: QName,
    pub arguments: Vec<Argument>,
}

/// Qualified name. `namespace` holds the URI the prefix resolved to at parse
/// time, or `None` when the prefix is not declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QName {
    pub prefix: Option<String>,
    pub local_part: String,
    pub namespace: Option<String>,
}

impl QName {
    pub fn new(prefix: Option<&str>, local_part: &str, namespace: Option<&str>) -> Self {
        QName {
            prefix: prefix.map(str::to_string),
            local_part: local_part.to_string(),
            namespace: namespace.map(str::to_string),
        }
    }

    /// Same namespace and local part; the prefix itself does not matter.
    pub fn is(&self, namespace: &str, local_part: &str) -> bool {
        self.namespace.as_deref() == Some(namespace) && self.local_part == local_part
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{}:{}", prefix, self.local_part),
            None => f.write_str(&self.local_part),
        }
    }
}
