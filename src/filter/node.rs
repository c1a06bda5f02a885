//! Parsed filter expression tree.
//!
//! Trees are produced by an external filter-language parser and consumed by
//! [`FilterCompiler`](super::FilterCompiler). The operator of a comparison is
//! kept as the raw token the parser saw; it is validated at compile time.

use std::fmt;

/// A node of a parsed SCIM filter expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterNode {
    /// `path pr`
    Presence { path: String },

    /// `path op value`
    Comparison {
        path: String,
        operator: String,
        value: String,
    },

    /// `prefix[expression]`: paths inside are relative to `prefix`
    Grouping {
        prefix: String,
        expression: Box<FilterNode>,
    },

    And(Box<FilterNode>, Box<FilterNode>),

    Or(Box<FilterNode>, Box<FilterNode>),

    Not(Box<FilterNode>),
}

impl FilterNode {
    pub fn presence(path: impl Into<String>) -> Self {
        Self::Presence { path: path.into() }
    }

    pub fn compare(
        path: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Comparison {
            path: path.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    pub fn grouping(prefix: impl Into<String>, expression: FilterNode) -> Self {
        Self::Grouping {
            prefix: prefix.into(),
            expression: Box::new(expression),
        }
    }

    pub fn and(left: FilterNode, right: FilterNode) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: FilterNode, right: FilterNode) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    pub fn negate(expression: FilterNode) -> Self {
        Self::Not(Box::new(expression))
    }
}

/// Renders the node back in filter-language syntax, mainly for logging.
impl fmt::Display for FilterNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Presence { path } => write!(f, "{path} pr"),
            Self::Comparison {
                path,
                operator,
                value,
            } => write!(f, "{path} {operator} \"{value}\""),
            Self::Grouping { prefix, expression } => write!(f, "{prefix}[{expression}]"),
            Self::And(left, right) => write!(f, "({left} and {right})"),
            Self::Or(left, right) => write!(f, "({left} or {right})"),
            Self::Not(expression) => write!(f, "not ({expression})"),
        }
    }
}
