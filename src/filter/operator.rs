//! Mapping from SCIM filter operators to directory filter syntax.

use crate::error::FilterError;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SCIM filter operators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal comparison
    #[serde(rename = "eq")]
    Equal,

    /// Not equal comparison
    #[serde(rename = "ne")]
    NotEqual,

    /// Contains operation for strings
    #[serde(rename = "co")]
    Contains,

    /// Starts with operation for strings
    #[serde(rename = "sw")]
    StartsWith,

    /// Ends with operation for strings
    #[serde(rename = "ew")]
    EndsWith,

    /// Present (attribute exists)
    #[serde(rename = "pr")]
    Present,

    /// Greater than
    #[serde(rename = "gt")]
    GreaterThan,

    /// Greater than or equal
    #[serde(rename = "ge")]
    GreaterThanOrEqual,

    /// Less than
    #[serde(rename = "lt")]
    LessThan,

    /// Less than or equal
    #[serde(rename = "le")]
    LessThanOrEqual,
}

impl Operator {
    /// Every operator, in token table order.
    pub const ALL: [Operator; 10] = [
        Operator::Equal,
        Operator::Contains,
        Operator::StartsWith,
        Operator::EndsWith,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqual,
        Operator::LessThan,
        Operator::LessThanOrEqual,
        Operator::Present,
        Operator::NotEqual,
    ];

    /// Lowercase filter-language token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Equal => "eq",
            Self::NotEqual => "ne",
            Self::Contains => "co",
            Self::StartsWith => "sw",
            Self::EndsWith => "ew",
            Self::Present => "pr",
            Self::GreaterThan => "gt",
            Self::GreaterThanOrEqual => "ge",
            Self::LessThan => "lt",
            Self::LessThanOrEqual => "le",
        }
    }

    /// Whether a leading `*` goes in front of the value in a substring match.
    pub(crate) fn wildcard_before(self) -> bool {
        matches!(self, Self::Contains | Self::EndsWith)
    }

    /// Whether a trailing `*` follows the value in a substring match.
    pub(crate) fn wildcard_after(self) -> bool {
        matches!(self, Self::Contains | Self::StartsWith)
    }

    /// Render `attribute op value` in directory filter syntax.
    ///
    /// The result carries no outer parentheses; boolean composition adds
    /// them. `value` is embedded as given.
    pub fn render(self, attribute: &str, value: &str) -> String {
        match self {
            Self::Equal => format!("{attribute}={value}"),
            Self::NotEqual => format!("!({attribute}={value})"),
            Self::Contains | Self::StartsWith | Self::EndsWith => {
                let before = if self.wildcard_before() { "*" } else { "" };
                let after = if self.wildcard_after() { "*" } else { "" };
                format!("{attribute}={before}{value}{after}")
            }
            Self::Present => format!("{attribute}=*"),
            Self::GreaterThanOrEqual => format!("{attribute}>={value}"),
            Self::LessThanOrEqual => format!("{attribute}<={value}"),
            // no strict ordering match in the directory syntax
            Self::GreaterThan => format!("&({attribute}>={value})(!({attribute}={value}))"),
            Self::LessThan => format!("&({attribute}<={value})(!({attribute}={value}))"),
        }
    }
}

impl FromStr for Operator {
    type Err = FilterError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|operator| operator.token().eq_ignore_ascii_case(token))
            .ok_or_else(|| FilterError::unknown_operator(token))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
