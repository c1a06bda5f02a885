//! Compiler configuration.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How literal values are embedded into directory filters.
///
/// Literals have historically been embedded verbatim, so a `*` inside a
/// value acts as a wildcard and parentheses can unbalance the filter.
/// `Preserve` keeps that behavior for compatibility with existing clients;
/// `Rfc4515` escapes the directory metacharacters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LiteralEscaping {
    /// Embed literals verbatim
    #[default]
    Preserve,
    /// Escape `\`, `*`, `(`, `)` and NUL as `\XX` hex pairs
    Rfc4515,
}

impl LiteralEscaping {
    /// Apply this escaping mode to a literal value.
    pub fn apply<'a>(self, value: &'a str) -> Cow<'a, str> {
        match self {
            Self::Preserve => Cow::Borrowed(value),
            Self::Rfc4515 => escape_rfc4515(value),
        }
    }
}

fn escape_rfc4515(value: &str) -> Cow<'_, str> {
    if !value.contains(['\\', '*', '(', ')', '\0']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\5c"),
            '*' => escaped.push_str("\\2a"),
            '(' => escaped.push_str("\\28"),
            ')' => escaped.push_str("\\29"),
            '\0' => escaped.push_str("\\00"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Configuration for [`FilterCompiler`](super::FilterCompiler).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompilerConfig {
    /// Literal escaping mode, `preserve` unless configured otherwise
    #[serde(default)]
    pub literal_escaping: LiteralEscaping,
}
