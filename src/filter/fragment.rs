//! Substring patterns against serialized fragments held by carrier attributes.
//!
//! A carrier stores each value of a complex attribute as JSON text, e.g.
//! `{"value":"inum=123","display":"Jane"}`. Structured matching on one
//! sub-key is approximated with a substring match on `"key":value` inside
//! that text. The pattern built here is then rendered through the regular
//! operator mapping, which adds its own wildcards; the pattern only adds the
//! ones the mapping does not.

use super::operator::Operator;

/// Build the fragment pattern for `sub_key op value`.
///
/// Returns `None` for operators that cannot be expressed as a fragment
/// substring match (anything but `eq`, `co`, `sw` and `ew`).
pub fn pattern(sub_key: &str, operator: Operator, value: &str) -> Option<String> {
    if !supports(operator) {
        return None;
    }

    let mut pattern = String::with_capacity(sub_key.len() + value.len() + 8);
    if !operator.wildcard_before() {
        pattern.push('*');
    }
    pattern.push('"');
    pattern.push_str(sub_key);
    if operator == Operator::Equal {
        pattern.push_str("\":\"");
    } else {
        pattern.push_str("\":*");
    }
    pattern.push_str(value);
    if !operator.wildcard_after() {
        pattern.push_str("\"*");
    }
    Some(pattern)
}

/// Whether `operator` can be applied to a sub-key path.
pub fn supports(operator: Operator) -> bool {
    matches!(
        operator,
        Operator::Equal | Operator::Contains | Operator::StartsWith | Operator::EndsWith
    )
}

/// Presence of the carrier and of some value under `sub_key` inside it.
pub fn presence(carrier: &str, sub_key: &str) -> String {
    format!("&({carrier}=*)({carrier}=*\"{sub_key}\":\"*)")
}
