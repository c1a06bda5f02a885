//! Compiled filters evaluated against an in-memory group directory.
//!
//! These tests check what a compiled filter selects, not just its text.

use crate::common::fixtures::{compiler, dns, escaping_compiler, group_directory};
use scim_directory_filter::FilterNode;

fn search(node: &FilterNode) -> std::collections::BTreeSet<String> {
    let filter = compiler().compile(node, "Group").unwrap();
    group_directory().search(&filter)
}

#[test]
fn test_display_name_equality_selects_one_group() {
    let node = FilterNode::compare("displayName", "eq", "Admins");
    assert_eq!(search(&node), dns(&["G1"]));
}

#[test]
fn test_display_name_starts_with() {
    let node = FilterNode::compare("displayName", "sw", "adm");
    assert_eq!(search(&node), dns(&["G1", "G3"]));
}

#[test]
fn test_member_value_equality_is_exact() {
    let node = FilterNode::compare("members.value", "eq", "inum=123");
    assert_eq!(search(&node), dns(&["G1", "G3"]));
}

#[test]
fn test_member_value_contains_widens() {
    let node = FilterNode::compare("members.value", "co", "inum=123");
    assert_eq!(search(&node), dns(&["G1", "G3", "G5"]));
}

#[test]
fn test_member_value_ends_with() {
    let node = FilterNode::compare("members.value", "ew", "=123");
    assert_eq!(search(&node), dns(&["G1", "G3"]));
}

#[test]
fn test_member_value_starts_with_behaves_as_contains() {
    let starts_with = FilterNode::compare("members.value", "sw", "123");
    let contains = FilterNode::compare("members.value", "co", "123");
    assert_eq!(search(&starts_with), search(&contains));
    assert_eq!(search(&starts_with), dns(&["G1", "G3", "G5"]));
}

#[test]
fn test_member_type_equality() {
    let node = FilterNode::compare("members.type", "eq", "Group");
    assert_eq!(search(&node), dns(&["G3"]));
}

#[test]
fn test_sub_attribute_presence() {
    let node = FilterNode::presence("members.display");
    assert_eq!(search(&node), dns(&["G1", "G2", "G3", "G5"]));
}

#[test]
fn test_negated_presence() {
    let node = FilterNode::negate(FilterNode::presence("externalId"));
    assert_eq!(search(&node), dns(&["G2", "G3", "G4"]));
}

#[test]
fn test_greater_than_excludes_bound() {
    let node = FilterNode::compare("displayName", "gt", "Auditors");
    assert_eq!(search(&node), dns(&["G4", "G5"]));

    let node = FilterNode::compare("displayName", "ge", "Auditors");
    assert_eq!(search(&node), dns(&["G2", "G4", "G5"]));
}

#[test]
fn test_less_than_excludes_bound() {
    let node = FilterNode::compare("displayName", "lt", "Auditors");
    assert_eq!(search(&node), dns(&["G1", "G3"]));
}

#[test]
fn test_not_equal() {
    let node = FilterNode::compare("displayName", "ne", "Admins");
    assert_eq!(search(&node), dns(&["G2", "G3", "G4", "G5"]));
}

#[test]
fn test_conjunction_and_disjunction() {
    let admins_with_group_member = FilterNode::and(
        FilterNode::compare("displayName", "sw", "Adm"),
        FilterNode::compare("members.type", "eq", "Group"),
    );
    assert_eq!(search(&admins_with_group_member), dns(&["G3"]));

    let either = FilterNode::or(
        FilterNode::compare("displayName", "eq", "Auditors"),
        FilterNode::compare("members.value", "eq", "inum=1234"),
    );
    assert_eq!(search(&either), dns(&["G2", "G5"]));
}

#[test]
fn test_verbatim_wildcard_widens_match() {
    let node = FilterNode::compare("displayName", "eq", "Adm*");
    assert_eq!(search(&node), dns(&["G1", "G3"]));
}

#[test]
fn test_escaped_wildcard_matches_literally() {
    let node = FilterNode::compare("displayName", "eq", "Adm*");
    let filter = escaping_compiler().compile(&node, "Group").unwrap();
    assert_eq!(filter, "cn=Adm\\2a");
    assert!(group_directory().search(&filter).is_empty());
}
