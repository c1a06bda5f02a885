//! Property-based checks on compiled filters.
//!
//! Random filter trees over the Group schema are compiled and evaluated
//! against the in-memory group directory, so the boolean operators can be
//! checked against set algebra on the selected entries.

use crate::common::fixtures::{compiler, group_directory};
use proptest::prelude::*;
use scim_directory_filter::FilterNode;
use std::collections::BTreeSet;

const PATHS: &[&str] = &[
    "displayName",
    "externalId",
    "id",
    "members.value",
    "members.display",
    "members.type",
];

const FRAGMENT_OPERATORS: &[&str] = &["eq", "co", "sw", "ew"];
const PLAIN_OPERATORS: &[&str] = &["eq", "ne", "co", "sw", "ew", "gt", "ge", "lt", "le"];

const VALUES: &[&str] = &["Admins", "Adm", "G1", "inum=123", "123", "Jane", "User", "Group"];

fn leaf() -> impl Strategy<Value = FilterNode> {
    let comparison = (
        prop::sample::select(PATHS),
        prop::sample::select(PLAIN_OPERATORS),
        prop::sample::select(FRAGMENT_OPERATORS),
        prop::sample::select(VALUES),
    )
        .prop_map(|(path, plain, fragment, value)| {
            let operator = if path.contains('.') { fragment } else { plain };
            FilterNode::compare(path, operator, value)
        });
    let presence = prop::sample::select(PATHS).prop_map(|path| FilterNode::presence(path));

    prop_oneof![3 => comparison, 1 => presence]
}

fn filter_tree() -> impl Strategy<Value = FilterNode> {
    leaf().prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| FilterNode::and(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| FilterNode::or(l, r)),
            inner.prop_map(FilterNode::negate),
        ]
    })
}

fn search(node: &FilterNode) -> BTreeSet<String> {
    let filter = compiler()
        .compile(node, "Group")
        .unwrap_or_else(|e| panic!("'{node}' failed to compile: {e}"));
    group_directory().search(&filter)
}

fn balanced(filter: &str) -> bool {
    let mut depth = 0i32;
    for c in filter.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return false;
        }
    }
    depth == 0
}

proptest! {
    #[test]
    fn generated_trees_compile_without_outer_parentheses(node in filter_tree()) {
        let filter = compiler().compile(&node, "Group").unwrap();
        prop_assert!(!filter.starts_with('('));
        prop_assert!(balanced(&filter), "unbalanced: {}", filter);
    }

    #[test]
    fn compilation_is_deterministic(node in filter_tree()) {
        prop_assert_eq!(
            compiler().compile(&node, "Group"),
            compiler().compile(&node, "Group")
        );
    }

    #[test]
    fn and_selects_intersection(left in filter_tree(), right in filter_tree()) {
        let expected: BTreeSet<String> =
            search(&left).intersection(&search(&right)).cloned().collect();
        prop_assert_eq!(search(&FilterNode::and(left.clone(), right.clone())), expected.clone());
        prop_assert_eq!(search(&FilterNode::and(right, left)), expected);
    }

    #[test]
    fn or_selects_union(left in filter_tree(), right in filter_tree()) {
        let expected: BTreeSet<String> =
            search(&left).union(&search(&right)).cloned().collect();
        prop_assert_eq!(search(&FilterNode::or(left.clone(), right.clone())), expected.clone());
        prop_assert_eq!(search(&FilterNode::or(right, left)), expected);
    }

    #[test]
    fn not_selects_complement(node in filter_tree()) {
        let all = group_directory().all();
        let expected: BTreeSet<String> = all.difference(&search(&node)).cloned().collect();
        prop_assert_eq!(search(&FilterNode::negate(node.clone())), expected);
        prop_assert_eq!(search(&FilterNode::negate(FilterNode::negate(node.clone()))), search(&node));
    }

    #[test]
    fn grouping_matches_qualified_paths(
        sub in prop::sample::select(&["value", "display", "type"][..]),
        operator in prop::sample::select(FRAGMENT_OPERATORS),
        value in prop::sample::select(VALUES),
    ) {
        let grouped = FilterNode::grouping("members", FilterNode::compare(sub, operator, value));
        let qualified = FilterNode::compare(format!("members.{sub}"), operator, value);
        prop_assert_eq!(
            compiler().compile(&grouped, "Group"),
            compiler().compile(&qualified, "Group")
        );
    }

    #[test]
    fn unsupported_paths_never_compile(
        depth in 3usize..6,
        segment in "[a-z]{1,8}",
    ) {
        let path = vec![segment.as_str(); depth].join(".");
        let node = FilterNode::compare(path, "eq", "x");
        prop_assert!(compiler().compile(&node, "Group").is_err());
    }
}
