//! Grouped sub-attribute filters such as `members[value eq "x"]`.

use crate::common::fixtures::{GROUP_URN, compiler, dns, group_directory};
use scim_directory_filter::{FilterError, FilterNode};

#[test]
fn test_grouping_scopes_unqualified_paths() {
    let node = FilterNode::grouping(
        "members",
        FilterNode::and(
            FilterNode::compare("value", "eq", "inum=123"),
            FilterNode::compare("display", "co", "Jane"),
        ),
    );
    assert_compiles!(
        compiler(),
        node,
        "Group",
        r#"&(member=*"value":"inum=123"*)(member=*"display":*Jane*)"#
    );
}

#[test]
fn test_grouping_is_equivalent_to_qualified_paths() {
    let grouped = FilterNode::grouping(
        "members",
        FilterNode::or(
            FilterNode::compare("type", "eq", "Group"),
            FilterNode::negate(FilterNode::presence("display")),
        ),
    );
    let qualified = FilterNode::or(
        FilterNode::compare("members.type", "eq", "Group"),
        FilterNode::negate(FilterNode::presence("members.display")),
    );
    assert_eq!(
        compiler().compile(&grouped, "Group"),
        compiler().compile(&qualified, "Group")
    );
}

#[test]
fn test_presence_inside_grouping_uses_prefix() {
    let node = FilterNode::grouping("members", FilterNode::presence("value"));
    assert_compiles!(
        compiler(),
        node,
        "Group",
        r#"&(member=*)(member=*"value":"*)"#
    );
}

#[test]
fn test_qualified_path_inside_grouping_is_untouched() {
    let node = FilterNode::grouping(
        "members",
        FilterNode::compare("displayName", "eq", "Admins"),
    );
    // single segment gets qualified, so this looks for members.displayName
    assert_compile_error!(compiler(), node, "Group", FilterError::UnknownAttribute { .. });

    let node = FilterNode::grouping(
        "members",
        FilterNode::compare(format!("{GROUP_URN}:displayName"), "eq", "Admins"),
    );
    assert_compiles!(compiler(), node, "Group", "cn=Admins");
}

#[test]
fn test_innermost_grouping_wins() {
    let node = FilterNode::grouping(
        "emails",
        FilterNode::grouping("phoneNumbers", FilterNode::compare("value", "eq", "555")),
    );
    assert_compiles!(
        compiler(),
        node,
        "User",
        r#"oxTrustPhoneValue=*"value":"555"*"#
    );
}

#[test]
fn test_grouping_does_not_leak_to_siblings() {
    let node = FilterNode::and(
        FilterNode::grouping("emails", FilterNode::compare("type", "eq", "work")),
        FilterNode::compare("userName", "eq", "jdoe"),
    );
    assert_compiles!(
        compiler(),
        node,
        "User",
        r#"&(oxTrustEmail=*"type":"work"*)(uid=jdoe)"#
    );
}

#[test]
fn test_grouping_on_name_attribute() {
    let node = FilterNode::grouping("name", FilterNode::compare("familyName", "eq", "Doe"));
    assert_compiles!(compiler(), node, "User", "sn=Doe");
}

#[test]
fn test_grouping_conditions_may_match_different_members() {
    // G1 has inum=456 (John Smith) and Jane Doe as separate members
    let node = FilterNode::grouping(
        "members",
        FilterNode::and(
            FilterNode::compare("value", "eq", "inum=456"),
            FilterNode::compare("display", "co", "Jane"),
        ),
    );
    let filter = compiler().compile(&node, "Group").unwrap();
    assert_eq!(group_directory().search(&filter), dns(&["G1"]));
}
