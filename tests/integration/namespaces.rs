//! URN-qualified paths, extension fields and the name attribute.

use crate::common::fixtures::{ENTERPRISE_URN, GROUP_URN, USER_URN, compiler};
use scim_directory_filter::{FilterError, FilterNode};

#[test]
fn test_core_urn_qualified_path() {
    let node = FilterNode::compare(format!("{USER_URN}:userName"), "eq", "jdoe");
    assert_compiles!(compiler(), node, "User", "uid=jdoe");

    let node = FilterNode::compare(format!("{GROUP_URN}:members.value"), "eq", "x");
    assert_compiles!(compiler(), node, "Group", r#"member=*"value":"x"*"#);
}

#[test]
fn test_urn_match_is_case_insensitive() {
    let path = format!("{}:userName", USER_URN.to_uppercase());
    let node = FilterNode::compare(path, "sw", "j");
    assert_compiles!(compiler(), node, "User", "uid=j*");
}

#[test]
fn test_enterprise_extension_field() {
    let node = FilterNode::compare(format!("{ENTERPRISE_URN}:department"), "eq", "Sales");
    assert_compiles!(compiler(), node, "User", "departmentNumber=Sales");

    let node = FilterNode::compare(format!("{ENTERPRISE_URN}:employeeNumber"), "pr", "");
    assert_compiles!(compiler(), node, "User", "employeeNumber=*");
}

#[test]
fn test_custom_extension_ordering() {
    let node = FilterNode::compare(
        "urn:ietf:params:scim:schemas:extension:gluu:2.0:User:scimCustomThird",
        "ge",
        "5",
    );
    assert_compiles!(compiler(), node, "User", "scimCustomThird>=5");
}

#[test]
fn test_extension_fields_are_flat() {
    let node = FilterNode::compare(format!("{ENTERPRISE_URN}:department.code"), "eq", "x");
    assert_compile_error!(compiler(), node, "User", FilterError::UnknownAttribute { .. });
}

#[test]
fn test_extension_field_requires_urn() {
    let node = FilterNode::compare("department", "eq", "Sales");
    assert_compile_error!(compiler(), node, "User", FilterError::UnknownAttribute { .. });
}

#[test]
fn test_unregistered_urn() {
    let path = "urn:example:schemas:Unknown:field";
    let node = FilterNode::compare(path, "eq", "x");
    assert_eq!(
        compiler().compile(&node, "User"),
        Err(FilterError::unknown_attribute(path, "User"))
    );
}

#[test]
fn test_extension_of_other_resource_type() {
    let node = FilterNode::compare(format!("{ENTERPRISE_URN}:department"), "eq", "Sales");
    assert_compile_error!(compiler(), node, "Group", FilterError::UnknownAttribute { .. });
}

#[test]
fn test_bare_name_attribute_maps_to_identifier() {
    let node = FilterNode::compare("name", "eq", "abc");
    assert_compiles!(compiler(), node, "User", "inum=abc");

    let node = FilterNode::presence("name");
    assert_compiles!(compiler(), node, "User", "inum=*");
}

#[test]
fn test_name_parts_are_stored_natively() {
    let node = FilterNode::and(
        FilterNode::compare("name.familyName", "eq", "Doe"),
        FilterNode::compare("name.givenName", "sw", "Ja"),
    );
    assert_compiles!(compiler(), node, "User", "&(sn=Doe)(givenName=Ja*)");

    // native storage allows ordering operators on name parts
    let node = FilterNode::compare("name.familyName", "gt", "D");
    assert_compiles!(compiler(), node, "User", "&(sn>=D)(!(sn=D))");

    let node = FilterNode::presence("name.formatted");
    assert_compiles!(compiler(), node, "User", "oxTrustNameFormatted=*");
}

#[test]
fn test_undeclared_name_part() {
    let node = FilterNode::compare("name.nickname", "eq", "J");
    assert_compile_error!(compiler(), node, "User", FilterError::UnknownAttribute { .. });
}

#[test]
fn test_group_has_no_name_attribute() {
    let node = FilterNode::compare("name", "eq", "x");
    assert_compile_error!(compiler(), node, "Group", FilterError::UnknownAttribute { .. });
}

#[test]
fn test_empty_segment() {
    for path in ["members.", ".value", "members..value"] {
        let node = FilterNode::compare(path, "eq", "x");
        let result = compiler().compile(&node, "Group");
        assert!(
            matches!(
                result,
                Err(FilterError::UnknownAttribute { .. } | FilterError::UnsupportedPathDepth { .. })
            ),
            "{path}: {result:?}"
        );
    }
}
