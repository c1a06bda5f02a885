//! Core schema type definitions for directory-backed SCIM resources.
//!
//! This module contains two families of types: the declarative input the
//! registry is built from (`*Declaration`), and the immutable definitions the
//! registry hands out once built.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Declarative description of one resource type.
///
/// Attributes are listed flat with dotted paths (`name.givenName`); the
/// registry assembles the sub-attribute tree from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDeclaration {
    /// Resource type identifier, e.g. "User"
    pub name: String,
    /// Canonical schema URN
    pub schema: String,
    #[serde(default)]
    pub description: String,
    /// Endpoint path relative to the SCIM base, e.g. "/Users"
    #[serde(default)]
    pub endpoint: String,
    /// Complex attribute stored natively rather than as a fragment
    #[serde(default)]
    pub name_attribute: Option<String>,
    /// Backend attribute holding the primary identifier
    #[serde(default = "default_identifier_storage_name")]
    pub identifier_storage_name: String,
    pub attributes: Vec<AttributeDeclaration>,
    #[serde(default)]
    pub extensions: Vec<ExtensionDeclaration>,
}

fn default_identifier_storage_name() -> String {
    "inum".to_string()
}

/// A single attribute entry of a resource declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDeclaration {
    /// Dotted logical path; parents must be declared first
    pub path: String,
    /// Backend alias when it differs from the logical name
    #[serde(default)]
    pub storage_name: Option<String>,
    #[serde(rename = "type", default)]
    pub data_type: AttributeType,
    #[serde(default)]
    pub multi_valued: bool,
    #[serde(default)]
    pub description: String,
}

/// Declarative description of a schema extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionDeclaration {
    pub urn: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub fields: Vec<ExtensionFieldDeclaration>,
}

/// A flat field of an extension declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionFieldDeclaration {
    pub name: String,
    #[serde(default)]
    pub storage_name: Option<String>,
    #[serde(rename = "type", default)]
    pub data_type: AttributeType,
    #[serde(default)]
    pub multi_valued: bool,
    #[serde(default)]
    pub description: String,
}

/// Definition of an attribute as the registry sees it.
///
/// `storage_name` is always non-empty: it is either the declared alias or
/// the logical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDefinition {
    /// Logical name used in filters
    pub name: String,
    /// Backend attribute name
    pub storage_name: String,
    pub data_type: AttributeType,
    pub multi_valued: bool,
    pub description: String,
    /// Sub-attributes for complex types, in declaration order
    pub sub_attributes: Vec<AttributeDefinition>,
}

impl AttributeDefinition {
    /// Whether the attribute carries sub-attributes.
    pub fn is_complex(&self) -> bool {
        self.data_type == AttributeType::Complex
    }

    /// Whether the backend stores this attribute under a different name.
    pub fn is_aliased(&self) -> bool {
        self.name != self.storage_name
    }

    /// Case-insensitive sub-attribute lookup.
    pub fn sub_attribute(&self, name: &str) -> Option<&AttributeDefinition> {
        self.sub_attributes
            .iter()
            .find(|sub| sub.name.eq_ignore_ascii_case(name))
    }
}

/// A field of a registered extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionField {
    pub name: String,
    pub storage_name: String,
    pub data_type: AttributeType,
    pub multi_valued: bool,
    pub description: String,
}

/// URN-identified group of additional attributes for a resource type.
#[derive(Debug, Clone)]
pub struct Extension {
    pub urn: String,
    pub name: String,
    pub description: String,
    pub fields: Vec<ExtensionField>,
}

impl Extension {
    /// Case-insensitive field lookup.
    pub fn field(&self, name: &str) -> Option<&ExtensionField> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }
}

/// Immutable schema of one resource type.
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    pub(super) resource_type: String,
    pub(super) schema_urn: String,
    pub(super) description: String,
    pub(super) endpoint: String,
    pub(super) name_attribute: Option<String>,
    pub(super) identifier_storage_name: String,
    pub(super) attributes: Vec<AttributeDefinition>,
    // lowercase logical name -> position in `attributes`
    pub(super) index: HashMap<String, usize>,
    pub(super) extensions: Vec<Extension>,
}

impl ResourceSchema {
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn schema_urn(&self) -> &str {
        &self.schema_urn
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Logical name of the natively stored name-complex attribute, if any.
    pub fn name_attribute(&self) -> Option<&str> {
        self.name_attribute.as_deref()
    }

    pub fn identifier_storage_name(&self) -> &str {
        &self.identifier_storage_name
    }

    /// Top-level attributes in declaration order.
    pub fn attributes(&self) -> &[AttributeDefinition] {
        &self.attributes
    }

    /// Case-insensitive top-level attribute lookup.
    pub fn attribute(&self, name: &str) -> Option<&AttributeDefinition> {
        self.index
            .get(&name.to_ascii_lowercase())
            .map(|&position| &self.attributes[position])
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    /// Case-insensitive extension lookup by URN.
    pub fn extension(&self, urn: &str) -> Option<&Extension> {
        self.extensions
            .iter()
            .find(|extension| extension.urn.eq_ignore_ascii_case(urn))
    }
}

/// SCIM attribute data types.
///
/// Represents the valid data types for SCIM attributes as defined in RFC 7643.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum AttributeType {
    /// String value
    #[default]
    String,
    /// Boolean value
    Boolean,
    /// Decimal number
    Decimal,
    /// Integer number
    Integer,
    /// DateTime in RFC3339 format
    DateTime,
    /// Binary data (base64 encoded)
    Binary,
    /// URI reference
    Reference,
    /// Complex attribute with sub-attributes
    Complex,
}

impl AttributeType {
    /// Name used in SCIM schema documents.
    pub fn scim_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Decimal => "decimal",
            Self::Integer => "integer",
            Self::DateTime => "dateTime",
            Self::Binary => "binary",
            Self::Reference => "reference",
            Self::Complex => "complex",
        }
    }
}
