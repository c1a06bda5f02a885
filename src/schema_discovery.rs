//! Schema discovery documents rendered from the schema registry.
//!
//! This module renders the registry as the SCIM `ResourceType` and `Schema`
//! documents clients use to find out which attributes they can filter on.
//! Core schemas are rendered as attribute trees; extension schemas are flat.

use crate::schema::{AttributeDefinition, Extension, ResourceSchema, SchemaRegistry};

use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const RESOURCE_TYPE_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:ResourceType";
const SCHEMA_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:Schema";

/// Endpoint configuration used to build `meta.location` values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryConfig {
    /// Base URL for the SCIM service (without version or path information).
    pub base_url: String,

    /// SCIM protocol version used in URLs. Defaults to "v2".
    pub scim_version: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost".to_string(),
            scim_version: "v2".to_string(),
        }
    }
}

impl DiscoveryConfig {
    fn location(&self, endpoint: &str, id: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.scim_version,
            endpoint,
            id
        )
    }
}

/// Resource metadata carried by every discovery document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub resource_type: String,
    pub location: String,
}

/// Reference from a resource type to one of its extension schemas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemaExtensionRef {
    pub schema: String,
    pub required: bool,
}

/// SCIM `ResourceType` document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTypeDocument {
    pub schemas: Vec<String>,
    pub id: String,
    pub name: String,
    pub description: String,
    pub endpoint: String,
    pub schema: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schema_extensions: Vec<SchemaExtensionRef>,
    pub meta: Meta,
}

/// One attribute entry of a `Schema` document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaAttribute {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub multi_valued: bool,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_attributes: Option<Vec<SchemaAttribute>>,
}

impl From<&AttributeDefinition> for SchemaAttribute {
    fn from(attribute: &AttributeDefinition) -> Self {
        Self {
            name: attribute.name.clone(),
            data_type: attribute.data_type.scim_name().to_string(),
            multi_valued: attribute.multi_valued,
            description: attribute.description.clone(),
            sub_attributes: attribute
                .is_complex()
                .then(|| attribute.sub_attributes.iter().map(Self::from).collect()),
        }
    }
}

/// SCIM `Schema` document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemaDocument {
    pub schemas: Vec<String>,
    pub id: String,
    pub name: String,
    pub description: String,
    pub attributes: Vec<SchemaAttribute>,
    pub meta: Meta,
}

/// Renders discovery documents for every registered resource type.
///
/// # Example
/// ```rust
/// use scim_directory_filter::{SchemaDiscovery, SchemaRegistry};
/// use std::sync::Arc;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let discovery = SchemaDiscovery::new(Arc::new(SchemaRegistry::new()?));
/// let group = discovery.resource_type("Group").expect("Group is built in");
/// assert_eq!(group.endpoint, "/Groups");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SchemaDiscovery {
    registry: Arc<SchemaRegistry>,
    config: DiscoveryConfig,
}

impl SchemaDiscovery {
    /// Create a discovery component with the default endpoint configuration.
    pub fn new(registry: Arc<SchemaRegistry>) -> Self {
        Self::with_config(registry, DiscoveryConfig::default())
    }

    pub fn with_config(registry: Arc<SchemaRegistry>, config: DiscoveryConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// All resource types in registration order.
    pub fn resource_types(&self) -> Vec<ResourceTypeDocument> {
        self.registry
            .resource_types()
            .map(|resource| self.render_resource_type(resource))
            .collect()
    }

    /// A single resource type by name.
    pub fn resource_type(&self, name: &str) -> Option<ResourceTypeDocument> {
        self.registry
            .get(name)
            .map(|resource| self.render_resource_type(resource))
    }

    /// Core and extension schemas of every resource type.
    pub fn schemas(&self) -> Vec<SchemaDocument> {
        let mut documents = Vec::new();
        for resource in self.registry.resource_types() {
            documents.push(self.render_core_schema(resource));
            documents.extend(
                resource
                    .extensions()
                    .iter()
                    .map(|extension| self.render_extension_schema(extension)),
            );
        }
        debug!("Rendered {} schema documents", documents.len());
        documents
    }

    /// A single core or extension schema by URN.
    pub fn schema(&self, urn: &str) -> Option<SchemaDocument> {
        let resource = self.registry.resource_for_urn(urn)?;
        if resource.schema_urn().eq_ignore_ascii_case(urn) {
            Some(self.render_core_schema(resource))
        } else {
            resource
                .extension(urn)
                .map(|extension| self.render_extension_schema(extension))
        }
    }

    fn render_resource_type(&self, resource: &ResourceSchema) -> ResourceTypeDocument {
        ResourceTypeDocument {
            schemas: vec![RESOURCE_TYPE_SCHEMA.to_string()],
            id: resource.resource_type().to_string(),
            name: resource.resource_type().to_string(),
            description: resource.description().to_string(),
            endpoint: resource.endpoint().to_string(),
            schema: resource.schema_urn().to_string(),
            schema_extensions: resource
                .extensions()
                .iter()
                .map(|extension| SchemaExtensionRef {
                    schema: extension.urn.clone(),
                    required: false,
                })
                .collect(),
            meta: Meta {
                resource_type: "ResourceType".to_string(),
                location: self
                    .config
                    .location("ResourceTypes", resource.resource_type()),
            },
        }
    }

    fn render_core_schema(&self, resource: &ResourceSchema) -> SchemaDocument {
        SchemaDocument {
            schemas: vec![SCHEMA_SCHEMA.to_string()],
            id: resource.schema_urn().to_string(),
            name: resource.resource_type().to_string(),
            description: resource.description().to_string(),
            attributes: resource
                .attributes()
                .iter()
                .map(SchemaAttribute::from)
                .collect(),
            meta: self.schema_meta(resource.schema_urn()),
        }
    }

    fn render_extension_schema(&self, extension: &Extension) -> SchemaDocument {
        SchemaDocument {
            schemas: vec![SCHEMA_SCHEMA.to_string()],
            id: extension.urn.clone(),
            name: extension.name.clone(),
            description: extension.description.clone(),
            attributes: extension
                .fields
                .iter()
                .map(|field| SchemaAttribute {
                    name: field.name.clone(),
                    data_type: field.data_type.scim_name().to_string(),
                    multi_valued: field.multi_valued,
                    description: field.description.clone(),
                    sub_attributes: None,
                })
                .collect(),
            meta: self.schema_meta(&extension.urn),
        }
    }

    fn schema_meta(&self, urn: &str) -> Meta {
        Meta {
            resource_type: "Schema".to_string(),
            location: self.config.location("Schemas", urn),
        }
    }
}
