//! Schema registry for directory-backed SCIM resource types.
//!
//! The registry is built once from declarations and is read-only afterwards,
//! so it can be shared between threads behind an `Arc` without locking.

use super::embedded;
use super::resolve::{MAX_PATH_SEGMENTS, ResolvedAttribute};
use super::types::{
    AttributeDeclaration, AttributeDefinition, AttributeType, Extension, ExtensionDeclaration,
    ExtensionField, ResourceDeclaration, ResourceSchema,
};
use crate::error::{BuildResult, FilterError, FilterResult, SchemaBuildError};

use log::{debug, info, trace};
use serde::Deserialize;
use std::collections::HashMap;

/// Registry of resource schemas keyed by resource type.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    // lowercase resource type -> position in `resources`
    index: HashMap<String, usize>,
    resources: Vec<ResourceSchema>,
}

/// Declaration documents hold either one resource or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum DeclarationDocument {
    Many(Vec<ResourceDeclaration>),
    One(Box<ResourceDeclaration>),
}

impl SchemaRegistry {
    /// Create a registry from the embedded User, Group and FidoDevice
    /// declarations.
    pub fn new() -> BuildResult<Self> {
        Self::with_embedded_declarations()
    }

    /// Create a registry from the embedded declarations.
    pub fn with_embedded_declarations() -> BuildResult<Self> {
        let declarations = embedded::all()
            .iter()
            .map(|content| Self::load_declarations_from_str(content))
            .collect::<BuildResult<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect();
        Self::from_declarations(declarations)
    }

    /// Decode a JSON declaration document holding one resource or an array.
    pub fn load_declarations_from_str(content: &str) -> BuildResult<Vec<ResourceDeclaration>> {
        Ok(match serde_json::from_str(content)? {
            DeclarationDocument::Many(declarations) => declarations,
            DeclarationDocument::One(declaration) => vec![*declaration],
        })
    }

    /// Build a registry from already-structured declarations.
    ///
    /// Any malformed declaration fails the whole build.
    pub fn from_declarations(declarations: Vec<ResourceDeclaration>) -> BuildResult<Self> {
        let mut index = HashMap::new();
        let mut resources = Vec::with_capacity(declarations.len());

        for declaration in declarations {
            let key = declaration.name.to_ascii_lowercase();
            if index.contains_key(&key) {
                return Err(SchemaBuildError::duplicate(
                    &declaration.name,
                    &declaration.name,
                ));
            }

            let resource = Self::build_resource(declaration)?;
            debug!(
                "Registered resource type '{}' ({}) with {} attributes and {} extensions",
                resource.resource_type,
                resource.schema_urn,
                resource.attributes.len(),
                resource.extensions.len()
            );
            index.insert(key, resources.len());
            resources.push(resource);
        }

        info!("Schema registry built with {} resource types", resources.len());
        Ok(Self { index, resources })
    }

    fn build_resource(declaration: ResourceDeclaration) -> BuildResult<ResourceSchema> {
        let resource_type = declaration.name;

        let mut attributes: Vec<AttributeDefinition> = Vec::new();
        for attribute in declaration.attributes {
            Self::attach_attribute(&resource_type, &mut attributes, attribute)?;
        }

        if let Some(name_attribute) = &declaration.name_attribute {
            let declared = attributes
                .iter()
                .any(|attr| attr.name.eq_ignore_ascii_case(name_attribute) && attr.is_complex());
            if !declared {
                return Err(SchemaBuildError::missing_parent(
                    &resource_type,
                    name_attribute,
                ));
            }
        }

        if declaration.identifier_storage_name.trim().is_empty() {
            return Err(SchemaBuildError::EmptyStorageName {
                resource_type,
                name: "id".to_string(),
            });
        }

        let index = attributes
            .iter()
            .enumerate()
            .map(|(position, attr)| (attr.name.to_ascii_lowercase(), position))
            .collect();

        let mut extensions: Vec<Extension> = Vec::with_capacity(declaration.extensions.len());
        for extension in declaration.extensions {
            if extensions
                .iter()
                .any(|known| known.urn.eq_ignore_ascii_case(&extension.urn))
            {
                return Err(SchemaBuildError::duplicate(&resource_type, extension.urn));
            }
            extensions.push(Self::build_extension(&resource_type, extension)?);
        }

        Ok(ResourceSchema {
            resource_type,
            schema_urn: declaration.schema,
            description: declaration.description,
            endpoint: declaration.endpoint,
            name_attribute: declaration.name_attribute,
            identifier_storage_name: declaration.identifier_storage_name,
            attributes,
            index,
            extensions,
        })
    }

    /// Place one declared attribute into the tree, descending through its
    /// dotted parents by name.
    fn attach_attribute(
        resource_type: &str,
        root: &mut Vec<AttributeDefinition>,
        declaration: AttributeDeclaration,
    ) -> BuildResult<()> {
        let segments: Vec<&str> = declaration.path.split('.').collect();
        let Some((leaf, parents)) = segments.split_last() else {
            return Err(SchemaBuildError::missing_parent(
                resource_type,
                &declaration.path,
            ));
        };

        if segments.len() > MAX_PATH_SEGMENTS {
            return Err(SchemaBuildError::DeclarationTooDeep {
                resource_type: resource_type.to_string(),
                path: declaration.path.clone(),
            });
        }

        let mut list = root;
        for segment in parents {
            let position = list
                .iter()
                .position(|attr| attr.name.eq_ignore_ascii_case(segment))
                .ok_or_else(|| SchemaBuildError::missing_parent(resource_type, *segment))?;
            if list[position].data_type != AttributeType::Complex {
                return Err(SchemaBuildError::NonComplexParent {
                    resource_type: resource_type.to_string(),
                    path: declaration.path.clone(),
                    parent: list[position].name.clone(),
                });
            }
            list = &mut list[position].sub_attributes;
        }

        if list.iter().any(|attr| attr.name.eq_ignore_ascii_case(leaf)) {
            return Err(SchemaBuildError::duplicate(
                resource_type,
                &declaration.path,
            ));
        }

        let storage_name = declaration
            .storage_name
            .unwrap_or_else(|| leaf.to_string());
        if leaf.is_empty() || storage_name.trim().is_empty() {
            return Err(SchemaBuildError::EmptyStorageName {
                resource_type: resource_type.to_string(),
                name: declaration.path,
            });
        }

        trace!(
            "{}: attribute '{}' stored as '{}'",
            resource_type, declaration.path, storage_name
        );

        list.push(AttributeDefinition {
            name: leaf.to_string(),
            storage_name,
            data_type: declaration.data_type,
            multi_valued: declaration.multi_valued,
            description: declaration.description,
            sub_attributes: Vec::new(),
        });
        Ok(())
    }

    fn build_extension(
        resource_type: &str,
        declaration: ExtensionDeclaration,
    ) -> BuildResult<Extension> {
        let mut fields: Vec<ExtensionField> = Vec::with_capacity(declaration.fields.len());

        for field in declaration.fields {
            if field.name.contains('.') {
                return Err(SchemaBuildError::NestedExtensionField {
                    urn: declaration.urn,
                    name: field.name,
                });
            }
            if fields
                .iter()
                .any(|known| known.name.eq_ignore_ascii_case(&field.name))
            {
                return Err(SchemaBuildError::duplicate(&declaration.urn, field.name));
            }

            let storage_name = field.storage_name.unwrap_or_else(|| field.name.clone());
            if field.name.is_empty() || storage_name.trim().is_empty() {
                return Err(SchemaBuildError::EmptyStorageName {
                    resource_type: resource_type.to_string(),
                    name: field.name,
                });
            }

            fields.push(ExtensionField {
                name: field.name,
                storage_name,
                data_type: field.data_type,
                multi_valued: field.multi_valued,
                description: field.description,
            });
        }

        Ok(Extension {
            urn: declaration.urn,
            name: declaration.name,
            description: declaration.description,
            fields,
        })
    }

    /// Case-insensitive resource type lookup.
    pub fn get(&self, resource_type: &str) -> Option<&ResourceSchema> {
        self.index
            .get(&resource_type.to_ascii_lowercase())
            .map(|&position| &self.resources[position])
    }

    /// Resource type lookup that reports unknown types as an error.
    pub fn require(&self, resource_type: &str) -> FilterResult<&ResourceSchema> {
        self.get(resource_type)
            .ok_or_else(|| FilterError::unknown_resource_type(resource_type))
    }

    /// All registered resource schemas in declaration order.
    pub fn resource_types(&self) -> impl Iterator<Item = &ResourceSchema> {
        self.resources.iter()
    }

    /// Find the resource owning a core or extension schema URN.
    pub fn resource_for_urn(&self, urn: &str) -> Option<&ResourceSchema> {
        self.resources.iter().find(|resource| {
            resource.schema_urn.eq_ignore_ascii_case(urn) || resource.extension(urn).is_some()
        })
    }

    /// Resolve a dotted, optionally URN-qualified path for a resource type.
    pub fn resolve(&self, path: &str, resource_type: &str) -> FilterResult<ResolvedAttribute> {
        self.require(resource_type)?.resolve(path)
    }
}
