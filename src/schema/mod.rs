//! Schema registry for directory-backed SCIM resources.
//!
//! This module builds, once at startup, the mapping from each resource type
//! (and its extensions) to attribute definitions carrying backend storage
//! aliases, and resolves dotted filter paths against it.
//!
//! # Key Types
//!
//! - [`SchemaRegistry`] - Immutable registry of resource schemas
//! - [`ResourceSchema`] - Attributes and extensions of one resource type
//! - [`AttributeDefinition`] - Logical name, backend alias and sub-attributes
//! - [`ResolvedAttribute`] - Backend view of a resolved filter path
//!
//! # Examples
//!
//! ```rust
//! use scim_directory_filter::schema::SchemaRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let resolved = registry.resolve("displayName", "Group")?;
//! assert_eq!(resolved.backend_name, "cn");
//! # Ok(())
//! # }
//! ```

pub mod embedded;
pub mod registry;
pub mod resolve;
pub mod types;


// Re-export the main types for convenience
pub use registry::SchemaRegistry;
pub use resolve::{MAX_PATH_SEGMENTS, Namespace, ResolvedAttribute};
pub use types::{
    AttributeDeclaration, AttributeDefinition, AttributeType, Extension, ExtensionDeclaration,
    ExtensionField, ExtensionFieldDeclaration, ResourceDeclaration, ResourceSchema,
};
