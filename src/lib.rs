//! SCIM 2.0 filter compilation for LDAP-style directories.
//!
//! Translates parsed SCIM filter expressions into the native filter syntax of
//! a flat attribute store. Complex SCIM attributes live in the directory as a
//! single carrier attribute holding serialized JSON fragments, so filters on
//! their sub-attributes become substring matches against that text.
//!
//! # Core Components
//!
//! - [`SchemaRegistry`] - Immutable resource schemas with backend aliases
//! - [`FilterCompiler`] - Compiles [`FilterNode`] trees into directory filters
//! - [`SchemaDiscovery`] - `ResourceType` and `Schema` documents for clients
//!
//! # Quick Start
//!
//! ```rust
//! use scim_directory_filter::{FilterCompiler, FilterNode, SchemaRegistry};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Arc::new(SchemaRegistry::new()?);
//! let compiler = FilterCompiler::new(registry);
//!
//! let filter = FilterNode::compare("members.value", "co", "inum=123");
//! assert_eq!(
//!     compiler.compile(&filter, "Group")?,
//!     r#"member=*"value":*inum=123*"#
//! );
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod filter;
pub mod schema;
pub mod schema_discovery;

// Re-export commonly used types for convenience
pub use error::{BuildResult, FilterError, FilterResult, SchemaBuildError};
pub use filter::{CompilerConfig, FilterCompiler, FilterNode, LiteralEscaping, Operator};
pub use schema::{ResolvedAttribute, ResourceSchema, SchemaRegistry};
pub use schema_discovery::{DiscoveryConfig, SchemaDiscovery};
