//! Error types for schema registry construction and filter compilation.
//!
//! Per-query failures are reported through [`FilterError`]. Registry
//! construction failures are reported through [`SchemaBuildError`] and are
//! meant to abort startup: a process must not serve queries against a
//! malformed schema.

/// Errors produced while resolving attribute paths or compiling a filter.
///
/// Translation is deterministic, so none of these are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// The resource type is not present in the registry
    #[error("Unknown resource type: {resource_type}")]
    UnknownResourceType { resource_type: String },

    /// The attribute path does not resolve in the applicable namespace
    #[error("Unknown attribute '{path}' for resource type '{resource_type}'")]
    UnknownAttribute {
        path: String,
        resource_type: String,
    },

    /// More than two dotted segments
    #[error("Attribute path '{path}' exceeds the supported depth of two segments")]
    UnsupportedPathDepth { path: String },

    /// The operator token is not part of the filter language
    #[error("Unknown filter operator: {token}")]
    UnknownOperator { token: String },

    /// Operator cannot be expressed against a serialized fragment
    #[error("Operator '{operator}' is not supported on complex attribute path '{path}'")]
    UnsupportedOperatorForComplexPath { operator: String, path: String },
}

/// Errors raised while building the schema registry from declarations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaBuildError {
    /// A nested attribute path names a parent that was never declared
    #[error("Resource type '{resource_type}' has no parent attribute '{segment}'")]
    MissingParent {
        resource_type: String,
        segment: String,
    },

    /// The same name was declared twice in one namespace
    #[error("Duplicate declaration of '{name}' in '{resource_type}'")]
    DuplicateDeclaration { resource_type: String, name: String },

    /// An attribute resolved to an empty backend storage name
    #[error("Attribute '{name}' of '{resource_type}' has an empty storage name")]
    EmptyStorageName { resource_type: String, name: String },

    /// A dotted path descends through a parent that is not complex
    #[error("Attribute '{path}' of '{resource_type}' is nested under non-complex '{parent}'")]
    NonComplexParent {
        resource_type: String,
        path: String,
        parent: String,
    },

    /// A declared path has more segments than filters can address
    #[error("Attribute '{path}' of '{resource_type}' exceeds the supported depth of two segments")]
    DeclarationTooDeep { resource_type: String, path: String },

    /// Extension fields are flat and cannot carry dotted names
    #[error("Extension '{urn}' declares nested field '{name}'")]
    NestedExtensionField { urn: String, name: String },

    /// Declaration document could not be decoded
    #[error("Invalid declaration: {0}")]
    InvalidDeclaration(#[from] serde_json::Error),
}

impl FilterError {
    /// Create an unknown attribute error
    pub fn unknown_attribute(path: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            path: path.into(),
            resource_type: resource_type.into(),
        }
    }

    /// Create an unknown resource type error
    pub fn unknown_resource_type(resource_type: impl Into<String>) -> Self {
        Self::UnknownResourceType {
            resource_type: resource_type.into(),
        }
    }

    /// Create an unknown operator error
    pub fn unknown_operator(token: impl Into<String>) -> Self {
        Self::UnknownOperator {
            token: token.into(),
        }
    }

    /// Create an unsupported complex-path operator error
    pub fn unsupported_for_complex_path(
        operator: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self::UnsupportedOperatorForComplexPath {
            operator: operator.into(),
            path: path.into(),
        }
    }
}

impl SchemaBuildError {
    /// Create a missing parent error
    pub fn missing_parent(resource_type: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::MissingParent {
            resource_type: resource_type.into(),
            segment: segment.into(),
        }
    }

    /// Create a duplicate declaration error
    pub fn duplicate(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDeclaration {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }
}

// Result type aliases for convenience
pub type FilterResult<T> = Result<T, FilterError>;
pub type BuildResult<T> = Result<T, SchemaBuildError>;
