//! Attribute path resolution against a resource schema.
//!
//! A path resolves either to a plain backend attribute or to a carrier
//! attribute plus the sub-key inside its serialized fragment. Only one level
//! of sub-attribute is representable in flat storage, so anything deeper is
//! rejected.

use super::types::ResourceSchema;
use crate::error::{FilterError, FilterResult};

use log::trace;

/// Maximum number of dotted segments a path may have.
pub const MAX_PATH_SEGMENTS: usize = 2;

/// Namespace a path was resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Namespace {
    /// The resource's core schema
    Core,
    /// A registered extension, by URN
    Extension(String),
}

/// Result of resolving an attribute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAttribute {
    /// Backend attribute to filter on; the carrier when `sub_key` is set
    pub backend_name: String,
    /// Key inside the carrier's serialized fragment
    pub sub_key: Option<String>,
    /// Whether the resolved definition is complex
    pub complex: bool,
    pub namespace: Namespace,
}

impl ResolvedAttribute {
    fn plain(backend_name: &str, complex: bool, namespace: Namespace) -> Self {
        Self {
            backend_name: backend_name.to_string(),
            sub_key: None,
            complex,
            namespace,
        }
    }

    /// Number of path segments the backend filter addresses.
    pub fn depth(&self) -> usize {
        if self.sub_key.is_some() { 2 } else { 1 }
    }

    /// Whether the filter must match against serialized fragment text.
    pub fn is_fragment(&self) -> bool {
        self.sub_key.is_some()
    }
}

/// Whether a path starts with a schema URN.
pub(crate) fn is_urn_qualified(path: &str) -> bool {
    path.get(..4)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("urn:"))
}

/// Strip `<urn>:` from the front of `path` when it matches `urn`.
fn strip_urn<'a>(path: &'a str, urn: &str) -> Option<&'a str> {
    let head = path.get(..urn.len())?;
    if !head.eq_ignore_ascii_case(urn) {
        return None;
    }
    path[urn.len()..].strip_prefix(':')
}

impl ResourceSchema {
    /// Split off a leading schema URN, returning the namespace and the rest.
    ///
    /// The longest matching URN wins so that overlapping URNs resolve to the
    /// most specific namespace.
    fn split_namespace<'a>(&self, path: &'a str) -> Option<(Namespace, &'a str)> {
        let mut best: Option<(usize, Namespace, &'a str)> = strip_urn(path, &self.schema_urn)
            .map(|rest| (self.schema_urn.len(), Namespace::Core, rest));

        for extension in &self.extensions {
            if let Some(rest) = strip_urn(path, &extension.urn) {
                if best.as_ref().is_none_or(|(len, _, _)| extension.urn.len() > *len) {
                    best = Some((
                        extension.urn.len(),
                        Namespace::Extension(extension.urn.clone()),
                        rest,
                    ));
                }
            }
        }

        match best {
            Some((_, namespace, rest)) => Some((namespace, rest)),
            None if is_urn_qualified(path) => None,
            None => Some((Namespace::Core, path)),
        }
    }

    /// Resolve `path` to its backend representation.
    pub fn resolve(&self, path: &str) -> FilterResult<ResolvedAttribute> {
        let unknown = || FilterError::unknown_attribute(path, &self.resource_type);

        let (namespace, remainder) = self.split_namespace(path).ok_or_else(unknown)?;
        let segments: Vec<&str> = remainder.split('.').collect();
        if segments.len() > MAX_PATH_SEGMENTS {
            return Err(FilterError::UnsupportedPathDepth {
                path: path.to_string(),
            });
        }
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(unknown());
        }

        let resolved = match &namespace {
            Namespace::Extension(urn) => {
                // extension fields are flat
                if segments.len() > 1 {
                    return Err(unknown());
                }
                let field = self
                    .extension(urn)
                    .and_then(|extension| extension.field(segments[0]))
                    .ok_or_else(unknown)?;
                ResolvedAttribute::plain(&field.storage_name, false, namespace.clone())
            }
            Namespace::Core => self.resolve_core(&segments).ok_or_else(unknown)?,
        };

        trace!(
            "{}: resolved '{}' to '{}' (sub-key: {:?})",
            self.resource_type, path, resolved.backend_name, resolved.sub_key
        );
        Ok(resolved)
    }

    fn resolve_core(&self, segments: &[&str]) -> Option<ResolvedAttribute> {
        let first = segments[0];
        let second = segments.get(1).copied();

        // The name attribute is stored natively, one backend attribute per part
        if let Some(name_attribute) = &self.name_attribute {
            if first.eq_ignore_ascii_case(name_attribute) {
                return match second {
                    None => Some(ResolvedAttribute::plain(
                        &self.identifier_storage_name,
                        false,
                        Namespace::Core,
                    )),
                    Some(part) => {
                        let sub = self.attribute(first)?.sub_attribute(part)?;
                        Some(ResolvedAttribute::plain(
                            &sub.storage_name,
                            sub.is_complex(),
                            Namespace::Core,
                        ))
                    }
                };
            }
        }

        let attribute = self.attribute(first)?;
        match second {
            None => Some(ResolvedAttribute::plain(
                &attribute.storage_name,
                attribute.is_complex(),
                Namespace::Core,
            )),
            Some(part) => {
                if !attribute.is_complex() {
                    return None;
                }
                let sub = attribute.sub_attribute(part)?;
                Some(ResolvedAttribute {
                    backend_name: attribute.storage_name.clone(),
                    sub_key: Some(sub.storage_name.clone()),
                    complex: true,
                    namespace: Namespace::Core,
                })
            }
        }
    }
}
