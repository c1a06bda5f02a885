//! Compilation of filter trees into directory filter strings.

use super::config::{CompilerConfig, LiteralEscaping};
use super::fragment;
use super::node::FilterNode;
use super::operator::Operator;
use crate::error::{FilterError, FilterResult};
use crate::schema::resolve::is_urn_qualified;
use crate::schema::{ResourceSchema, SchemaRegistry};

use log::{debug, trace};
use std::borrow::Cow;
use std::sync::Arc;

/// Compiles [`FilterNode`] trees into directory filters.
///
/// The compiler holds no mutable state; a single instance can serve
/// concurrent compilations from many threads.
///
/// # Example
///
/// ```rust
/// use scim_directory_filter::{FilterCompiler, FilterNode, SchemaRegistry};
/// use std::sync::Arc;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let compiler = FilterCompiler::new(Arc::new(SchemaRegistry::new()?));
/// let filter = FilterNode::compare("displayName", "eq", "Admins");
/// assert_eq!(compiler.compile(&filter, "Group")?, "cn=Admins");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FilterCompiler {
    registry: Arc<SchemaRegistry>,
    config: CompilerConfig,
}

/// Builder for [`FilterCompiler`].
#[derive(Debug)]
pub struct FilterCompilerBuilder {
    registry: Arc<SchemaRegistry>,
    config: CompilerConfig,
}

impl FilterCompilerBuilder {
    /// Replace the whole configuration.
    pub fn config(mut self, config: CompilerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn literal_escaping(mut self, escaping: LiteralEscaping) -> Self {
        self.config.literal_escaping = escaping;
        self
    }

    pub fn build(self) -> FilterCompiler {
        FilterCompiler {
            registry: self.registry,
            config: self.config,
        }
    }
}

impl FilterCompiler {
    /// Create a compiler with the default configuration.
    pub fn new(registry: Arc<SchemaRegistry>) -> Self {
        Self::builder(registry).build()
    }

    pub fn builder(registry: Arc<SchemaRegistry>) -> FilterCompilerBuilder {
        FilterCompilerBuilder {
            registry,
            config: CompilerConfig::default(),
        }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compile `node` for `resource_type` into a directory filter string.
    ///
    /// Either the whole tree compiles or an error is returned; there are no
    /// partial results.
    pub fn compile(&self, node: &FilterNode, resource_type: &str) -> FilterResult<String> {
        let resource = self.registry.require(resource_type)?;
        let compiled = self.compile_node(node, resource, None)?;
        debug!(
            "Compiled {} filter '{}' to '{}'",
            resource.resource_type(),
            node,
            compiled
        );
        Ok(compiled)
    }

    /// `scope` is the prefix of the innermost enclosing grouping, if any.
    fn compile_node(
        &self,
        node: &FilterNode,
        resource: &ResourceSchema,
        scope: Option<&str>,
    ) -> FilterResult<String> {
        match node {
            FilterNode::Presence { path } => self.presence(&scoped_path(path, scope), resource),
            FilterNode::Comparison {
                path,
                operator,
                value,
            } => {
                let operator: Operator = operator.parse()?;
                let path = scoped_path(path, scope);
                if operator == Operator::Present {
                    self.presence(&path, resource)
                } else {
                    self.comparison(&path, operator, value, resource)
                }
            }
            FilterNode::Grouping { prefix, expression } => {
                trace!("Entering grouping scope '{}'", prefix);
                self.compile_node(expression, resource, Some(prefix.as_str()))
            }
            FilterNode::And(left, right) => Ok(format!(
                "&({})({})",
                self.compile_node(left, resource, scope)?,
                self.compile_node(right, resource, scope)?
            )),
            FilterNode::Or(left, right) => Ok(format!(
                "|({})({})",
                self.compile_node(left, resource, scope)?,
                self.compile_node(right, resource, scope)?
            )),
            FilterNode::Not(expression) => Ok(format!(
                "!({})",
                self.compile_node(expression, resource, scope)?
            )),
        }
    }

    fn presence(&self, path: &str, resource: &ResourceSchema) -> FilterResult<String> {
        let resolved = resource.resolve(path)?;
        Ok(match &resolved.sub_key {
            Some(sub_key) => fragment::presence(&resolved.backend_name, sub_key),
            None => Operator::Present.render(&resolved.backend_name, ""),
        })
    }

    fn comparison(
        &self,
        path: &str,
        operator: Operator,
        value: &str,
        resource: &ResourceSchema,
    ) -> FilterResult<String> {
        let resolved = resource.resolve(path)?;
        let value = self.config.literal_escaping.apply(value);

        match &resolved.sub_key {
            None => Ok(operator.render(&resolved.backend_name, &value)),
            Some(sub_key) => {
                let pattern = fragment::pattern(sub_key, operator, &value).ok_or_else(|| {
                    FilterError::unsupported_for_complex_path(operator.token(), path)
                })?;
                trace!(
                    "Fragment pattern for '{}' on carrier '{}': {}",
                    path, resolved.backend_name, pattern
                );
                Ok(operator.render(&resolved.backend_name, &pattern))
            }
        }
    }
}

/// Qualify a single unqualified segment with the enclosing grouping prefix.
fn scoped_path<'a>(path: &'a str, scope: Option<&str>) -> Cow<'a, str> {
    match scope {
        Some(prefix) if !path.contains('.') && !is_urn_qualified(path) => {
            Cow::Owned(format!("{prefix}.{path}"))
        }
        _ => Cow::Borrowed(path),
    }
}
