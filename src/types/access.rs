//! Permission grants returned by the access endpoint.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// A single attribute-based scoping rule, e.g. `beanType equal black`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceDefinitionFilter {
    /// The attribute being filtered on.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub key: String,
    /// The value to compare against.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub value: String,
    /// The comparison operation (e.g. `equal`, `in`).
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub operation: String,
}

impl ResourceDefinitionFilter {
    /// Creates a filter from its three parts.
    pub fn new(
        key: impl Into<String>,
        operation: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            operation: operation.into(),
        }
    }
}

/// Narrows where a permission applies.
///
/// On the wire this is `{ "attributeFilter": { "key", "value", "operation" } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceDefinition {
    /// The scoping rule.
    #[serde(rename = "attributeFilter")]
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub filter: ResourceDefinitionFilter,
}

impl From<ResourceDefinitionFilter> for ResourceDefinition {
    fn from(filter: ResourceDefinitionFilter) -> Self {
        Self { filter }
    }
}

/// One granted permission, optionally scoped by resource definitions.
///
/// An empty `resource_definitions` list means the permission is unscoped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Access {
    /// The permission string, `application:resource:verb`.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub permission: String,
    /// Scoping rules, in service order.
    #[serde(rename = "resourceDefinitions")]
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub resource_definitions: Vec<ResourceDefinition>,
}

impl Access {
    /// Creates an unscoped grant for `permission`.
    pub fn new(permission: impl Into<String>) -> Self {
        Self {
            permission: permission.into(),
            resource_definitions: Vec::new(),
        }
    }

    /// Adds a scoping rule.
    #[must_use]
    pub fn with_resource_definition(mut self, definition: impl Into<ResourceDefinition>) -> Self {
        self.resource_definitions.push(definition.into());
        self
    }

    /// Returns `true` if no scoping rules apply.
    pub fn is_unscoped(&self) -> bool {
        self.resource_definitions.is_empty()
    }
}

/// The grants held by an identity for one application.
///
/// An empty list is a valid "no access" answer and is distinct from a failed
/// call, which returns an [`Error`](crate::Error) instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessList(Vec<Access>);

impl AccessList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over the permission strings, in service order.
    pub fn permissions(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|a| a.permission.as_str())
    }

    /// Returns `true` if any grant carries exactly `permission`.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions().any(|p| p == permission)
    }

    /// Returns the filter values for `key` attached to `permission`.
    ///
    /// ```rust
    /// use rbac_client::{Access, AccessList, ResourceDefinitionFilter};
    ///
    /// let list = AccessList::from(vec![
    ///     Access::new("chipotle:burrito:eat")
    ///         .with_resource_definition(ResourceDefinitionFilter::new("beanType", "equal", "black")),
    /// ]);
    /// let values: Vec<&str> = list.resource_values("chipotle:burrito:eat", "beanType").collect();
    /// assert_eq!(values, vec!["black"]);
    /// ```
    pub fn resource_values<'a>(
        &'a self,
        permission: &'a str,
        key: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |a| a.permission == permission)
            .flat_map(|a| a.resource_definitions.iter())
            .filter(move |d| d.filter.key == key)
            .map(|d| d.filter.value.as_str())
    }

    /// Consumes the list, returning the grants.
    pub fn into_inner(self) -> Vec<Access> {
        self.0
    }
}

impl Deref for AccessList {
    type Target = [Access];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Access>> for AccessList {
    fn from(items: Vec<Access>) -> Self {
        Self(items)
    }
}

impl FromIterator<Access> for AccessList {
    fn from_iter<I: IntoIterator<Item = Access>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for AccessList {
    type Item = Access;
    type IntoIter = std::vec::IntoIter<Access>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AccessList {
    type Item = &'a Access;
    type IntoIter = std::slice::Iter<'a, Access>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
