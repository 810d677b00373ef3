//! Roles: named bundles of permission grants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Access;

/// A role as returned by the RBAC service.
///
/// Fields the service omits decode to their defaults, and unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    /// Role identifier.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub uuid: String,
    /// Unique machine name.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub name: String,
    /// Human-facing name.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub display_name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Permissions granted by this role.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub access: Vec<Access>,
    /// Number of policies referencing this role.
    #[serde(rename = "policyCount")]
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub policy_count: u32,
    /// Number of access entries on this role.
    #[serde(rename = "accessCount")]
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub access_count: u32,
    /// Applications the role grants access to.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub applications: Vec<String>,
    /// Whether the role is managed by the service.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub system: bool,
    /// Whether the role is part of the platform default group.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub platform_default: bool,
    /// Whether the role is part of the admin default group.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub admin_default: bool,
    /// When the role was created.
    pub created: Option<DateTime<Utc>>,
    /// When the role was last modified.
    pub modified: Option<DateTime<Utc>>,
}

/// Request body for creating a role.
///
/// ## Example
///
/// ```rust
/// use rbac_client::{Access, RoleInput};
///
/// let input = RoleInput::builder()
///     .name("burrito-eater")
///     .display_name("Burrito Eater")
///     .description("Can eat burritos")
///     .access(vec![Access::new("chipotle:burrito:eat")])
///     .build();
/// assert_eq!(input.access.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, bon::Builder)]
pub struct RoleInput {
    /// Unique machine name.
    #[builder(into)]
    pub name: String,
    /// Human-facing name.
    #[builder(into, default)]
    pub display_name: String,
    /// Optional free-form description; sent as `null` when absent.
    #[builder(into)]
    pub description: Option<String>,
    /// Permissions to grant.
    #[builder(default)]
    pub access: Vec<Access>,
}
