//! Groups: collections of principals that receive roles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Principal, PrincipalInput, Role};

/// A group as returned by the list and create endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    /// Group identifier.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub uuid: String,
    /// Unique name.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Number of principals in the group.
    #[serde(rename = "principalCount")]
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub principal_count: u32,
    /// Number of roles attached to the group.
    #[serde(rename = "roleCount")]
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub role_count: u32,
    /// Whether every principal is implicitly a member.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub platform_default: bool,
    /// Whether every org admin is implicitly a member.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub admin_default: bool,
    /// Whether the group is managed by the service.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub system: bool,
    /// When the group was created.
    pub created: Option<DateTime<Utc>>,
    /// When the group was last modified.
    pub modified: Option<DateTime<Utc>>,
}

/// A group with its roles and principals embedded.
///
/// Returned after a membership change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupWithPrincipalAndRoles {
    /// Group identifier.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub uuid: String,
    /// Unique name.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Whether every principal is implicitly a member.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub platform_default: bool,
    /// Whether every org admin is implicitly a member.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub admin_default: bool,
    /// Whether the group is managed by the service.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub system: bool,
    /// Roles attached to the group.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub roles: Vec<Role>,
    /// Number of roles attached to the group.
    #[serde(rename = "roleCount")]
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub role_count: u32,
    /// Members of the group.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub principals: Vec<Principal>,
    /// When the group was created.
    pub created: Option<DateTime<Utc>>,
    /// When the group was last modified.
    pub modified: Option<DateTime<Utc>>,
}

/// Request body for creating a group.
///
/// ```rust
/// use rbac_client::GroupInput;
///
/// let input = GroupInput::builder().name("burrito-fans").build();
/// assert!(input.description.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
pub struct GroupInput {
    /// Unique name.
    #[builder(into)]
    pub name: String,
    /// Optional description; sent as `null` when absent.
    #[builder(into)]
    pub description: Option<String>,
}

/// Request body for adding principals to a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddUserToGroupInput {
    /// Principals to add.
    pub principals: Vec<PrincipalInput>,
}

impl AddUserToGroupInput {
    /// Builds the body from a list of usernames.
    pub fn from_usernames<I, S>(usernames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            principals: usernames.into_iter().map(PrincipalInput::new).collect(),
        }
    }
}

/// Request body for attaching roles to a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRoleToGroupInput {
    /// UUIDs of the roles to attach.
    pub roles: Vec<String>,
}

impl AddRoleToGroupInput {
    /// Builds the body from a list of role UUIDs.
    pub fn new<I, S>(role_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: role_ids.into_iter().map(Into::into).collect(),
        }
    }
}
