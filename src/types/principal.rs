//! Principals (users) as known to the RBAC service.

use serde::{Deserialize, Serialize};

/// A user reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Principal {
    /// Login name.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub username: String,
    /// Given name.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub first_name: String,
    /// Family name.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub last_name: String,
    /// Contact address.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub email: String,
    /// Identity provider user ID.
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub user_id: String,
}

/// A principal reference used when adding users to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalInput {
    /// Login name of the user to add.
    pub username: String,
}

impl PrincipalInput {
    /// Creates a reference to `username`.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
