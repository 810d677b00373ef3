//! Prelude module for convenient imports.
//!
//! ```rust
//! use rbac_client::prelude::*;
//! ```
//!
//! This provides access to:
//! - The client and its endpoint clients
//! - Request context
//! - Error types
//! - Wire records and request inputs

pub use crate::{
    client::{Client, ClientBuilder},
    config::PageLimit,
    context::RequestContext,
    error::{Error, ErrorKind, Result, TransportCause},
    resources::{AccessClient, GroupsClient, RolesClient},
    types::{
        Access, AccessList, AddRoleToGroupInput, AddUserToGroupInput, Group, GroupInput,
        GroupWithPrincipalAndRoles, Principal, ResourceDefinition, ResourceDefinitionFilter, Role,
        RoleInput,
    },
};
