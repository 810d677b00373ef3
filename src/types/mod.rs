//! Wire records exchanged with the RBAC service.
//!
//! Field names match the service's JSON exactly, including its mix of
//! `snake_case` (`platform_default`) and `camelCase` (`roleCount`) keys.

mod access;
mod group;
mod nullable;
mod principal;
mod role;

pub use access::{Access, AccessList, ResourceDefinition, ResourceDefinitionFilter};
pub use group::{
    AddRoleToGroupInput, AddUserToGroupInput, Group, GroupInput, GroupWithPrincipalAndRoles,
};
pub use principal::{Principal, PrincipalInput};
pub use role::{Role, RoleInput};
