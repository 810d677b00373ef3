//! Endpoint clients for the RBAC service.
//!
//! Each sub-client is reached from [`Client`](crate::Client) and holds a
//! cheap clone of it. Every operation takes a
//! [`RequestContext`](crate::RequestContext) carrying the caller's identity.
//!
//! List operations return a single page of at most
//! [`page_limit`](crate::ClientConfig::page_limit) elements; results past
//! the first page are not fetched.
//!
//! Errors are wrapped with the failing operation, so a group listing
//! rejected by the service renders as
//! `failed to list groups: unexpected status: received status 500`.

mod access;
mod groups;
mod roles;

pub use access::AccessClient;
pub use groups::GroupsClient;
pub use roles::RolesClient;
