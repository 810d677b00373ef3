//! # RBAC Client
//!
//! Typed async client for a role-based access control service.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rbac_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Create client
//!     let client = Client::new("http://localhost:8000/api/rbac/v1", "chipotle")?;
//!
//!     // Every call carries the end user's identity
//!     let ctx = RequestContext::new("eyJpZGVudGl0eSI6e319");
//!
//!     // Look up what the caller may do
//!     let access = client.access().get(&ctx, "").await?;
//!     println!("may read orders: {}", access.has_permission("chipotle:orders:read"));
//!
//!     // Manage roles and groups
//!     let group = client
//!         .groups()
//!         .create(&ctx, &GroupInput::builder().name("burrito-fans").build())
//!         .await?;
//!     client
//!         .groups()
//!         .add_principals(&ctx, &group.uuid, &AddUserToGroupInput::from_usernames(["rick"]))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Client Hierarchy**: `Client` → `AccessClient` / `RolesClient` / `GroupsClient`
//! - **Identity**: each call takes a [`RequestContext`] whose token is sent in
//!   the `x-rh-identity` header
//! - **One Page**: list operations return the first page only, sized by
//!   [`PageLimit`]
//! - **No Retries**: a failed call returns its error immediately
//!
//! ## Features
//!
//! - `rustls` (default): Use rustls for TLS
//! - `native-tls`: Use native TLS (OpenSSL on Linux, Secure Transport on macOS)
//! - `tracing` (default): Emit a client span per request

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod types;

// Endpoint clients
pub mod resources;

// Transport layer
pub mod transport;

mod user_agent;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, DEFAULT_PAGE_LIMIT, DEFAULT_TIMEOUT, PageLimit};
pub use context::{IDENTITY_HEADER, RequestContext};
pub use error::{Error, ErrorKind, Result, TransportCause};
pub use resources::{AccessClient, GroupsClient, RolesClient};
pub use transport::{CallKind, PaginatedEnvelope};
pub use types::{
    Access, AccessList, AddRoleToGroupInput, AddUserToGroupInput, Group, GroupInput,
    GroupWithPrincipalAndRoles, Principal, PrincipalInput, ResourceDefinition,
    ResourceDefinitionFilter, Role, RoleInput,
};
