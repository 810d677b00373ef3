//! Client types for the RBAC service.
//!
//! The client uses a small hierarchy:
//! - [`Client`]: Top-level client, owns configuration and the HTTP pool
//! - [`AccessClient`]: Permission lookups
//! - [`RolesClient`]: Role management
//! - [`GroupsClient`]: Group management and membership
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rbac_client::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let client = Client::new("http://localhost:8000/api/rbac/v1", "chipotle")?;
//! let ctx = RequestContext::new("eyJpZGVudGl0eSI6e319");
//!
//! let access = client.access().get(&ctx, "").await?;
//! if access.has_permission("chipotle:orders:read") {
//!     // ...
//! }
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::{ClientBuilder, HasApplication, HasUrl, NoApplication, NoUrl};

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::resources::{AccessClient, GroupsClient, RolesClient};
use crate::transport::Transport;
use crate::Result;

/// The RBAC service client.
///
/// Create one with [`Client::new()`] or [`Client::builder()`], then reach
/// the endpoints through [`access()`](Self::access),
/// [`roles()`](Self::roles) and [`groups()`](Self::groups).
///
/// ## Thread Safety
///
/// `Client` is `Clone` and thread-safe. Clones share the same immutable
/// configuration and connection pool, so one client can serve many
/// concurrent calls.
///
/// ## Example
///
/// ```rust,no_run
/// use rbac_client::{Client, RequestContext};
///
/// # async fn run() -> rbac_client::Result<()> {
/// let client = Client::new("http://localhost:8000/api/rbac/v1", "chipotle")?;
///
/// let client2 = client.clone();
/// tokio::spawn(async move {
///     let ctx = RequestContext::new("identity");
///     let _ = client2.roles().list(&ctx, "").await;
/// });
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientConfig>,
}

impl Client {
    /// Creates a client with default settings.
    ///
    /// Equivalent to `Client::builder().url(base_url).application(application).build()`.
    ///
    /// # Errors
    ///
    /// Returns a [`Configuration`](crate::ErrorKind::Configuration) error if
    /// the base URL is invalid.
    pub fn new(base_url: impl Into<String>, application: impl Into<String>) -> Result<Self> {
        Self::builder().url(base_url).application(application).build()
    }

    /// Creates a new client builder.
    pub fn builder() -> ClientBuilder<NoUrl, NoApplication> {
        ClientBuilder::new()
    }

    /// Returns the access lookup client.
    pub fn access(&self) -> AccessClient {
        AccessClient::new(self.clone())
    }

    /// Returns the role management client.
    pub fn roles(&self) -> RolesClient {
        RolesClient::new(self.clone())
    }

    /// Returns the group management client.
    pub fn groups(&self) -> GroupsClient {
        GroupsClient::new(self.clone())
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner
    }

    pub(crate) fn from_config(config: Arc<ClientConfig>) -> Self {
        Self { inner: config }
    }

    pub(crate) fn transport(&self) -> Transport<'_> {
        Transport::new(&self.inner)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url().as_str())
            .field("application", &self.inner.application())
            .finish_non_exhaustive()
    }
}
