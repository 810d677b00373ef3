//! Permission lookups.

use crate::client::Client;
use crate::context::RequestContext;
use crate::transport::OutboundRequest;
use crate::types::{Access, AccessList};
use crate::Result;

/// Client for the access endpoint.
///
/// Access via `client.access()`.
///
/// ## Example
///
/// ```rust,no_run
/// # async fn run(client: rbac_client::Client) -> rbac_client::Result<()> {
/// use rbac_client::RequestContext;
///
/// let ctx = RequestContext::new("eyJpZGVudGl0eSI6e319");
/// let access = client.access().get(&ctx, "rick").await?;
///
/// for value in access.resource_values("chipotle:orders:read", "location") {
///     println!("may read orders at {}", value);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AccessClient {
    client: Client,
}

impl AccessClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns the permissions granted for the configured application.
    ///
    /// Queries `GET /access/` with the client's application name. When
    /// `username` is non-empty the lookup is made for that principal,
    /// otherwise for the identity in `ctx`.
    ///
    /// Only the first page is returned.
    pub async fn get(&self, ctx: &RequestContext, username: &str) -> Result<AccessList> {
        let config = self.client.config();
        let run = async {
            let request = OutboundRequest::get(config.endpoint("access/")?)
                .query("application", config.application())
                .query_if_present("username", username)
                .query("limit", &config.page_limit().to_string());
            self.client.transport().list::<Access>(ctx, request).await
        };

        run.await
            .map(AccessList::from)
            .map_err(|e| e.context("failed to get access"))
    }
}
