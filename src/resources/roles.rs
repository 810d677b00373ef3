//! Role management.

use crate::client::Client;
use crate::context::RequestContext;
use crate::transport::OutboundRequest;
use crate::types::{Role, RoleInput};
use crate::Result;

/// Client for role operations.
///
/// Access via `client.roles()`.
///
/// ## Example
///
/// ```rust,no_run
/// # async fn run(client: rbac_client::Client) -> rbac_client::Result<()> {
/// use rbac_client::{Access, RequestContext, RoleInput};
///
/// let ctx = RequestContext::new("eyJpZGVudGl0eSI6e319");
/// let roles = client.roles();
///
/// let role = roles
///     .create(
///         &ctx,
///         &RoleInput::builder()
///             .name("burrito-eater")
///             .access(vec![Access::new("chipotle:burritos:read")])
///             .build(),
///     )
///     .await?;
///
/// let mine = roles.list(&ctx, "rick").await?;
/// roles.delete(&ctx, &role.uuid).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct RolesClient {
    client: Client,
}

impl RolesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists roles, optionally only those held by `username`.
    ///
    /// Queries `GET /roles/`. An empty `username` lists all roles visible to
    /// the caller. Only the first page is returned.
    pub async fn list(&self, ctx: &RequestContext, username: &str) -> Result<Vec<Role>> {
        let config = self.client.config();
        let run = async {
            let request = OutboundRequest::get(config.endpoint("roles/")?)
                .query_if_present("username", username)
                .query("limit", &config.page_limit().to_string());
            self.client.transport().list(ctx, request).await
        };

        run.await.map_err(|e| e.context("failed to list roles"))
    }

    /// Fetches a single role by id, including its access list.
    pub async fn get(&self, ctx: &RequestContext, role_id: &str) -> Result<Role> {
        let run = async {
            let url = self.client.config().endpoint(&format!("roles/{}/", role_id))?;
            self.client
                .transport()
                .read(ctx, OutboundRequest::get(url))
                .await
        };

        run.await.map_err(|e| e.context("failed to get role"))
    }

    /// Creates a role.
    ///
    /// Encoding failures are reported before any request is sent.
    pub async fn create(&self, ctx: &RequestContext, input: &RoleInput) -> Result<Role> {
        let run = async {
            let url = self.client.config().endpoint("roles/")?;
            let request = OutboundRequest::post_json(url, input)?;
            self.client.transport().create(ctx, request).await
        };

        run.await.map_err(|e| e.context("failed to create role"))
    }

    /// Deletes a role. Succeeds only on `204 No Content`.
    pub async fn delete(&self, ctx: &RequestContext, role_id: &str) -> Result<()> {
        let run = async {
            let url = self.client.config().endpoint(&format!("roles/{}/", role_id))?;
            self.client
                .transport()
                .delete(ctx, OutboundRequest::delete(url))
                .await
        };

        run.await.map_err(|e| e.context("failed to delete role"))
    }
}
