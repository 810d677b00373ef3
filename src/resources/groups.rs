//! Group management and membership.

use crate::client::Client;
use crate::context::RequestContext;
use crate::transport::OutboundRequest;
use crate::types::{
    AddRoleToGroupInput, AddUserToGroupInput, Group, GroupInput, GroupWithPrincipalAndRoles, Role,
};
use crate::Result;

/// Client for group operations.
///
/// Access via `client.groups()`.
///
/// ## Example
///
/// ```rust,no_run
/// # async fn run(client: rbac_client::Client) -> rbac_client::Result<()> {
/// use rbac_client::{AddRoleToGroupInput, AddUserToGroupInput, GroupInput, RequestContext};
///
/// let ctx = RequestContext::new("eyJpZGVudGl0eSI6e319");
/// let groups = client.groups();
///
/// let group = groups
///     .create(&ctx, &GroupInput::builder().name("burrito-fans").build())
///     .await?;
///
/// groups
///     .add_principals(&ctx, &group.uuid, &AddUserToGroupInput::from_usernames(["rick"]))
///     .await?;
/// groups
///     .add_roles(&ctx, &group.uuid, &AddRoleToGroupInput::new(["role-uuid"]))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct GroupsClient {
    client: Client,
}

impl GroupsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists groups, optionally only those `username` belongs to.
    ///
    /// Queries `GET /groups/`. Only the first page is returned.
    pub async fn list(&self, ctx: &RequestContext, username: &str) -> Result<Vec<Group>> {
        let config = self.client.config();
        let run = async {
            let request = OutboundRequest::get(config.endpoint("groups/")?)
                .query_if_present("username", username)
                .query("limit", &config.page_limit().to_string());
            self.client.transport().list(ctx, request).await
        };

        run.await.map_err(|e| e.context("failed to list groups"))
    }

    /// Fetches a single group with its principals and roles.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        group_id: &str,
    ) -> Result<GroupWithPrincipalAndRoles> {
        let run = async {
            let url = self.client.config().endpoint(&format!("groups/{}/", group_id))?;
            self.client
                .transport()
                .read(ctx, OutboundRequest::get(url))
                .await
        };

        run.await.map_err(|e| e.context("failed to get group"))
    }

    /// Creates a group.
    pub async fn create(&self, ctx: &RequestContext, input: &GroupInput) -> Result<Group> {
        let run = async {
            let url = self.client.config().endpoint("groups/")?;
            let request = OutboundRequest::post_json(url, input)?;
            self.client.transport().create(ctx, request).await
        };

        run.await.map_err(|e| e.context("failed to create group"))
    }

    /// Deletes a group. Succeeds only on `204 No Content`.
    pub async fn delete(&self, ctx: &RequestContext, group_id: &str) -> Result<()> {
        let run = async {
            let url = self.client.config().endpoint(&format!("groups/{}/", group_id))?;
            self.client
                .transport()
                .delete(ctx, OutboundRequest::delete(url))
                .await
        };

        run.await.map_err(|e| e.context("failed to delete group"))
    }

    /// Adds principals to a group.
    ///
    /// Posts to `/groups/{id}/principals/` and returns the updated group.
    /// The service answers `200 OK` here; `201 Created` is accepted too.
    pub async fn add_principals(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        input: &AddUserToGroupInput,
    ) -> Result<GroupWithPrincipalAndRoles> {
        let run = async {
            let url = self
                .client
                .config()
                .endpoint(&format!("groups/{}/principals/", group_id))?;
            let request = OutboundRequest::post_json(url, input)?;
            self.client.transport().create(ctx, request).await
        };

        run.await.map_err(|e| e.context("failed to add user to group"))
    }

    /// Adds roles to a group.
    ///
    /// Posts to `/groups/{id}/roles/`; the response is a page of the roles
    /// now attached to the group.
    pub async fn add_roles(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        input: &AddRoleToGroupInput,
    ) -> Result<Vec<Role>> {
        let run = async {
            let url = self
                .client
                .config()
                .endpoint(&format!("groups/{}/roles/", group_id))?;
            let request = OutboundRequest::post_json(url, input)?;
            self.client.transport().create_paginated(ctx, request).await
        };

        run.await.map_err(|e| e.context("failed to add roles to group"))
    }
}
