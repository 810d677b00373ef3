//! Role management integration tests.

use rbac_client::{Access, Client, ErrorKind, ResourceDefinitionFilter, RoleInput};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TestFixture, api_path};

#[tokio::test]
async fn test_role_lifecycle() {
    let fixture = TestFixture::start().await.unwrap();

    Mock::given(method("POST"))
        .and(path(api_path("roles/")))
        .and(body_partial_json(serde_json::json!({
            "name": "burrito-eater",
            "access": [{
                "permission": "chipotle:burrito:eat",
                "resourceDefinitions": [{
                    "attributeFilter": {"key": "beanType", "operation": "equal", "value": "black"}
                }]
            }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "uuid": "7b3f5c2e-0000-4000-8000-000000000001",
            "name": "burrito-eater",
            "display_name": "burrito-eater",
            "access": [{"permission": "chipotle:burrito:eat", "resourceDefinitions": []}],
            "accessCount": 1,
            "created": "2024-03-01T12:00:00.000000Z"
        })))
        .expect(1)
        .mount(&fixture.server)
        .await;

    Mock::given(method("GET"))
        .and(path(api_path("roles/")))
        .and(query_param("username", "rick"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meta": {"count": 1, "limit": 100, "offset": 0},
            "links": {"first": "/api/rbac/v1/roles/?limit=100&offset=0", "next": null},
            "data": [{"uuid": "7b3f5c2e-0000-4000-8000-000000000001", "name": "burrito-eater"}]
        })))
        .expect(1)
        .mount(&fixture.server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(api_path("roles/7b3f5c2e-0000-4000-8000-000000000001/")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let ctx = fixture.ctx();
    let roles = fixture.client.roles();

    let input = RoleInput::builder()
        .name("burrito-eater")
        .access(vec![
            Access::new("chipotle:burrito:eat")
                .with_resource_definition(ResourceDefinitionFilter::new("beanType", "equal", "black")),
        ])
        .build();
    let created = roles.create(&ctx, &input).await.unwrap();
    assert_eq!(created.access_count, 1);
    assert!(created.created.is_some());

    let listed = roles.list(&ctx, "rick").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].uuid, created.uuid);

    roles.delete(&ctx, &created.uuid).await.unwrap();
}

#[tokio::test]
async fn test_list_roles_status_sets_are_per_kind() {
    let fixture = TestFixture::start().await.unwrap();
    // 201 counts as success for creates only.
    Mock::given(method("GET"))
        .and(path(api_path("roles/")))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"data": []})))
        .mount(&fixture.server)
        .await;

    let err = fixture.client.roles().list(&fixture.ctx(), "").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert_eq!(err.status(), Some(201));
}

#[tokio::test]
async fn test_delete_role_rejects_ok() {
    let fixture = TestFixture::start().await.unwrap();
    Mock::given(method("DELETE"))
        .and(path(api_path("roles/r1/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"deleted": true})))
        .mount(&fixture.server)
        .await;

    let err = fixture.client.roles().delete(&fixture.ctx(), "r1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert_eq!(err.status(), Some(200));
    assert!(err.body().is_none());
}

#[tokio::test]
async fn test_unset_transport_fails_before_io() {
    let fixture = TestFixture::start().await.unwrap();
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&fixture.server)
        .await;

    let client = Client::builder()
        .url(fixture.server.uri())
        .application("chipotle")
        .without_http_client()
        .build()
        .unwrap();

    let err = client.roles().list(&fixture.ctx(), "").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(
        err.to_string()
            .starts_with("failed to list roles: request to RBAC service failed: configuration error")
    );
}

#[tokio::test]
async fn test_connection_refused() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = Client::new(format!("http://127.0.0.1:{}", port), "chipotle").unwrap();

    let err = client
        .roles()
        .list(&rbac_client::RequestContext::new("identity"), "")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.status().is_none());
}
