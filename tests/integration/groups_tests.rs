//! Group management integration tests.

use rbac_client::{AddRoleToGroupInput, AddUserToGroupInput, ErrorKind, GroupInput};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TestFixture, api_path};

const GROUP_ID: &str = "0b1c2d3e-4f50-6172-8394-a5b6c7d8e9f0";

#[tokio::test]
async fn test_group_membership_flow() {
    let fixture = TestFixture::start().await.unwrap();

    Mock::given(method("POST"))
        .and(path(api_path("groups/")))
        .and(body_json(serde_json::json!({"name": "burrito-fans", "description": null})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "uuid": GROUP_ID,
            "name": "burrito-fans",
            "principalCount": 0,
            "roleCount": 0
        })))
        .expect(1)
        .mount(&fixture.server)
        .await;

    Mock::given(method("POST"))
        .and(path(api_path(&format!("groups/{}/principals/", GROUP_ID))))
        .and(body_json(serde_json::json!({"principals": [{"username": "rick"}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "uuid": GROUP_ID,
            "name": "burrito-fans",
            "principals": [{
                "username": "rick",
                "first_name": "Rick",
                "last_name": "Sanchez",
                "email": "rick@example.com"
            }],
            "roles": []
        })))
        .expect(1)
        .mount(&fixture.server)
        .await;

    Mock::given(method("POST"))
        .and(path(api_path(&format!("groups/{}/roles/", GROUP_ID))))
        .and(body_json(serde_json::json!({"roles": ["r1", "r2"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meta": {"count": 2},
            "data": [{"uuid": "r1", "name": "burrito-eater"}, {"uuid": "r2", "name": "taco-eater"}]
        })))
        .expect(1)
        .mount(&fixture.server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(api_path(&format!("groups/{}/", GROUP_ID))))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let ctx = fixture.ctx();
    let groups = fixture.client.groups();

    let group = groups
        .create(&ctx, &GroupInput::builder().name("burrito-fans").build())
        .await
        .unwrap();
    assert_eq!(group.uuid, GROUP_ID);

    let with_members = groups
        .add_principals(&ctx, &group.uuid, &AddUserToGroupInput::from_usernames(["rick"]))
        .await
        .unwrap();
    assert_eq!(with_members.principals[0].last_name, "Sanchez");

    let roles = groups
        .add_roles(&ctx, &group.uuid, &AddRoleToGroupInput::new(["r1", "r2"]))
        .await
        .unwrap();
    let ids: Vec<&str> = roles.iter().map(|r| r.uuid.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r2"]);

    groups.delete(&ctx, &group.uuid).await.unwrap();
}

#[tokio::test]
async fn test_list_groups_null_data() {
    let fixture = TestFixture::start().await.unwrap();
    Mock::given(method("GET"))
        .and(path(api_path("groups/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": null})))
        .mount(&fixture.server)
        .await;

    let groups = fixture.client.groups().list(&fixture.ctx(), "").await.unwrap();
    assert!(groups.is_empty());
}

#[tokio::test]
async fn test_add_principals_forbidden() {
    let fixture = TestFixture::start().await.unwrap();
    Mock::given(method("POST"))
        .and(path(api_path("groups/g1/principals/")))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_string(r#"{"errors":[{"detail":"You do not have permission"}]}"#),
        )
        .mount(&fixture.server)
        .await;

    let err = fixture
        .client
        .groups()
        .add_principals(&fixture.ctx(), "g1", &AddUserToGroupInput::from_usernames(["rick"]))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert_eq!(err.status(), Some(403));
    assert!(err.body().unwrap().contains("You do not have permission"));
    assert_eq!(
        err.to_string(),
        "failed to add user to group: unexpected status: received status 403, body: \
         {\"errors\":[{\"detail\":\"You do not have permission\"}]}"
    );
}

#[tokio::test]
async fn test_long_error_body_is_truncated() {
    let fixture = TestFixture::start().await.unwrap();
    Mock::given(method("DELETE"))
        .and(path(api_path("groups/g1/")))
        .respond_with(ResponseTemplate::new(500).set_body_string("x".repeat(4096)))
        .mount(&fixture.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("groups/")))
        .respond_with(ResponseTemplate::new(500).set_body_string("x".repeat(4096)))
        .mount(&fixture.server)
        .await;

    let err = fixture.client.groups().list(&fixture.ctx(), "").await.unwrap_err();
    let body = err.body().unwrap();
    assert!(body.len() < 4096);
    assert!(body.ends_with("..."));

    // Deletes never read the body.
    let err = fixture.client.groups().delete(&fixture.ctx(), "g1").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.body().is_none());
}
