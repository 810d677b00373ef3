//! Access lookup integration tests.

use std::time::Duration;

use rbac_client::{
    Access, AccessList, ErrorKind, IDENTITY_HEADER, RequestContext, ResourceDefinitionFilter,
};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{APPLICATION, IDENTITY, TestFixture, api_path};

const SIMPLE_ACCESS: &str = r#"{
    "data": [
      {
        "resourceDefinitions": [],
        "permission": "chipotle:burrito:order"
      },
      {
        "resourceDefinitions": [
          {
            "attributeFilter": {
              "key": "beanType",
              "value": "black",
              "operation": "equal"
            }
          }
        ],
        "permission": "chipotle:burrito:eat"
      }
    ]
}"#;

async fn mount_access(fixture: &TestFixture, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(api_path("access/")))
        .respond_with(response)
        .mount(&fixture.server)
        .await;
}

#[tokio::test]
async fn test_get_access_scenario() {
    let fixture = TestFixture::start().await.unwrap();
    mount_access(
        &fixture,
        ResponseTemplate::new(200).set_body_raw(SIMPLE_ACCESS, "application/json"),
    )
    .await;

    let access = fixture.client.access().get(&fixture.ctx(), "").await.unwrap();

    let expected: AccessList = vec![
        Access::new("chipotle:burrito:order"),
        Access::new("chipotle:burrito:eat")
            .with_resource_definition(ResourceDefinitionFilter::new("beanType", "equal", "black")),
    ]
    .into();
    assert_eq!(access, expected);
    assert!(access[0].is_unscoped());
    assert!(!access[1].is_unscoped());
}

#[tokio::test]
async fn test_get_access_empty() {
    let fixture = TestFixture::start().await.unwrap();
    mount_access(
        &fixture,
        ResponseTemplate::new(200).set_body_raw(r#"{"data": []}"#, "application/json"),
    )
    .await;

    let access = fixture.client.access().get(&fixture.ctx(), "").await.unwrap();
    assert_eq!(access, AccessList::new());
}

#[tokio::test]
async fn test_get_access_server_error() {
    let fixture = TestFixture::start().await.unwrap();
    mount_access(&fixture, ResponseTemplate::new(500)).await;

    let err = fixture.client.access().get(&fixture.ctx(), "").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.body(), Some(""));
}

#[tokio::test]
async fn test_get_access_request_params() {
    let identity = "aHR0cHM6Ly93d3cueW91dHViZS5jb20vd2F0Y2g/dj1kUXc0dzlXZ1hjUQo=";
    let fixture = TestFixture::start().await.unwrap();
    Mock::given(method("GET"))
        .and(path(api_path("access/")))
        .and(header(IDENTITY_HEADER, identity))
        .and(query_param("username", "rick"))
        .and(query_param("application", APPLICATION))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"data": []}"#, "application/json"))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let access = fixture
        .client
        .access()
        .get(&RequestContext::new(identity), "rick")
        .await
        .unwrap();
    assert!(access.is_empty());
}

#[tokio::test]
async fn test_get_access_malformed_body() {
    let fixture = TestFixture::start().await.unwrap();
    mount_access(
        &fixture,
        ResponseTemplate::new(200).set_body_raw("<html>Bad Gateway</html>", "text/html"),
    )
    .await;

    let err = fixture.client.access().get(&fixture.ctx(), "").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.body(), Some("<html>Bad Gateway</html>"));
    assert!(err.to_string().starts_with("failed to get access: decode error: "));
}

#[tokio::test]
async fn test_get_access_cancelled_in_flight() {
    let fixture = TestFixture::start().await.unwrap();
    mount_access(
        &fixture,
        ResponseTemplate::new(200)
            .set_body_raw(r#"{"data": []}"#, "application/json")
            .set_delay(Duration::from_secs(30)),
    )
    .await;

    let token = CancellationToken::new();
    let ctx = RequestContext::new(IDENTITY).with_cancellation(token.clone());

    let access = fixture.client.access();
    let call = access.get(&ctx, "");
    let cancel = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    };
    let (result, ()) = tokio::join!(call, cancel);

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.is_cancelled());
    assert_eq!(
        err.context_chain().collect::<Vec<_>>(),
        vec!["failed to get access", "request to RBAC service failed"]
    );
}

#[tokio::test]
async fn test_get_access_timeout() {
    let fixture = TestFixture::start().await.unwrap();
    mount_access(
        &fixture,
        ResponseTemplate::new(200)
            .set_body_raw(r#"{"data": []}"#, "application/json")
            .set_delay(Duration::from_secs(30)),
    )
    .await;

    let ctx = fixture.ctx().with_timeout(Duration::from_millis(100));
    let err = fixture.client.access().get(&ctx, "").await.unwrap_err();
    assert!(err.is_timeout());
    assert!(!err.is_cancelled());
}
