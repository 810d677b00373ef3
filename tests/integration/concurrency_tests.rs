//! Shared-client concurrency tests.

use std::time::Duration;

use rbac_client::RequestContext;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TestFixture, api_path};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_client_across_tasks() {
    let fixture = TestFixture::start().await.unwrap();

    for i in 0..8 {
        Mock::given(method("GET"))
            .and(path(api_path("groups/")))
            .and(header("x-rh-identity", format!("identity-{}", i).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"uuid": format!("g{}", i), "name": format!("group-{}", i)}]
            })))
            .expect(1)
            .mount(&fixture.server)
            .await;
    }

    let mut handles = Vec::new();
    for i in 0..8 {
        let client = fixture.client.clone();
        handles.push(tokio::spawn(async move {
            let ctx = RequestContext::new(format!("identity-{}", i));
            client.groups().list(&ctx, "").await
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let groups = handle.await.unwrap().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].uuid, format!("g{}", i));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_cancelling_one_call_leaves_others() {
    let fixture = TestFixture::start().await.unwrap();
    Mock::given(method("GET"))
        .and(path(api_path("roles/")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"data": []}))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&fixture.server)
        .await;

    let token = CancellationToken::new();
    let cancelled_ctx = fixture.ctx().with_cancellation(token.clone());
    let plain_ctx = fixture.ctx();

    let roles = fixture.client.roles();
    let cancelled = roles.list(&cancelled_ctx, "");
    let plain = roles.list(&plain_ctx, "");
    token.cancel();

    let (cancelled, plain) = tokio::join!(cancelled, plain);
    assert!(cancelled.unwrap_err().is_cancelled());
    assert!(plain.unwrap().is_empty());
}
