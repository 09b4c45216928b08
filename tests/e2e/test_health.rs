use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {

    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert_eq!(body, "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &TestContext) {

    let first = ctx.client.get("/health").await.unwrap();
    let second = ctx.client.get("/health").await.unwrap();

    first.assert_header_exists("x-request-id");
    second.assert_header_exists("x-request-id");
    assert_ne!(first.header("x-request-id"), second.header("x-request-id"));
    assert!(uuid::Uuid::parse_str(first.header("x-request-id").unwrap()).is_ok());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_a_caller_supplied_request_id(ctx: &TestContext) {
    let id = "6f1c1f0e-3a5d-4c43-9a53-0b3f5f1b2a10";

    let response = ctx
        .client
        .get_with_headers("/health", &[("x-request-id", id)])
        .await
        .unwrap();

    response.assert_header("x-request-id", id);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_json_404_for_unknown_routes(ctx: &TestContext) {

    let response = ctx.client.get("/api/nope").await.unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("/api/nope")
        .assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_health_checks(ctx: &TestContext) {

    // Simulate multiple concurrent health checks
    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = ctx.client.clone();
        futures.push(async move { client.get("/health").await });
    }

    let results = futures::future::join_all(futures).await;

    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
    }
}
