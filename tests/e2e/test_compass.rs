use crate::e2e::helpers;

use cardstream_backend::domain::compass::CompassPoint;
use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_place_stats_on_the_compass(ctx: &TestContext) {

    let response = ctx
        .client
        .get("/api/compass?virality=100&stonks=100&chaos=0")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let point: CompassPoint = response.json().unwrap();
    assert!((point.magnitude() - 1.0).abs() < 1e-9);
    assert!(point.x > point.y && point.y > 0.0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_stats_out_of_range(ctx: &TestContext) {

    let response = ctx
        .client
        .get("/api/compass?virality=101&stonks=50&chaos=50")
        .await
        .unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("virality must be between 0 and 100");

    let response = ctx
        .client
        .get("/api/compass?virality=50&stonks=-1&chaos=50")
        .await
        .unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("stonks");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_all_three_stats(ctx: &TestContext) {

    let response = ctx.client.get("/api/compass?virality=50").await.unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
}
