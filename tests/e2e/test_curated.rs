use crate::e2e::helpers;

use cardstream_backend::domain::content::{ContentRecord, ContentSource};
use helpers::assertions::record_ids;
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_curated_records_in_stable_order(ctx: &TestContext) {

    let response = ctx.client.get("/api/curated").await.unwrap();

    response.assert_status(StatusCode::OK);
    let records: Vec<ContentRecord> = response.json().unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[0].id, "STONKS");
    assert!(records.iter().all(|r| r.source == ContentSource::Curated && !r.is_trending));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_shuffle_without_changing_membership(ctx: &TestContext) {

    let ordered = ctx.client.get("/api/curated").await.unwrap();
    let shuffled = ctx.client.get("/api/curated?shuffled=true").await.unwrap();

    shuffled.assert_status(StatusCode::OK);
    let mut expected = record_ids(ordered.body.as_ref().unwrap());
    let mut actual = record_ids(shuffled.body.as_ref().unwrap());
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_get_a_curated_record_by_id(ctx: &TestContext) {

    let response = ctx.client.get("/api/curated/doge").await.unwrap();

    response.assert_status(StatusCode::OK);
    let record: ContentRecord = response.json().unwrap();
    assert_eq!(record.id, "DOGE");
    assert_eq!(record.source.display_name(), "Curated Vault");
    assert!(record.timestamp.is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_for_unknown_curated_record(ctx: &TestContext) {

    let response = ctx.client.get("/api/curated/PEPE").await.unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("curated record PEPE");
}
