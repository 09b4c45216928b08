use cardstream_backend::domain::content::{ContentProvider, ContentSource, ProviderError};
use cardstream_backend::infrastructure::providers::{
    build_http_client, CommunityClient, GeneratedClient, GeneratedEndpoint,
};
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;

use crate::e2e::helpers::upstream::{community_post, generated_item};

fn http_client() -> reqwest::Client {
    build_http_client(Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn community_client_requests_count_as_path_segment() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/gimme/7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "count": 1, "memes": [community_post("https://redd.it/z", "Z", 77)] }).to_string())
        .create_async()
        .await;
    let client = CommunityClient::new(format!("{}/gimme/", server.url()), http_client());

    let records = client.fetch(7).await.unwrap();

    mock.assert_async().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "https://redd.it/z");
    assert_eq!(records[0].popularity, Some(77));
    assert_eq!(records[0].source, ContentSource::Community);
}

#[tokio::test]
async fn community_client_clamps_count() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/gimme/50")
        .with_status(200)
        .with_body(json!({ "memes": [] }).to_string())
        .create_async()
        .await;
    let client = CommunityClient::new(format!("{}/gimme", server.url()), http_client());

    assert!(client.fetch(500).await.unwrap().is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn community_client_maps_status_and_decoding_failures() {
    let mut server = Server::new_async().await;
    let _missing = server.mock("GET", "/gimme/3").with_status(404).create_async().await;
    let _garbage = server
        .mock("GET", "/gimme/4")
        .with_status(200)
        .with_body("<html>rate limited</html>")
        .create_async()
        .await;
    let client = CommunityClient::new(format!("{}/gimme", server.url()), http_client());

    assert_eq!(client.fetch(3).await, Err(ProviderError::BadStatusCode(404)));
    assert!(matches!(client.fetch(4).await, Err(ProviderError::Decoding(_))));
}

#[tokio::test]
async fn community_client_maps_transport_failure() {
    // Nothing listens on the discard port
    let client = CommunityClient::new("http://127.0.0.1:9/gimme".to_string(), http_client());

    assert!(matches!(
        client.fetch(3).await,
        Err(ProviderError::ProviderFailed(_))
    ));
}

#[tokio::test]
async fn generated_client_sends_bearer_token_and_limit() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/memes/latest")
        .match_query(Matcher::UrlEncoded("limit".into(), "13".into()))
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([generated_item("g1", 5), generated_item("g2", 6)]).to_string())
        .create_async()
        .await;
    let client = GeneratedClient::new(
        format!("{}/memes", server.url()),
        Some("secret-token".to_string()),
        GeneratedEndpoint::Latest,
        http_client(),
    );

    let records = client.fetch(13).await.unwrap();

    mock.assert_async().await;
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["g1", "g2"]);
    assert!(records.iter().all(|r| r.source == ContentSource::Generated));
    assert_eq!(client.name(), "generated-latest");
}

#[tokio::test]
async fn generated_client_without_token_never_calls_upstream() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let client = GeneratedClient::new(
        format!("{}/memes", server.url()),
        None,
        GeneratedEndpoint::Trending,
        http_client(),
    );

    assert_eq!(client.fetch(10).await, Err(ProviderError::MissingCredential));
    mock.assert_async().await;
}

#[tokio::test]
async fn generated_client_maps_unauthorized_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/memes/trending")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;
    let client = GeneratedClient::new(
        format!("{}/memes", server.url()),
        Some("expired".to_string()),
        GeneratedEndpoint::Trending,
        http_client(),
    );

    assert_eq!(client.fetch(10).await, Err(ProviderError::BadStatusCode(401)));
}
