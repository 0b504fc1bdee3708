//! Tests for the allow-listed tokens listing and its client-side cache.

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use canopy_sdk::prelude::*;

fn tokens_body() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "tokens": [
            {
                "id": "b5a7c188",
                "name": "Wrapped Matic",
                "symbol": "WMATIC",
                "decimals": 18,
                "contractAddress": "0x9c3C9283D3e44854697Cd22D3Faa240Cfb032889",
                "createdAt": "2026-02-01T10:00:00Z"
            },
            {
                "id": "0d2f61a9",
                "name": "USD Coin",
                "symbol": "USDC",
                "decimals": 6,
                "contractAddress": "0x2058A9D7613eEE744279e3856Ef0eAda5FCbaA7e",
                "createdAt": "2026-01-15T08:30:00Z"
            }
        ]
    })
}

#[tokio::test]
async fn lists_tokens_in_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tokens/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tokens_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = CanopyClient::builder()
        .base_url(&server.uri())
        .build()
        .unwrap();

    let tokens = client.tokens().all().await.unwrap();
    assert_eq!(tokens.len(), 2);
    // Newest first, as the server orders them.
    assert_eq!(tokens[0].symbol, "WMATIC");
    assert_eq!(tokens[1].symbol, "USDC");
    assert_eq!(tokens[1].decimals, 6);
}

#[tokio::test]
async fn second_call_within_ttl_is_served_from_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tokens/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tokens_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = CanopyClient::builder()
        .base_url(&server.uri())
        .tokens_cache_ttl(Duration::from_secs(60))
        .build()
        .unwrap();

    let first = client.tokens().all().await.unwrap();
    let second = client.tokens().all().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn invalidate_forces_a_refetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tokens/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tokens_body()))
        .expect(2)
        .mount(&server)
        .await;

    let client = CanopyClient::builder()
        .base_url(&server.uri())
        .build()
        .unwrap();

    client.tokens().all().await.unwrap();
    client.tokens().invalidate().await;
    client.tokens().all().await.unwrap();
}
