//! Live catalog against a fake Storefront API.

use anfa_integration_tests::{TestContext, position, spawn};
use anfa_storefront::catalog::Catalog;
use anfa_storefront::shopify::StorefrontClient;
use axum::http::{StatusCode, header};
use axum::routing::{MethodRouter, post};
use axum::{Json, Router};
use secrecy::SecretString;
use serde_json::{Value, json};

async fn products() -> Json<Value> {
    Json(json!({
        "data": { "products": { "edges": [
            { "node": {
                "id": "gid://shopify/Product/11",
                "handle": "sand-dune-kaftan",
                "title": "Sand Dune Kaftan",
                "description": "Silk georgette kaftan.",
                "productType": "Kaftans",
                "featuredImage": { "url": "https://cdn.shopify.com/kaftan.jpg", "altText": "Front" },
                "images": { "edges": [
                    { "node": { "url": "https://cdn.shopify.com/kaftan.jpg", "altText": "Front" } },
                    { "node": { "url": "https://cdn.shopify.com/kaftan-back.jpg", "altText": null } }
                ]},
                "priceRange": { "minVariantPrice": { "amount": "1850.0" } }
            }},
            { "node": {
                "id": "gid://shopify/Product/12",
                "handle": "oasis-shirt",
                "title": "Oasis Shirt",
                "description": "",
                "productType": null,
                "featuredImage": null,
                "priceRange": { "minVariantPrice": { "amount": "640.0" } }
            }}
        ]}}
    }))
}

async fn outage() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream unavailable")
}

async fn graphql_errors() -> Json<Value> {
    Json(json!({ "errors": [{ "message": "Throttled" }] }))
}

async fn not_json() -> &'static str {
    "<html>maintenance</html>"
}

async fn throttled() -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    (StatusCode::TOO_MANY_REQUESTS, [(header::RETRY_AFTER, "2")], "slow down")
}

fn graphql(handler: MethodRouter) -> Router {
    Router::new().route("/api/2024-01/graphql.json", handler)
}

async fn live_catalog(router: Router) -> Catalog {
    let addr = spawn(router).await;
    let client = StorefrontClient::with_endpoint(
        format!("http://{addr}/api/2024-01/graphql.json"),
        SecretString::from("3f9a1c77e0b24d6e8c5b"),
    );
    Catalog::with_client(client)
}

#[tokio::test]
async fn test_live_catalog_renders_shopify_products() {
    let catalog = live_catalog(graphql(post(products))).await;
    let ctx = TestContext::with_catalog(catalog).await;

    let (_, body) = ctx.get("/catalog").await;
    assert!(body.contains("Catalog pulls live from Shopify."));
    assert!(body.contains("/catalog/sand-dune-kaftan"));
    assert!(!body.contains("/catalog/monolith-jacket"));

    let (_, body) = ctx.get("/catalog?sort=asc").await;
    assert!(position(&body, "/catalog/oasis-shirt") < position(&body, "/catalog/sand-dune-kaftan"));
}

#[tokio::test]
async fn test_live_product_page() {
    let catalog = live_catalog(graphql(post(products))).await;
    let ctx = TestContext::with_catalog(catalog).await;

    let (status, body) = ctx.get("/catalog/sand-dune-kaftan?image=1").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(body.contains("1,850 AED"));
    assert!(body.contains("https://cdn.shopify.com/kaftan-back.jpg"));
}

/// Render `/catalog` against a failing store and check the mock capsule is
/// served and labelled as such.
async fn assert_mock_fallback(router: Router) {
    let ctx = TestContext::with_catalog(live_catalog(router).await).await;

    let (status, body) = ctx.get("/catalog").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(body.contains("/catalog/contour-bustier-dress"));
    assert!(body.contains("/catalog/nomad-trouser"));
    assert!(body.contains("/catalog/monolith-jacket"));
    assert!(body.contains("browsing our mock capsule"));
    assert!(!body.contains("Catalog pulls live from Shopify."));
}

#[tokio::test]
async fn test_failed_fetch_falls_back_to_mock() {
    assert_mock_fallback(graphql(post(outage))).await;
}

#[tokio::test]
async fn test_graphql_errors_fall_back_to_mock() {
    assert_mock_fallback(graphql(post(graphql_errors))).await;
}

#[tokio::test]
async fn test_non_json_response_falls_back_to_mock() {
    assert_mock_fallback(graphql(post(not_json))).await;
}

#[tokio::test]
async fn test_rate_limited_falls_back_to_mock() {
    assert_mock_fallback(graphql(post(throttled))).await;
}
