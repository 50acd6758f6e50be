//! Bag arithmetic across session-backed form posts.

use anfa_integration_tests::TestContext;
use reqwest::StatusCode;

fn summary(body: &str, testid: &str) -> String {
    let marker = format!("data-testid=\"{testid}\">");
    let start = body.find(&marker).map(|i| i + marker.len()).unwrap_or_default();
    body.get(start..)
        .and_then(|rest| rest.split('<').next())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn test_seeded_bag_totals() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get("/bag").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary(&body, "subtotal"), "2,460 AED");
    assert_eq!(summary(&body, "shipping"), "45 AED");
    assert_eq!(summary(&body, "total"), "2,505 AED");
}

#[tokio::test]
async fn test_increment_persists_in_session() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.post_form("/bag/update", &[("id", "1"), ("delta", "1")]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary(&body, "subtotal"), "3,940 AED");

    let (_, body) = ctx.get("/bag").await;
    assert_eq!(summary(&body, "total"), "3,985 AED");
}

#[tokio::test]
async fn test_decrement_clamps_at_one() {
    let ctx = TestContext::new().await;
    let (_, body) = ctx.post_form("/bag/update", &[("id", "2"), ("delta", "-1")]).await;
    assert_eq!(summary(&body, "subtotal"), "2,460 AED");
    assert_eq!(summary(&body, "total"), "2,505 AED");
}

#[tokio::test]
async fn test_remove_then_empty() {
    let ctx = TestContext::new().await;
    let (_, body) = ctx.post_form("/bag/remove", &[("id", "1")]).await;
    assert_eq!(summary(&body, "subtotal"), "980 AED");
    assert_eq!(summary(&body, "total"), "1,025 AED");

    let (_, body) = ctx.post_form("/bag/remove", &[("id", "2")]).await;
    assert_eq!(summary(&body, "shipping"), "0 AED");
    assert_eq!(summary(&body, "total"), "0 AED");
    assert!(body.contains("Your bag is empty."));
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let first = TestContext::new().await;
    first.post_form("/bag/remove", &[("id", "1")]).await;

    let second = TestContext::new().await;
    let (_, body) = second.get("/bag").await;
    assert_eq!(summary(&body, "total"), "2,505 AED");
}

#[tokio::test]
async fn test_add_catalog_product() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx
        .post_form(
            "/bag/add",
            &[("handle", "monolith-jacket"), ("size", "L"), ("quantity", "2")],
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Monolith Jacket"));
    assert!(body.contains("Size L"));
    assert_eq!(summary(&body, "subtotal"), "6,760 AED");
    assert_eq!(summary(&body, "total"), "6,805 AED");
}

#[tokio::test]
async fn test_add_demo_look() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.post_form("/bag/add", &[("handle", "demo-look")]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary(&body, "subtotal"), "4,940 AED");
}

#[tokio::test]
async fn test_add_unknown_product_is_not_found() {
    let ctx = TestContext::new().await;
    let (status, _) = ctx.post_form("/bag/add", &[("handle", "missing-piece")]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_update_is_bad_request() {
    let ctx = TestContext::new().await;
    let (status, _) = ctx.post_form("/bag/update", &[("id", "one"), ("delta", "1")]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_malformed_handle_is_bad_request() {
    let ctx = TestContext::new().await;
    let (status, _) = ctx.post_form("/bag/add", &[("handle", "two words")]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
