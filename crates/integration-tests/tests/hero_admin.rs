//! Hero admin preview form.

use anfa_integration_tests::TestContext;
use reqwest::StatusCode;

#[tokio::test]
async fn test_form_prefilled_with_defaults() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get("/admin/hero").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("value=\"Now Dropping\""));
    assert!(!body.contains("Preview updated."));
}

#[tokio::test]
async fn test_submit_updates_preview() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx
        .post_form(
            "/admin/hero",
            &[
                ("status", "Coming Soon"),
                ("drop_label", "Desert Bloom"),
                ("release_window", "Mar 01 to Mar 20"),
                ("title", "Desert Bloom"),
                ("description", "Hand-dyed silks."),
                ("cta_label", "Shop the drop"),
                ("image", "https://cdn.example.com/bloom.webp"),
            ],
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Preview updated. Connect an API or CMS to persist this hero."));
    assert!(body.contains("Coming Soon"));
    assert!(body.contains("https://cdn.example.com/bloom.webp"));

    let (_, body) = ctx.get("/admin/hero").await;
    assert!(body.contains("value=\"Coming Soon\""));
    assert!(!body.contains("Preview updated."));

    let (_, home) = ctx.get("/").await;
    assert!(home.contains("Now Dropping"));
}
