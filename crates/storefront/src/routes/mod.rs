//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//! GET  /static/*               - Static assets
//!
//! # Catalog
//! GET  /catalog                - Product listing (?min=&max=&sort=none|asc|desc)
//! GET  /catalog/demo-look      - Static demo product page
//! GET  /catalog/{handle}       - Product detail (?image=&zoom=&size=&qty=)
//!
//! # Bag (form posts, redirect to /bag)
//! GET  /bag                    - Bag page
//! POST /bag/add                - Add product to bag
//! POST /bag/update             - Change line quantity
//! POST /bag/remove             - Remove line
//!
//! # Admin
//! GET  /admin/hero             - Hero preview form
//! POST /admin/hero             - Replace hero preview
//! ```

pub mod admin;
pub mod bag;
pub mod catalog;
pub mod chrome;
pub mod home;

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware::{
    create_session_layer, request_id_middleware, security_headers_middleware,
};
use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/demo-look", get(catalog::demo_look))
        .route("/{handle}", get(catalog::show))
}

/// Create the bag routes router.
pub fn bag_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(bag::show))
        .route("/add", post(bag::add))
        .route("/update", post(bag::update))
        .route("/remove", post(bag::remove))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/hero", get(admin::hero_form).post(admin::update_hero))
}

/// Create all page routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/catalog", catalog_routes())
        .nest("/bag", bag_routes())
        .nest("/admin", admin_routes())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Assemble the full application: routes, static files, and middleware.
///
/// Sentry layers are added by the binary so tests can drive this router
/// without a Sentry client.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());
    let static_dir = ServeDir::new(&state.config().static_dir);

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", static_dir)
        .layer(session_layer)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    use crate::catalog::Catalog;
    use crate::config::StorefrontConfig;

    fn test_app() -> Router {
        app(AppState::with_catalog(
            StorefrontConfig::default(),
            Catalog::mock(),
        ))
    }

    async fn send(uri: &str) -> axum::response::Response {
        test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = send("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_responses_carry_request_id_and_security_headers() {
        let response = send("/health").await;
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let response = send("/catalog/not-a-product").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_catalog_page_renders() {
        let response = send("/catalog?sort=asc").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("/catalog/nomad-trouser"));
    }
}
