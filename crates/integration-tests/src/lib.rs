//! Integration tests for the Anfa storefront.
//!
//! Each test spawns the full application on an ephemeral local port and
//! drives it over HTTP with a cookie-keeping `reqwest` client, so bag and
//! hero preview state carries across requests the way it does in a browser.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p anfa-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_pages` - Home, catalog, product and chrome rendering
//! - `bag_flow` - Bag quantity arithmetic across form posts
//! - `hero_admin` - Hero preview form
//! - `shopify_catalog` - Live catalog against a fake Storefront API

use std::net::SocketAddr;
use std::path::PathBuf;

use anfa_storefront::catalog::Catalog;
use anfa_storefront::config::StorefrontConfig;
use anfa_storefront::{AppState, app};
use reqwest::Client;
use tokio::net::TcpListener;

/// A running storefront and a client bound to its session.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Spawn a storefront serving the bundled mock catalog.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot bind a local port.
    pub async fn new() -> Self {
        Self::with_catalog(Catalog::mock()).await
    }

    /// Spawn a storefront backed by the given catalog.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot bind a local port.
    pub async fn with_catalog(catalog: Catalog) -> Self {
        let state = AppState::with_catalog(test_config(), catalog);
        let addr = spawn(app(state)).await;

        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: format!("http://{addr}"),
        }
    }

    /// Absolute URL for a storefront path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET a page and return its status and body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn get(&self, path: &str) -> (reqwest::StatusCode, String) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed");
        let status = resp.status();
        (status, resp.text().await.expect("Failed to read body"))
    }

    /// POST a form (following redirects) and return the final status and body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> (reqwest::StatusCode, String) {
        let resp = self
            .client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request failed");
        let status = resp.status();
        (status, resp.text().await.expect("Failed to read body"))
    }
}

/// Storefront configuration for tests: no Shopify, no Sentry, real assets.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../storefront/static"),
        ..StorefrontConfig::default()
    }
}

/// Serve a router on an ephemeral local port.
///
/// # Panics
///
/// Panics if no local port can be bound.
pub async fn spawn(router: axum::Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

/// Byte offset of `needle` in `haystack`, for asserting render order.
///
/// # Panics
///
/// Panics if `needle` does not occur.
#[must_use]
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in page"))
}
