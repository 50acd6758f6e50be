//! Shopify Storefront API client.
//!
//! Only the catalog listing is fetched. The access token is the public
//! Storefront token, sent as `X-Shopify-Storefront-Access-Token`. Nothing
//! is cached; every catalog render issues one query.
//!
//! Failures are reported as [`ShopifyError`] so the catalog can log why it
//! fell back to mock data.
//!
//! ```rust,ignore
//! use anfa_storefront::shopify::StorefrontClient;
//!
//! let client = StorefrontClient::new(&shopify_config);
//! let products = client.get_products(20).await?;
//! ```

mod storefront;
pub mod types;

pub use storefront::StorefrontClient;
pub use types::*;

use thiserror::Error;

/// Why a Storefront API call produced no catalog.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// The request never got a response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Shopify answered with a non-success status code.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Response status code.
        status: u16,
        /// First part of the response body.
        body: String,
    },

    /// The response carried GraphQL errors.
    #[error("GraphQL errors: {}", join_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// The body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response had no product connection.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Shopify throttled the storefront token.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphQLError {
    pub message: String,
    /// Dotted response path, e.g. `products.edges.0`. Empty when absent.
    pub path: String,
}

impl GraphQLError {
    /// An error with a message and no path.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: String::new(),
        }
    }
}

impl From<graphql_client::Error> for GraphQLError {
    fn from(e: graphql_client::Error) -> Self {
        let path = e
            .path
            .unwrap_or_default()
            .into_iter()
            .map(|fragment| match fragment {
                graphql_client::PathFragment::Key(key) => key,
                graphql_client::PathFragment::Index(index) => index.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".");
        Self {
            message: e.message,
            path,
        }
    }
}

impl std::fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.message.is_empty(), self.path.is_empty()) {
            (false, true) => write!(f, "{}", self.message),
            (false, false) => write!(f, "{} (at {})", self.message, self.path),
            (true, false) => write!(f, "(no message) at {}", self.path),
            (true, true) => write!(f, "(no details)"),
        }
    }
}

fn join_graphql_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
