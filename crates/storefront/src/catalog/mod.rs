//! Catalog source: live Shopify products with a bundled mock fallback.
//!
//! Callers never observe a commerce error. Missing credentials or any
//! failed fetch serve [`mock_products`], and [`Listing::source`] records
//! which data the visitor is actually seeing.

pub mod filter;
mod mock;

pub use filter::{PriceFilter, SortOrder, filter_products, parse_bound};
pub use mock::mock_products;

use tracing::instrument;

use crate::config::ShopifyStorefrontConfig;
use crate::shopify::StorefrontClient;
use crate::shopify::types::Product;

/// Number of products requested from Shopify.
pub const CATALOG_PAGE_SIZE: i64 = 20;

/// Number of "you may also like" suggestions on a product page.
pub const SUGGESTION_COUNT: usize = 3;

/// Where a listing's products came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Live,
    Mock,
}

/// Products plus the source that produced them.
#[derive(Debug, Clone)]
pub struct Listing {
    pub products: Vec<Product>,
    pub source: CatalogSource,
}

impl Listing {
    fn mock() -> Self {
        Self {
            products: mock_products(),
            source: CatalogSource::Mock,
        }
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.source == CatalogSource::Live
    }
}

/// Product catalog for the storefront.
#[derive(Clone)]
pub struct Catalog {
    client: Option<StorefrontClient>,
}

impl Catalog {
    /// Create a catalog from optional Shopify configuration.
    #[must_use]
    pub fn new(config: Option<&ShopifyStorefrontConfig>) -> Self {
        Self {
            client: config.map(StorefrontClient::new),
        }
    }

    /// A catalog that always serves mock data.
    #[must_use]
    pub const fn mock() -> Self {
        Self { client: None }
    }

    /// A catalog backed by an explicit client.
    #[must_use]
    pub const fn with_client(client: StorefrontClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Whether a Shopify client is configured.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.client.is_some()
    }

    /// Catalog products, live when possible, tagged with their source.
    ///
    /// A failed fetch on a configured catalog yields a [`CatalogSource::Mock`]
    /// listing.
    #[instrument(skip(self), fields(live = self.is_live()))]
    pub async fn listing(&self) -> Listing {
        let Some(client) = &self.client else {
            // Startup already warned about missing credentials.
            tracing::debug!("Serving mock catalog data");
            return Listing::mock();
        };

        match client.get_products(CATALOG_PAGE_SIZE).await {
            Ok(products) => Listing {
                products,
                source: CatalogSource::Live,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Shopify catalog request failed. Falling back to mock catalog data.");
                Listing::mock()
            }
        }
    }

    /// All catalog products, live when possible.
    pub async fn products(&self) -> Vec<Product> {
        self.listing().await.products
    }

    /// Find a product by handle.
    pub async fn product_by_handle(&self, handle: &str) -> Option<Product> {
        self.products()
            .await
            .into_iter()
            .find(|product| product.handle == handle)
    }
}

/// Other products to suggest on a product page, in catalog order.
#[must_use]
pub fn suggestions(products: &[Product], current_handle: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.handle != current_handle)
        .take(SUGGESTION_COUNT)
        .cloned()
        .collect()
}
