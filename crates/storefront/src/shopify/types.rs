//! Domain types for the storefront catalog.
//!
//! These types provide a clean, ergonomic API separate from the raw
//! GraphQL response shapes in `storefront::queries`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Placeholder shown when a product has no image.
pub const PLACEHOLDER_IMAGE: &str = "/static/images/placeholder.png";

/// Category used when Shopify returns an empty product type.
pub const DEFAULT_CATEGORY: &str = "Collection";

// =============================================================================
// Image Types
// =============================================================================

/// Product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image URL.
    pub url: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
}

impl Image {
    /// Create an image with alt text.
    #[must_use]
    pub fn new(url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt_text: Some(alt_text.into()),
        }
    }

    /// Create an image without alt text.
    #[must_use]
    pub fn bare(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt_text: None,
        }
    }

    /// The placeholder image, labelled with the product title.
    #[must_use]
    pub fn placeholder(title: &str) -> Self {
        Self::new(PLACEHOLDER_IMAGE, title)
    }

    /// Alt text, falling back to the given title.
    #[must_use]
    pub fn alt_or<'a>(&'a self, title: &'a str) -> &'a str {
        self.alt_text.as_deref().unwrap_or(title)
    }
}

// =============================================================================
// Product Types
// =============================================================================

/// A displayable catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Shopify global ID (e.g., `gid://shopify/Product/123`).
    pub id: String,
    /// URL handle (slug).
    pub handle: String,
    /// Product title.
    pub title: String,
    /// Plain-text description.
    pub description: String,
    /// Display category (Shopify product type).
    pub category: String,
    /// Lowest variant price, currency-agnostic.
    pub price: Decimal,
    /// Primary image.
    pub image: Image,
    /// Ordered gallery images.
    pub gallery: Vec<Image>,
}

impl Product {
    /// Gallery images for the detail page.
    ///
    /// The primary image comes first, followed by gallery images whose URL
    /// differs from it. Images with empty URLs are dropped.
    #[must_use]
    pub fn detail_images(&self) -> Vec<Image> {
        std::iter::once(&self.image)
            .chain(self.gallery.iter().filter(|img| img.url != self.image.url))
            .filter(|img| !img.url.is_empty())
            .cloned()
            .collect()
    }

    /// Secondary image shown when a product card is hovered.
    #[must_use]
    pub fn hover_image(&self) -> Option<&Image> {
        self.gallery.get(1)
    }
}
