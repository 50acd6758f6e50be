//! Product image gallery state.
//!
//! The active image and zoom flag travel in the product page query string
//! (`?image=2&zoom=1`), so every gallery control is a plain link.

use crate::shopify::types::{Image, Product};

/// Direction of a swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
}

/// Gallery for a single product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    title: String,
    images: Vec<Image>,
    active: usize,
    zoomed: bool,
}

impl Gallery {
    /// Build a gallery. An empty image list shows the placeholder.
    #[must_use]
    pub fn new(title: impl Into<String>, images: Vec<Image>) -> Self {
        let title = title.into();
        let images = if images.is_empty() {
            vec![Image::placeholder(&title)]
        } else {
            images
        };
        Self {
            title,
            images,
            active: 0,
            zoomed: false,
        }
    }

    /// Gallery for a product page: primary image first, then distinct extras.
    #[must_use]
    pub fn for_product(product: &Product) -> Self {
        Self::new(product.title.clone(), product.detail_images())
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// All images; never empty.
    #[must_use]
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub const fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    fn last_index(&self) -> usize {
        self.images.len().saturating_sub(1)
    }

    /// The image currently shown.
    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub fn active_image(&self) -> &Image {
        // `images` is never empty, and `active` is always clamped.
        &self.images[self.active.min(self.last_index())]
    }

    /// Show the image at `index`; out-of-range indexes clamp to the last image.
    pub fn select(&mut self, index: usize) {
        self.active = index.min(self.last_index());
    }

    /// Step to the neighbouring image, staying within bounds.
    pub fn swipe(&mut self, direction: SwipeDirection) {
        self.active = match direction {
            SwipeDirection::Next => (self.active + 1).min(self.last_index()),
            SwipeDirection::Previous => self.active.saturating_sub(1),
        };
    }

    pub const fn open_zoom(&mut self) {
        self.zoomed = true;
    }

    pub const fn close_zoom(&mut self) {
        self.zoomed = false;
    }
}
