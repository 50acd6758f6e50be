//! Size and quantity selection on the product page.

use serde::Deserialize;
use url::form_urlencoded;

use crate::models::gallery::Gallery;

/// Sizes offered for every product.
pub const SIZES: [&str; 3] = ["S", "M", "L"];

/// Size selected when none (or an unknown one) is given.
pub const DEFAULT_SIZE: &str = "M";

/// Raw product page query string: `?image=1&zoom=1&size=L&qty=2`.
///
/// Every field is a string so malformed numbers fall back to defaults
/// rather than rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    pub image: Option<String>,
    pub zoom: Option<String>,
    pub size: Option<String>,
    pub qty: Option<String>,
}

impl ProductQuery {
    /// Requested gallery index, zero when absent or malformed.
    #[must_use]
    pub fn image_index(&self) -> usize {
        self.image
            .as_deref()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Whether the zoom overlay is open.
    #[must_use]
    pub fn zoom_open(&self) -> bool {
        matches!(self.zoom.as_deref(), Some("1" | "true"))
    }

    /// Selected size and quantity.
    #[must_use]
    pub fn selection(&self) -> Selection {
        Selection::new(self.size.as_deref(), self.qty.as_deref())
    }
}

/// The size and quantity a visitor has picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub size: &'static str,
    pub quantity: u32,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            quantity: 1,
        }
    }
}

impl Selection {
    /// Parse from raw query values, falling back to defaults.
    #[must_use]
    pub fn new(size: Option<&str>, quantity: Option<&str>) -> Self {
        let size = size
            .and_then(|s| SIZES.iter().find(|candidate| candidate.eq_ignore_ascii_case(s.trim())))
            .copied()
            .unwrap_or(DEFAULT_SIZE);
        let quantity = quantity
            .and_then(|q| q.trim().parse::<u32>().ok())
            .unwrap_or(1)
            .max(1);
        Self { size, quantity }
    }

    /// Quantity after pressing "−".
    #[must_use]
    pub const fn decremented(&self) -> u32 {
        if self.quantity > 1 { self.quantity - 1 } else { 1 }
    }

    /// Quantity after pressing "+".
    #[must_use]
    pub const fn incremented(&self) -> u32 {
        self.quantity.saturating_add(1)
    }

    /// Bag line detail for this selection.
    #[must_use]
    pub fn detail(&self) -> String {
        format!("Size {}", self.size)
    }
}

/// View state carried between product page links.
///
/// Gallery links are rendered from a [`Gallery`] that has already been
/// stepped, zoomed, or unzoomed, so the query string always reflects the
/// gallery's own clamped state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLinks {
    base: String,
    image: usize,
    zoom: bool,
    selection: Selection,
}

impl ProductLinks {
    #[must_use]
    pub fn new(base: impl Into<String>, gallery: &Gallery, selection: Selection) -> Self {
        Self {
            base: base.into(),
            image: gallery.active_index(),
            zoom: gallery.is_zoomed(),
            selection,
        }
    }

    fn href(&self, image: usize, zoom: bool, size: &str, quantity: u32) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if image > 0 {
            query.append_pair("image", &image.to_string());
        }
        if zoom {
            query.append_pair("zoom", "1");
        }
        if size != DEFAULT_SIZE {
            query.append_pair("size", size);
        }
        if quantity != 1 {
            query.append_pair("qty", &quantity.to_string());
        }
        let query = query.finish();
        if query.is_empty() {
            self.base.clone()
        } else {
            format!("{}?{query}", self.base)
        }
    }

    /// Link that shows `gallery`'s active image and zoom state, keeping the
    /// current size and quantity.
    #[must_use]
    pub fn gallery(&self, gallery: &Gallery) -> String {
        self.href(
            gallery.active_index(),
            gallery.is_zoomed(),
            self.selection.size,
            self.selection.quantity,
        )
    }

    /// Link that selects `size`.
    #[must_use]
    pub fn size(&self, size: &str) -> String {
        self.href(self.image, self.zoom, size, self.selection.quantity)
    }

    /// Link that sets the quantity.
    #[must_use]
    pub fn quantity(&self, quantity: u32) -> String {
        self.href(self.image, self.zoom, self.selection.size, quantity)
    }
}
