//! Catalog listing and product detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::catalog::{self, PriceFilter, SortOrder, filter_products};
use crate::content::{self, DemoLook, ProductCard};
use crate::error::{AppError, Result};
use crate::filters;
use crate::models::controls::SIZES;
use crate::models::{Gallery, ProductLinks, ProductQuery, Selection, SwipeDirection};
use crate::routes::chrome::SiteChrome;
use crate::shopify::types::{Image, Product};
use crate::state::AppState;

/// Catalog filter query parameters.
///
/// Kept as raw strings so malformed numbers become absent bounds instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub min: Option<String>,
    pub max: Option<String>,
    pub sort: Option<String>,
}

/// A `<select>` option for the sort control.
#[derive(Debug, Clone)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

fn sort_options(current: SortOrder) -> Vec<SortOption> {
    SortOrder::ALL
        .iter()
        .map(|order| SortOption {
            value: order.as_param(),
            label: order.label(),
            selected: *order == current,
        })
        .collect()
}

/// Catalog listing template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/index.html")]
pub struct CatalogIndexTemplate {
    pub chrome: SiteChrome,
    pub cards: Vec<ProductCard>,
    /// Raw filter input, echoed back into the form.
    pub min: String,
    pub max: String,
    pub sort_options: Vec<SortOption>,
    pub live: bool,
}

/// Display the catalog with the requested price filter and sort.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CatalogQuery>,
) -> Result<CatalogIndexTemplate> {
    let min = query.min.unwrap_or_default();
    let max = query.max.unwrap_or_default();
    let sort = SortOrder::from_param(query.sort.as_deref().unwrap_or_default());

    let listing = state.catalog().listing().await;
    let cards = filter_products(&listing.products, PriceFilter::from_inputs(&min, &max), sort)
        .iter()
        .map(ProductCard::from)
        .collect();

    Ok(CatalogIndexTemplate {
        chrome: SiteChrome::load(&session, false).await?,
        cards,
        min,
        max,
        sort_options: sort_options(sort),
        live: listing.is_live(),
    })
}

/// A size button on the product page.
#[derive(Debug, Clone)]
pub struct SizeOption {
    pub label: &'static str,
    pub href: String,
    pub selected: bool,
}

/// A gallery slide with its thumbnail link.
#[derive(Debug, Clone)]
pub struct Slide {
    pub number: usize,
    pub image: Image,
    pub alt: String,
    pub href: String,
    pub active: bool,
}

/// Product page view state shared by the catalog and demo look pages.
pub struct ProductPanel {
    pub product: Product,
    pub gallery: Gallery,
    pub selection: Selection,
    pub links: ProductLinks,
    pub sizes: &'static [&'static str],
}

impl ProductPanel {
    /// Apply the query string's gallery and control state to a product.
    #[must_use]
    pub fn new(product: Product, query: &ProductQuery) -> Self {
        let mut gallery = Gallery::for_product(&product);
        gallery.select(query.image_index());
        if query.zoom_open() {
            gallery.open_zoom();
        }
        let selection = query.selection();
        let links = ProductLinks::new(
            format!("/catalog/{}", product.handle),
            &gallery,
            selection.clone(),
        );
        Self {
            product,
            gallery,
            selection,
            links,
            sizes: &SIZES,
        }
    }

    /// Size buttons with the current choice marked.
    #[must_use]
    pub fn size_options(&self) -> Vec<SizeOption> {
        self.sizes
            .iter()
            .map(|&size| SizeOption {
                label: size,
                href: self.links.size(size),
                selected: size == self.selection.size,
            })
            .collect()
    }

    /// Gallery slides in order.
    #[must_use]
    pub fn slides(&self) -> Vec<Slide> {
        self.gallery
            .images()
            .iter()
            .enumerate()
            .map(|(index, image)| Slide {
                number: index + 1,
                image: image.clone(),
                alt: image.alt_or(self.gallery.title()).to_string(),
                href: self.gallery_href(|gallery| gallery.select(index)),
                active: index == self.gallery.active_index(),
            })
            .collect()
    }

    /// Link to the gallery after applying `step` to a copy of it.
    fn gallery_href(&self, step: impl FnOnce(&mut Gallery)) -> String {
        let mut next = self.gallery.clone();
        step(&mut next);
        self.links.gallery(&next)
    }

    /// Link for a swipe, or `None` at the edge of the gallery.
    fn swipe_href(&self, direction: SwipeDirection) -> Option<String> {
        let mut next = self.gallery.clone();
        next.swipe(direction);
        (next.active_index() != self.gallery.active_index()).then(|| self.links.gallery(&next))
    }

    /// Link to the previous slide, if any.
    #[must_use]
    pub fn previous_href(&self) -> Option<String> {
        self.swipe_href(SwipeDirection::Previous)
    }

    /// Link to the next slide, if any.
    #[must_use]
    pub fn next_href(&self) -> Option<String> {
        self.swipe_href(SwipeDirection::Next)
    }

    /// Link that opens the zoom overlay on the active image.
    #[must_use]
    pub fn open_zoom_href(&self) -> String {
        self.gallery_href(Gallery::open_zoom)
    }

    /// Link that closes the zoom overlay.
    #[must_use]
    pub fn close_zoom_href(&self) -> String {
        self.gallery_href(Gallery::close_zoom)
    }

    /// Link that lowers the quantity, floored at 1.
    #[must_use]
    pub fn decrement_href(&self) -> String {
        self.links.quantity(self.selection.decremented())
    }

    /// Link that raises the quantity.
    #[must_use]
    pub fn increment_href(&self) -> String {
        self.links.quantity(self.selection.incremented())
    }

    /// Alt text of the active image.
    #[must_use]
    pub fn active_alt(&self) -> &str {
        self.gallery.active_image().alt_or(self.gallery.title())
    }
}

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/show.html")]
pub struct ProductShowTemplate {
    pub chrome: SiteChrome,
    pub panel: ProductPanel,
    pub suggestions: Vec<Product>,
}

/// Display a product by handle.
#[instrument(skip(state, session, query))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(handle): Path<String>,
    Query(query): Query<ProductQuery>,
) -> Result<ProductShowTemplate> {
    let products = state.catalog().products().await;
    let product = products
        .iter()
        .find(|product| product.handle == handle)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {handle}")))?;

    let suggestions = catalog::suggestions(&products, &product.handle);

    Ok(ProductShowTemplate {
        chrome: SiteChrome::load(&session, false).await?,
        panel: ProductPanel::new(product, &query),
        suggestions,
    })
}

/// Demo look template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/demo_look.html")]
pub struct DemoLookTemplate {
    pub chrome: SiteChrome,
    pub panel: ProductPanel,
    pub look: DemoLook,
}

/// Display the static demo look page.
#[instrument(skip(session, query))]
pub async fn demo_look(
    session: Session,
    Query(query): Query<ProductQuery>,
) -> Result<DemoLookTemplate> {
    let look = content::demo_look();
    Ok(DemoLookTemplate {
        chrome: SiteChrome::load(&session, false).await?,
        panel: ProductPanel::new(look.product.clone(), &query),
        look,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_products;

    #[test]
    fn test_sort_options_mark_selection() {
        let options = sort_options(SortOrder::PriceDesc);
        let labels: Vec<_> = options.iter().map(|o| o.label).collect();
        assert_eq!(
            labels,
            vec!["Featured", "Price · Low to High", "Price · High to Low"]
        );
        assert!(options.iter().filter(|o| o.selected).all(|o| o.value == "desc"));
    }

    #[test]
    fn test_panel_applies_query_state() {
        let product = mock_products().remove(0);
        let query = ProductQuery {
            image: Some("9".to_string()),
            zoom: Some("1".to_string()),
            size: Some("S".to_string()),
            qty: Some("2".to_string()),
        };
        let panel = ProductPanel::new(product, &query);
        assert_eq!(panel.gallery.active_index(), panel.gallery.images().len() - 1);
        assert!(panel.gallery.is_zoomed());
        assert_eq!(panel.selection.size, "S");
        assert_eq!(panel.selection.quantity, 2);
        assert_eq!(
            panel.close_zoom_href(),
            "/catalog/contour-bustier-dress?image=1&size=S&qty=2"
        );
        assert_eq!(panel.next_href(), None);
        assert_eq!(
            panel.previous_href().as_deref(),
            Some("/catalog/contour-bustier-dress?zoom=1&size=S&qty=2")
        );
        assert_eq!(
            panel.decrement_href(),
            "/catalog/contour-bustier-dress?image=1&zoom=1&size=S"
        );
    }

    #[test]
    fn test_panel_view_helpers() {
        let product = mock_products().remove(1);
        let panel = ProductPanel::new(product, &ProductQuery::default());

        let selected: Vec<_> = panel
            .size_options()
            .into_iter()
            .filter(|o| o.selected)
            .map(|o| o.label)
            .collect();
        assert_eq!(selected, vec!["M"]);

        let slides = panel.slides();
        assert_eq!(slides.len(), 2);
        assert!(slides.first().is_some_and(|s| s.active && s.number == 1));
        assert!(slides.last().is_some_and(|s| s.href == "/catalog/nomad-trouser?image=1"));
        assert_eq!(panel.previous_href(), None);
        assert_eq!(panel.open_zoom_href(), "/catalog/nomad-trouser?zoom=1");
        assert_eq!(panel.close_zoom_href(), "/catalog/nomad-trouser");
        assert_eq!(
            panel.next_href().as_deref(),
            Some("/catalog/nomad-trouser?image=1")
        );
        assert_eq!(panel.decrement_href(), "/catalog/nomad-trouser");
        assert_eq!(panel.increment_href(), "/catalog/nomad-trouser?qty=2");
        assert_eq!(panel.active_alt(), "Nomad Trouser");
    }
}
