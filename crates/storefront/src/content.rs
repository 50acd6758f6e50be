//! Static editorial content: home page sections, site chrome, and the demo
//! look.
//!
//! Nothing here comes from Shopify. The featured cards link into the
//! catalog by handle, so they resolve against live or mock products alike.

use rust_decimal::Decimal;

use anfa_core::{CurrencyCode, Price};

use crate::shopify::types::{Image, Product};

/// Concierge inbox used by the contact links.
pub const CONCIERGE_EMAIL: &str = "concierge@anfalabel.com";

/// Handle of the static demo product page.
pub const DEMO_LOOK_HANDLE: &str = "demo-look";

/// Messages scrolled across the announcement banner.
pub const BANNER_MESSAGES: [&str; 2] = ["Worldwide shipping", "Maison of modern desert luxury"];

/// How many times the banner messages repeat so the marquee never gaps.
pub const BANNER_REPEAT: usize = 3;

/// Banner messages in display order, repeated.
#[must_use]
pub fn banner_messages() -> Vec<&'static str> {
    BANNER_MESSAGES
        .iter()
        .copied()
        .cycle()
        .take(BANNER_MESSAGES.len() * BANNER_REPEAT)
        .collect()
}

// =============================================================================
// Navigation
// =============================================================================

/// A labelled link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }

    /// Whether the link leaves the site and should open in a new tab.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

/// Header navigation.
pub const NAV_LINKS: [NavLink; 2] = [
    NavLink::new("Catalog", "/catalog"),
    NavLink::new("Contact", "mailto:concierge@anfalabel.com"),
];

/// Footer links.
pub const FOOTER_LINKS: [NavLink; 4] = [
    NavLink::new("Contact", "mailto:concierge@anfalabel.com"),
    NavLink::new("Instagram", "https://instagram.com"),
    NavLink::new("Journal", "#editorial"),
    NavLink::new("Shipping", "https://anfalabel.com/policies/shipping-policy"),
];

/// Footer region selector options, e.g. "UAE · AED".
#[must_use]
pub fn regions() -> Vec<String> {
    CurrencyCode::ALL
        .iter()
        .map(|currency| format!("{} · {}", currency.region(), currency.code()))
        .collect()
}

// =============================================================================
// Product cards
// =============================================================================

/// Card shown in product grids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub href: String,
    pub title: String,
    pub description: String,
    /// Eyebrow text; a badge when set, else the product category.
    pub eyebrow: String,
    pub price_label: String,
    pub image: Image,
    /// Image revealed on hover; the primary image when there is none.
    pub hover_image: Image,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        let image = if product.image.url.is_empty() {
            Image::placeholder(&product.title)
        } else {
            product.image.clone()
        };
        let hover_image = product
            .hover_image()
            .filter(|img| !img.url.is_empty())
            .cloned()
            .unwrap_or_else(|| image.clone());

        Self {
            href: format!("/catalog/{}", product.handle),
            title: product.title.clone(),
            description: product.description.clone(),
            eyebrow: product.category.clone(),
            price_label: Price::from_amount(product.price).to_string(),
            image,
            hover_image,
        }
    }
}

impl ProductCard {
    /// Alt text for the primary image.
    #[must_use]
    pub fn image_alt(&self) -> &str {
        self.image.alt_or(&self.title)
    }

    /// Alt text for the hover image.
    #[must_use]
    pub fn hover_alt(&self) -> &str {
        self.hover_image.alt_or(&self.title)
    }
}

fn unsplash(photo: &str, width: u32) -> String {
    format!("https://images.unsplash.com/{photo}?auto=format&fit=crop&w={width}&q=80")
}

/// Cards in the home page "Current Styles" row.
#[must_use]
pub fn featured_products() -> Vec<ProductCard> {
    vec![
        ProductCard {
            href: format!("/catalog/{DEMO_LOOK_HANDLE}"),
            title: "Demo Gown Experience".to_string(),
            description: "Hand-draped silk column created solely to showcase the product page flow."
                .to_string(),
            eyebrow: "Demo · Limited Capsule".to_string(),
            price_label: Price::from_amount(Decimal::from(2480)).to_string(),
            image: Image::new(unsplash("photo-1483985988355-763728e1935b", 900), "Demo gown"),
            hover_image: Image::new(
                unsplash("photo-1509631179647-0177331693ae", 900),
                "Demo gown detail",
            ),
        },
        ProductCard {
            href: "/catalog/nomad-trouser".to_string(),
            title: "Nomad Trouser".to_string(),
            description: "Bone linen blend with double pleats and adjustable belt tabs.".to_string(),
            eyebrow: "Signature Capsule".to_string(),
            price_label: Price::from_amount(Decimal::from(980)).to_string(),
            image: Image::new("/static/images/Hero2.webp", "Nomad Trouser"),
            hover_image: Image::new("/static/images/hero.webp", "Nomad Trouser detail"),
        },
        ProductCard {
            href: "/catalog/contour-bustier-dress".to_string(),
            title: "Contour Bustier Dress".to_string(),
            description: "Boned bodice with low back and liquid satin finish.".to_string(),
            eyebrow: "Limited · 65 units".to_string(),
            price_label: Price::from_amount(Decimal::from(1620)).to_string(),
            image: Image::new(
                unsplash("photo-1521572163474-6864f9cf17ab", 900),
                "Contour Bustier Dress",
            ),
            hover_image: Image::new(
                unsplash("photo-1441986300917-64674bd600d8", 900),
                "Contour Bustier Dress detail",
            ),
        },
    ]
}

// =============================================================================
// Home sections
// =============================================================================

/// Editorial article under the featured row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
    pub image: String,
}

/// The two process articles on the home page.
#[must_use]
pub fn process_highlights() -> Vec<Highlight> {
    vec![
        Highlight {
            title: "REVOLUTIONARY WEAR",
            body: "Innovative pieces designed to embody the relaxed urban culture the UAE has to offer.",
            image: unsplash("photo-1503341455253-b2e723bb3dbb", 900),
        },
        Highlight {
            title: "OUR PROCESS",
            body: "All of our items are designed and handcrafted in the UAE. We use local \
                   manufacturers and source material native to the region.",
            image: "/static/images/label.webp".to_string(),
        },
    ]
}

// =============================================================================
// Demo look
// =============================================================================

/// A labelled fact in the demo look's detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookDetail {
    pub label: &'static str,
    pub value: &'static str,
}

/// The static long-form product page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoLook {
    pub product: Product,
    pub collection: &'static str,
    pub story: Vec<&'static str>,
    pub details: Vec<LookDetail>,
}

/// The demo gown shown at `/catalog/demo-look`.
#[must_use]
pub fn demo_look() -> DemoLook {
    let title = "Blondes & Brunettes Demo Gown";
    let gallery = [
        "photo-1509631179647-0177331693ae",
        "photo-1524504388940-b1c1722653e1",
        "photo-1503341455253-b2e723bb3dbb",
    ]
    .iter()
    .map(|photo| Image::new(unsplash(photo, 1200), title))
    .collect();

    DemoLook {
        product: Product {
            id: "demo-look".to_string(),
            handle: DEMO_LOOK_HANDLE.to_string(),
            title: title.to_string(),
            description: "A corseted silk column that pools at the ankle, trimmed with glass-bead \
                          fringe and a removable satin hood. Built solely to demonstrate the product \
                          page experience."
                .to_string(),
            category: "Demo-only listing".to_string(),
            price: Decimal::from(2480),
            image: Image::new(unsplash("photo-1483985988355-763728e1935b", 1500), title),
            gallery,
        },
        collection: "Limited Capsule · Drop 07",
        story: vec![
            "This page exists purely as a demo to showcase the long-form storytelling we can layer \
             into Shopify product detail pages. The gown itself is a fictional piece from the \
             Blondes & Brunettes drop, rendered in warm champagne hues with architectural draping.",
            "Use the controls to simulate size, quantity, and bag interactions. The supporting copy \
             blocks below demonstrate how we can add process notes, atelier imagery, and editorial \
             context aligned to each release.",
        ],
        details: vec![
            LookDetail {
                label: "Fabrication",
                value: "Italian silk faille · glass beads · silk charmeuse lining",
            },
            LookDetail {
                label: "Lead Time",
                value: "Made to order · 3 weeks · concierge fittings available",
            },
            LookDetail {
                label: "Origin",
                value: "Designed and handcrafted in Dubai, UAE",
            },
        ],
    }
}
