//! Bundled mock catalog served when Shopify is not configured.

use rust_decimal::Decimal;

use crate::shopify::types::{Image, Product};

const CONTOUR_IMAGE: &str = "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?auto=format&fit=crop&w=900&q=80";
const NOMAD_IMAGE: &str = "https://images.unsplash.com/photo-1445205170230-053b83016050?auto=format&fit=crop&w=900&q=80";
const MONOLITH_IMAGE: &str = "https://images.unsplash.com/photo-1504593811423-6dd665756598?auto=format&fit=crop&w=900&q=80";

/// The three mock products, in featured order.
#[must_use]
pub fn mock_products() -> Vec<Product> {
    vec![
        Product {
            id: "gid://shopify/Product/mock-1".to_string(),
            handle: "contour-bustier-dress".to_string(),
            title: "Contour Bustier Dress".to_string(),
            description: "Sculpted boning, low back, liquid satin finish.".to_string(),
            category: "Dresses".to_string(),
            price: Decimal::from(1620),
            image: Image::new(CONTOUR_IMAGE, "Contour Bustier Dress"),
            gallery: vec![
                Image::bare(CONTOUR_IMAGE),
                Image::bare(
                    "https://images.unsplash.com/photo-1441984904996-e0b6ba687e04?auto=format&fit=crop&w=900&q=80",
                ),
            ],
        },
        Product {
            id: "gid://shopify/Product/mock-2".to_string(),
            handle: "nomad-trouser".to_string(),
            title: "Nomad Trouser".to_string(),
            description: "Bone linen, double-pleat front, adjustable belt.".to_string(),
            category: "Separates".to_string(),
            price: Decimal::from(980),
            image: Image::new(NOMAD_IMAGE, "Nomad Trouser"),
            gallery: vec![
                Image::bare(NOMAD_IMAGE),
                Image::bare(
                    "https://images.unsplash.com/photo-1522312346375-d1a52e2b99b3?auto=format&fit=crop&w=900&q=80",
                ),
            ],
        },
        Product {
            id: "gid://shopify/Product/mock-3".to_string(),
            handle: "monolith-jacket".to_string(),
            title: "Monolith Jacket".to_string(),
            description: "Architectural shoulders with horn button detailing.".to_string(),
            category: "Outerwear".to_string(),
            price: Decimal::from(2150),
            image: Image::new(MONOLITH_IMAGE, "Monolith Jacket"),
            gallery: vec![
                Image::bare(MONOLITH_IMAGE),
                Image::bare(
                    "https://images.unsplash.com/photo-1469334031218-e382a71b716b?auto=format&fit=crop&w=900&q=80",
                ),
            ],
        },
    ]
}
