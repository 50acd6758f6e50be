//! Conversions from GraphQL response shapes to domain types.

use rust_decimal::Decimal;

use crate::shopify::ShopifyError;
use crate::shopify::types::{DEFAULT_CATEGORY, Image, Product};

use super::queries::get_products;

/// Convert a products response into catalog products.
///
/// A response without a product connection is reported as `NotFound` so
/// callers can fall back to mock data. An empty connection is a valid,
/// empty catalog.
pub fn convert_products(data: get_products::ResponseData) -> Result<Vec<Product>, ShopifyError> {
    let edges = data
        .products
        .and_then(|connection| connection.edges)
        .ok_or_else(|| ShopifyError::NotFound("products".to_string()))?;

    Ok(edges.into_iter().map(|edge| convert_product(edge.node)).collect())
}

/// Convert a single product node.
pub fn convert_product(node: get_products::ProductNode) -> Product {
    let category = node
        .product_type
        .filter(|kind| !kind.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let price = node
        .price_range
        .min_variant_price
        .amount
        .as_deref()
        .and_then(|amount| amount.trim().parse::<Decimal>().ok())
        .unwrap_or_default();

    let image = node.featured_image.map_or_else(
        || Image::placeholder(&node.title),
        convert_image,
    );

    let gallery = node
        .images
        .map(|connection| {
            connection
                .edges
                .into_iter()
                .map(|edge| convert_image(edge.node))
                .collect()
        })
        .unwrap_or_default();

    Product {
        id: node.id,
        handle: node.handle,
        title: node.title,
        description: node.description,
        category,
        price,
        image,
        gallery,
    }
}

fn convert_image(node: get_products::ImageNode) -> Image {
    Image {
        url: node.url,
        alt_text: node.alt_text,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(value: serde_json::Value) -> get_products::ResponseData {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_convert_full_product() {
        let data = parse(serde_json::json!({
            "products": { "edges": [{ "node": {
                "id": "gid://shopify/Product/1",
                "handle": "sand-dune-kaftan",
                "title": "Sand Dune Kaftan",
                "description": "Silk georgette.",
                "productType": "Kaftans",
                "featuredImage": { "url": "https://cdn.shopify.com/a.jpg", "altText": "Front" },
                "images": { "edges": [
                    { "node": { "url": "https://cdn.shopify.com/a.jpg", "altText": "Front" } },
                    { "node": { "url": "https://cdn.shopify.com/b.jpg", "altText": null } }
                ]},
                "priceRange": { "minVariantPrice": { "amount": "1850.0" } }
            }}]}
        }));

        let products = convert_products(data).unwrap();
        assert_eq!(products.len(), 1);
        let product = &products[0];
        assert_eq!(product.handle, "sand-dune-kaftan");
        assert_eq!(product.category, "Kaftans");
        assert_eq!(product.price, Decimal::from(1850));
        assert_eq!(product.image.alt_text.as_deref(), Some("Front"));
        assert_eq!(product.gallery.len(), 2);
        assert_eq!(product.gallery[1].alt_text, None);
    }

    #[test]
    fn test_convert_defaults() {
        let data = parse(serde_json::json!({
            "products": { "edges": [{ "node": {
                "id": "gid://shopify/Product/2",
                "handle": "untitled",
                "title": "Untitled Piece",
                "description": "",
                "productType": "",
                "featuredImage": null,
                "priceRange": { "minVariantPrice": { "amount": null } }
            }}]}
        }));

        let products = convert_products(data).unwrap();
        let product = &products[0];
        assert_eq!(product.category, "Collection");
        assert_eq!(product.price, Decimal::ZERO);
        assert_eq!(product.image, Image::placeholder("Untitled Piece"));
        assert!(product.gallery.is_empty());
    }

    #[test]
    fn test_missing_products_is_not_found() {
        let data = parse(serde_json::json!({ "products": null }));
        assert!(matches!(
            convert_products(data),
            Err(ShopifyError::NotFound(_))
        ));
    }

    #[test]
    fn test_empty_edges_is_empty_catalog() {
        let data = parse(serde_json::json!({ "products": { "edges": [] } }));
        assert!(convert_products(data).unwrap().is_empty());
    }
}
