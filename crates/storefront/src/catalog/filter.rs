//! Catalog price filtering and sorting.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::shopify::types::Product;

/// Parse a price bound typed into the filter form.
///
/// Blank or non-numeric input is treated as an absent bound.
#[must_use]
pub fn parse_bound(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Inclusive price range; each absent bound is unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceFilter {
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
}

impl PriceFilter {
    /// Build a filter from raw form input.
    #[must_use]
    pub fn from_inputs(min: &str, max: &str) -> Self {
        Self {
            min: parse_bound(min),
            max: parse_bound(max),
        }
    }

    /// Whether a price falls within the range.
    #[must_use]
    pub fn matches(&self, price: Decimal) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }

    /// Whether neither bound is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Catalog sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Catalog (insertion) order.
    #[default]
    Featured,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
}

impl SortOrder {
    /// All sort orders, in the order the selector lists them.
    pub const ALL: [Self; 3] = [Self::Featured, Self::PriceAsc, Self::PriceDesc];

    /// Query-string value.
    #[must_use]
    pub const fn as_param(&self) -> &'static str {
        match self {
            Self::Featured => "none",
            Self::PriceAsc => "asc",
            Self::PriceDesc => "desc",
        }
    }

    /// Selector label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceAsc => "Price · Low to High",
            Self::PriceDesc => "Price · High to Low",
        }
    }

    /// Parse a query-string value; unknown values mean `Featured`.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value.trim() {
            "asc" => Self::PriceAsc,
            "desc" => Self::PriceDesc,
            _ => Self::Featured,
        }
    }
}

/// Apply a price filter, then a sort order.
///
/// Price sorts are stable, so products with equal prices keep their
/// catalog order.
#[must_use]
pub fn filter_products(products: &[Product], filter: PriceFilter, sort: SortOrder) -> Vec<Product> {
    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|product| filter.matches(product.price))
        .cloned()
        .collect();

    match sort {
        SortOrder::Featured => {}
        SortOrder::PriceAsc => filtered.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceDesc => filtered.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_products;
    use crate::shopify::types::Image;

    fn product(handle: &str, price: i64) -> Product {
        Product {
            id: format!("gid://shopify/Product/{handle}"),
            handle: handle.to_string(),
            title: handle.to_string(),
            description: String::new(),
            category: "Collection".to_string(),
            price: Decimal::from(price),
            image: Image::placeholder(handle),
            gallery: Vec::new(),
        }
    }

    fn handles(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.handle.as_str()).collect()
    }

    #[test]
    fn test_parse_bound() {
        assert_eq!(parse_bound(""), None);
        assert_eq!(parse_bound("   "), None);
        assert_eq!(parse_bound("abc"), None);
        assert_eq!(parse_bound("1000"), Some(Decimal::from(1000)));
        assert_eq!(parse_bound(" 980 "), Some(Decimal::from(980)));
        assert_eq!(parse_bound("99.5"), Some(Decimal::new(995, 1)));
        assert_eq!(parse_bound("1e3"), Some(Decimal::from(1000)));
    }

    #[test]
    fn test_no_filter_keeps_insertion_order() {
        let products = mock_products();
        let result = filter_products(&products, PriceFilter::default(), SortOrder::Featured);
        assert_eq!(
            handles(&result),
            vec!["contour-bustier-dress", "nomad-trouser", "monolith-jacket"]
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let products = mock_products();
        let filter = PriceFilter::from_inputs("980", "1620");
        let result = filter_products(&products, filter, SortOrder::Featured);
        assert_eq!(handles(&result), vec!["contour-bustier-dress", "nomad-trouser"]);
    }

    #[test]
    fn test_single_bounds() {
        let products = mock_products();

        let result = filter_products(&products, PriceFilter::from_inputs("1000", ""), SortOrder::Featured);
        assert_eq!(handles(&result), vec!["contour-bustier-dress", "monolith-jacket"]);

        let result = filter_products(&products, PriceFilter::from_inputs("", "1000"), SortOrder::Featured);
        assert_eq!(handles(&result), vec!["nomad-trouser"]);
    }

    #[test]
    fn test_non_numeric_bounds_are_ignored() {
        let products = mock_products();
        let filter = PriceFilter::from_inputs("cheap", "lots");
        assert!(filter.is_empty());
        assert_eq!(filter_products(&products, filter, SortOrder::Featured).len(), 3);
    }

    #[test]
    fn test_filter_returns_exactly_products_in_range() {
        let products = mock_products();
        let bounds = [0, 500, 980, 1000, 1620, 2000, 2150, 3000];

        for &min in &bounds {
            for &max in bounds.iter().filter(|&&max| max >= min) {
                let filter = PriceFilter {
                    min: Some(Decimal::from(min)),
                    max: Some(Decimal::from(max)),
                };
                let result = filter_products(&products, filter, SortOrder::Featured);
                let expected: Vec<&str> = products
                    .iter()
                    .filter(|p| p.price >= Decimal::from(min) && p.price <= Decimal::from(max))
                    .map(|p| p.handle.as_str())
                    .collect();
                assert_eq!(handles(&result), expected, "range [{min}, {max}]");
            }
        }
    }

    #[test]
    fn test_sort_ascending_is_monotonic() {
        let products = mock_products();
        let result = filter_products(&products, PriceFilter::default(), SortOrder::PriceAsc);
        assert!(result.windows(2).all(|w| w[0].price <= w[1].price));
        assert_eq!(
            handles(&result),
            vec!["nomad-trouser", "contour-bustier-dress", "monolith-jacket"]
        );
    }

    #[test]
    fn test_sort_descending_is_monotonic() {
        let products = mock_products();
        let result = filter_products(&products, PriceFilter::default(), SortOrder::PriceDesc);
        assert!(result.windows(2).all(|w| w[0].price >= w[1].price));
        assert_eq!(
            handles(&result),
            vec!["monolith-jacket", "contour-bustier-dress", "nomad-trouser"]
        );
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let products = vec![
            product("a", 500),
            product("b", 100),
            product("c", 500),
            product("d", 100),
        ];

        let asc = filter_products(&products, PriceFilter::default(), SortOrder::PriceAsc);
        assert_eq!(handles(&asc), vec!["b", "d", "a", "c"]);

        let desc = filter_products(&products, PriceFilter::default(), SortOrder::PriceDesc);
        assert_eq!(handles(&desc), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_sort_order_params() {
        assert_eq!(SortOrder::from_param("asc"), SortOrder::PriceAsc);
        assert_eq!(SortOrder::from_param("desc"), SortOrder::PriceDesc);
        assert_eq!(SortOrder::from_param("none"), SortOrder::Featured);
        assert_eq!(SortOrder::from_param("random"), SortOrder::Featured);
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_param(order.as_param()), order);
        }
    }
}
