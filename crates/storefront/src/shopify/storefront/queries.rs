//! GraphQL query definitions for Shopify Storefront API.
//!
//! Response types are written by hand against the fields each query
//! selects, so no schema introspection file is needed at build time.

use graphql_client::{GraphQLQuery, QueryBody};

/// Catalog listing query.
pub struct GetProducts;

impl GraphQLQuery for GetProducts {
    type Variables = get_products::Variables;
    type ResponseData = get_products::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: get_products::QUERY,
            operation_name: get_products::OPERATION_NAME,
        }
    }
}

pub mod get_products {
    use serde::{Deserialize, Serialize};

    pub const OPERATION_NAME: &str = "ProductsQuery";

    pub const QUERY: &str = r"
query ProductsQuery($first: Int!) {
  products(first: $first) {
    edges {
      node {
        id
        handle
        title
        description
        productType
        featuredImage {
          url
          altText
        }
        images(first: 5) {
          edges {
            node {
              url
              altText
            }
          }
        }
        priceRange {
          minVariantPrice {
            amount
          }
        }
      }
    }
  }
}
";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub first: i64,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub products: Option<ProductsConnection>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ProductsConnection {
        pub edges: Option<Vec<ProductEdge>>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ProductEdge {
        pub node: ProductNode,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductNode {
        pub id: String,
        pub handle: String,
        pub title: String,
        #[serde(default)]
        pub description: String,
        pub product_type: Option<String>,
        pub featured_image: Option<ImageNode>,
        pub images: Option<ImageConnection>,
        pub price_range: PriceRange,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ImageNode {
        pub url: String,
        pub alt_text: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ImageConnection {
        #[serde(default)]
        pub edges: Vec<ImageEdge>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ImageEdge {
        pub node: ImageNode,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PriceRange {
        pub min_variant_price: MoneyV2,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct MoneyV2 {
        pub amount: Option<String>,
    }
}
