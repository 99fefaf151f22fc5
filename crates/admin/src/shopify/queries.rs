//! GraphQL documents for the Shopify Admin API.
//!
//! Documents are hand-written strings; the response side is typed in
//! [`super::types`]. Variable structs serialize to the exact names the
//! documents declare.

use serde::Serialize;

/// Paginated collection list for the index page.
pub const GET_COLLECTIONS: &str = "\
query GetCollections($first: Int!, $after: String) {
  collections(first: $first, after: $after, sortKey: TITLE) {
    edges {
      cursor
      node {
        id
        title
        handle
        productsCount {
          count
        }
      }
    }
    pageInfo {
      hasNextPage
      hasPreviousPage
      startCursor
      endCursor
    }
  }
}";

/// One window of products for a collection.
///
/// The collection lookup and the product page travel in one document so a
/// missing collection is detected on the same round trip. Products come from
/// the root `products` connection because `Collection.products` accepts no
/// search query; the `collection_id:` clause scopes the page and the
/// inventory clause narrows it to one side of the stock partition.
pub const GET_COLLECTION_PRODUCTS: &str = "\
query GetCollectionProducts($id: ID!, $first: Int, $after: String, $last: Int, $before: String, $query: String) {
  collection(id: $id) {
    id
    title
  }
  products(first: $first, after: $after, last: $last, before: $before, query: $query) {
    edges {
      cursor
      node {
        id
        title
        totalInventory
        featuredMedia {
          preview {
            image {
              url
              altText
            }
          }
        }
        priceRangeV2 {
          minVariantPrice {
            amount
            currencyCode
          }
        }
        variants(first: 1) {
          edges {
            node {
              barcode
              inventoryItem {
                measurement {
                  weight {
                    value
                    unit
                  }
                }
              }
            }
          }
        }
      }
    }
    pageInfo {
      hasNextPage
      hasPreviousPage
      startCursor
      endCursor
    }
  }
}";

/// Variables for [`GET_COLLECTIONS`].
#[derive(Debug, Serialize)]
pub struct GetCollectionsVariables {
    pub first: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

/// Variables for [`GET_COLLECTION_PRODUCTS`].
#[derive(Debug, Serialize)]
pub struct GetCollectionProductsVariables {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_declare_their_variables() {
        for var in ["$first", "$after"] {
            assert!(GET_COLLECTIONS.contains(var));
        }
        for var in ["$id", "$first", "$after", "$last", "$before", "$query"] {
            assert!(GET_COLLECTION_PRODUCTS.contains(var));
        }
    }

    #[test]
    fn test_variables_serialize_with_exact_names() {
        let vars = GetCollectionProductsVariables {
            id: "gid://shopify/Collection/1".to_string(),
            first: Some(30),
            after: None,
            last: None,
            before: None,
            query: "collection_id:1 AND inventory_total:>0".to_string(),
        };
        let json = serde_json::to_value(&vars).expect("serialize");
        assert_eq!(json["id"], "gid://shopify/Collection/1");
        assert_eq!(json["first"], 30);
        assert!(json.get("after").is_none());
        assert!(json.get("last").is_none());
        assert_eq!(json["query"], "collection_id:1 AND inventory_total:>0");
    }
}
