//! Shopify Admin API client implementation.
//!
//! One GraphQL POST per page view; no response caching. Documents live in
//! [`super::queries`], responses deserialize into [`super::types`] and are
//! normalized by [`super::conversions`] before leaving this module.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::instrument;

use shelfview_core::{PageRequest, PageWindow, StockFilter};

use crate::config::ShopifyConfig;

use super::conversions::convert_page_window;
use super::queries::{
    GET_COLLECTION_PRODUCTS, GET_COLLECTIONS, GetCollectionProductsVariables,
    GetCollectionsVariables,
};
use super::types::{CollectionProductsData, CollectionsData};
use super::{GraphQLError, ShopifyError};

/// Access-token header for the Admin API.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// A collection row on the index page.
#[derive(Debug, Clone)]
pub struct CollectionSummary {
    /// Full GID (`gid://shopify/Collection/123`).
    pub id: String,
    pub title: String,
    pub handle: String,
    /// Product count, when the API exposes it.
    pub products_count: Option<i64>,
}

/// One page of the collection list.
#[derive(Debug, Clone)]
pub struct CollectionPage {
    pub collections: Vec<CollectionSummary>,
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

/// Identity of the collection a product window belongs to.
#[derive(Debug, Clone)]
pub struct CollectionDetail {
    pub id: String,
    pub title: String,
}

/// Client for the Shopify Admin GraphQL API.
///
/// Cheaply cloneable; all state lives behind one `Arc`.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
}

#[derive(Serialize)]
struct GraphQLRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
}

/// GraphQL response wrapper.
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLErrorResponse>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorResponse {
    message: String,
    #[serde(default)]
    path: Vec<serde_json::Value>,
}

impl From<GraphQLErrorResponse> for GraphQLError {
    fn from(e: GraphQLErrorResponse) -> Self {
        let path = if e.path.is_empty() {
            None
        } else {
            Some(
                e.path
                    .iter()
                    .map(|p| match p {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("."),
            )
        };
        Self {
            message: e.message,
            path,
        }
    }
}

impl AdminClient {
    /// Create a new Admin API client.
    #[must_use]
    pub fn new(config: &ShopifyConfig) -> Self {
        let endpoint = format!(
            "https://{}/admin/api/{}/graphql.json",
            config.store, config.api_version
        );

        Self {
            inner: Arc::new(AdminClientInner {
                client: reqwest::Client::new(),
                endpoint,
                access_token: config.admin_token.expose_secret().to_string(),
            }),
        }
    }

    /// Execute a GraphQL document.
    async fn execute<T, V>(&self, document: &str, variables: V) -> Result<T, ShopifyError>
    where
        T: DeserializeOwned,
        V: Serialize,
    {
        let body = GraphQLRequest {
            query: document,
            variables,
        };

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.inner.access_token)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(ShopifyError::RateLimited(retry_after));
        }

        // Keep the raw body around for diagnostics on parse failures.
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Shopify Admin API returned non-success status"
            );
            return Err(ShopifyError::GraphQL(vec![GraphQLError {
                message: format!(
                    "HTTP {status}: {}",
                    response_text.chars().take(200).collect::<String>()
                ),
                path: None,
            }]));
        }

        let response: GraphQLResponse<T> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse Shopify GraphQL response"
                );
                return Err(ShopifyError::Parse(e));
            }
        };

        if let Some(errors) = response.errors {
            if !errors.is_empty() {
                tracing::debug!(errors = ?errors, "GraphQL errors in response");
                return Err(ShopifyError::GraphQL(
                    errors.into_iter().map(GraphQLError::from).collect(),
                ));
            }
        }

        response.data.ok_or_else(|| {
            tracing::error!(
                body = %response_text.chars().take(500).collect::<String>(),
                "Shopify GraphQL response has no data and no errors"
            );
            ShopifyError::GraphQL(vec![GraphQLError {
                message: "No data in response".to_string(),
                path: None,
            }])
        })
    }

    /// Get one page of collections, ordered by title.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_collections(
        &self,
        first: i64,
        after: Option<String>,
    ) -> Result<CollectionPage, ShopifyError> {
        let variables = GetCollectionsVariables { first, after };
        let data: CollectionsData = self.execute(GET_COLLECTIONS, variables).await?;

        Ok(CollectionPage {
            collections: data
                .collections
                .edges
                .into_iter()
                .map(|e| CollectionSummary {
                    id: e.node.id,
                    title: e.node.title,
                    handle: e.node.handle,
                    products_count: e.node.products_count.map(|c| c.count),
                })
                .collect(),
            has_next_page: data.collections.page_info.has_next_page,
            end_cursor: data.collections.page_info.end_cursor,
        })
    }

    /// Fetch one window of a collection's products, narrowed to one side of
    /// the stock partition.
    ///
    /// Cursors in the returned window are only valid for the same
    /// `stock`/page-size combination.
    ///
    /// # Errors
    ///
    /// Returns [`ShopifyError::NotFound`] when the collection does not
    /// exist, or another [`ShopifyError`] if the request fails.
    #[instrument(skip(self), fields(collection_id = collection_id, stock = stock.slug()))]
    pub async fn get_collection_products(
        &self,
        collection_id: u64,
        stock: StockFilter,
        page: &PageRequest,
    ) -> Result<(CollectionDetail, PageWindow), ShopifyError> {
        let (first, after, last, before) = page.graphql_bounds();
        let variables = GetCollectionProductsVariables {
            id: collection_gid(collection_id),
            first,
            after,
            last,
            before,
            query: format!("collection_id:{collection_id} AND {}", stock.shopify_query()),
        };

        let data: CollectionProductsData =
            self.execute(GET_COLLECTION_PRODUCTS, variables).await?;

        let collection = data.collection.ok_or_else(|| {
            ShopifyError::NotFound(format!("Collection not found: {collection_id}"))
        })?;

        Ok((
            CollectionDetail {
                id: collection.id,
                title: collection.title,
            },
            convert_page_window(data.products),
        ))
    }
}

/// Build a collection GID from its numeric identifier.
#[must_use]
pub fn collection_gid(id: u64) -> String {
    format!("gid://shopify/Collection/{id}")
}
