//! Shopify Admin API client.
//!
//! # Architecture
//!
//! - Hand-written GraphQL documents in [`queries`], executed over `reqwest`
//!   with serde-typed response envelopes
//! - Shopify is the source of truth - one direct API call per page view,
//!   no local sync and no response caching (cached cursors go stale)
//! - The access token is held as a `SecretString` and only exposed when the
//!   request header is built
//!
//! # Example
//!
//! ```rust,ignore
//! use shelfview_admin::shopify::AdminClient;
//! use shelfview_core::{PageRequest, StockFilter};
//!
//! let client = AdminClient::new(&config);
//! let (collection, window) = client
//!     .get_collection_products(1, StockFilter::InStock, &PageRequest::first_page(30))
//!     .await?;
//! ```

mod client;
mod conversions;
pub mod queries;
pub mod types;

pub use client::{AdminClient, CollectionDetail, CollectionPage, CollectionSummary};
pub use conversions::{convert_page_window, normalize_product};

use thiserror::Error;

/// Errors from the Shopify Admin API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by Shopify.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

/// A GraphQL error returned by the Shopify API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Response path where the error occurred, already joined with dots.
    pub path: Option<String>,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }

    errors
        .iter()
        .map(|e| match e.path.as_deref() {
            Some(path) if !e.message.is_empty() => format!("{} (at {path})", e.message),
            Some(path) => format!("error at {path}"),
            None if e.message.is_empty() => "(no details)".to_string(),
            None => e.message.clone(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}
