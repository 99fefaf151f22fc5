//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::shopify::AdminClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable; all state lives behind one `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    shopify_client: AdminClient,
}

impl AppState {
    #[must_use]
    pub fn new(config: AdminConfig, shopify_client: AdminClient) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                shopify_client,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn shopify(&self) -> &AdminClient {
        &self.inner.shopify_client
    }
}
