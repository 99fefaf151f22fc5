//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                       - Health check
//! GET  /                             - Redirect to /collections
//!
//! # Collections (read from Shopify)
//! GET  /collections                  - Collection listing
//! GET  /collections/{id}             - Product listing for one collection
//! GET  /collections/{id}/export      - CSV download of the current page
//! ```

pub mod collections;

use axum::{
    Router,
    response::Redirect,
    routing::get,
};

use crate::state::AppState;

/// Create the collection routes router.
pub fn collection_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(collections::index))
        .route("/{id}", get(collections::show))
        .route("/{id}/export", get(collections::export))
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::permanent("/collections") }))
        .nest("/collections", collection_routes())
}
