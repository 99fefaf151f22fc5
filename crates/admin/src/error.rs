//! Unified error handling for admin.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::shopify::ShopifyError;

/// Application-level error type for the admin panel.
#[derive(Debug, Error)]
pub enum AppError {
    /// Shopify API operation failed.
    #[error("Shopify error: {0}")]
    Shopify(#[from] ShopifyError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // A missing collection from Shopify is a plain 404, not an outage
        let normalized = match self {
            Self::Shopify(ShopifyError::NotFound(msg)) => Self::NotFound(msg),
            other => other,
        };

        // Log server errors with Sentry
        if matches!(normalized, Self::Internal(_) | Self::Shopify(_)) {
            let event_id = sentry::capture_error(&normalized);
            tracing::error!(
                error = %normalized,
                sentry_event_id = %event_id,
                "Admin request error"
            );
        }

        let status = match &normalized {
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Shopify(_) => StatusCode::BAD_GATEWAY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &normalized {
            Self::Internal(_) => "Internal server error".to_string(),
            Self::Shopify(_) => "External service error".to_string(),
            _ => normalized.to_string(),
        };

        (status, message).into_response()
    }
}
