//! Normalized product records.

use serde::{Deserialize, Serialize};

/// Placeholder for absent string fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Monetary amount with currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount as string (preserves precision).
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

/// One row of the inventory view, derived from a Shopify product edge.
///
/// Every optional upstream field is resolved to a concrete value during
/// normalization: strings fall back to `"N/A"`, counts to zero. A record is
/// never mutated after construction; a new page fetch builds new records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Opaque upstream identifier (`gid://shopify/Product/...`).
    pub id: String,
    /// Display name, `"N/A"` when absent.
    pub title: String,
    /// Thumbnail URL, if the product has one.
    pub image: Option<String>,
    /// Thumbnail alt text; falls back to the title.
    pub image_alt: String,
    /// `"<value> <unit lowercased>"`, or `"N/A"` without weight data.
    pub weight_display: String,
    /// Minimum variant price. Always present upstream.
    pub price: Money,
    /// Representative variant barcode, `"N/A"` when absent.
    pub barcode: String,
    /// Units available across all locations. Never negative; zero means
    /// sold out.
    pub available_units: i64,
    /// Pagination token for this record's position in the current window.
    pub cursor: String,
}

impl ProductRecord {
    /// Format a weight measurement the way the listing displays it.
    ///
    /// Returns `"N/A"` when no measurement exists.
    #[must_use]
    pub fn weight_display(value: Option<f64>, unit: Option<&str>) -> String {
        match (value, unit) {
            (Some(v), Some(u)) => format!("{v} {}", u.to_lowercase()),
            _ => NOT_AVAILABLE.to_string(),
        }
    }
}
