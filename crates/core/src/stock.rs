//! Stock filter: the binary in-stock / sold-out view partition.

use serde::{Deserialize, Serialize};

use crate::record::ProductRecord;

/// Which half of the inventory the merchant is looking at.
///
/// Serialized form matches the `stock` query parameter (`in-stock` /
/// `sold-out`). Cursors handed out under one filter are meaningless under the
/// other; switching tabs restarts pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockFilter {
    /// Products with at least one available unit.
    #[default]
    InStock,
    /// Products with zero available units.
    SoldOut,
}

impl StockFilter {
    /// Whether a record belongs to this side of the partition.
    #[must_use]
    pub const fn matches(self, record: &ProductRecord) -> bool {
        match self {
            Self::InStock => record.available_units > 0,
            Self::SoldOut => record.available_units == 0,
        }
    }

    /// The opposite tab.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::InStock => Self::SoldOut,
            Self::SoldOut => Self::InStock,
        }
    }

    /// Admin API search clause that narrows the upstream query to this side.
    #[must_use]
    pub const fn shopify_query(self) -> &'static str {
        match self {
            Self::InStock => "inventory_total:>0",
            Self::SoldOut => "inventory_total:<=0",
        }
    }

    /// Query-parameter value (`in-stock` / `sold-out`).
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::InStock => "in-stock",
            Self::SoldOut => "sold-out",
        }
    }

    /// Human-readable tab label, also used in export filenames.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::SoldOut => "Sold Out",
        }
    }
}

/// Keep only the records on the given side of the stock partition.
///
/// The two sides are disjoint and together cover the input exactly, since
/// `available_units` is never negative after normalization.
#[must_use]
pub fn partition(records: Vec<ProductRecord>, filter: StockFilter) -> Vec<ProductRecord> {
    records.into_iter().filter(|r| filter.matches(r)).collect()
}
