//! Cursor pagination over an externally paged source.
//!
//! Shopify's Admin API pages relay-style: a request asks for `first`/`after`
//! (forward) or `last`/`before` (backward), and the response carries per-edge
//! cursors plus next/previous availability flags. These types keep that
//! bookkeeping explicit and serializable so handlers stay pure pass-throughs.

use serde::{Deserialize, Serialize};

use crate::record::ProductRecord;

/// Traversal direction relative to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Page forward (items strictly after the cursor).
    #[default]
    Next,
    /// Page backward (items strictly before the cursor).
    Previous,
}

/// One pagination request against the upstream source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Which way to move.
    pub direction: Direction,
    /// Position token from a previous window. Absent means the start of the
    /// sequence (forward) or its end (backward).
    pub cursor: Option<String>,
    /// Window size. Must be positive.
    pub page_size: u32,
}

impl PageRequest {
    /// First forward page of `page_size` items.
    #[must_use]
    pub const fn first_page(page_size: u32) -> Self {
        Self {
            direction: Direction::Next,
            cursor: None,
            page_size,
        }
    }

    /// The `(first, after, last, before)` variable tuple for a relay-style
    /// GraphQL connection query. Exactly one of `first`/`last` is set.
    #[must_use]
    pub fn graphql_bounds(&self) -> (Option<i64>, Option<String>, Option<i64>, Option<String>) {
        let size = i64::from(self.page_size);
        match self.direction {
            Direction::Next => (Some(size), self.cursor.clone(), None, None),
            Direction::Previous => (None, None, Some(size), self.cursor.clone()),
        }
    }
}

/// The bounded set of records returned by one pagination request.
///
/// A window is built fresh per request and discarded when the next one is
/// fetched. Its cursors are only meaningful for the stock-filter and
/// page-size combination that produced them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageWindow {
    /// Records in upstream order.
    pub records: Vec<ProductRecord>,
    /// Whether a forward request from `end_cursor` would return items.
    pub has_next_page: bool,
    /// Whether a backward request from `start_cursor` would return items.
    pub has_previous_page: bool,
    /// Cursor of the first record, if any.
    pub start_cursor: Option<String>,
    /// Cursor of the last record, if any.
    pub end_cursor: Option<String>,
}

impl PageWindow {
    /// Number of records in this window.
    #[must_use]
    pub const fn total_on_page(&self) -> usize {
        self.records.len()
    }

    /// `true` when the window holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Money;
    use crate::stock::{StockFilter, partition};

    fn record(n: usize, units: i64) -> ProductRecord {
        ProductRecord {
            id: format!("gid://shopify/Product/{n}"),
            title: format!("Product {n}"),
            image: None,
            image_alt: format!("Product {n}"),
            weight_display: "N/A".to_string(),
            price: Money {
                amount: "5.00".to_string(),
                currency_code: "USD".to_string(),
            },
            barcode: "N/A".to_string(),
            available_units: units,
            cursor: format!("cursor-{n}"),
        }
    }

    /// Slice `items` the way a relay-style upstream would for `req`.
    fn fetch(items: &[ProductRecord], req: &PageRequest) -> PageWindow {
        let pos = |cursor: &str| items.iter().position(|r| r.cursor == cursor);
        let size = req.page_size as usize;

        let (lo, hi) = match (req.direction, req.cursor.as_deref()) {
            (Direction::Next, None) => (0, size.min(items.len())),
            (Direction::Next, Some(c)) => {
                let after = pos(c).map_or(items.len(), |p| p + 1);
                (after, (after + size).min(items.len()))
            }
            (Direction::Previous, None) => (items.len().saturating_sub(size), items.len()),
            (Direction::Previous, Some(c)) => {
                let before = pos(c).unwrap_or(0);
                (before.saturating_sub(size), before)
            }
        };

        let records: Vec<ProductRecord> = items.get(lo..hi).unwrap_or_default().to_vec();
        PageWindow {
            has_next_page: hi < items.len(),
            has_previous_page: lo > 0,
            start_cursor: records.first().map(|r| r.cursor.clone()),
            end_cursor: records.last().map(|r| r.cursor.clone()),
            records,
        }
    }

    #[test]
    fn test_graphql_bounds_forward() {
        let req = PageRequest::first_page(30);
        assert_eq!(req.graphql_bounds(), (Some(30), None, None, None));

        let req = PageRequest {
            direction: Direction::Next,
            cursor: Some("abc".to_string()),
            page_size: 10,
        };
        assert_eq!(
            req.graphql_bounds(),
            (Some(10), Some("abc".to_string()), None, None)
        );
    }

    #[test]
    fn test_graphql_bounds_backward() {
        let req = PageRequest {
            direction: Direction::Previous,
            cursor: Some("xyz".to_string()),
            page_size: 30,
        };
        assert_eq!(
            req.graphql_bounds(),
            (None, None, Some(30), Some("xyz".to_string()))
        );
    }

    #[test]
    fn test_direction_query_param_form() {
        assert_eq!(
            serde_json::to_string(&Direction::Previous).expect("serialize"),
            "\"previous\""
        );
        let d: Direction = serde_json::from_str("\"next\"").expect("deserialize");
        assert_eq!(d, Direction::Next);
    }

    #[test]
    fn test_forward_traversal_terminates_without_repeats() {
        let items: Vec<ProductRecord> = (0..25).map(|n| record(n, 1)).collect();
        let mut seen = Vec::new();
        let mut req = PageRequest::first_page(7);

        loop {
            let window = fetch(&items, &req);
            for r in &window.records {
                assert!(!seen.contains(&r.id), "record visited twice: {}", r.id);
                seen.push(r.id.clone());
            }
            if !window.has_next_page {
                break;
            }
            req = PageRequest {
                direction: Direction::Next,
                cursor: window.end_cursor,
                page_size: 7,
            };
        }

        assert_eq!(seen.len(), items.len());
    }

    #[test]
    fn test_backward_from_first_page_is_empty() {
        let items: Vec<ProductRecord> = (0..5).map(|n| record(n, 1)).collect();
        let first = fetch(&items, &PageRequest::first_page(5));
        assert!(!first.has_previous_page);

        let back = fetch(
            &items,
            &PageRequest {
                direction: Direction::Previous,
                cursor: first.start_cursor,
                page_size: 5,
            },
        );
        assert!(back.is_empty());
        assert!(!back.has_previous_page);
    }

    #[test]
    fn test_thirty_five_products_in_stock_scenario() {
        // 35 products, 32 in stock, page size 30: first page is full with a
        // next page; the second page holds the remaining 2 and is final.
        let items: Vec<ProductRecord> = (0..35)
            .map(|n| record(n, if n < 32 { 3 } else { 0 }))
            .collect();
        let in_stock = partition(items, StockFilter::InStock);
        assert_eq!(in_stock.len(), 32);

        let first = fetch(&in_stock, &PageRequest::first_page(30));
        assert_eq!(first.total_on_page(), 30);
        assert!(first.has_next_page);

        let second = fetch(
            &in_stock,
            &PageRequest {
                direction: Direction::Next,
                cursor: first.end_cursor,
                page_size: 30,
            },
        );
        assert_eq!(second.total_on_page(), 2);
        assert!(!second.has_next_page);
        assert!(second.has_previous_page);
    }
}
