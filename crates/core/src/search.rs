//! Free-text search over the currently loaded page.
//!
//! This deliberately filters only the records already in hand - it never
//! reaches back to the remote collection. The UI labels the search box
//! "current page only" so merchants are not surprised by the scope.

use crate::record::ProductRecord;

/// Fields a query is matched against, ORed together.
fn haystacks(record: &ProductRecord) -> [&str; 3] {
    [&record.title, &record.barcode, &record.weight_display]
}

/// Keep records whose title, barcode, or weight string contains `query`,
/// case-insensitively.
///
/// An empty or whitespace-only query returns the input unchanged, in order.
#[must_use]
pub fn filter_records(records: &[ProductRecord], query: &str) -> Vec<ProductRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|r| {
            haystacks(r)
                .iter()
                .any(|h| h.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Money;

    fn record(title: &str, barcode: &str, weight: &str) -> ProductRecord {
        ProductRecord {
            id: format!("gid://shopify/Product/{title}"),
            title: title.to_string(),
            image: None,
            image_alt: title.to_string(),
            weight_display: weight.to_string(),
            price: Money {
                amount: "1.00".to_string(),
                currency_code: "USD".to_string(),
            },
            barcode: barcode.to_string(),
            available_units: 1,
            cursor: format!("c-{title}"),
        }
    }

    fn fixtures() -> Vec<ProductRecord> {
        vec![
            record("Alpha Widget", "111222", "1.5 kg"),
            record("Beta Gadget", "333444", "200 grams"),
            record("gamma widget", "555666", "N/A"),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let records = fixtures();
        assert_eq!(filter_records(&records, ""), records);
        assert_eq!(filter_records(&records, "   "), records);
    }

    #[test]
    fn test_case_insensitive_title_match() {
        let hits = filter_records(&fixtures(), "WIDGET");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Alpha Widget");
        assert_eq!(hits[1].title, "gamma widget");
    }

    #[test]
    fn test_matches_barcode_and_weight() {
        let hits = filter_records(&fixtures(), "333");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Beta Gadget");

        let hits = filter_records(&fixtures(), "grams");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Beta Gadget");
    }

    #[test]
    fn test_idempotent() {
        let records = fixtures();
        let once = filter_records(&records, "widget");
        let twice = filter_records(&once, "widget");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(filter_records(&fixtures(), "zzz").is_empty());
    }
}
