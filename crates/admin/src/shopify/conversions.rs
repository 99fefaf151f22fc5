//! Normalization of Admin API payloads into domain records.
//!
//! This is the ingestion boundary: every optional or malformed upstream
//! field is resolved here, deterministically, so the rest of the app only
//! ever sees complete [`ProductRecord`]s. Nothing in this module fails -
//! absence becomes a default, never an error.

use shelfview_core::{Money, PageWindow, ProductRecord};

use super::types::{MoneyData, PageInfoData, ProductConnectionData, ProductEdgeData};

const NOT_AVAILABLE: &str = "N/A";

/// Normalize one product edge into a flat record.
#[must_use]
pub fn normalize_product(edge: ProductEdgeData) -> ProductRecord {
    let node = edge.node;

    let title = match node.title {
        Some(t) if !t.trim().is_empty() => t,
        _ => NOT_AVAILABLE.to_string(),
    };

    let image = node
        .featured_media
        .and_then(|m| m.preview)
        .and_then(|p| p.image);
    let image_alt = image
        .as_ref()
        .and_then(|i| i.alt_text.clone())
        .filter(|alt| !alt.trim().is_empty())
        .unwrap_or_else(|| title.clone());

    let variant = node.variants.edges.into_iter().next().map(|e| e.node);

    let weight = variant
        .as_ref()
        .and_then(|v| v.inventory_item.as_ref())
        .and_then(|i| i.measurement.as_ref())
        .and_then(|m| m.weight.as_ref());
    let weight_display = ProductRecord::weight_display(
        weight.map(|w| w.value),
        weight.map(|w| w.unit.as_str()),
    );

    let barcode = variant
        .and_then(|v| v.barcode)
        .filter(|b| !b.trim().is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    // Negative totals can surface from multi-location adjustments; the
    // record type promises a non-negative count.
    let available_units = node.total_inventory.unwrap_or(0).max(0);

    ProductRecord {
        id: node.id,
        title,
        image: image.map(|i| i.url),
        image_alt,
        weight_display,
        price: convert_money(node.price_range_v2.min_variant_price),
        barcode,
        available_units,
        cursor: edge.cursor,
    }
}

/// Convert a product connection into a fresh page window.
#[must_use]
pub fn convert_page_window(connection: ProductConnectionData) -> PageWindow {
    let PageInfoData {
        has_next_page,
        has_previous_page,
        start_cursor,
        end_cursor,
    } = connection.page_info;

    PageWindow {
        records: connection
            .edges
            .into_iter()
            .map(normalize_product)
            .collect(),
        has_next_page,
        has_previous_page,
        start_cursor,
        end_cursor,
    }
}

fn convert_money(money: MoneyData) -> Money {
    Money {
        amount: money.amount,
        currency_code: money.currency_code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shopify::types::{
        ImageData, InventoryItemData, MeasurementData, MediaData, MediaPreviewData,
        PriceRangeData, ProductNodeData, VariantConnectionData, VariantEdgeData, VariantNodeData,
        WeightData,
    };

    fn edge(node: ProductNodeData) -> ProductEdgeData {
        ProductEdgeData {
            cursor: "cur-1".to_string(),
            node,
        }
    }

    fn bare_node() -> ProductNodeData {
        ProductNodeData {
            id: "gid://shopify/Product/1".to_string(),
            title: None,
            total_inventory: None,
            featured_media: None,
            price_range_v2: PriceRangeData {
                min_variant_price: MoneyData {
                    amount: "9.99".to_string(),
                    currency_code: "USD".to_string(),
                },
            },
            variants: VariantConnectionData { edges: vec![] },
        }
    }

    #[test]
    fn test_defaults_for_sparse_node() {
        let record = normalize_product(edge(bare_node()));

        assert_eq!(record.title, "N/A");
        assert_eq!(record.image, None);
        assert_eq!(record.image_alt, "N/A");
        assert_eq!(record.weight_display, "N/A");
        assert_eq!(record.barcode, "N/A");
        assert_eq!(record.available_units, 0);
        assert_eq!(record.price.amount, "9.99");
        assert_eq!(record.cursor, "cur-1");
    }

    #[test]
    fn test_full_node_flattens() {
        let mut node = bare_node();
        node.title = Some("Tea Towel".to_string());
        node.total_inventory = Some(4);
        node.featured_media = Some(MediaData {
            preview: Some(MediaPreviewData {
                image: Some(ImageData {
                    url: "https://cdn/x.jpg".to_string(),
                    alt_text: Some("Folded tea towel".to_string()),
                }),
            }),
        });
        node.variants = VariantConnectionData {
            edges: vec![VariantEdgeData {
                node: VariantNodeData {
                    barcode: Some("7351".to_string()),
                    inventory_item: Some(InventoryItemData {
                        measurement: Some(MeasurementData {
                            weight: Some(WeightData {
                                value: 0.2,
                                unit: "KILOGRAMS".to_string(),
                            }),
                        }),
                    }),
                },
            }],
        };

        let record = normalize_product(edge(node));
        assert_eq!(record.title, "Tea Towel");
        assert_eq!(record.image.as_deref(), Some("https://cdn/x.jpg"));
        assert_eq!(record.image_alt, "Folded tea towel");
        assert_eq!(record.weight_display, "0.2 kilograms");
        assert_eq!(record.barcode, "7351");
        assert_eq!(record.available_units, 4);
    }

    #[test]
    fn test_image_alt_falls_back_to_title() {
        let mut node = bare_node();
        node.title = Some("Tea Towel".to_string());
        node.featured_media = Some(MediaData {
            preview: Some(MediaPreviewData {
                image: Some(ImageData {
                    url: "https://cdn/x.jpg".to_string(),
                    alt_text: None,
                }),
            }),
        });

        let record = normalize_product(edge(node));
        assert_eq!(record.image_alt, "Tea Towel");
    }

    #[test]
    fn test_negative_inventory_clamped() {
        let mut node = bare_node();
        node.total_inventory = Some(-3);

        let record = normalize_product(edge(node));
        assert_eq!(record.available_units, 0);
    }

    #[test]
    fn test_page_window_carries_flags_and_cursors() {
        let connection = ProductConnectionData {
            edges: vec![edge(bare_node())],
            page_info: PageInfoData {
                has_next_page: true,
                has_previous_page: false,
                start_cursor: Some("a".to_string()),
                end_cursor: Some("a".to_string()),
            },
        };

        let window = convert_page_window(connection);
        assert_eq!(window.total_on_page(), 1);
        assert!(window.has_next_page);
        assert!(!window.has_previous_page);
        assert_eq!(window.start_cursor.as_deref(), Some("a"));
    }
}
