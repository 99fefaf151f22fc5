//! Wire types for Shopify Admin API responses.
//!
//! These mirror the shape of the documents in [`super::queries`] exactly and
//! go through [`super::conversions`] before anything else touches them.
//! Fields Shopify may omit are `Option` here; defaulting happens in one
//! place, at normalization.

use serde::Deserialize;

/// Relay-style pagination flags and boundary cursors.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfoData {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

/// Money with explicit currency (`MoneyV2`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyData {
    pub amount: String,
    pub currency_code: String,
}

// =============================================================================
// GetCollections
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct CollectionsData {
    pub collections: CollectionConnectionData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionConnectionData {
    pub edges: Vec<CollectionEdgeData>,
    pub page_info: PageInfoData,
}

#[derive(Debug, Deserialize)]
pub struct CollectionEdgeData {
    pub cursor: String,
    pub node: CollectionNodeData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionNodeData {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub products_count: Option<CountData>,
}

#[derive(Debug, Deserialize)]
pub struct CountData {
    pub count: i64,
}

// =============================================================================
// GetCollectionProducts
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct CollectionProductsData {
    /// `null` when the collection does not exist.
    pub collection: Option<CollectionInfoData>,
    pub products: ProductConnectionData,
}

#[derive(Debug, Deserialize)]
pub struct CollectionInfoData {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductConnectionData {
    pub edges: Vec<ProductEdgeData>,
    pub page_info: PageInfoData,
}

#[derive(Debug, Deserialize)]
pub struct ProductEdgeData {
    pub cursor: String,
    pub node: ProductNodeData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNodeData {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub total_inventory: Option<i64>,
    #[serde(default)]
    pub featured_media: Option<MediaData>,
    /// Always present upstream; price is never defaulted downstream.
    pub price_range_v2: PriceRangeData,
    pub variants: VariantConnectionData,
}

#[derive(Debug, Deserialize)]
pub struct MediaData {
    pub preview: Option<MediaPreviewData>,
}

#[derive(Debug, Deserialize)]
pub struct MediaPreviewData {
    pub image: Option<ImageData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    pub url: String,
    pub alt_text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeData {
    pub min_variant_price: MoneyData,
}

#[derive(Debug, Deserialize)]
pub struct VariantConnectionData {
    pub edges: Vec<VariantEdgeData>,
}

#[derive(Debug, Deserialize)]
pub struct VariantEdgeData {
    pub node: VariantNodeData,
}

/// The single representative variant queried per product.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantNodeData {
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub inventory_item: Option<InventoryItemData>,
}

#[derive(Debug, Deserialize)]
pub struct InventoryItemData {
    pub measurement: Option<MeasurementData>,
}

#[derive(Debug, Deserialize)]
pub struct MeasurementData {
    pub weight: Option<WeightData>,
}

#[derive(Debug, Deserialize)]
pub struct WeightData {
    pub value: f64,
    pub unit: String,
}
