//! Collection browsing, search, and CSV export handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use shelfview_core::{
    Direction, ExportError, PageRequest, ProductRecord, StockFilter, export_csv, export_filename,
    filter_records, partition,
};

use crate::error::AppError;
use crate::shopify::{CollectionDetail, CollectionSummary};
use crate::state::AppState;

/// Products per page in the collection detail view.
const PAGE_SIZE: u32 = 30;

/// Collections per page on the index.
const COLLECTIONS_PER_PAGE: i64 = 50;

/// Query parameters for the collection index.
#[derive(Debug, Deserialize)]
pub struct CollectionsQuery {
    pub cursor: Option<String>,
}

/// Query parameters for the product listing and export views.
///
/// Cursors are only meaningful for the stock filter that produced them, so
/// switching tabs drops `cursor` and `direction`.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub cursor: Option<String>,
    pub direction: Option<Direction>,
    pub stock: Option<StockFilter>,
    pub q: Option<String>,
}

impl ListingQuery {
    fn stock(&self) -> StockFilter {
        self.stock.unwrap_or_default()
    }

    /// Trimmed search query, `None` when blank.
    fn search(&self) -> Option<&str> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    /// Page request for this view. A missing cursor always means the first
    /// page, regardless of the requested direction.
    fn page_request(&self) -> PageRequest {
        if self.cursor.is_none() {
            return PageRequest::first_page(PAGE_SIZE);
        }
        PageRequest {
            direction: self.direction.unwrap_or_default(),
            cursor: self.cursor.clone(),
            page_size: PAGE_SIZE,
        }
    }
}

// =============================================================================
// Views
// =============================================================================

/// Collection row for the index template.
#[derive(Debug, Clone)]
pub struct CollectionRow {
    /// Numeric identifier, used for links.
    pub id: String,
    pub title: String,
    pub handle: String,
    pub products_count: Option<i64>,
}

impl From<&CollectionSummary> for CollectionRow {
    fn from(summary: &CollectionSummary) -> Self {
        Self {
            id: numeric_id(&summary.id).to_string(),
            title: summary.title.clone(),
            handle: summary.handle.clone(),
            products_count: summary.products_count,
        }
    }
}

/// Product row for the listing template.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub title: String,
    pub image: Option<String>,
    pub image_alt: String,
    pub weight: String,
    pub price: String,
    pub currency: String,
    pub barcode: String,
    pub available_units: i64,
}

impl From<&ProductRecord> for ProductRow {
    fn from(record: &ProductRecord) -> Self {
        Self {
            title: record.title.clone(),
            image: record.image.clone(),
            image_alt: record.image_alt.clone(),
            weight: record.weight_display.clone(),
            price: record.price.amount.clone(),
            currency: record.price.currency_code.clone(),
            barcode: record.barcode.clone(),
            available_units: record.available_units,
        }
    }
}

/// A stock filter tab in the listing header.
#[derive(Debug, Clone)]
pub struct StockTab {
    pub label: &'static str,
    pub url: String,
    pub active: bool,
}

/// Collections index template.
#[derive(Template, WebTemplate)]
#[template(path = "collections/index.html")]
pub struct CollectionsIndexTemplate {
    pub collections: Vec<CollectionRow>,
    pub has_next_page: bool,
    pub next_url: Option<String>,
}

/// Collection product listing template.
#[derive(Template, WebTemplate)]
#[template(path = "collections/show.html")]
pub struct CollectionShowTemplate {
    pub collection_id: String,
    pub collection_title: String,
    pub stock_slug: &'static str,
    pub tabs: Vec<StockTab>,
    pub products: Vec<ProductRow>,
    pub total_on_page: usize,
    pub search_query: Option<String>,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
    pub export_url: String,
    pub listing_url: String,
}

/// Notice shown when an export has nothing to write.
#[derive(Template, WebTemplate)]
#[template(path = "collections/export_empty.html")]
pub struct ExportEmptyTemplate {
    pub collection_title: String,
    pub back_url: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Collections index handler.
///
/// # Errors
///
/// Returns an error if the collection list cannot be fetched.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CollectionsQuery>,
) -> Result<Response, AppError> {
    let page = state
        .shopify()
        .get_collections(COLLECTIONS_PER_PAGE, query.cursor)
        .await?;

    let next_url = if page.has_next_page {
        page.end_cursor
            .as_deref()
            .map(|c| format!("/collections?cursor={}", urlencoding::encode(c)))
    } else {
        None
    };

    Ok(CollectionsIndexTemplate {
        collections: page.collections.iter().map(CollectionRow::from).collect(),
        has_next_page: page.has_next_page,
        next_url,
    }
    .into_response())
}

/// Collection product listing handler.
///
/// # Errors
///
/// Returns 404 when the collection does not exist, or an upstream error
/// when the page cannot be fetched.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<ListingQuery>,
) -> Result<Response, AppError> {
    let stock = query.stock();
    let (detail, window, records) = fetch_filtered_page(&state, id, &query).await?;

    let listing_url = listing_url(id, stock, None);
    let prev_url = if window.has_previous_page {
        window
            .start_cursor
            .as_deref()
            .map(|c| page_url(id, stock, Direction::Previous, c, query.search()))
    } else {
        None
    };
    let next_url = if window.has_next_page {
        window
            .end_cursor
            .as_deref()
            .map(|c| page_url(id, stock, Direction::Next, c, query.search()))
    } else {
        None
    };

    Ok(CollectionShowTemplate {
        collection_id: id.to_string(),
        collection_title: detail.title,
        stock_slug: stock.slug(),
        tabs: stock_tabs(id, stock),
        total_on_page: records.len(),
        products: records.iter().map(ProductRow::from).collect(),
        search_query: query.search().map(str::to_string),
        prev_url,
        next_url,
        export_url: export_url(id, &query),
        listing_url,
    }
    .into_response())
}

/// CSV export handler for the current product page.
///
/// Exports exactly what the listing view shows: the current window, after
/// the stock filter and any active search. An empty result renders a notice
/// page instead of producing a file.
///
/// # Errors
///
/// Returns 404 when the collection does not exist, or an upstream error
/// when the page cannot be fetched.
#[instrument(skip(state))]
pub async fn export(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<ListingQuery>,
) -> Result<Response, AppError> {
    let stock = query.stock();
    let (detail, _window, records) = fetch_filtered_page(&state, id, &query).await?;

    match export_csv(&records) {
        Ok(body) => {
            let date = chrono::Utc::now().date_naive();
            let filename = export_filename(&detail.title, stock, date);
            tracing::info!(
                collection = %detail.title,
                rows = records.len(),
                "Exporting product CSV"
            );
            Ok((
                StatusCode::OK,
                [
                    ("Content-Type", "text/csv; charset=utf-8".to_string()),
                    (
                        "Content-Disposition",
                        format!("attachment; filename=\"{filename}\""),
                    ),
                ],
                body,
            )
                .into_response())
        }
        Err(ExportError::NoRecords) => Ok(ExportEmptyTemplate {
            collection_title: detail.title,
            back_url: listing_url(id, stock, query.search()),
        }
        .into_response()),
        Err(e) => Err(AppError::Internal(format!("CSV export failed: {e}"))),
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Window metadata left after the records have been taken out.
struct WindowFlags {
    has_next_page: bool,
    has_previous_page: bool,
    start_cursor: Option<String>,
    end_cursor: Option<String>,
}

/// Fetch one window and run it through the stock partition and the search
/// filter. The listing and export handlers share this path so a download
/// always matches the page the merchant is looking at.
async fn fetch_filtered_page(
    state: &AppState,
    id: u64,
    query: &ListingQuery,
) -> Result<(CollectionDetail, WindowFlags, Vec<ProductRecord>), AppError> {
    let stock = query.stock();
    let request = query.page_request();

    let (detail, window) = state
        .shopify()
        .get_collection_products(id, stock, &request)
        .await?;

    let flags = WindowFlags {
        has_next_page: window.has_next_page,
        has_previous_page: window.has_previous_page,
        start_cursor: window.start_cursor,
        end_cursor: window.end_cursor,
    };

    // The upstream query already narrows by inventory, but the partition is
    // re-applied to the window so a record whose count disagrees with the
    // upstream clause (multi-location lag) never leaks across a tab.
    let records = partition(window.records, stock);

    let records = match query.search() {
        Some(q) => filter_records(&records, q),
        None => records,
    };

    Ok((detail, flags, records))
}

// =============================================================================
// URL Helpers
// =============================================================================

/// Trailing numeric segment of a GID (`gid://shopify/Collection/7` -> `7`).
fn numeric_id(gid: &str) -> &str {
    gid.rsplit('/').next().unwrap_or(gid)
}

fn listing_url(id: u64, stock: StockFilter, search: Option<&str>) -> String {
    let mut url = format!("/collections/{id}?stock={}", stock.slug());
    if let Some(q) = search {
        url.push_str("&q=");
        url.push_str(&urlencoding::encode(q));
    }
    url
}

fn page_url(
    id: u64,
    stock: StockFilter,
    direction: Direction,
    cursor: &str,
    search: Option<&str>,
) -> String {
    let direction = match direction {
        Direction::Next => "next",
        Direction::Previous => "previous",
    };
    let mut url = format!(
        "/collections/{id}?stock={}&direction={direction}&cursor={}",
        stock.slug(),
        urlencoding::encode(cursor)
    );
    if let Some(q) = search {
        url.push_str("&q=");
        url.push_str(&urlencoding::encode(q));
    }
    url
}

fn export_url(id: u64, query: &ListingQuery) -> String {
    let mut url = format!("/collections/{id}/export?stock={}", query.stock().slug());
    if let Some(cursor) = query.cursor.as_deref() {
        let direction = match query.direction.unwrap_or_default() {
            Direction::Next => "next",
            Direction::Previous => "previous",
        };
        url.push_str("&direction=");
        url.push_str(direction);
        url.push_str("&cursor=");
        url.push_str(&urlencoding::encode(cursor));
    }
    if let Some(q) = query.search() {
        url.push_str("&q=");
        url.push_str(&urlencoding::encode(q));
    }
    url
}

fn stock_tabs(id: u64, active: StockFilter) -> Vec<StockTab> {
    [StockFilter::InStock, StockFilter::SoldOut]
        .into_iter()
        .map(|filter| StockTab {
            label: filter.label(),
            url: listing_url(id, filter, None),
            active: filter == active,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(
        cursor: Option<&str>,
        direction: Option<Direction>,
        stock: Option<StockFilter>,
        q: Option<&str>,
    ) -> ListingQuery {
        ListingQuery {
            cursor: cursor.map(str::to_string),
            direction,
            stock,
            q: q.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_cursor_is_first_page() {
        let query = listing(None, Some(Direction::Previous), None, None);
        let request = query.page_request();
        assert_eq!(request.direction, Direction::Next);
        assert!(request.cursor.is_none());
        assert_eq!(request.page_size, PAGE_SIZE);
    }

    #[test]
    fn test_backward_request_keeps_cursor() {
        let query = listing(Some("abc"), Some(Direction::Previous), None, None);
        let request = query.page_request();
        assert_eq!(request.direction, Direction::Previous);
        assert_eq!(request.cursor.as_deref(), Some("abc"));
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let query = listing(None, None, None, Some("   "));
        assert!(query.search().is_none());

        let query = listing(None, None, None, Some(" towel "));
        assert_eq!(query.search(), Some("towel"));
    }

    #[test]
    fn test_numeric_id_from_gid() {
        assert_eq!(numeric_id("gid://shopify/Collection/42"), "42");
        assert_eq!(numeric_id("42"), "42");
    }

    #[test]
    fn test_page_url_encodes_cursor_and_search() {
        let url = page_url(
            7,
            StockFilter::SoldOut,
            Direction::Next,
            "a+b/c=",
            Some("tea towel"),
        );
        assert_eq!(
            url,
            "/collections/7?stock=sold-out&direction=next&cursor=a%2Bb%2Fc%3D&q=tea%20towel"
        );
    }

    #[test]
    fn test_export_url_preserves_view_state() {
        let query = listing(
            Some("cur"),
            Some(Direction::Next),
            Some(StockFilter::InStock),
            Some("mug"),
        );
        assert_eq!(
            export_url(7, &query),
            "/collections/7/export?stock=in-stock&direction=next&cursor=cur&q=mug"
        );
    }

    #[test]
    fn test_export_url_without_cursor() {
        let query = listing(None, None, None, None);
        assert_eq!(export_url(7, &query), "/collections/7/export?stock=in-stock");
    }

    #[test]
    fn test_stock_tabs_mark_active() {
        let tabs = stock_tabs(7, StockFilter::SoldOut);
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].label, "In Stock");
        assert!(!tabs[0].active);
        assert_eq!(tabs[1].label, "Sold Out");
        assert!(tabs[1].active);
        assert_eq!(tabs[0].url, "/collections/7?stock=in-stock");
    }
}
