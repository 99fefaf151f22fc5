//! CSV export of the currently visible records.
//!
//! Output targets spreadsheet applications: UTF-8 with a byte-order marker,
//! CRLF row terminators, string fields quoted (internal quotes doubled),
//! numeric fields bare. Export order equals input order; no sorting happens
//! here.

use chrono::NaiveDate;
use thiserror::Error;

use crate::record::ProductRecord;
use crate::stock::StockFilter;

/// UTF-8 byte-order marker expected by spreadsheet imports.
const BOM: &[u8] = b"\xef\xbb\xbf";

/// Column headers, in output order.
pub const EXPORT_COLUMNS: [&str; 6] = [
    "Product Name",
    "Weight",
    "Price",
    "Currency",
    "Barcode",
    "Available Units",
];

/// Errors from building an export document.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export; callers show a notice instead of producing a file.
    #[error("no products to export")]
    NoRecords,

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Buffer write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize records into a complete CSV document.
///
/// # Errors
///
/// Returns [`ExportError::NoRecords`] for an empty input; the UI surfaces
/// that as a notice rather than downloading an empty file.
pub fn export_csv(records: &[ProductRecord]) -> Result<Vec<u8>, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NoRecords);
    }

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::NonNumeric)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(EXPORT_COLUMNS)?;
    for record in records {
        let units = record.available_units.to_string();
        writer.write_record([
            record.title.as_str(),
            record.weight_display.as_str(),
            record.price.amount.as_str(),
            record.price.currency_code.as_str(),
            record.barcode.as_str(),
            units.as_str(),
        ])?;
    }
    writer.flush()?;

    let body = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;

    let mut bytes = Vec::with_capacity(BOM.len() + body.len());
    bytes.extend_from_slice(BOM);
    bytes.extend_from_slice(&body);
    Ok(bytes)
}

/// Download filename: `<CollectionTitle>_<StockFilterLabel>_<Date>.csv`.
#[must_use]
pub fn export_filename(collection_title: &str, filter: StockFilter, date: NaiveDate) -> String {
    format!(
        "{}_{}_{}.csv",
        collection_title.trim(),
        filter.label(),
        date.format("%Y-%m-%d")
    )
}
