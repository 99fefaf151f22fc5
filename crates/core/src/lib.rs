//! Shelfview Core - Inventory-view domain logic.
//!
//! This crate contains the pure half of Shelfview: the record and page-window
//! types produced by normalizing Shopify Admin API responses, and the
//! functions that operate on them (stock partitioning, current-page search,
//! CSV export). No I/O, no HTTP clients - everything here is testable with
//! plain values.
//!
//! # Modules
//!
//! - [`record`] - `ProductRecord` and `Money`
//! - [`stock`] - `StockFilter` and the stock partitioner
//! - [`page`] - cursor pagination types (`PageRequest`, `PageWindow`)
//! - [`search`] - case-insensitive current-page search
//! - [`export`] - spreadsheet-ready CSV serialization

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod export;
pub mod page;
pub mod record;
pub mod search;
pub mod stock;

pub use export::{EXPORT_COLUMNS, ExportError, export_csv, export_filename};
pub use page::{Direction, PageRequest, PageWindow};
pub use record::{Money, ProductRecord};
pub use search::filter_records;
pub use stock::{StockFilter, partition};
