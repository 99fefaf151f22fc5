//! Shelfview Admin library.
//!
//! This crate provides the admin panel as a library, allowing it to be
//! tested and reused.
//!
//! # Security
//!
//! This crate holds a HIGH PRIVILEGE Shopify Admin API token. Only deploy
//! behind the embedded-app boundary or on VPN-protected infrastructure.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod shopify;
pub mod state;
