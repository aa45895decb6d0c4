//! Ninety-Six Core - Shared domain types.
//!
//! This crate provides the types used across all Ninety-Six components:
//! - `storefront` - The storefront server (catalog, cart, checkout, order history)
//! - `cli` - Command-line tools for inspecting and clearing order history
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids and prices, plus products and orders

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
