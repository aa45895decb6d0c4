//! Core types for Ninety-Six.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod order;
pub mod price;
pub mod product;

pub use id::*;
pub use order::{Customer, ORDER_DATE_FORMAT, Order};
pub use price::{CURRENCY_SYMBOL, Price};
pub use product::{CartItem, PlaceholderStyle, Product, ProductImage};
