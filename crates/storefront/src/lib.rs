//! Ninety-Six Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod notify;
pub mod render;
pub mod routes;
pub mod shop;
pub mod state;
pub mod storage;
