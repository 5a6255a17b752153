//! shopcart Core - Shared types library.
//!
//! This crate provides common types used across all shopcart components:
//! - `shopcart` - Catalog, cart and session logic
//! - `cli` - Interactive command-line shell
//!
//! # Architecture
//!
//! The core crate contains only types and pure formatting helpers - no I/O,
//! no global state. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs and prices, the product type, and
//!   input validation errors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
