//! Core types for shopcart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod validation;

pub use id::*;
pub use price::{CurrencyCode, Price};
pub use product::{Product, ProductRecord, format_product_line};
pub use validation::{
    Field, MAX_QUANTITY, MIN_QUANTITY, ValidationError, parse_quantity, require_text,
};
