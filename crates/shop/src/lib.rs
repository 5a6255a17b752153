//! shopcart - Catalog, cart and checkout logic.
//!
//! All state for one shopper lives in a [`Session`]: the catalog it started
//! from, the current catalog, and the cart. Operations are methods on the
//! session and never leave it half-updated when they fail.
//!
//! # Modules
//!
//! - [`catalog`] - Ordered product catalog with a monotonic id counter
//! - [`cart`] - Cart lines and the quantity policy
//! - [`session`] - Session lifecycle and operations
//! - [`summary`] - Cart summaries and order confirmations
//! - [`flows`] - The same operations driven by a [`Prompt`]
//! - [`seed`] - YAML seed catalogs
//! - [`config`] - Environment configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod flows;
pub mod prompt;
pub mod seed;
pub mod session;
pub mod summary;

pub use cart::{Cart, CartLine, QuantityPolicy};
pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, ShopConfig};
pub use error::{Result, ShopError};
pub use prompt::{Prompt, ScriptedPrompt};
pub use seed::{CatalogFileError, load_catalog, parse_catalog};
pub use session::{Session, SessionOptions};
pub use summary::{CartSummary, Order, SummaryLine};
