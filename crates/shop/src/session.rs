//! Shopping session.
//!
//! A [`Session`] owns the catalog and the cart for one shopper. Every
//! operation validates all of its input before touching either collection,
//! so a failed call leaves the session exactly as it was.
//!
//! # Example
//!
//! ```
//! use shopcart::{Session, SessionOptions};
//! use shopcart_core::{Price, ProductId};
//!
//! let mut session = Session::create(SessionOptions::default());
//! session.add_to_cart(ProductId::new(1), 2).unwrap();
//! session.add_to_cart(ProductId::new(2), 1).unwrap();
//! assert_eq!(session.cart_summary().total, Price::new(13_000));
//!
//! let order = session.checkout("Jón", "Einhver gata 1").unwrap();
//! assert_eq!(order.summary.total, Price::new(13_000));
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use shopcart_core::{
    Field, MAX_QUANTITY, MIN_QUANTITY, OrderId, Price, Product, ProductId, ValidationError,
    require_text,
};
use tracing::instrument;

use crate::cart::{Cart, CartLine, QuantityPolicy};
use crate::catalog::Catalog;
use crate::error::{Result, ShopError};
use crate::summary::{CartSummary, Order};

/// Behavior switches for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Put every newly created catalog product into the cart with quantity 1.
    pub also_add_to_cart: bool,
    /// How repeated additions of the same product combine.
    pub quantity_policy: QuantityPolicy,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            also_add_to_cart: true,
            quantity_policy: QuantityPolicy::Clamp,
        }
    }
}

/// Catalog and cart state for a single shopper.
#[derive(Debug, Clone)]
pub struct Session {
    seed: Catalog,
    catalog: Catalog,
    cart: Cart,
    options: SessionOptions,
    next_order_id: Option<OrderId>,
}

impl Session {
    /// Start a session on the built-in catalog.
    #[must_use]
    pub fn create(options: SessionOptions) -> Self {
        Self::with_catalog(Catalog::builtin(), options)
    }

    /// Start a session on the given seed catalog.
    ///
    /// [`Session::reset`] returns to this catalog.
    #[must_use]
    pub fn with_catalog(seed: Catalog, options: SessionOptions) -> Self {
        tracing::debug!(products = seed.len(), ?options, "Creating session");
        Self {
            catalog: seed.clone(),
            seed,
            cart: Cart::new(),
            options,
            next_order_id: Some(OrderId::FIRST),
        }
    }

    /// Discard every change and return to the seed catalog with an empty cart.
    pub fn reset(&mut self) {
        tracing::info!("Resetting session");
        self.catalog = self.seed.clone();
        self.cart = Cart::new();
        self.next_order_id = Some(OrderId::FIRST);
    }

    #[must_use]
    pub const fn options(&self) -> SessionOptions {
        self.options
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Catalog contents in insertion order.
    #[must_use]
    pub fn list_catalog(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Look up a catalog product.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidProductId`] for id 0 and
    /// [`ShopError::NotFound`] if no product has the id.
    pub fn product(&self, id: ProductId) -> Result<&Product> {
        if !id.is_valid() {
            return Err(ValidationError::InvalidProductId.into());
        }
        self.catalog.get(id).ok_or(ShopError::NotFound(id))
    }

    /// Create a catalog product from shopper input.
    ///
    /// Title, description and price are checked in that order and the first
    /// problem is reported. With `also_add_to_cart` set, the new product is
    /// also put in the cart with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Validation`] if a field is missing, the price is
    /// not a positive integer up to [`Price::MAX`] or the new cart line would
    /// push the cart total past what a [`Price`] can hold.
    /// Returns [`ShopError::IdsExhausted`] if the catalog has no id left.
    #[instrument(skip(self))]
    pub fn add_product(
        &mut self,
        title: &str,
        description: &str,
        price_text: &str,
    ) -> Result<Product> {
        let title = require_text(Some(title), Field::Title)?;
        let description = require_text(Some(description), Field::Description)?;
        let price = Price::parse(price_text)?;
        if self.options.also_add_to_cart {
            self.cart
                .checked_total()
                .and_then(|total| total.checked_add(price))
                .ok_or(ValidationError::CartTotalTooLarge)?;
        }

        let product = self.catalog.insert(title, description, price)?;
        tracing::info!(id = %product.id(), price = price.amount(), "Product added to catalog");

        if self.options.also_add_to_cart {
            self.cart.add(&product, 1, self.options.quantity_policy);
            tracing::debug!(id = %product.id(), "New product added to cart");
        }

        Ok(product)
    }

    /// Put `quantity` of a catalog product in the cart.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Validation`] for an invalid id, a quantity
    /// outside 1..=99 or a cart total too large for a [`Price`], and
    /// [`ShopError::NotFound`] for an unknown product.
    #[instrument(skip(self))]
    pub fn add_to_cart(&mut self, id: ProductId, quantity: u32) -> Result<CartLine> {
        let product = self.product(id)?.clone();
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
            return Err(ValidationError::quantity_out_of_range().into());
        }

        let mut cart = self.cart.clone();
        let line = cart.add(&product, quantity, self.options.quantity_policy);
        if cart.checked_total().is_none() {
            return Err(ValidationError::CartTotalTooLarge.into());
        }
        self.cart = cart;
        tracing::info!(id = %id, quantity, total_quantity = line.quantity, "Cart updated");
        Ok(line)
    }

    /// Current cart contents with per-line and overall totals.
    #[must_use]
    pub fn cart_summary(&self) -> CartSummary {
        self.cart.summary()
    }

    /// Record the buyer and confirm the order.
    ///
    /// The cart is kept as is, so checking out again produces a second
    /// confirmation for the same lines.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Validation`] if the cart is empty or the name or
    /// address is missing, checked in that order, and
    /// [`ShopError::IdsExhausted`] once every order id has been used.
    #[instrument(skip(self))]
    pub fn checkout(&mut self, name: &str, address: &str) -> Result<Order> {
        self.ensure_cart_not_empty()?;
        let name = require_text(Some(name), Field::Name)?;
        let address = require_text(Some(address), Field::Address)?;
        let id = self.next_order_id.ok_or(ShopError::IdsExhausted)?;

        self.cart.set_buyer(name, address);
        let order = Order {
            id,
            name: name.to_owned(),
            address: address.to_owned(),
            summary: self.cart.summary(),
            placed_at: Utc::now(),
        };
        self.next_order_id = id.next();

        tracing::info!(
            order_id = %order.id,
            lines = order.summary.lines.len(),
            total = order.summary.total.amount(),
            "Order placed"
        );
        Ok(order)
    }

    /// Fail with [`ValidationError::EmptyCart`] when there is nothing to buy.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Validation`] if the cart has no lines.
    pub fn ensure_cart_not_empty(&self) -> Result<()> {
        if self.cart.is_empty() {
            return Err(ValidationError::EmptyCart.into());
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::create(SessionOptions::default())
    }
}
