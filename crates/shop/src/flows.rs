//! Prompt-driven versions of the session operations.
//!
//! Each flow asks for its fields one at a time and stops at the first
//! missing or invalid answer, before asking anything else and before the
//! session is touched.

use shopcart_core::{
    Field, Product, ProductId, ValidationError, format_product_line, parse_quantity,
    require_text,
};

use crate::cart::CartLine;
use crate::error::Result;
use crate::prompt::Prompt;
use crate::session::Session;
use crate::summary::Order;

pub const TITLE_LABEL: &str = "Titill:";
pub const DESCRIPTION_LABEL: &str = "Lýsing:";
pub const PRICE_LABEL: &str = "Verð:";
pub const PRODUCT_ID_LABEL: &str = "Auðkenni vöru:";
pub const QUANTITY_LABEL: &str = "Fjöldi:";
pub const NAME_LABEL: &str = "Nafn:";
pub const ADDRESS_LABEL: &str = "Heimilisfang:";

/// Ask for title, description and price, then add the product.
///
/// # Errors
///
/// Returns the first validation error; nothing is asked after it.
pub fn add_product<P: Prompt + ?Sized>(session: &mut Session, prompt: &mut P) -> Result<Product> {
    let title = prompt.ask(TITLE_LABEL);
    let title = require_text(title.as_deref(), Field::Title)?;

    let description = prompt.ask(DESCRIPTION_LABEL);
    let description = require_text(description.as_deref(), Field::Description)?;

    let price = prompt.ask(PRICE_LABEL);
    let price = require_text(price.as_deref(), Field::Price)?;

    session.add_product(title, description, price)
}

/// Ask for a product id and a quantity, then add to the cart.
///
/// The product is resolved before the quantity is asked for.
///
/// # Errors
///
/// Returns a validation error for a malformed id or quantity and
/// `NotFound` for an unknown product.
pub fn add_to_cart<P: Prompt + ?Sized>(session: &mut Session, prompt: &mut P) -> Result<CartLine> {
    let id = prompt
        .ask(PRODUCT_ID_LABEL)
        .and_then(|answer| answer.parse::<ProductId>().ok())
        .ok_or(ValidationError::InvalidProductId)?;
    let id = session.product(id)?.id();

    let quantity = prompt.ask(QUANTITY_LABEL).unwrap_or_default();
    let quantity = parse_quantity(&quantity)?;

    session.add_to_cart(id, quantity)
}

/// Ask for the buyer's name and address, then check out.
///
/// An empty cart is rejected before anything is asked.
///
/// # Errors
///
/// Returns a validation error for an empty cart or a missing field.
pub fn checkout<P: Prompt + ?Sized>(session: &mut Session, prompt: &mut P) -> Result<Order> {
    session.ensure_cart_not_empty()?;

    let name = prompt.ask(NAME_LABEL);
    let name = require_text(name.as_deref(), Field::Name)?;

    let address = prompt.ask(ADDRESS_LABEL);
    let address = require_text(address.as_deref(), Field::Address)?;

    session.checkout(name, address)
}

/// Confirmation shown after a product is created.
#[must_use]
pub fn product_added_message(product: &Product) -> String {
    format!("Vöru bætt við:\n{}", format_product_line(product, None))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopcart_core::Price;

    use super::*;
    use crate::error::ShopError;
    use crate::prompt::ScriptedPrompt;

    #[test]
    fn test_add_product_flow() {
        let mut session = Session::default();
        let mut prompt = ScriptedPrompt::new(["Python peysa", "Hlý peysa", "7000"]);

        let product = add_product(&mut session, &mut prompt).unwrap();

        assert_eq!(product.price(), Price::new(7_000));
        assert_eq!(prompt.asked(), [TITLE_LABEL, DESCRIPTION_LABEL, PRICE_LABEL]);
        assert_eq!(
            product_added_message(&product),
            "Vöru bætt við:\nPython peysa — 7.000 kr."
        );
    }

    #[test]
    fn test_add_product_stops_at_first_missing_field() {
        let mut session = Session::default();
        let mut prompt = ScriptedPrompt::new(["Python peysa"]).then_cancel();

        let err = add_product(&mut session, &mut prompt).unwrap_err();

        assert_eq!(
            err,
            ShopError::Validation(ValidationError::MissingField(Field::Description))
        );
        assert_eq!(prompt.asked(), [TITLE_LABEL, DESCRIPTION_LABEL]);
        assert_eq!(session.list_catalog().len(), 3);
    }

    #[test]
    fn test_add_to_cart_unknown_product_skips_quantity() {
        let mut session = Session::default();
        let mut prompt = ScriptedPrompt::new(["42", "1"]);

        let err = add_to_cart(&mut session, &mut prompt).unwrap_err();

        assert_eq!(err, ShopError::NotFound(ProductId::new(42)));
        assert_eq!(prompt.asked(), [PRODUCT_ID_LABEL]);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_add_to_cart_invalid_id() {
        let mut session = Session::default();
        for answer in ["abc", "0", ""] {
            let mut prompt = ScriptedPrompt::new([answer]);
            let err = add_to_cart(&mut session, &mut prompt).unwrap_err();
            assert_eq!(err, ShopError::Validation(ValidationError::InvalidProductId));
        }
    }

    #[test]
    fn test_add_to_cart_flow() {
        let mut session = Session::default();
        let mut prompt = ScriptedPrompt::new(["2", "3"]);

        let line = add_to_cart(&mut session, &mut prompt).unwrap();

        assert_eq!(line.product.id(), ProductId::new(2));
        assert_eq!(line.quantity, 3);
    }

    #[test]
    fn test_add_to_cart_cancelled_quantity() {
        let mut session = Session::default();
        let mut prompt = ScriptedPrompt::new(["2"]).then_cancel();

        let err = add_to_cart(&mut session, &mut prompt).unwrap_err();

        assert_eq!(
            err,
            ShopError::Validation(ValidationError::quantity_out_of_range())
        );
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_checkout_empty_cart_asks_nothing() {
        let mut session = Session::default();
        let mut prompt = ScriptedPrompt::new(["Jón", "Einhver gata 1"]);

        let err = checkout(&mut session, &mut prompt).unwrap_err();

        assert_eq!(err, ShopError::Validation(ValidationError::EmptyCart));
        assert!(prompt.asked().is_empty());
    }

    #[test]
    fn test_checkout_flow() {
        let mut session = Session::default();
        session.add_to_cart(ProductId::new(1), 2).unwrap();
        let mut prompt = ScriptedPrompt::new(["Jón", "Einhver gata 1"]);

        let order = checkout(&mut session, &mut prompt).unwrap();

        assert_eq!(order.name, "Jón");
        assert_eq!(order.summary.total, Price::new(10_000));
        assert_eq!(session.cart().address(), Some("Einhver gata 1"));
    }

    #[test]
    fn test_checkout_missing_name_skips_address() {
        let mut session = Session::default();
        session.add_to_cart(ProductId::new(1), 1).unwrap();
        let mut prompt = ScriptedPrompt::new(["  ", "Einhver gata 1"]);

        let err = checkout(&mut session, &mut prompt).unwrap_err();

        assert_eq!(
            err,
            ShopError::Validation(ValidationError::MissingField(Field::Name))
        );
        assert_eq!(prompt.asked(), [NAME_LABEL]);
        assert_eq!(session.cart().name(), None);
    }
}
