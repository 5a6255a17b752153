//! End-to-end tests driving a session through scripted prompts.

#![allow(clippy::unwrap_used)]

use shopcart::flows::{self, ADDRESS_LABEL, NAME_LABEL, PRODUCT_ID_LABEL, QUANTITY_LABEL};
use shopcart::{ScriptedPrompt, Session, SessionOptions, ShopError};
use shopcart_core::{Price, ProductId, ValidationError};

#[test]
fn test_shopping_trip() {
    let mut session = Session::default();

    let mut prompt = ScriptedPrompt::new(["Python peysa", "Peysa fyrir kalda daga.", "7000"]);
    let sweater = flows::add_product(&mut session, &mut prompt).unwrap();
    assert_eq!(sweater.id(), ProductId::new(4));

    let mut prompt = ScriptedPrompt::new(["1", "2", "4", "1"]);
    flows::add_to_cart(&mut session, &mut prompt).unwrap();
    let line = flows::add_to_cart(&mut session, &mut prompt).unwrap();
    assert_eq!(line.quantity, 2);
    assert_eq!(prompt.remaining(), 0);

    let mut prompt = ScriptedPrompt::new(["Jón", "Einhver gata 1"]);
    let order = flows::checkout(&mut session, &mut prompt).unwrap();

    // Sweater added automatically once, then once more by hand.
    assert_eq!(order.summary.total, Price::new(5_000 * 2 + 7_000 * 2));
    assert_eq!(
        prompt.asked(),
        [NAME_LABEL.to_owned(), ADDRESS_LABEL.to_owned()]
    );
}

#[test]
fn test_cancel_is_treated_as_empty() {
    let mut session = Session::create(SessionOptions::default());
    session.add_to_cart(ProductId::new(1), 1).unwrap();

    let mut cancelled = ScriptedPrompt::default().then_cancel();
    let mut empty = ScriptedPrompt::new([""]);

    let from_cancel = flows::checkout(&mut session, &mut cancelled).unwrap_err();
    let from_empty = flows::checkout(&mut session, &mut empty).unwrap_err();
    assert_eq!(from_cancel, from_empty);
}

#[test]
fn test_invalid_quantity_reported_after_product_lookup() {
    let mut session = Session::default();
    let mut prompt = ScriptedPrompt::new(["3", "0"]);

    let err = flows::add_to_cart(&mut session, &mut prompt).unwrap_err();

    assert_eq!(
        err,
        ShopError::Validation(ValidationError::quantity_out_of_range())
    );
    assert_eq!(
        prompt.asked(),
        [PRODUCT_ID_LABEL.to_owned(), QUANTITY_LABEL.to_owned()]
    );
    assert!(session.cart().is_empty());
}
