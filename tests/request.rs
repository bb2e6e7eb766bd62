//! Request model tests (mandatory fields, payment types, amount validation)

mod common;

use std::str::FromStr;

use common::sample_request;
use paybutton::{PaymentType, WidgetError, WidgetRequest};

#[test]
fn test_mandatory_fields_build_successfully() {
    let request = sample_request();

    assert_eq!(request.receiver_id(), "u1");
    assert_eq!(request.receiver_email(), "r@x.com");
    assert_eq!(request.pay_object_id(), "order-42");
    assert_eq!(
        request.payment_type(),
        PaymentType::Pay,
        "payment type should default to Pay when unset"
    );
    assert!(
        request.amount_bit().is_none(),
        "amount should be absent so the end user picks it in the widget"
    );
}

#[test]
fn test_missing_receiver_id_is_rejected() {
    let result = WidgetRequest::builder()
        .receiver_email("r@x.com")
        .pay_object_id("order-42")
        .build();

    assert!(
        matches!(result, Err(WidgetError::Validation(_))),
        "a request without receiver_id should fail validation"
    );
}

#[test]
fn test_missing_receiver_email_is_rejected() {
    let result = WidgetRequest::builder()
        .receiver_id("u1")
        .pay_object_id("order-42")
        .build();

    assert!(
        matches!(result, Err(WidgetError::Validation(_))),
        "a request without receiver_email should fail validation"
    );
}

#[test]
fn test_missing_pay_object_id_is_rejected() {
    let result = WidgetRequest::builder()
        .receiver_id("u1")
        .receiver_email("r@x.com")
        .build();

    assert!(
        matches!(result, Err(WidgetError::Validation(_))),
        "a request without pay_object_id should fail validation"
    );
}

#[test]
fn test_empty_mandatory_field_is_rejected() {
    let result = WidgetRequest::builder()
        .receiver_id("")
        .receiver_email("r@x.com")
        .pay_object_id("order-42")
        .build();

    assert!(
        matches!(result, Err(WidgetError::Validation(_))),
        "an empty receiver_id should be treated the same as a missing one"
    );

    let result = WidgetRequest::builder()
        .receiver_id("u1")
        .receiver_email("   ")
        .pay_object_id("order-42")
        .build();

    assert!(
        matches!(result, Err(WidgetError::Validation(_))),
        "a whitespace-only receiver_email should be treated as missing"
    );
}

#[test]
fn test_empty_optional_fields_collapse_to_absent() {
    let request = WidgetRequest::builder()
        .sender_id("")
        .sender_email("  ")
        .receiver_id("u1")
        .receiver_email("r@x.com")
        .pay_object_id("order-42")
        .build()
        .unwrap();

    assert!(
        request.sender_id().is_none(),
        "empty sender_id should not be stored as an empty string"
    );
    assert!(
        request.sender_email().is_none(),
        "whitespace-only sender_email should not be stored"
    );
}

#[test]
fn test_negative_amount_is_rejected() {
    let result = WidgetRequest::builder()
        .amount_bit(-0.01)
        .receiver_id("u1")
        .receiver_email("r@x.com")
        .pay_object_id("order-42")
        .build();

    assert!(
        matches!(result, Err(WidgetError::Validation(_))),
        "a negative amount should fail validation"
    );
}

#[test]
fn test_non_finite_amount_is_rejected() {
    for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let result = WidgetRequest::builder()
            .amount_bit(amount)
            .receiver_id("u1")
            .receiver_email("r@x.com")
            .pay_object_id("order-42")
            .build();

        assert!(
            matches!(result, Err(WidgetError::Validation(_))),
            "{amount} should fail validation"
        );
    }
}

#[test]
fn test_zero_amount_is_accepted() {
    let request = WidgetRequest::builder()
        .amount_bit(0.0)
        .receiver_id("u1")
        .receiver_email("r@x.com")
        .pay_object_id("order-42")
        .build()
        .unwrap();

    assert_eq!(request.amount_bit(), Some(0.0));
}

#[test]
fn test_payment_type_parses_case_insensitively() {
    assert_eq!(PaymentType::from_str("Pay").unwrap(), PaymentType::Pay);
    assert_eq!(PaymentType::from_str("donate").unwrap(), PaymentType::Donate);
    assert_eq!(PaymentType::from_str("TIP").unwrap(), PaymentType::Tip);
    assert_eq!(PaymentType::from_str("deposit").unwrap(), PaymentType::Deposit);
}

#[test]
fn test_unknown_payment_type_is_rejected() {
    let result = PaymentType::from_str("refund");

    assert!(
        matches!(result, Err(WidgetError::Validation(_))),
        "payment types outside the four variants should be rejected"
    );
}

#[test]
fn test_payment_type_canonical_spelling() {
    // The capitalized form is what goes on the wire as `type`
    assert_eq!(PaymentType::Pay.to_string(), "Pay");
    assert_eq!(PaymentType::Donate.to_string(), "Donate");
    assert_eq!(PaymentType::Tip.to_string(), "Tip");
    assert_eq!(PaymentType::Deposit.to_string(), "Deposit");
}
