//! Test utilities and fixtures for paybutton integration tests

#![allow(dead_code)]

pub use paybutton::{
    EmbedConfig, EmbedMode, PaymentType, SigningKey, SnippetBuilder, WidgetError, WidgetRequest,
};

/// Widget endpoint used across tests
pub const BASE_URL: &str = "https://pay.example/widget";

/// Create a deterministic test signing key (32 bytes of zeros - ONLY for testing!)
pub fn test_signing_key() -> SigningKey {
    SigningKey::from_bytes([0u8; 32]).expect("fixed test key should be accepted")
}

/// Minimal valid request covering exactly the mandatory field set
pub fn sample_request() -> WidgetRequest {
    WidgetRequest::builder()
        .receiver_id("u1")
        .receiver_email("r@x.com")
        .pay_object_id("order-42")
        .build()
        .expect("sample request should validate")
}

/// Request exercising every field, including values that need escaping
pub fn full_request() -> WidgetRequest {
    WidgetRequest::builder()
        .payment_type(PaymentType::Tip)
        .amount_bit(0.01)
        .sender_id("s160901")
        .sender_email("sender@example.com")
        .sender_cellphone("+5491112341234")
        .receiver_id("r0210")
        .receiver_email("receiver@example.com")
        .pay_object_id("to0210")
        .timestamp(1410973639125)
        .build()
        .expect("full request should validate")
}

/// Iframe config without signing
pub fn iframe_config() -> EmbedConfig {
    EmbedConfig {
        base_url: BASE_URL.into(),
        embed_mode: EmbedMode::Iframe,
        ..Default::default()
    }
}

/// Div config without signing
pub fn div_config() -> EmbedConfig {
    EmbedConfig {
        base_url: BASE_URL.into(),
        embed_mode: EmbedMode::Div,
        ..Default::default()
    }
}

/// Iframe config with the fixed test signing key
pub fn signed_config() -> EmbedConfig {
    EmbedConfig {
        signing_key: Some(test_signing_key()),
        ..iframe_config()
    }
}
