//! Widget request model.
//!
//! A [`WidgetRequest`] is the validated, immutable description of one
//! payment the widget should collect: who pays, who gets paid, for what,
//! and optionally how much. Construction goes through
//! [`WidgetRequestBuilder`], which enforces the mandatory field set before
//! any request object exists.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WidgetError};

/// Payment operation surfaced by the widget button.
///
/// The canonical capitalized spelling (`Pay`, `Donate`, ...) is what goes
/// on the wire as the `type` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentType {
    #[default]
    Pay,
    Donate,
    Tip,
    Deposit,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Pay => "Pay",
            PaymentType::Donate => "Donate",
            PaymentType::Tip => "Tip",
            PaymentType::Deposit => "Deposit",
        }
    }
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = WidgetError;

    /// Parse a payment type. Matching is case-insensitive on input; output
    /// always uses the canonical spelling.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pay" => Ok(PaymentType::Pay),
            "donate" => Ok(PaymentType::Donate),
            "tip" => Ok(PaymentType::Tip),
            "deposit" => Ok(PaymentType::Deposit),
            other => Err(WidgetError::validation(format!(
                "Unknown payment type: {other}"
            ))),
        }
    }
}

/// A validated widget request.
///
/// Immutable after construction; accessors only. Optional fields are
/// represented as `None` when absent, never as empty strings, so the
/// canonical query serialization stays unambiguous and signing stays
/// reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetRequest {
    payment_type: PaymentType,
    amount_bit: Option<f64>,
    sender_id: Option<String>,
    sender_email: Option<String>,
    sender_cellphone: Option<String>,
    receiver_id: String,
    receiver_email: String,
    pay_object_id: String,
    timestamp: Option<i64>,
}

impl WidgetRequest {
    /// Start building a request. Validation happens at
    /// [`WidgetRequestBuilder::build`].
    pub fn builder() -> WidgetRequestBuilder {
        WidgetRequestBuilder::default()
    }

    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }

    /// Fixed payment amount in BTC. `None` means the end user picks the
    /// amount in the widget UI.
    pub fn amount_bit(&self) -> Option<f64> {
        self.amount_bit
    }

    pub fn sender_id(&self) -> Option<&str> {
        self.sender_id.as_deref()
    }

    pub fn sender_email(&self) -> Option<&str> {
        self.sender_email.as_deref()
    }

    pub fn sender_cellphone(&self) -> Option<&str> {
        self.sender_cellphone.as_deref()
    }

    pub fn receiver_id(&self) -> &str {
        &self.receiver_id
    }

    pub fn receiver_email(&self) -> &str {
        &self.receiver_email
    }

    /// Payment identifier in the TPA's own context.
    pub fn pay_object_id(&self) -> &str {
        &self.pay_object_id
    }

    /// Caller-supplied Unix timestamp in milliseconds. The crate never
    /// reads the clock itself so that identical inputs always produce
    /// identical output.
    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }
}

/// Fluent builder for [`WidgetRequest`].
#[derive(Debug, Clone, Default)]
pub struct WidgetRequestBuilder {
    payment_type: Option<PaymentType>,
    amount_bit: Option<f64>,
    sender_id: Option<String>,
    sender_email: Option<String>,
    sender_cellphone: Option<String>,
    receiver_id: Option<String>,
    receiver_email: Option<String>,
    pay_object_id: Option<String>,
    timestamp: Option<i64>,
}

impl WidgetRequestBuilder {
    /// Set the payment type (default: [`PaymentType::Pay`]).
    pub fn payment_type(mut self, payment_type: PaymentType) -> Self {
        self.payment_type = Some(payment_type);
        self
    }

    /// Set a fixed payment amount in BTC.
    pub fn amount_bit(mut self, amount: f64) -> Self {
        self.amount_bit = Some(amount);
        self
    }

    /// Set the id of the user sending the payment.
    pub fn sender_id(mut self, sender_id: impl Into<String>) -> Self {
        self.sender_id = Some(sender_id.into());
        self
    }

    /// Set the email of the user sending the payment.
    pub fn sender_email(mut self, sender_email: impl Into<String>) -> Self {
        self.sender_email = Some(sender_email.into());
        self
    }

    /// Set the cellphone number of the user sending the payment.
    pub fn sender_cellphone(mut self, sender_cellphone: impl Into<String>) -> Self {
        self.sender_cellphone = Some(sender_cellphone.into());
        self
    }

    /// Set the id of the user receiving the payment. Mandatory.
    pub fn receiver_id(mut self, receiver_id: impl Into<String>) -> Self {
        self.receiver_id = Some(receiver_id.into());
        self
    }

    /// Set the email of the user receiving the payment. Mandatory.
    pub fn receiver_email(mut self, receiver_email: impl Into<String>) -> Self {
        self.receiver_email = Some(receiver_email.into());
        self
    }

    /// Set the payment identifier in the TPA's context. Mandatory.
    pub fn pay_object_id(mut self, pay_object_id: impl Into<String>) -> Self {
        self.pay_object_id = Some(pay_object_id.into());
        self
    }

    /// Set an explicit Unix timestamp in milliseconds to include in the
    /// request payload.
    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Validate and freeze the request.
    ///
    /// Fails with [`WidgetError::Validation`] when `receiver_id`,
    /// `receiver_email` or `pay_object_id` is missing or empty, or when
    /// `amount_bit` is negative or not finite.
    pub fn build(self) -> Result<WidgetRequest> {
        let receiver_id = required(self.receiver_id, "receiver_id")?;
        let receiver_email = required(self.receiver_email, "receiver_email")?;
        let pay_object_id = required(self.pay_object_id, "pay_object_id")?;

        if let Some(amount) = self.amount_bit {
            if !amount.is_finite() || amount < 0.0 {
                return Err(WidgetError::validation(format!(
                    "amount_bit must be a non-negative finite number, got {amount}"
                )));
            }
        }

        Ok(WidgetRequest {
            payment_type: self.payment_type.unwrap_or_default(),
            amount_bit: self.amount_bit,
            sender_id: normalize_optional(self.sender_id),
            sender_email: normalize_optional(self.sender_email),
            sender_cellphone: normalize_optional(self.sender_cellphone),
            receiver_id,
            receiver_email,
            pay_object_id,
            timestamp: self.timestamp,
        })
    }
}

fn required(value: Option<String>, name: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(WidgetError::validation(format!("{name} is required"))),
    }
}

/// Empty strings collapse to absent so they never reach the query string.
fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
