//! Canonical query-string serialization.
//!
//! The widget URL and the signing input are the same string, so the
//! serialization here must be deterministic: fixed declaration order,
//! present fields only, standard `application/x-www-form-urlencoded`
//! percent-encoding.

use url::form_urlencoded;

use crate::config::EmbedConfig;
use crate::request::WidgetRequest;

/// Collect the present fields of a request (plus the config-level
/// parameters) as an ordered key-value list.
///
/// Order is fixed: `app_id`, `amount`, `sender_id`, `sender_email`,
/// `sender_cellphone`, `receiver_id`, `receiver_email`, `pay_object_id`,
/// `type`, `timestamp`, `customization`. Absent optionals are skipped
/// entirely rather than emitted empty.
pub fn canonical_pairs(
    request: &WidgetRequest,
    config: &EmbedConfig,
) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();

    if let Some(app_id) = config.app_id.as_deref() {
        pairs.push(("app_id", app_id.to_string()));
    }
    if let Some(amount) = request.amount_bit() {
        pairs.push(("amount", amount.to_string()));
    }
    if let Some(sender_id) = request.sender_id() {
        pairs.push(("sender_id", sender_id.to_string()));
    }
    if let Some(sender_email) = request.sender_email() {
        pairs.push(("sender_email", sender_email.to_string()));
    }
    if let Some(sender_cellphone) = request.sender_cellphone() {
        pairs.push(("sender_cellphone", sender_cellphone.to_string()));
    }
    pairs.push(("receiver_id", request.receiver_id().to_string()));
    pairs.push(("receiver_email", request.receiver_email().to_string()));
    pairs.push(("pay_object_id", request.pay_object_id().to_string()));
    pairs.push(("type", request.payment_type().to_string()));
    if let Some(timestamp) = request.timestamp() {
        pairs.push(("timestamp", timestamp.to_string()));
    }
    if let Some(button_text) = config.button_text.as_deref() {
        let customization = serde_json::json!({ "button_text": button_text });
        pairs.push(("customization", customization.to_string()));
    }

    pairs
}

/// Percent-encode an ordered pair list into a query string.
pub fn encode_pairs(pairs: &[(&'static str, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmbedConfig;
    use crate::request::WidgetRequest;

    fn minimal_request() -> WidgetRequest {
        WidgetRequest::builder()
            .receiver_id("u1")
            .receiver_email("r@x.com")
            .pay_object_id("order-42")
            .build()
            .expect("minimal request should validate")
    }

    #[test]
    fn mandatory_fields_keep_declaration_order() {
        let pairs = canonical_pairs(&minimal_request(), &EmbedConfig::default());
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["receiver_id", "receiver_email", "pay_object_id", "type"],
            "absent optionals must be skipped, not emitted empty"
        );
    }

    #[test]
    fn app_id_leads_the_query_when_configured() {
        let config = EmbedConfig {
            app_id: Some("b91014cc28c94841".into()),
            ..Default::default()
        };
        let pairs = canonical_pairs(&minimal_request(), &config);
        assert_eq!(pairs[0].0, "app_id");
    }

    #[test]
    fn encoding_percent_escapes_reserved_characters() {
        let pairs = vec![("receiver_email", "r@x.com".to_string())];
        assert_eq!(encode_pairs(&pairs), "receiver_email=r%40x.com");
    }
}
