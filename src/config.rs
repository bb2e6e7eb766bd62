//! Embed configuration.
//!
//! An [`EmbedConfig`] is created once per integration and reused across
//! snippet-generation calls; it holds no request-specific state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WidgetError};
use crate::signing::SigningKey;

/// How the widget is embedded in the host page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedMode {
    /// A self-contained `<iframe>` pointing at the widget URL.
    #[default]
    Iframe,
    /// A `<div>` container plus an initialization script that loads the
    /// widget URL into it.
    Div,
}

impl EmbedMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedMode::Iframe => "iframe",
            EmbedMode::Div => "div",
        }
    }
}

impl std::fmt::Display for EmbedMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmbedMode {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "iframe" => Ok(EmbedMode::Iframe),
            "div" => Ok(EmbedMode::Div),
            other => Err(WidgetError::config(format!("Unknown embed mode: {other}"))),
        }
    }
}

/// Default iframe footprint, matching the hosted payment button.
pub const DEFAULT_IFRAME_WIDTH: u32 = 300;
pub const DEFAULT_IFRAME_HEIGHT: u32 = 22;

/// Default element id for the div container.
pub const DEFAULT_CONTAINER_ID: &str = "payButtonDiv";

/// Configuration bundle for one widget integration.
///
/// # Example
/// ```rust
/// use paybutton::{EmbedConfig, EmbedMode};
///
/// let config = EmbedConfig {
///     base_url: "https://pay.example/widget".into(),
///     embed_mode: EmbedMode::Iframe,
///     ..Default::default()
/// };
/// assert!(config.signing_key.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmbedConfig {
    /// Absolute `http`/`https` URL of the widget endpoint.
    pub base_url: String,
    /// Embedding strategy.
    pub embed_mode: EmbedMode,
    /// Pre-shared secret; when set, widget URLs carry a trailing `sig`
    /// parameter.
    pub signing_key: Option<SigningKey>,
    /// TPA identifier, emitted as the leading `app_id` query parameter.
    pub app_id: Option<String>,
    /// Iframe width in pixels (default 300).
    pub width: Option<u32>,
    /// Iframe height in pixels (default 22).
    pub height: Option<u32>,
    /// Element id of the div container (default `payButtonDiv`).
    pub container_id: Option<String>,
    /// Widget button label, emitted as the JSON-encoded `customization`
    /// parameter.
    pub button_text: Option<String>,
}
