//! # paybutton
//!
//! Embeddable payment-widget snippet builder for third-party applications
//! (TPAs). Builds the correctly-encoded, optionally-signed widget URL from
//! a set of payment parameters and wraps it in the markup for the chosen
//! embedding style: a self-contained `<iframe>`, or a `<div>` container
//! plus its initialization script.
//!
//! ## Quick Start
//!
//! ```rust
//! use paybutton::{EmbedConfig, EmbedMode, SnippetBuilder, WidgetRequest};
//!
//! fn main() -> Result<(), paybutton::WidgetError> {
//!     let request = WidgetRequest::builder()
//!         .receiver_id("r0210")
//!         .receiver_email("payments@example.com")
//!         .pay_object_id("order-42")
//!         .amount_bit(0.01)
//!         .build()?;
//!
//!     let builder = SnippetBuilder::new(EmbedConfig {
//!         base_url: "https://pay.example/widget".into(),
//!         embed_mode: EmbedMode::Iframe,
//!         ..Default::default()
//!     })?;
//!
//!     let markup = builder.render(&request)?;
//!     // Paste `markup` verbatim into the host page.
//!     assert!(markup.contains("receiver_id=r0210"));
//!     Ok(())
//! }
//! ```
//!
//! ## Signed URLs
//!
//! Supply a pre-shared secret and every widget URL gains a trailing `sig`
//! parameter (HMAC-SHA256 over the canonical query string, hex-encoded):
//!
//! ```rust
//! use paybutton::{EmbedConfig, SigningKey};
//!
//! # fn main() -> Result<(), paybutton::WidgetError> {
//! let config = EmbedConfig {
//!     base_url: "https://pay.example/widget".into(),
//!     signing_key: Some(SigningKey::from_bytes(*b"c533a6e606fb62ccb13e8baf8a95cbdc")?),
//!     ..Default::default()
//! };
//! assert!(config.signing_key.is_some());
//! # Ok(())
//! # }
//! ```
//!
//! ## Determinism
//!
//! `render` is a pure function: identical request + configuration (and
//! key) produce byte-identical markup, so output is safe to cache and
//! trivial to test against.

pub mod config;
pub mod error;
pub mod query;
pub mod request;
pub mod signing;
pub mod snippet;

// Configuration
pub use config::{
    DEFAULT_CONTAINER_ID, DEFAULT_IFRAME_HEIGHT, DEFAULT_IFRAME_WIDTH, EmbedConfig, EmbedMode,
};

// Error types
pub use error::{Result, WidgetError};

// Request model
pub use request::{PaymentType, WidgetRequest, WidgetRequestBuilder};

// Signing
pub use signing::{HmacSha256Signer, SigningKey, UrlSigner};

// Snippet builder
pub use snippet::{SnippetBuilder, build_snippet};
