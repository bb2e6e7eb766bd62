//! Request signing for widget URLs.
//!
//! The builder signs the canonical query string with a pre-shared TPA
//! secret so the widget service can verify the parameters were not
//! tampered with in transit. The digest algorithm sits behind the
//! [`UrlSigner`] trait; production uses HMAC-SHA256, tests can substitute
//! a deterministic fake.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{Result, WidgetError};

type HmacSha256 = Hmac<Sha256>;

/// Pre-shared secret used to sign widget URLs.
///
/// Provisioning of the secret is out of scope; the integrating application
/// supplies it as configuration.
#[derive(Clone)]
pub struct SigningKey {
    key: Vec<u8>,
}

impl SigningKey {
    /// Create a SigningKey from a base64-encoded string.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let decoded = BASE64
            .decode(encoded.trim())
            .map_err(|e| WidgetError::signing(format!("Invalid signing key encoding: {e}")))?;
        Self::from_bytes(decoded)
    }

    /// Create a SigningKey from raw bytes.
    pub fn from_bytes(key: impl Into<Vec<u8>>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(WidgetError::signing("Signing key must not be empty"));
        }
        Ok(Self { key })
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.key
    }
}

// Never expose key material through Debug output.
impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey").field("key", &"<redacted>").finish()
    }
}

/// Signing capability injected into the snippet builder.
///
/// Implementations must be deterministic: the same payload and key must
/// always produce the same signature, or snippet output stops being
/// cacheable.
pub trait UrlSigner {
    /// Sign the canonical query string, returning the value placed in the
    /// trailing `sig` parameter.
    fn sign(&self, payload: &str) -> Result<String>;
}

/// Production signer: HMAC-SHA256 keyed by the TPA secret, hex digest.
pub struct HmacSha256Signer {
    key: SigningKey,
}

impl HmacSha256Signer {
    pub fn new(key: SigningKey) -> Self {
        Self { key }
    }
}

impl UrlSigner for HmacSha256Signer {
    fn sign(&self, payload: &str) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(self.key.as_bytes())
            .map_err(|e| WidgetError::signing(e.to_string()))?;
        mac.update(payload.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}
