use thiserror::Error;

/// Errors surfaced by request construction and snippet generation.
///
/// Everything here is raised synchronously to the caller. The operations in
/// this crate are pure, so retrying with unchanged input reproduces the same
/// error; nothing is retried internally and no partial output is returned.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// A mandatory request field is missing or a field value is malformed.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The embed configuration is unusable (bad base URL, bad container id).
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The signing key is malformed or the signer failed.
    #[error("Signing failed: {0}")]
    Signing(String),
}

impl WidgetError {
    pub fn validation(msg: impl Into<String>) -> Self {
        WidgetError::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        WidgetError::Config(msg.into())
    }

    pub fn signing(msg: impl Into<String>) -> Self {
        WidgetError::Signing(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, WidgetError>;
