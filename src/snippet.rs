//! Widget snippet builder.
//!
//! Turns a validated [`WidgetRequest`] plus an [`EmbedConfig`] into the
//! HTML fragment a third-party application pastes verbatim into its page.
//! The fragment embeds the widget URL: base endpoint + canonical query
//! string, optionally signed with the pre-shared TPA secret.

use url::{Url, form_urlencoded};

use crate::config::{
    DEFAULT_CONTAINER_ID, DEFAULT_IFRAME_HEIGHT, DEFAULT_IFRAME_WIDTH, EmbedConfig, EmbedMode,
};
use crate::error::{Result, WidgetError};
use crate::query;
use crate::request::WidgetRequest;
use crate::signing::{HmacSha256Signer, UrlSigner};

/// Query parameter carrying the request signature.
const SIG_PARAM: &str = "sig";

/// Builds embeddable widget snippets for one integration.
///
/// Construction validates the configuration once; the builder is then
/// reused across many requests. Rendering is a pure function of its
/// inputs: no I/O, no shared state, byte-identical output for identical
/// request + configuration.
///
/// # Example
/// ```rust
/// use paybutton::{EmbedConfig, EmbedMode, SnippetBuilder, WidgetRequest};
///
/// # fn main() -> Result<(), paybutton::WidgetError> {
/// let builder = SnippetBuilder::new(EmbedConfig {
///     base_url: "https://pay.example/widget".into(),
///     embed_mode: EmbedMode::Iframe,
///     ..Default::default()
/// })?;
///
/// let request = WidgetRequest::builder()
///     .receiver_id("u1")
///     .receiver_email("r@x.com")
///     .pay_object_id("order-42")
///     .build()?;
///
/// let markup = builder.render(&request)?;
/// assert!(markup.starts_with("<iframe"));
/// # Ok(())
/// # }
/// ```
pub struct SnippetBuilder {
    config: EmbedConfig,
    base_url: Url,
    signer: Option<Box<dyn UrlSigner + Send + Sync>>,
}

impl SnippetBuilder {
    /// Create a snippet builder for one widget integration.
    ///
    /// Fails with [`WidgetError::Config`] when `base_url` is not an
    /// absolute `http`/`https` URL (or already carries a query or
    /// fragment), or when `container_id` is not usable as an HTML element
    /// id.
    pub fn new(config: EmbedConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        if let Some(container_id) = config.container_id.as_deref() {
            validate_container_id(container_id)?;
        }

        let signer = config
            .signing_key
            .clone()
            .map(|key| Box::new(HmacSha256Signer::new(key)) as Box<dyn UrlSigner + Send + Sync>);

        Ok(Self {
            config,
            base_url,
            signer,
        })
    }

    /// Replace the default HMAC signer, e.g. with a deterministic fake in
    /// tests or an alternative digest once the widget service's real
    /// contract is confirmed.
    pub fn with_signer(mut self, signer: impl UrlSigner + Send + Sync + 'static) -> Self {
        self.signer = Some(Box::new(signer));
        self
    }

    /// Build the widget URL for a request, without any markup.
    ///
    /// When a signer is configured the canonical query string is signed
    /// and the signature appended as a trailing `sig` parameter.
    pub fn widget_url(&self, request: &WidgetRequest) -> Result<String> {
        let pairs = query::canonical_pairs(request, &self.config);
        let mut query_string = query::encode_pairs(&pairs);

        if let Some(signer) = &self.signer {
            let signature = signer.sign(&query_string)?;
            let sig_pair = form_urlencoded::Serializer::new(String::new())
                .append_pair(SIG_PARAM, &signature)
                .finish();
            query_string.push('&');
            query_string.push_str(&sig_pair);
        }

        Ok(format!("{}?{}", self.base_url.as_str(), query_string))
    }

    /// Build the embeddable markup for a request.
    ///
    /// Either a complete, valid snippet is returned or an error is raised;
    /// no partial output exists.
    pub fn render(&self, request: &WidgetRequest) -> Result<String> {
        let url = self.widget_url(request)?;

        let markup = match self.config.embed_mode {
            EmbedMode::Iframe => self.render_iframe(&url),
            EmbedMode::Div => self.render_div(&url),
        };

        tracing::debug!(
            mode = %self.config.embed_mode,
            signed = self.signer.is_some(),
            bytes = markup.len(),
            "built widget snippet"
        );

        Ok(markup)
    }

    fn render_iframe(&self, url: &str) -> String {
        let width = self.config.width.unwrap_or(DEFAULT_IFRAME_WIDTH);
        let height = self.config.height.unwrap_or(DEFAULT_IFRAME_HEIGHT);

        format!(
            "<iframe src=\"{url}\" width=\"{width}\" height=\"{height}\" \
             frameborder=\"0\" scrolling=\"no\" allowtransparency=\"true\" \
             style=\"border:none; overflow:hidden;\"></iframe>"
        )
    }

    // The container div and its initializer are one string on purpose:
    // inserting one without the other leaves a dead widget.
    fn render_div(&self, url: &str) -> String {
        let container_id = self
            .config
            .container_id
            .as_deref()
            .unwrap_or(DEFAULT_CONTAINER_ID);

        format!(
            "<div id=\"{container_id}\"></div>\n\
             <script>\n\
             $(document).ready(function() {{\n\
                 $(\"#{container_id}\").load(\"{url}\");\n\
             }});\n\
             </script>"
        )
    }
}

/// One-shot convenience over [`SnippetBuilder`] for a single request.
pub fn build_snippet(request: &WidgetRequest, config: &EmbedConfig) -> Result<String> {
    SnippetBuilder::new(config.clone())?.render(request)
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    if base_url.trim().is_empty() {
        return Err(WidgetError::config("base_url is required"));
    }

    let url = Url::parse(base_url)
        .map_err(|e| WidgetError::config(format!("Invalid base_url: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(WidgetError::config(format!(
            "base_url must be http or https, got {}",
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() {
        return Err(WidgetError::config("base_url must be an absolute URL"));
    }
    // The widget query is appended wholesale, so the endpoint itself must
    // not carry one.
    if url.query().is_some() || url.fragment().is_some() {
        return Err(WidgetError::config(
            "base_url must not contain a query string or fragment",
        ));
    }

    Ok(url)
}

fn validate_container_id(container_id: &str) -> Result<()> {
    let usable = !container_id.is_empty()
        && container_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if usable {
        Ok(())
    } else {
        Err(WidgetError::config(format!(
            "container_id must be ASCII alphanumeric with - or _, got {container_id:?}"
        )))
    }
}
