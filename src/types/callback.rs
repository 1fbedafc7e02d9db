//! Callback Types
//!
//! Types for handling the redirect Gab sends the user back with.

use std::collections::HashMap;

use url::Url;

/// Inbound HTTP request hitting the application's redirect URI.
///
/// Implement this for whatever request type the web framework provides.
pub trait RedirectRequest {
    /// Request scheme, `None` when the framework does not know it.
    fn protocol(&self) -> Option<&str>;

    /// Value of the `Host` header.
    fn host(&self) -> Option<&str>;

    /// Request target: path plus query string.
    fn url(&self) -> &str;
}

/// Plain [`RedirectRequest`] for callers without a framework request type at hand.
#[derive(Clone, Debug, Default)]
pub struct InboundRedirect {
    pub protocol: Option<String>,
    pub headers: HashMap<String, String>,
    pub url: String,
}

impl InboundRedirect {
    /// Create a redirect request from host and request target.
    pub fn new(host: impl Into<String>, url: impl Into<String>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("host".to_string(), host.into());
        Self {
            protocol: None,
            headers,
            url: url.into(),
        }
    }

    /// Set protocol.
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }
}

impl RedirectRequest for InboundRedirect {
    fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    fn host(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("host"))
            .map(|(_, value)| value.as_str())
    }

    fn url(&self) -> &str {
        &self.url
    }
}

/// Callback parameters from authorization redirect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackParams {
    /// Authorization code (if success).
    pub code: Option<String>,
    /// State parameter, passed through untouched.
    pub state: Option<String>,
    /// Error code (if authorization failed).
    pub error: Option<String>,
    /// Error description.
    pub error_description: Option<String>,
}

impl CallbackParams {
    /// Parse callback parameters from URL.
    pub fn from_url(url: &Url) -> Self {
        let mut params = Self::default();

        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "code" => params.code = Some(value.into_owned()),
                "state" => params.state = Some(value.into_owned()),
                "error" => params.error = Some(value.into_owned()),
                "error_description" => params.error_description = Some(value.into_owned()),
                _ => {}
            }
        }

        params
    }

    /// Rebuild the absolute URL of a redirect request and parse it.
    ///
    /// A request without a `Host` header is rejected.
    pub fn from_request<R: RedirectRequest + ?Sized>(request: &R) -> Result<Self, url::ParseError> {
        let protocol = request
            .protocol()
            .map(|p| p.trim_end_matches("://").trim_end_matches(':'))
            .filter(|p| !p.is_empty())
            .unwrap_or("http");
        let host = request
            .host()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or(url::ParseError::EmptyHost)?;

        let url = Url::parse(&format!("{}://{}{}", protocol, host, request.url()))?;
        Ok(Self::from_url(&url))
    }

    /// Check if callback contains an error.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Check if callback is successful.
    pub fn is_success(&self) -> bool {
        self.code.is_some() && self.error.is_none()
    }
}
