//! Request Options
//!
//! Shapes `(method, path, access token, body)` into a [`RequestDescriptor`].
//! Nothing here performs I/O.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use url::Url;

use crate::core::constants::{ACCEPTED_METHODS, HOST, PORT, VERSION};
use crate::core::validation::require_non_empty;
use crate::error::{ConfigurationError, GabResult, ProtocolError, ValidationError};

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP methods accepted by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    /// Every method the API accepts, in [`ACCEPTED_METHODS`] order.
    pub const ALL: [HttpMethod; 3] = [HttpMethod::Get, HttpMethod::Post, HttpMethod::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ValidationError;

    /// Case-insensitive; `"get"` and `"GET"` are the same method.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        ACCEPTED_METHODS
            .iter()
            .position(|accepted| *accepted == upper)
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(ValidationError::UnsupportedMethod { method: upper })
    }
}

/// Request payload.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// Already-serialized text, sent verbatim.
    Raw(String),
    /// JSON value, serialized at build time.
    Json(serde_json::Value),
}

impl RequestBody {
    fn into_text(self) -> Result<String, ProtocolError> {
        match self {
            Self::Raw(text) => Ok(text),
            Self::Json(value) => {
                serde_json::to_string(&value).map_err(|e| ProtocolError::Serialization {
                    message: e.to_string(),
                })
            }
        }
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_string())
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

/// Fully-qualified description of one outbound request.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestDescriptor {
    /// HTTP method.
    pub method: HttpMethod,
    /// `http` or `https`.
    pub scheme: String,
    /// Target host.
    pub host: String,
    /// Target port.
    pub port: u16,
    /// Absolute path including the version prefix and any query string.
    pub path: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Serialized body.
    pub body: Option<String>,
}

impl RequestDescriptor {
    /// Absolute URL of the request.
    pub fn url(&self) -> String {
        format!("{}://{}:{}{}", self.scheme, self.host, self.port, self.path)
    }

    /// Look up a header, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Builds [`RequestDescriptor`]s against one API host and version.
#[derive(Clone, Debug)]
pub struct RequestOptionsBuilder {
    scheme: String,
    host: String,
    port: u16,
    version: String,
}

impl RequestOptionsBuilder {
    /// Create a builder for the given API base URL and version segment.
    ///
    /// The base must be an origin: paths hang off the host root.
    pub fn new(api_base: &Url, version: impl Into<String>) -> Result<Self, ConfigurationError> {
        let invalid = || ConfigurationError::InvalidEndpoint {
            url: api_base.to_string(),
        };
        if api_base.path() != "/" {
            return Err(invalid());
        }
        let host = api_base.host_str().ok_or_else(invalid)?.to_string();
        let port = api_base.port_or_known_default().ok_or_else(invalid)?;

        Ok(Self {
            scheme: api_base.scheme().to_string(),
            host,
            port,
            version: version.into(),
        })
    }

    /// Version-prefixed path, e.g. `/me` becomes `/v1.0/me`.
    pub fn versioned_path(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("/v{}{}", self.version, path)
        } else {
            format!("/v{}/{}", self.version, path)
        }
    }

    /// Build an authenticated API request.
    pub fn build(
        &self,
        method: &str,
        path: &str,
        access_token: &str,
        body: Option<RequestBody>,
    ) -> GabResult<RequestDescriptor> {
        let access_token = require_non_empty("accessToken", access_token)?;
        let method = HttpMethod::from_str(method)?;

        let mut headers = HashMap::new();
        headers.insert(AUTHORIZATION.to_string(), format!("Bearer {}", access_token));

        let body = match body {
            Some(body) => {
                let text = body.into_text()?;
                insert_json_headers(&mut headers, &text);
                Some(text)
            }
            None => None,
        };

        Ok(self.descriptor(method, self.versioned_path(path), headers, body))
    }

    /// Build the unversioned, unauthenticated JSON POST used by the token endpoint.
    pub fn build_token_request<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> GabResult<RequestDescriptor> {
        let text = serde_json::to_string(body).map_err(|e| ProtocolError::Serialization {
            message: e.to_string(),
        })?;

        let mut headers = HashMap::new();
        insert_json_headers(&mut headers, &text);

        Ok(self.descriptor(HttpMethod::Post, path.to_string(), headers, Some(text)))
    }

    fn descriptor(
        &self,
        method: HttpMethod,
        path: String,
        headers: HashMap<String, String>,
        body: Option<String>,
    ) -> RequestDescriptor {
        RequestDescriptor {
            method,
            scheme: self.scheme.clone(),
            host: self.host.clone(),
            port: self.port,
            path,
            headers,
            body,
        }
    }
}

impl Default for RequestOptionsBuilder {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            host: HOST.to_string(),
            port: PORT,
            version: VERSION.to_string(),
        }
    }
}

// `String::len` is the UTF-8 byte length, which is what Content-Length counts.
fn insert_json_headers(headers: &mut HashMap<String, String>, text: &str) {
    headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
    headers.insert(CONTENT_LENGTH.to_string(), text.len().to_string());
}
