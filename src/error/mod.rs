//! Gab Client Error Types
//!
//! Error hierarchy for configuration, validation, transport and token operations.
//! Upstream API failures on resource calls are not errors: they come back as a
//! [`ResponseEnvelope`](crate::types::ResponseEnvelope) with `success == false`.

use std::time::Duration;
use thiserror::Error;

/// Root error type for the Gab client.
#[derive(Error, Debug)]
pub enum GabError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authorization error: {0}")]
    Authorization(#[from] AuthorizationError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl GabError {
    /// Get error code for telemetry.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "GAB_VALIDATION",
            Self::Configuration(_) => "GAB_CONFIG",
            Self::Authorization(_) => "GAB_AUTH",
            Self::Network(_) => "GAB_NETWORK",
            Self::Protocol(_) => "GAB_PROTOCOL",
            Self::Provider(_) => "GAB_PROVIDER",
        }
    }

    /// Check if error is retryable.
    ///
    /// The client never retries on its own; this only informs caller policy.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_retryable(),
            Self::Protocol(ProtocolError::HtmlErrorPage { status }) => *status >= 500,
            Self::Provider(ProviderError::ServerError { .. }) => true,
            Self::Provider(ProviderError::TemporarilyUnavailable { .. }) => true,
            _ => false,
        }
    }

    /// Get retry-after duration if applicable.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Provider(ProviderError::TemporarilyUnavailable { retry_after }) => *retry_after,
            _ => None,
        }
    }

    /// Check if error requires the user to go through the consent screen again.
    pub fn needs_reauth(&self) -> bool {
        matches!(
            self,
            Self::Provider(ProviderError::InvalidGrant { .. })
                | Self::Authorization(AuthorizationError::AccessDenied { .. })
        )
    }
}

/// Input that fails a precondition before any request is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be a non-empty string")]
    EmptyField { field: String },

    #[error("{field} must be {expected}")]
    InvalidShape { field: String, expected: String },

    #[error("Unsupported HTTP method: {method} (expected GET, POST or DELETE)")]
    UnsupportedMethod { method: String },

    #[error("Unknown scope: {scope}")]
    UnknownScope { scope: String },
}

impl ValidationError {
    pub(crate) fn empty(field: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
        }
    }

    pub(crate) fn shape(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidShape {
            field: field.into(),
            expected: expected.into(),
        }
    }
}

/// Configuration error.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Invalid redirect URI {url:?}: {source}")]
    InvalidRedirectUri {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid endpoint URL: {url}")]
    InvalidEndpoint { url: String },

    #[error("Missing required field: {field}")]
    MissingRequired { field: String },
}

/// Authorization redirect error.
#[derive(Error, Debug)]
pub enum AuthorizationError {
    #[error("Access denied by user")]
    AccessDenied {
        error: String,
        error_description: Option<String>,
    },

    #[error("Invalid redirect request: {message}")]
    InvalidRedirect { message: String },
}

/// Network/transport error.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("Request timed out: {message}")]
    Timeout { message: String },

    #[error("Request failed: {message}")]
    RequestFailed { message: String },

    #[error("Failed to read response body: {message}")]
    BodyRead { message: String },
}

impl NetworkError {
    /// Check if error is retryable.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::RequestFailed { .. })
    }
}

/// Response parsing error.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Upstream returned an HTML error page (HTTP {status}); the request parameters are missing or incorrect")]
    HtmlErrorPage { status: u16 },

    #[error("Invalid JSON in HTTP {status} response: {message}")]
    InvalidJson { status: u16, message: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid field {field}: expected {expected}")]
    InvalidField { field: String, expected: String },

    #[error("Failed to serialize request body: {message}")]
    Serialization { message: String },
}

/// Token endpoint refusal.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Invalid client credentials")]
    InvalidClient { error_description: Option<String> },

    #[error("Invalid grant: {message}")]
    InvalidGrant { message: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Invalid scope: {scope}")]
    InvalidScope { scope: String },

    #[error("Unauthorized client for this grant type")]
    UnauthorizedClient { error_description: Option<String> },

    #[error("Unsupported grant type: {grant_type}")]
    UnsupportedGrantType { grant_type: String },

    #[error("Server error: {message}")]
    ServerError { message: String },

    #[error("Server temporarily unavailable")]
    TemporarilyUnavailable { retry_after: Option<Duration> },
}

/// Result type for Gab client operations.
pub type GabResult<T> = Result<T, GabError>;

/// OAuth2 error body returned by the token endpoint.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct OAuth2ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl OAuth2ErrorResponse {
    fn description(&self) -> Option<String> {
        self.error_description
            .clone()
            .or_else(|| self.message.clone())
    }
}

/// Map token error response to error type.
pub fn map_token_error(response: &OAuth2ErrorResponse) -> ProviderError {
    let description = response.description();
    match response.error.as_str() {
        "invalid_client" => ProviderError::InvalidClient {
            error_description: description,
        },
        "invalid_grant" => ProviderError::InvalidGrant {
            message: description.unwrap_or_else(|| "Invalid grant".to_string()),
        },
        "invalid_request" => ProviderError::InvalidRequest {
            message: description.unwrap_or_else(|| "Invalid request".to_string()),
        },
        "invalid_scope" => ProviderError::InvalidScope {
            scope: description.unwrap_or_default(),
        },
        "unauthorized_client" => ProviderError::UnauthorizedClient {
            error_description: description,
        },
        "unsupported_grant_type" => ProviderError::UnsupportedGrantType {
            grant_type: description.unwrap_or_default(),
        },
        "server_error" => ProviderError::ServerError {
            message: description.unwrap_or_else(|| "Server error".to_string()),
        },
        "temporarily_unavailable" => ProviderError::TemporarilyUnavailable { retry_after: None },
        _ => ProviderError::InvalidRequest {
            message: description.unwrap_or_else(|| response.error.clone()),
        },
    }
}

/// Parse an OAuth2 error body out of a decoded response.
pub fn parse_error_response(data: &serde_json::Value) -> Option<OAuth2ErrorResponse> {
    serde_json::from_value(data.clone()).ok()
}

/// Create error from a failed token endpoint response.
pub fn create_error_from_response(status: u16, data: &serde_json::Value) -> GabError {
    if let Some(response) = parse_error_response(data) {
        return GabError::Provider(map_token_error(&response));
    }

    let error = match status {
        400 => ProviderError::InvalidRequest {
            message: "Bad request".to_string(),
        },
        401 => ProviderError::InvalidClient {
            error_description: Some("Unauthorized".to_string()),
        },
        403 => ProviderError::UnauthorizedClient {
            error_description: Some("Forbidden".to_string()),
        },
        429 => ProviderError::TemporarilyUnavailable {
            retry_after: Some(Duration::from_secs(60)),
        },
        _ => ProviderError::ServerError {
            message: format!("HTTP {}", status),
        },
    };

    GabError::Provider(error)
}

/// Get user-friendly error message.
pub fn get_user_message(error: &GabError) -> String {
    match error {
        GabError::Provider(ProviderError::InvalidGrant { .. }) => {
            "Your Gab session has expired. Please sign in again.".to_string()
        }
        GabError::Authorization(AuthorizationError::AccessDenied { .. }) => {
            "Access was denied. Please try signing in again and grant the requested permissions."
                .to_string()
        }
        GabError::Network(_) => {
            "Could not reach Gab. Please check your connection and try again.".to_string()
        }
        GabError::Protocol(ProtocolError::HtmlErrorPage { .. }) => {
            "Gab could not process the request. Please check the parameters and try again."
                .to_string()
        }
        GabError::Provider(ProviderError::ServerError { .. })
        | GabError::Provider(ProviderError::TemporarilyUnavailable { .. }) => {
            "Gab is temporarily unavailable. Please try again later.".to_string()
        }
        _ => "An error occurred while talking to Gab. Please try again.".to_string(),
    }
}
