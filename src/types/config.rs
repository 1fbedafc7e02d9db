//! Configuration Types
//!
//! Client credentials, authorization settings and API location.

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::telemetry::Redacted;
use crate::types::{join_scopes, Scope};

/// Gab client configuration.
#[derive(Clone, Debug)]
pub struct GabConfig {
    /// Client credentials.
    pub credentials: ClientCredentials,
    /// Redirect URI registered with Gab; required for the authorization flow.
    pub redirect_uri: Option<Url>,
    /// Scopes requested at authorization and refresh time.
    pub scopes: Vec<Scope>,
    /// API base URL. Overridable for testing against a local server.
    pub api_base: Url,
    /// API version segment prefixed to every resource path.
    pub api_version: String,
}

impl GabConfig {
    /// Scopes as the space-joined string sent on the wire.
    pub fn scopes_for_request(&self) -> String {
        join_scopes(&self.scopes)
    }
}

/// Client credentials issued by Gab.
#[derive(Clone)]
pub struct ClientCredentials {
    /// Client identifier.
    pub client_id: String,
    /// Client secret.
    pub secret: SecretString,
}

impl ClientCredentials {
    /// Create new credentials.
    pub fn new(client_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            secret: SecretString::new(secret.into()),
        }
    }

    /// Expose the secret for request bodies.
    pub fn secret(&self) -> &str {
        self.secret.expose_secret()
    }
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("secret", &Redacted::new(self.secret()))
            .finish()
    }
}
