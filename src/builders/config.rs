//! Configuration Builder
//!
//! Fluent builder for Gab client configuration.

use secrecy::SecretString;
use url::Url;

use crate::core::constants::{BASE, VERSION};
use crate::core::validation::require_non_empty;
use crate::error::{ConfigurationError, GabResult};
use crate::types::{ClientCredentials, GabConfig, Scope};

/// Gab configuration builder.
#[derive(Default)]
pub struct GabConfigBuilder {
    client_id: Option<String>,
    secret: Option<String>,
    redirect_uri: Option<String>,
    scopes: Vec<Scope>,
    api_base: Option<String>,
    api_version: Option<String>,
}

impl GabConfigBuilder {
    /// Create new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set client ID.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set client secret.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Set redirect URI; parsed and normalized at build time.
    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Replace the requested scopes.
    pub fn scopes(mut self, scopes: Vec<Scope>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Add a requested scope.
    pub fn add_scope(mut self, scope: Scope) -> Self {
        self.scopes.push(scope);
        self
    }

    /// Override the API base URL (defaults to `https://api.gab.com`).
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Override the API version segment (defaults to `1.0`).
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Build the Gab configuration.
    pub fn build(self) -> GabResult<GabConfig> {
        let client_id = self.client_id.ok_or_else(|| ConfigurationError::MissingRequired {
            field: "clientId".to_string(),
        })?;
        require_non_empty("clientId", &client_id)?;

        let secret = self.secret.ok_or_else(|| ConfigurationError::MissingRequired {
            field: "secret".to_string(),
        })?;
        require_non_empty("secret", &secret)?;

        let redirect_uri = self
            .redirect_uri
            .as_deref()
            .map(parse_redirect_uri)
            .transpose()?;

        let api_base = self.api_base.as_deref().unwrap_or(BASE);
        let api_base = Url::parse(api_base)
            .ok()
            .filter(|url| url.host_str().is_some() && url.path() == "/")
            .ok_or_else(|| ConfigurationError::InvalidEndpoint {
                url: api_base.to_string(),
            })?;

        let api_version = self.api_version.unwrap_or_else(|| VERSION.to_string());
        require_non_empty("apiVersion", &api_version)?;

        Ok(GabConfig {
            credentials: ClientCredentials {
                client_id,
                secret: SecretString::new(secret),
            },
            redirect_uri,
            scopes: self.scopes,
            api_base,
            api_version,
        })
    }
}

/// Parse a redirect URI; it must be absolute.
pub fn parse_redirect_uri(redirect_uri: &str) -> Result<Url, ConfigurationError> {
    Url::parse(redirect_uri).map_err(|source| ConfigurationError::InvalidRedirectUri {
        url: redirect_uri.to_string(),
        source,
    })
}

/// Create a new Gab configuration builder.
pub fn gab_config() -> GabConfigBuilder {
    GabConfigBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GabError;

    #[test]
    fn test_builder_success() {
        let config = GabConfigBuilder::new()
            .client_id("test-client")
            .secret("test-secret")
            .redirect_uri("http://www.example.com")
            .add_scope(Scope::Read)
            .add_scope(Scope::Notifications)
            .build()
            .unwrap();

        assert_eq!(config.credentials.client_id, "test-client");
        assert_eq!(config.credentials.secret(), "test-secret");
        assert_eq!(
            config.redirect_uri.as_ref().map(Url::as_str),
            Some("http://www.example.com/")
        );
        assert_eq!(config.scopes_for_request(), "read notifications");
        assert_eq!(config.api_base.as_str(), "https://api.gab.com/");
        assert_eq!(config.api_version, "1.0");
    }

    #[test]
    fn test_builder_missing_client_id() {
        let result = GabConfigBuilder::new().secret("test-secret").build();
        assert!(matches!(
            result,
            Err(GabError::Configuration(ConfigurationError::MissingRequired { .. }))
        ));
    }

    #[test]
    fn test_builder_empty_secret() {
        let result = GabConfigBuilder::new().client_id("id").secret("").build();
        assert!(matches!(result, Err(GabError::Validation(_))));
    }

    #[test]
    fn test_builder_rejects_relative_redirect_uri() {
        let result = GabConfigBuilder::new()
            .client_id("id")
            .secret("secret")
            .redirect_uri("test")
            .build();
        assert!(matches!(
            result,
            Err(GabError::Configuration(ConfigurationError::InvalidRedirectUri { .. }))
        ));
    }

    #[test]
    fn test_builder_custom_api_base() {
        let config = GabConfigBuilder::new()
            .client_id("id")
            .secret("secret")
            .api_base("http://127.0.0.1:9000")
            .api_version("2.0")
            .build()
            .unwrap();
        assert_eq!(config.api_base.port(), Some(9000));
        assert_eq!(config.api_version, "2.0");

        let result = GabConfigBuilder::new()
            .client_id("id")
            .secret("secret")
            .api_base("not a url")
            .build();
        assert!(matches!(
            result,
            Err(GabError::Configuration(ConfigurationError::InvalidEndpoint { .. }))
        ));
    }

    #[test]
    fn test_builder_rejects_api_base_with_path() {
        let result = GabConfigBuilder::new()
            .client_id("id")
            .secret("secret")
            .api_base("http://127.0.0.1:9000/prefix")
            .build();
        assert!(matches!(
            result,
            Err(GabError::Configuration(ConfigurationError::InvalidEndpoint { .. }))
        ));

        let config = GabConfigBuilder::new()
            .client_id("id")
            .secret("secret")
            .api_base("https://api.gab.com/")
            .build()
            .unwrap();
        assert_eq!(config.api_base.as_str(), "https://api.gab.com/");
    }
}
