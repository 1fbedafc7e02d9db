//! Token Exchange
//!
//! RFC 6749 Section 4.1.3 (authorization code) and Section 6 (refresh token),
//! both posted as JSON to the Gab token endpoint.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::core::constants::TOKEN_PATH;
use crate::core::transport::{dispatch, HttpTransport};
use crate::core::validation::{
    require_non_empty, require_non_empty_scopes, require_object, require_string_field,
    require_u64_field,
};
use crate::core::RequestOptionsBuilder;
use crate::error::{
    create_error_from_response, AuthorizationError, ConfigurationError, GabResult,
    ValidationError,
};
use crate::telemetry::redact_url;
use crate::types::{CallbackParams, GabConfig, RedirectRequest, TokenResult};

/// Token endpoint request body.
#[derive(Clone, Serialize)]
#[serde(tag = "grant_type", rename_all = "snake_case")]
pub enum TokenGrant<'a> {
    AuthorizationCode {
        code: &'a str,
        client_id: &'a str,
        redirect_uri: &'a str,
        client_secret: &'a str,
    },
    RefreshToken {
        refresh_token: &'a str,
        client_id: &'a str,
        client_secret: &'a str,
        scope: String,
    },
}

impl TokenGrant<'_> {
    pub fn grant_type(&self) -> &'static str {
        match self {
            Self::AuthorizationCode { .. } => "authorization_code",
            Self::RefreshToken { .. } => "refresh_token",
        }
    }
}

/// Performs token exchanges with the configuration captured at construction.
pub struct TokenExchanger<T: HttpTransport> {
    config: GabConfig,
    transport: Arc<T>,
    requests: RequestOptionsBuilder,
}

impl<T: HttpTransport> TokenExchanger<T> {
    /// Create new token exchanger.
    pub fn new(config: GabConfig, transport: Arc<T>) -> GabResult<Self> {
        let requests = RequestOptionsBuilder::new(&config.api_base, config.api_version.clone())?;
        Ok(Self {
            config,
            transport,
            requests,
        })
    }

    /// Pull the authorization code out of the redirect request and exchange it.
    pub async fn handle_redirect<R: RedirectRequest + ?Sized>(
        &self,
        request: &R,
    ) -> GabResult<TokenResult> {
        let callback = CallbackParams::from_request(request).map_err(|e| {
            AuthorizationError::InvalidRedirect {
                message: format!("{} ({})", e, redact_url(request.url())),
            }
        })?;

        if let Some(error) = callback.error {
            warn!(error = %error, "authorization was not granted");
            return Err(AuthorizationError::AccessDenied {
                error,
                error_description: callback.error_description,
            }
            .into());
        }

        let code = callback.code.ok_or_else(|| ValidationError::empty("code"))?;
        self.exchange_code(&code).await
    }

    /// Exchange an authorization code for tokens.
    pub async fn exchange_code(&self, code: &str) -> GabResult<TokenResult> {
        let code = require_non_empty("code", code)?;
        let redirect_uri = self.config.redirect_uri.as_ref().ok_or_else(|| {
            ConfigurationError::MissingRequired {
                field: "redirectUri".to_string(),
            }
        })?;

        self.exchange(TokenGrant::AuthorizationCode {
            code,
            client_id: require_non_empty("clientId", &self.config.credentials.client_id)?,
            redirect_uri: redirect_uri.as_str(),
            client_secret: require_non_empty("secret", self.config.credentials.secret())?,
        })
        .await
    }

    /// Exchange a refresh token for a new token set.
    ///
    /// The configured scopes are sent as-is. Gab only accepts scopes identical to or
    /// narrower than the original grant; keeping them so is the caller's job.
    pub async fn refresh(&self, refresh_token: &str) -> GabResult<TokenResult> {
        let refresh_token = require_non_empty("refreshToken", refresh_token)?;
        require_non_empty_scopes(&self.config.scopes)?;
        let scope = self.config.scopes_for_request();

        self.exchange(TokenGrant::RefreshToken {
            refresh_token,
            client_id: require_non_empty("clientId", &self.config.credentials.client_id)?,
            client_secret: require_non_empty("secret", self.config.credentials.secret())?,
            scope,
        })
        .await
    }

    #[instrument(skip_all, fields(grant_type = grant.grant_type()))]
    async fn exchange(&self, grant: TokenGrant<'_>) -> GabResult<TokenResult> {
        let request = self.requests.build_token_request(TOKEN_PATH, &grant)?;
        let envelope = dispatch(self.transport.as_ref(), &request).await?;

        if !envelope.success {
            warn!(status = envelope.code, "token endpoint rejected the exchange");
            return Err(create_error_from_response(envelope.code, &envelope.data));
        }

        let tokens = extract_token_result(&envelope.data)?;
        debug!(expires_in = tokens.expires_in, "token exchange succeeded");
        Ok(tokens)
    }
}

/// Read `{expires_in, access_token, refresh_token}` out of a token response body.
pub fn extract_token_result(data: &serde_json::Value) -> GabResult<TokenResult> {
    let body = require_object("token response", data)?;
    let expires_in = require_u64_field(body, "expires_in")?;
    let access_token = require_string_field(body, "access_token")?;
    let refresh_token = require_string_field(body, "refresh_token")?;

    Ok(TokenResult::new(
        access_token.to_string(),
        refresh_token.to_string(),
        expires_in,
    ))
}
