//! Gab Client
//!
//! High-level client owning the configuration and transport. Entry point for the
//! authorization handshake and for every resource service.

use secrecy::SecretString;
use std::sync::Arc;

use crate::builders::{gab_config, parse_redirect_uri};
use crate::core::validation::require_non_empty;
use crate::core::{HttpTransport, ReqwestHttpTransport, RequestOptionsBuilder};
use crate::error::{ConfigurationError, GabResult};
use crate::flows::{build_authorization_url, TokenExchanger};
use crate::services::{
    ApiDispatcher, CurrentUserService, GroupsService, PopularService, PostsService,
    UsersService,
};
use crate::types::{GabConfig, RedirectRequest, Scope, TokenResult};

/// Gab API client.
///
/// Setters take `&mut self`, so configuration cannot change while a call built
/// from it is still in flight.
pub struct GabClient<T: HttpTransport + 'static = ReqwestHttpTransport> {
    config: GabConfig,
    transport: Arc<T>,
    requests: RequestOptionsBuilder,
}

impl GabClient<ReqwestHttpTransport> {
    /// Create a client for the public Gab API.
    pub fn new(client_id: impl Into<String>, secret: impl Into<String>) -> GabResult<Self> {
        let config = gab_config().client_id(client_id).secret(secret).build()?;
        Self::with_config(config)
    }

    /// Create a client from a prepared configuration.
    pub fn with_config(config: GabConfig) -> GabResult<Self> {
        Self::with_transport(config, ReqwestHttpTransport::new()?)
    }
}

impl<T: HttpTransport + 'static> GabClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(config: GabConfig, transport: T) -> GabResult<Self> {
        let requests = RequestOptionsBuilder::new(&config.api_base, config.api_version.clone())?;
        Ok(Self {
            config,
            transport: Arc::new(transport),
            requests,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &GabConfig {
        &self.config
    }

    pub fn client_id(&self) -> &str {
        &self.config.credentials.client_id
    }

    pub fn set_client_id(&mut self, client_id: impl Into<String>) -> GabResult<&mut Self> {
        let client_id = client_id.into();
        require_non_empty("clientId", &client_id)?;
        self.config.credentials.client_id = client_id;
        Ok(self)
    }

    pub fn secret(&self) -> &str {
        self.config.credentials.secret()
    }

    pub fn set_secret(&mut self, secret: impl Into<String>) -> GabResult<&mut Self> {
        let secret = secret.into();
        require_non_empty("secret", &secret)?;
        self.config.credentials.secret = SecretString::new(secret);
        Ok(self)
    }

    pub fn redirect_uri(&self) -> Option<&str> {
        self.config.redirect_uri.as_ref().map(|uri| uri.as_str())
    }

    /// Set the redirect URI; it must parse as an absolute URL.
    pub fn set_redirect_uri(&mut self, redirect_uri: &str) -> GabResult<&mut Self> {
        self.config.redirect_uri = Some(parse_redirect_uri(redirect_uri)?);
        Ok(self)
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.config.scopes
    }

    /// Replace the configured scopes.
    pub fn set_scopes(&mut self, scopes: Vec<Scope>) -> &mut Self {
        self.config.scopes = scopes;
        self
    }

    /// Scopes as the space-joined string sent on the wire.
    pub fn scopes_for_request(&self) -> String {
        self.config.scopes_for_request()
    }

    /// URL to send the user to for consent.
    pub fn authorization_url(&self) -> GabResult<String> {
        let redirect_uri = self.config.redirect_uri.as_ref().ok_or_else(|| {
            ConfigurationError::MissingRequired {
                field: "redirectUri".to_string(),
            }
        })?;

        build_authorization_url(
            &self.config.api_base,
            &self.config.credentials.client_id,
            redirect_uri,
            &self.config.scopes,
        )
    }

    /// Exchange the code carried by the redirect Gab sent the user back with.
    pub async fn handle_authorization_redirect<R: RedirectRequest + ?Sized>(
        &self,
        request: &R,
    ) -> GabResult<TokenResult> {
        self.token_exchanger()?.handle_redirect(request).await
    }

    /// Exchange an authorization code for tokens.
    pub async fn exchange_authorization_code(&self, code: &str) -> GabResult<TokenResult> {
        self.token_exchanger()?.exchange_code(code).await
    }

    /// Exchange a refresh token for a new token set.
    ///
    /// The configured scopes must be identical to or narrower than the original grant.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> GabResult<TokenResult> {
        self.token_exchanger()?.refresh(refresh_token).await
    }

    pub fn current_user(&self) -> CurrentUserService {
        CurrentUserService::new(self.dispatcher())
    }

    pub fn users(&self) -> UsersService {
        UsersService::new(self.dispatcher())
    }

    pub fn posts(&self) -> PostsService {
        PostsService::new(self.dispatcher())
    }

    pub fn popular(&self) -> PopularService {
        PopularService::new(self.dispatcher())
    }

    pub fn groups(&self) -> GroupsService {
        GroupsService::new(self.dispatcher())
    }

    fn token_exchanger(&self) -> GabResult<TokenExchanger<T>> {
        TokenExchanger::new(self.config.clone(), self.transport.clone())
    }

    fn dispatcher(&self) -> ApiDispatcher {
        ApiDispatcher::new(self.transport.clone(), self.requests.clone())
    }
}
