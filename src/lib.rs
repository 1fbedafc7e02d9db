//! Gab Integration Module
//!
//! Client for the Gab.com REST API with OAuth2 authorization-code and
//! refresh-token support.
//!
//! # Features
//!
//! - Authorization URL construction (RFC 6749 Section 4.1.1)
//! - Authorization code exchange from the redirect request (RFC 6749 Section 4.1.3)
//! - Token refresh (RFC 6749 Section 6)
//! - Authenticated resource calls: current user, users, posts, popular, groups
//!
//! # Example
//!
//! ```rust,ignore
//! use gab_integration::{gab_config, GabClient, Scope};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = gab_config()
//!         .client_id("my-client-id")
//!         .secret("my-client-secret")
//!         .redirect_uri("https://myapp.com/auth/gab")
//!         .scopes(vec![Scope::Read, Scope::WritePost])
//!         .build()?;
//!
//!     let client = GabClient::with_config(config)?;
//!     println!("Send the user to: {}", client.authorization_url()?);
//!
//!     // Later, in the redirect handler:
//!     let tokens = client.exchange_authorization_code("code-from-redirect").await?;
//!     let me = client.current_user().fetch(&tokens.access_token).await?;
//!     println!("{} {}", me.code, me.data);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `types`: configuration, scopes, tokens, callback parameters, response envelope
//! - `error`: error hierarchy with OAuth2 error mapping
//! - `core`: constants, validation, request building and HTTP transport
//! - `flows`: authorization URL and token exchange
//! - `services`: one service per Gab resource family
//! - `builders`: fluent configuration builder
//! - `telemetry`: redaction helpers for log output
//! - `client`: high-level client combining all of the above

pub mod builders;
pub mod client;
pub mod core;
pub mod error;
pub mod flows;
pub mod services;
pub mod telemetry;
pub mod types;

// Re-export main client
pub use client::GabClient;

// Re-export builders
pub use builders::{gab_config, GabConfigBuilder};

// Re-export core
pub use crate::core::{
    HttpMethod, HttpResponse, HttpTransport, MockHttpTransport, RequestBody, RequestDescriptor,
    RequestOptionsBuilder, ReqwestHttpTransport,
};

// Re-export errors
pub use error::{
    AuthorizationError, ConfigurationError, GabError, GabResult, NetworkError, ProtocolError,
    ProviderError, ValidationError,
};

// Re-export services
pub use services::{
    CurrentUserService, Endpoint, GroupsService, PopularService, PostsService, UsersService,
};

// Re-export types
pub use types::{
    CallbackParams, ClientCredentials, GabConfig, InboundRedirect, RedirectRequest,
    ResponseEnvelope, Scope, TokenResult,
};
