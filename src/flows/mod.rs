//! OAuth2 Flows
//!
//! The authorization-code handshake against Gab.com:
//!
//! - **Authorization URL**: where to send the user to grant scopes
//! - **Token exchange**: authorization code or refresh token for a [`TokenResult`](crate::types::TokenResult)

pub mod authorization;
pub mod token_exchange;

pub use authorization::build_authorization_url;
pub use token_exchange::{extract_token_result, TokenExchanger, TokenGrant};
