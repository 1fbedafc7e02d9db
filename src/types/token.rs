//! Token Types
//!
//! Result of an authorization-code or refresh-token exchange.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::telemetry::redact_token;

/// Tokens issued by the Gab token endpoint.
///
/// The client keeps no copy; persisting this value is the caller's job.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResult {
    /// Bearer token for API calls.
    pub access_token: String,
    /// Token used to obtain a new access token without user interaction.
    pub refresh_token: String,
    /// Lifetime in seconds, as reported by the token endpoint.
    pub expires_in: u64,
    /// `issued_at + expires_in`.
    pub expiration_date: DateTime<Utc>,
}

impl TokenResult {
    /// Create a token result issued now.
    pub fn new(access_token: String, refresh_token: String, expires_in: u64) -> Self {
        Self::issued_at(access_token, refresh_token, expires_in, Utc::now())
    }

    /// Create a token result issued at `issued_at`.
    pub fn issued_at(
        access_token: String,
        refresh_token: String,
        expires_in: u64,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let lifetime = i64::try_from(expires_in)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);
        let expiration_date = issued_at
            .checked_add_signed(lifetime)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            access_token,
            refresh_token,
            expires_in,
            expiration_date,
        }
    }

    /// Check if the access token is expired.
    pub fn is_expired(&self) -> bool {
        self.expiration_date <= Utc::now()
    }

    /// Remaining lifetime in seconds, zero once expired.
    pub fn remaining_lifetime(&self) -> i64 {
        (self.expiration_date - Utc::now()).num_seconds().max(0)
    }

    /// Format as Authorization header value.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl std::fmt::Debug for TokenResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResult")
            .field("access_token", &redact_token(&self.access_token))
            .field("refresh_token", &redact_token(&self.refresh_token))
            .field("expires_in", &self.expires_in)
            .field("expiration_date", &self.expiration_date)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_date_is_issue_time_plus_lifetime() {
        let issued = Utc::now();
        let token = TokenResult::issued_at("A".into(), "R".into(), 3600, issued);
        assert_eq!(token.expiration_date - issued, Duration::seconds(3600));
        assert!(!token.is_expired());
        assert!(token.remaining_lifetime() > 3590);
    }

    #[test]
    fn test_zero_lifetime_is_expired() {
        let token = TokenResult::new("A".into(), "R".into(), 0);
        assert!(token.is_expired());
        assert_eq!(token.remaining_lifetime(), 0);
    }

    #[test]
    fn test_huge_lifetime_saturates() {
        let token = TokenResult::new("A".into(), "R".into(), u64::MAX);
        assert!(!token.is_expired());
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let token = TokenResult::new(
            "access-token-secret-value".into(),
            "refresh-token-secret-value".into(),
            60,
        );
        let debug = format!("{:?}", token);
        assert!(!debug.contains("secret-value"));
        assert_eq!(token.authorization_header(), "Bearer access-token-secret-value");
    }

    #[test]
    fn test_serde_round_trip_for_caller_storage() {
        let token = TokenResult::new("A".into(), "R".into(), 3600);
        let json = serde_json::to_string(&token).unwrap();
        let restored: TokenResult = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, token);
    }
}
