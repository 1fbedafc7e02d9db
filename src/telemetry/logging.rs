//! Logging utilities with sensitive data redaction.

use std::fmt;

/// Wrapper for sensitive data that redacts on display.
#[derive(Clone)]
pub struct Redacted<T>(T);

impl<T> Redacted<T> {
    /// Create a new redacted value.
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Get the inner value.
    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl<T> fmt::Debug for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl<T> fmt::Display for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

/// Redact a token, keeping a short prefix for correlation.
pub fn redact_token(token: &str) -> String {
    match token.char_indices().nth(6) {
        Some((end, _)) if token.len() > 12 => format!("{}...[REDACTED]", &token[..end]),
        _ => "[REDACTED]".to_string(),
    }
}

/// Redact OAuth2 values in a URL query string.
pub fn redact_url(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let sensitive = ["code", "access_token", "refresh_token", "client_secret", "token"];
    let query = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if sensitive.iter().any(|s| key.eq_ignore_ascii_case(s)) => {
                format!("{}=[REDACTED]", key)
            }
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", base, query)
}
