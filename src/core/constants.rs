//! Gab.com API constants.

/// Base URL of the Gab.com API.
pub const BASE: &str = "https://api.gab.com";

/// Host of the Gab.com API.
pub const HOST: &str = "api.gab.com";

/// Port used for the Gab.com API.
pub const PORT: u16 = 443;

/// Active API version; every resource path is prefixed with `/v{VERSION}`.
pub const VERSION: &str = "1.0";

/// Versioned API root.
pub const URI: &str = "https://api.gab.com/v1.0";

/// Documented request ceiling per minute. Informational only, never enforced.
pub const REQUESTS_PER_MINUTE: u32 = 60;

/// HTTP methods accepted by the Gab.com API.
pub const ACCEPTED_METHODS: [&str; 3] = ["GET", "POST", "DELETE"];

/// Consent screen path, relative to [`BASE`].
pub const AUTHORIZE_PATH: &str = "/oauth/authorize";

/// Token endpoint path, relative to [`BASE`]. Not versioned.
pub const TOKEN_PATH: &str = "/oauth/token";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_is_base_plus_version() {
        assert_eq!(URI, format!("{}/v{}", BASE, VERSION));
        assert!(BASE.ends_with(HOST));
    }
}
