//! Authorization URL
//!
//! RFC 6749 Section 4.1.1 - Authorization Request.

use url::Url;

use crate::core::constants::AUTHORIZE_PATH;
use crate::core::validation::{require_non_empty, require_non_empty_scopes};
use crate::error::GabResult;
use crate::types::{join_scopes, Scope};

/// Build the URL the user visits to grant `scopes` to `client_id`.
///
/// Pure: redirecting the user there is up to the caller.
pub fn build_authorization_url(
    api_base: &Url,
    client_id: &str,
    redirect_uri: &Url,
    scopes: &[Scope],
) -> GabResult<String> {
    let client_id = require_non_empty("clientId", client_id)?;
    let scope = join_scopes(require_non_empty_scopes(scopes)?);

    let params = [
        ("response_type", "code"),
        ("client_id", client_id),
        ("redirect_uri", redirect_uri.as_str()),
        ("scope", scope.as_str()),
    ];

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    Ok(format!(
        "{}{}?{}",
        api_base.as_str().trim_end_matches('/'),
        AUTHORIZE_PATH,
        query
    ))
}
