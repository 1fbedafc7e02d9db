//! Integration tests for the token endpoint

use super::*;
use chrono::{Duration, Utc};
use gab_integration::{GabError, InboundRedirect, ProtocolError, ProviderError};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_exchange_authorization_code_success() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "grant_type": "authorization_code",
            "code": "the-code",
            "client_id": "test-client",
            "redirect_uri": "http://myapp.test/auth/gab",
            "client_secret": "test-secret",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "expires_in": 3600,
            "access_token": "A",
            "refresh_token": "R",
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let before = Utc::now();
    let tokens = client.exchange_authorization_code("the-code").await.unwrap();

    assert_eq!(tokens.access_token, "A");
    assert_eq!(tokens.refresh_token, "R");
    assert_eq!(tokens.expires_in, 3600);
    let drift = tokens.expiration_date - (before + Duration::seconds(3600));
    assert!(drift >= Duration::zero() && drift < Duration::seconds(1));
}

#[tokio::test]
async fn test_handle_authorization_redirect() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "expires_in": 60,
            "access_token": "from-redirect",
            "refresh_token": "R",
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let redirect = InboundRedirect::new("myapp.test", "/auth/gab?code=abc&state=xyz");
    let tokens = client.handle_authorization_redirect(&redirect).await.unwrap();

    assert_eq!(tokens.access_token, "from-redirect");
}

#[tokio::test]
async fn test_refresh_access_token_sends_scopes() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_json(json!({
            "grant_type": "refresh_token",
            "refresh_token": "old-refresh",
            "client_id": "test-client",
            "client_secret": "test-secret",
            "scope": "read engage-post",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "expires_in": 7200,
            "access_token": "A2",
            "refresh_token": "R2",
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let tokens = client.refresh_access_token("old-refresh").await.unwrap();

    assert_eq!(tokens.access_token, "A2");
    assert_eq!(tokens.refresh_token, "R2");
}

#[tokio::test]
async fn test_invalid_grant_is_propagated() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "The refresh token is invalid.",
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client.refresh_access_token("revoked").await.unwrap_err();

    assert!(matches!(
        error,
        GabError::Provider(ProviderError::InvalidGrant { .. })
    ));
    assert!(error.needs_reauth());
}

#[tokio::test]
async fn test_html_token_response() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string("<!DOCTYPE html><html><body>Bad request</body></html>"),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.exchange_authorization_code("c").await;

    assert!(matches!(
        result,
        Err(GabError::Protocol(ProtocolError::HtmlErrorPage { status: 400 }))
    ));
}
