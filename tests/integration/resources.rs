//! Integration tests for authenticated resource calls

use super::*;
use chrono::{TimeZone, Utc};
use gab_integration::{GabError, ProtocolError};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_json, header, query_param};
use wiremock::ResponseTemplate;

#[derive(Debug, Deserialize, PartialEq)]
struct Account {
    id: u64,
    username: String,
}

#[tokio::test]
async fn test_fetch_current_user() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/me")
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 1, "username": "a"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let envelope = client.current_user().fetch(ACCESS_TOKEN).await.unwrap();

    assert!(envelope.success);
    assert_eq!(envelope.code, 200);
    assert_eq!(envelope.message, "OK");
    assert_eq!(
        envelope.data_as::<Account>().unwrap(),
        Account {
            id: 1,
            username: "a".to_string()
        }
    );
}

#[tokio::test]
async fn test_not_found_resolves_unsuccessful() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/users/nobody")
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not found"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let envelope = client
        .users()
        .fetch_user(ACCESS_TOKEN, "nobody")
        .await
        .unwrap();

    assert!(!envelope.success);
    assert_eq!(envelope.code, 404);
    assert_eq!(envelope.data, json!({"message": "Not found"}));
}

#[tokio::test]
async fn test_html_page_is_protocol_error() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/popular/feed/")
        .respond_with(
            ResponseTemplate::new(500).set_body_string("<!DOCTYPE html>\n<html></html>"),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.popular().fetch_popular_feed(ACCESS_TOKEN).await;

    assert!(matches!(
        result,
        Err(GabError::Protocol(ProtocolError::HtmlErrorPage { status: 500 }))
    ));
}

#[tokio::test]
async fn test_create_post_sends_json() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("POST", "/posts")
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"body": "Hello from the integration suite"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 99})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let envelope = client
        .current_user()
        .create_post(
            ACCESS_TOKEN,
            json!({"body": "Hello from the integration suite"}),
        )
        .await
        .unwrap();

    assert!(envelope.success);
    assert_eq!(envelope.code, 201);
    assert_eq!(envelope.data["id"], 99);
}

#[tokio::test]
async fn test_feed_pagination_cursor() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/users/a/feed")
        .and(query_param("before", "2020-02-03T04:05:06Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let before = Utc.with_ymd_and_hms(2020, 2, 3, 4, 5, 6).unwrap();
    let envelope = client
        .users()
        .fetch_user_feed(ACCESS_TOKEN, "a", Some(before))
        .await
        .unwrap();

    assert!(envelope.success);
}

#[tokio::test]
async fn test_engagement_round_trip() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("POST", "/posts/42/upvote")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;
    mock_with_auth("DELETE", "/users/7/follow")
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let upvote = client.posts().upvote_post(ACCESS_TOKEN, 42).await.unwrap();
    let unfollow = client.users().unfollow_user(ACCESS_TOKEN, 7).await.unwrap();

    assert!(upvote.success);
    assert!(unfollow.success);
    assert_eq!(unfollow.data, serde_json::Value::Null);
}

#[tokio::test]
async fn test_redirects_are_not_followed() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/groups")
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", "https://gab.com/login")
                .set_body_json(json!({"message": "Redirecting"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let envelope = client.groups().fetch_groups(ACCESS_TOKEN).await.unwrap();

    assert!(!envelope.success);
    assert_eq!(envelope.code, 302);
    assert_eq!(envelope.data["message"], "Redirecting");
}

#[tokio::test]
async fn test_empty_error_body_is_protocol_error() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/groups/g1")
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.groups().fetch_group_details(ACCESS_TOKEN, "g1").await;

    assert!(matches!(
        result,
        Err(GabError::Protocol(ProtocolError::InvalidJson { status: 500, .. }))
    ));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let config = gab_config()
        .client_id("test-client")
        .secret("test-secret")
        .api_base("http://127.0.0.1:1")
        .build()
        .unwrap();
    let client = GabClient::with_config(config).unwrap();

    let result = client.current_user().fetch(ACCESS_TOKEN).await;
    assert!(matches!(result, Err(GabError::Network(_))));
}
