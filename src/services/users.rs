//! Users service: profiles, social graph and follow actions.

use chrono::{DateTime, Utc};
use std::fmt::Display;
use tracing::instrument;

use super::endpoints::{
    FETCH_USER, FETCH_USER_FEED, FETCH_USER_FOLLOWERS, FETCH_USER_FOLLOWING, FOLLOW_USER,
    UNFOLLOW_USER,
};
use super::{date_cursor, ApiDispatcher};
use crate::error::GabResult;
use crate::types::ResponseEnvelope;

/// Operations on other Gab accounts.
///
/// Read operations address accounts by username; follow actions take the
/// numeric account id.
#[derive(Clone)]
pub struct UsersService {
    api: ApiDispatcher,
}

impl UsersService {
    pub fn new(api: ApiDispatcher) -> Self {
        Self { api }
    }

    /// `GET /users/{username}`
    #[instrument(skip(self, access_token))]
    pub async fn fetch_user(
        &self,
        access_token: &str,
        username: &str,
    ) -> GabResult<ResponseEnvelope> {
        self.api
            .call(&FETCH_USER, access_token, &[username], None, None)
            .await
    }

    /// `GET /users/{username}/followers`; `before_count` skips that many entries.
    #[instrument(skip(self, access_token))]
    pub async fn fetch_user_followers(
        &self,
        access_token: &str,
        username: &str,
        before_count: Option<u64>,
    ) -> GabResult<ResponseEnvelope> {
        self.api
            .call(
                &FETCH_USER_FOLLOWERS,
                access_token,
                &[username],
                before_count.map(|n| n.to_string()),
                None,
            )
            .await
    }

    /// `GET /users/{username}/following`; `before_count` skips that many entries.
    #[instrument(skip(self, access_token))]
    pub async fn fetch_user_following(
        &self,
        access_token: &str,
        username: &str,
        before_count: Option<u64>,
    ) -> GabResult<ResponseEnvelope> {
        self.api
            .call(
                &FETCH_USER_FOLLOWING,
                access_token,
                &[username],
                before_count.map(|n| n.to_string()),
                None,
            )
            .await
    }

    /// `GET /users/{username}/feed`
    #[instrument(skip(self, access_token))]
    pub async fn fetch_user_feed(
        &self,
        access_token: &str,
        username: &str,
        before_date: Option<DateTime<Utc>>,
    ) -> GabResult<ResponseEnvelope> {
        self.api
            .call(
                &FETCH_USER_FEED,
                access_token,
                &[username],
                date_cursor(before_date),
                None,
            )
            .await
    }

    #[instrument(skip(self, access_token, user_id), fields(user_id = %user_id))]
    pub async fn follow_user(
        &self,
        access_token: &str,
        user_id: impl Display,
    ) -> GabResult<ResponseEnvelope> {
        let user_id = user_id.to_string();
        self.api
            .call(&FOLLOW_USER, access_token, &[&user_id], None, None)
            .await
    }

    #[instrument(skip(self, access_token, user_id), fields(user_id = %user_id))]
    pub async fn unfollow_user(
        &self,
        access_token: &str,
        user_id: impl Display,
    ) -> GabResult<ResponseEnvelope> {
        let user_id = user_id.to_string();
        self.api
            .call(&UNFOLLOW_USER, access_token, &[&user_id], None, None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::core::{HttpMethod, MockHttpTransport};
    use crate::error::{GabError, ValidationError};
    use std::sync::Arc;

    fn service() -> (UsersService, Arc<MockHttpTransport>) {
        let (api, transport) = dispatcher();
        (UsersService::new(api), transport)
    }

    #[tokio::test]
    async fn test_fetch_user_and_graph() {
        let (service, transport) = service();
        service.fetch_user(TOKEN, "a").await.unwrap();
        service.fetch_user_followers(TOKEN, "a", None).await.unwrap();
        service.fetch_user_following(TOKEN, "a", Some(30)).await.unwrap();
        service.fetch_user_feed(TOKEN, "a", None).await.unwrap();

        let paths: Vec<String> = transport.get_requests().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec![
                "/v1.0/users/a",
                "/v1.0/users/a/followers",
                "/v1.0/users/a/following?before=30",
                "/v1.0/users/a/feed",
            ]
        );
    }

    #[tokio::test]
    async fn test_follow_and_unfollow_by_numeric_id() {
        let (service, transport) = service();
        service.follow_user(TOKEN, 1234).await.unwrap();
        service.unfollow_user(TOKEN, "1234").await.unwrap();

        let requests = transport.get_requests();
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].path, "/v1.0/users/1234/follow");
        assert_eq!(requests[1].method, HttpMethod::Delete);
        assert_eq!(requests[1].path, "/v1.0/users/1234/follow");
    }

    #[tokio::test]
    async fn test_empty_username_is_rejected() {
        let (service, transport) = service();
        let result = service.fetch_user(TOKEN, " ").await;
        assert!(matches!(
            result,
            Err(GabError::Validation(ValidationError::EmptyField { field })) if field == "username"
        ));
        assert!(transport.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_username_is_path_encoded() {
        let (service, transport) = service();
        service.fetch_user(TOKEN, "../me").await.unwrap();
        assert_eq!(transport.get_last_request().unwrap().path, "/v1.0/users/..%2Fme");
    }
}
