//! Current user service: the authenticated account, its feed and notifications.

use chrono::{DateTime, Utc};
use tracing::instrument;

use super::endpoints::{CREATE_POST, FETCH_FEED, FETCH_ME, FETCH_NOTIFICATIONS};
use super::{date_cursor, ApiDispatcher};
use crate::core::validation::require_non_empty;
use crate::core::RequestBody;
use crate::error::GabResult;
use crate::types::ResponseEnvelope;

/// Operations on the account the access token belongs to.
#[derive(Clone)]
pub struct CurrentUserService {
    api: ApiDispatcher,
}

impl CurrentUserService {
    pub fn new(api: ApiDispatcher) -> Self {
        Self { api }
    }

    /// `GET /me`
    #[instrument(skip_all)]
    pub async fn fetch(&self, access_token: &str) -> GabResult<ResponseEnvelope> {
        self.api.call(&FETCH_ME, access_token, &[], None, None).await
    }

    /// `GET /notifications`, optionally only those older than `before_notification_id`.
    #[instrument(skip(self, access_token))]
    pub async fn fetch_notifications(
        &self,
        access_token: &str,
        before_notification_id: Option<&str>,
    ) -> GabResult<ResponseEnvelope> {
        let before = before_notification_id
            .map(|id| require_non_empty("beforeNotificationId", id).map(str::to_string))
            .transpose()?;
        self.api
            .call(&FETCH_NOTIFICATIONS, access_token, &[], before, None)
            .await
    }

    /// `GET /feed`, optionally only posts older than `before_date`.
    #[instrument(skip(self, access_token))]
    pub async fn fetch_feed(
        &self,
        access_token: &str,
        before_date: Option<DateTime<Utc>>,
    ) -> GabResult<ResponseEnvelope> {
        self.api
            .call(&FETCH_FEED, access_token, &[], date_cursor(before_date), None)
            .await
    }

    /// `POST /posts` with a caller-built post body.
    #[instrument(skip_all)]
    pub async fn create_post(
        &self,
        access_token: &str,
        body: impl Into<RequestBody>,
    ) -> GabResult<ResponseEnvelope> {
        self.api
            .call(&CREATE_POST, access_token, &[], None, Some(body.into()))
            .await
    }
}
