//! Posts service: votes, reposts and post details.

use std::fmt::Display;
use tracing::instrument;

use super::endpoints::{
    DOWNVOTE_POST, FETCH_POST_DETAILS, REMOVE_DOWNVOTE_POST, REMOVE_REPOST_POST,
    REMOVE_UPVOTE_POST, REPOST_POST, UPVOTE_POST,
};
use super::{ApiDispatcher, Endpoint};
use crate::error::GabResult;
use crate::types::ResponseEnvelope;

#[derive(Clone)]
pub struct PostsService {
    api: ApiDispatcher,
}

impl PostsService {
    pub fn new(api: ApiDispatcher) -> Self {
        Self { api }
    }

    #[instrument(skip(self, access_token, post_id), fields(post_id = %post_id))]
    pub async fn upvote_post(
        &self,
        access_token: &str,
        post_id: impl Display,
    ) -> GabResult<ResponseEnvelope> {
        self.on_post(&UPVOTE_POST, access_token, post_id).await
    }

    #[instrument(skip(self, access_token, post_id), fields(post_id = %post_id))]
    pub async fn remove_upvote_post(
        &self,
        access_token: &str,
        post_id: impl Display,
    ) -> GabResult<ResponseEnvelope> {
        self.on_post(&REMOVE_UPVOTE_POST, access_token, post_id).await
    }

    #[instrument(skip(self, access_token, post_id), fields(post_id = %post_id))]
    pub async fn downvote_post(
        &self,
        access_token: &str,
        post_id: impl Display,
    ) -> GabResult<ResponseEnvelope> {
        self.on_post(&DOWNVOTE_POST, access_token, post_id).await
    }

    #[instrument(skip(self, access_token, post_id), fields(post_id = %post_id))]
    pub async fn remove_downvote_post(
        &self,
        access_token: &str,
        post_id: impl Display,
    ) -> GabResult<ResponseEnvelope> {
        self.on_post(&REMOVE_DOWNVOTE_POST, access_token, post_id).await
    }

    #[instrument(skip(self, access_token, post_id), fields(post_id = %post_id))]
    pub async fn repost_post(
        &self,
        access_token: &str,
        post_id: impl Display,
    ) -> GabResult<ResponseEnvelope> {
        self.on_post(&REPOST_POST, access_token, post_id).await
    }

    #[instrument(skip(self, access_token, post_id), fields(post_id = %post_id))]
    pub async fn remove_repost_post(
        &self,
        access_token: &str,
        post_id: impl Display,
    ) -> GabResult<ResponseEnvelope> {
        self.on_post(&REMOVE_REPOST_POST, access_token, post_id).await
    }

    #[instrument(skip(self, access_token, post_id), fields(post_id = %post_id))]
    pub async fn fetch_post_details(
        &self,
        access_token: &str,
        post_id: impl Display,
    ) -> GabResult<ResponseEnvelope> {
        self.on_post(&FETCH_POST_DETAILS, access_token, post_id).await
    }

    async fn on_post(
        &self,
        endpoint: &Endpoint,
        access_token: &str,
        post_id: impl Display,
    ) -> GabResult<ResponseEnvelope> {
        let post_id = post_id.to_string();
        self.api
            .call(endpoint, access_token, &[&post_id], None, None)
            .await
    }
}
