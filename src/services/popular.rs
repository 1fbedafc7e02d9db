//! Popular service.

use tracing::instrument;

use super::endpoints::{FETCH_POPULAR_FEED, FETCH_POPULAR_USERS};
use super::ApiDispatcher;
use crate::error::GabResult;
use crate::types::ResponseEnvelope;

/// Site-wide popular posts and users.
#[derive(Clone)]
pub struct PopularService {
    api: ApiDispatcher,
}

impl PopularService {
    pub fn new(api: ApiDispatcher) -> Self {
        Self { api }
    }

    #[instrument(skip_all)]
    pub async fn fetch_popular_feed(&self, access_token: &str) -> GabResult<ResponseEnvelope> {
        self.api
            .call(&FETCH_POPULAR_FEED, access_token, &[], None, None)
            .await
    }

    #[instrument(skip_all)]
    pub async fn fetch_popular_users(&self, access_token: &str) -> GabResult<ResponseEnvelope> {
        self.api
            .call(&FETCH_POPULAR_USERS, access_token, &[], None, None)
            .await
    }
}
