//! Groups service.

use std::fmt::Display;
use tracing::instrument;

use super::endpoints::{
    FETCH_GROUPS, FETCH_GROUP_DETAILS, FETCH_GROUP_MODERATION_LOGS, FETCH_GROUP_USERS,
};
use super::ApiDispatcher;
use crate::error::GabResult;
use crate::types::ResponseEnvelope;

/// Gab groups: listing, details, members and moderation history.
#[derive(Clone)]
pub struct GroupsService {
    api: ApiDispatcher,
}

impl GroupsService {
    pub fn new(api: ApiDispatcher) -> Self {
        Self { api }
    }

    #[instrument(skip_all)]
    pub async fn fetch_groups(&self, access_token: &str) -> GabResult<ResponseEnvelope> {
        self.api
            .call(&FETCH_GROUPS, access_token, &[], None, None)
            .await
    }

    #[instrument(skip(self, access_token, group_id), fields(group_id = %group_id))]
    pub async fn fetch_group_details(
        &self,
        access_token: &str,
        group_id: impl Display,
    ) -> GabResult<ResponseEnvelope> {
        let group_id = group_id.to_string();
        self.api
            .call(&FETCH_GROUP_DETAILS, access_token, &[&group_id], None, None)
            .await
    }

    /// Members of a group; `before_count` skips that many entries.
    #[instrument(skip(self, access_token, group_id), fields(group_id = %group_id))]
    pub async fn fetch_group_users(
        &self,
        access_token: &str,
        group_id: impl Display,
        before_count: Option<u64>,
    ) -> GabResult<ResponseEnvelope> {
        let group_id = group_id.to_string();
        self.api
            .call(
                &FETCH_GROUP_USERS,
                access_token,
                &[&group_id],
                before_count.map(|n| n.to_string()),
                None,
            )
            .await
    }

    #[instrument(skip(self, access_token, group_id), fields(group_id = %group_id))]
    pub async fn fetch_group_moderation_logs(
        &self,
        access_token: &str,
        group_id: impl Display,
    ) -> GabResult<ResponseEnvelope> {
        let group_id = group_id.to_string();
        self.api
            .call(
                &FETCH_GROUP_MODERATION_LOGS,
                access_token,
                &[&group_id],
                None,
                None,
            )
            .await
    }
}
