//! Resource services for the Gab API.
//!
//! Each service covers one resource family. Every method takes the access token
//! first and resolves to the normalized [`ResponseEnvelope`]; HTTP failures are
//! reported through `success == false`, not as errors.

pub mod current_user;
pub mod endpoints;
pub mod groups;
pub mod popular;
pub mod posts;
pub mod users;

pub use current_user::CurrentUserService;
pub use endpoints::Endpoint;
pub use groups::GroupsService;
pub use popular::PopularService;
pub use posts::PostsService;
pub use users::UsersService;

use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::Arc;
use tracing::debug;

use crate::core::transport::{dispatch, HttpTransport};
use crate::core::{RequestBody, RequestOptionsBuilder};
use crate::error::GabResult;
use crate::telemetry::redact_token;
use crate::types::ResponseEnvelope;

/// Request builder plus transport, shared by all resource services.
#[derive(Clone)]
pub struct ApiDispatcher {
    transport: Arc<dyn HttpTransport>,
    requests: RequestOptionsBuilder,
}

impl ApiDispatcher {
    /// Create a dispatcher over a transport and API location.
    pub fn new(transport: Arc<dyn HttpTransport>, requests: RequestOptionsBuilder) -> Self {
        Self {
            transport,
            requests,
        }
    }

    /// Resolve `endpoint` with `params`, append the `before` cursor and send.
    pub async fn call(
        &self,
        endpoint: &Endpoint,
        access_token: &str,
        params: &[&str],
        before: Option<String>,
        body: Option<RequestBody>,
    ) -> GabResult<ResponseEnvelope> {
        let mut path = endpoint.resolve(params)?;
        if let Some(cursor) = before {
            path.push_str("?before=");
            path.push_str(&urlencoding::encode(&cursor));
        }

        debug!(
            scope = %endpoint.scope,
            token = %redact_token(access_token),
            "calling Gab endpoint"
        );
        let request = self
            .requests
            .build(endpoint.method.as_str(), &path, access_token, body)?;
        dispatch(self.transport.as_ref(), &request).await
    }
}

/// Pagination cursor for date-ordered feeds.
pub(crate) fn date_cursor(before: Option<DateTime<Utc>>) -> Option<String> {
    before.map(|date| date.to_rfc3339_opts(SecondsFormat::Secs, true))
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::core::HttpMethod;
    use crate::error::{GabError, ValidationError};
    use chrono::TimeZone;

    #[tokio::test]
    async fn test_call_appends_encoded_cursor() {
        let (dispatcher, transport) = dispatcher();
        dispatcher
            .call(
                &endpoints::FETCH_FEED,
                TOKEN,
                &[],
                Some("2024-05-01T12:00:00Z".to_string()),
                None,
            )
            .await
            .unwrap();

        let request = transport.get_last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/v1.0/feed?before=2024-05-01T12%3A00%3A00Z");
        assert_eq!(request.header("authorization"), Some("Bearer access-1"));
    }

    #[tokio::test]
    async fn test_call_rejects_empty_token_before_io() {
        let (dispatcher, transport) = dispatcher();
        let result = dispatcher
            .call(&endpoints::FETCH_ME, "", &[], None, None)
            .await;

        assert!(matches!(
            result,
            Err(GabError::Validation(ValidationError::EmptyField { .. }))
        ));
        assert!(transport.get_requests().is_empty());
    }

    #[test]
    fn test_date_cursor_is_rfc3339() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(date_cursor(Some(date)).as_deref(), Some("2024-05-01T12:00:00Z"));
        assert_eq!(date_cursor(None), None);
    }
}
