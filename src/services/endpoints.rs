//! Endpoint table.
//!
//! Every Gab resource call as `(method, path template, required scope)`.
//! Templates use `{name}` placeholders filled by [`Endpoint::resolve`].

use crate::core::HttpMethod;
use crate::core::validation::require_non_empty;
use crate::error::ValidationError;
use crate::types::Scope;

/// One resource call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
    pub scope: Scope,
}

impl Endpoint {
    const fn new(method: HttpMethod, path: &'static str, scope: Scope) -> Self {
        Self {
            method,
            path,
            scope,
        }
    }

    /// Fill the template placeholders, in order, with percent-encoded `params`.
    ///
    /// Each parameter must be non-empty; errors name the placeholder.
    pub fn resolve(&self, params: &[&str]) -> Result<String, ValidationError> {
        let mut resolved = String::with_capacity(self.path.len());
        let mut params = params.iter();
        let mut rest = self.path;

        while let Some(start) = rest.find('{') {
            let end = rest[start..]
                .find('}')
                .map(|offset| start + offset)
                .ok_or_else(|| ValidationError::shape("path", "a well-formed template"))?;
            let name = &rest[start + 1..end];
            let value = params
                .next()
                .ok_or_else(|| ValidationError::empty(name))?;

            resolved.push_str(&rest[..start]);
            resolved.push_str(&urlencoding::encode(require_non_empty(name, value)?));
            rest = &rest[end + 1..];
        }
        resolved.push_str(rest);

        Ok(resolved)
    }
}

pub const FETCH_ME: Endpoint = Endpoint::new(HttpMethod::Get, "/me", Scope::Read);
pub const FETCH_NOTIFICATIONS: Endpoint =
    Endpoint::new(HttpMethod::Get, "/notifications", Scope::Notifications);
pub const FETCH_FEED: Endpoint = Endpoint::new(HttpMethod::Get, "/feed", Scope::Read);
pub const CREATE_POST: Endpoint = Endpoint::new(HttpMethod::Post, "/posts", Scope::WritePost);

pub const FETCH_USER: Endpoint = Endpoint::new(HttpMethod::Get, "/users/{username}", Scope::Read);
pub const FETCH_USER_FOLLOWERS: Endpoint =
    Endpoint::new(HttpMethod::Get, "/users/{username}/followers", Scope::Read);
pub const FETCH_USER_FOLLOWING: Endpoint =
    Endpoint::new(HttpMethod::Get, "/users/{username}/following", Scope::Read);
pub const FETCH_USER_FEED: Endpoint =
    Endpoint::new(HttpMethod::Get, "/users/{username}/feed", Scope::Read);
pub const FOLLOW_USER: Endpoint =
    Endpoint::new(HttpMethod::Post, "/users/{userId}/follow", Scope::EngageUser);
pub const UNFOLLOW_USER: Endpoint =
    Endpoint::new(HttpMethod::Delete, "/users/{userId}/follow", Scope::EngageUser);

pub const FETCH_POPULAR_FEED: Endpoint =
    Endpoint::new(HttpMethod::Get, "/popular/feed/", Scope::Read);
pub const FETCH_POPULAR_USERS: Endpoint =
    Endpoint::new(HttpMethod::Get, "/popular/users/", Scope::Read);

pub const UPVOTE_POST: Endpoint =
    Endpoint::new(HttpMethod::Post, "/posts/{postId}/upvote", Scope::EngagePost);
pub const REMOVE_UPVOTE_POST: Endpoint =
    Endpoint::new(HttpMethod::Delete, "/posts/{postId}/upvote", Scope::EngagePost);
pub const DOWNVOTE_POST: Endpoint =
    Endpoint::new(HttpMethod::Post, "/posts/{postId}/downvote", Scope::EngagePost);
pub const REMOVE_DOWNVOTE_POST: Endpoint =
    Endpoint::new(HttpMethod::Delete, "/posts/{postId}/downvote", Scope::EngagePost);
pub const REPOST_POST: Endpoint =
    Endpoint::new(HttpMethod::Post, "/posts/{postId}/repost", Scope::EngagePost);
pub const REMOVE_REPOST_POST: Endpoint =
    Endpoint::new(HttpMethod::Delete, "/posts/{postId}/repost", Scope::EngagePost);
pub const FETCH_POST_DETAILS: Endpoint =
    Endpoint::new(HttpMethod::Get, "/posts/{postId}", Scope::Read);

pub const FETCH_GROUPS: Endpoint = Endpoint::new(HttpMethod::Get, "/groups", Scope::Read);
pub const FETCH_GROUP_DETAILS: Endpoint =
    Endpoint::new(HttpMethod::Get, "/groups/{groupId}", Scope::Read);
pub const FETCH_GROUP_USERS: Endpoint =
    Endpoint::new(HttpMethod::Get, "/groups/{groupId}/users", Scope::Read);
pub const FETCH_GROUP_MODERATION_LOGS: Endpoint =
    Endpoint::new(HttpMethod::Get, "/groups/{groupId}/moderation-logs", Scope::Read);
