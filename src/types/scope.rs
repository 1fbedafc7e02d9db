//! Scope Types
//!
//! Permissions a Gab user grants to the calling application.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Gab.com OAuth2 scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    /// Read access to the profile and feeds.
    #[serde(rename = "read")]
    Read,
    /// Follow or mute users.
    #[serde(rename = "engage-user")]
    EngageUser,
    /// Vote, repost, quote or report posts.
    #[serde(rename = "engage-post")]
    EngagePost,
    /// Send new posts.
    #[serde(rename = "write-post")]
    WritePost,
    /// Access notifications.
    #[serde(rename = "notifications")]
    Notifications,
}

impl Scope {
    /// Every scope the API recognizes.
    pub const ALL: [Scope; 5] = [
        Scope::Read,
        Scope::EngageUser,
        Scope::EngagePost,
        Scope::WritePost,
        Scope::Notifications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::EngageUser => "engage-user",
            Self::EngagePost => "engage-post",
            Self::WritePost => "write-post",
            Self::Notifications => "notifications",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownScope {
                scope: s.to_string(),
            })
    }
}

/// Render scopes as the space-joined string sent on the wire.
///
/// Order is preserved and duplicates are kept.
pub fn join_scopes(scopes: &[Scope]) -> String {
    scopes
        .iter()
        .map(Scope::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
