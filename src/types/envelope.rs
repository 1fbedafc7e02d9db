//! Response Envelope
//!
//! Uniform wrapper around every HTTP response the client resolves.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{GabResult, ProtocolError};

/// Normalized response: `{success, message, code, data}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// True iff `200 <= code < 300`.
    pub success: bool,
    /// Status reason phrase.
    pub message: String,
    /// HTTP status code.
    pub code: u16,
    /// Parsed JSON body.
    pub data: serde_json::Value,
}

impl ResponseEnvelope {
    /// Create an envelope; `success` is derived from `code`.
    pub fn new(code: u16, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            success: (200..300).contains(&code),
            message: message.into(),
            code,
            data,
        }
    }

    /// Decode `data` into a caller-supplied type.
    pub fn data_as<T: DeserializeOwned>(&self) -> GabResult<T> {
        serde_json::from_value(self.data.clone()).map_err(|e| {
            ProtocolError::InvalidJson {
                status: self.code,
                message: e.to_string(),
            }
            .into()
        })
    }
}
