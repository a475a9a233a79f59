//! Event ingestion errors.
//!
//! The HTTP endpoint acknowledges every request with 200, so none of these
//! reach the caller. They exist so that dropped events are visible in logs
//! and assertable in tests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::StoreError;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum IngestError {
    /// Body is not a JSON event object
    #[error("Malformed event payload: {message}")]
    MalformedPayload { message: String },

    /// Event object has no `type` field
    #[error("Event payload has no type")]
    MissingType,

    /// `type` is neither `to_reserve` nor `to_main`
    #[error("Unknown event type: {kind}")]
    UnknownType { kind: String },

    /// The transition was valid but persisting it failed
    #[error("Failed to persist transition: {0}")]
    Store(#[from] StoreError),
}

impl IngestError {
    /// True for payload problems (as opposed to local persistence failures).
    pub fn is_malformed(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}
