//! Failover transition events posted by the mwan3 hook.

use serde::{Deserialize, Serialize};

use crate::error::IngestError;

pub const EVENT_TO_RESERVE: &str = "to_reserve";
pub const EVENT_TO_MAIN: &str = "to_main";

/// Raw event payload: `{"type": "...", "interface": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TransitionEvent {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub interface: Option<String>,
}

/// A validated transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Traffic moved to the backup path
    ToReserve { interface: Option<String> },
    /// Traffic is back on the primary path
    ToMain,
}

impl Transition {
    /// Decode a request body into a transition.
    pub fn from_slice(body: &[u8]) -> Result<Self, IngestError> {
        let event: TransitionEvent = serde_json::from_slice(body)
            .map_err(|e| IngestError::MalformedPayload { message: e.to_string() })?;
        Self::try_from(event)
    }
}

impl TryFrom<TransitionEvent> for Transition {
    type Error = IngestError;

    fn try_from(event: TransitionEvent) -> Result<Self, Self::Error> {
        match event.kind.as_deref() {
            Some(EVENT_TO_RESERVE) => Ok(Transition::ToReserve { interface: event.interface }),
            Some(EVENT_TO_MAIN) => Ok(Transition::ToMain),
            Some(other) => Err(IngestError::UnknownType { kind: other.to_string() }),
            None => Err(IngestError::MissingType),
        }
    }
}
