//! Persisted outage state (`state.json`).

use serde::{Deserialize, Serialize};

/// Whether the link is currently on the backup path, and since when.
///
/// Serialized as `{"start_ts": <epoch seconds>}` while on backup and `{}`
/// when the primary path is active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OutageState {
    /// Epoch seconds at which traffic moved to the backup path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_ts: Option<i64>,
}

impl OutageState {
    pub fn in_outage(&self) -> bool {
        self.start_ts.is_some()
    }
}
