use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use wanwatch_types::{OutageState, StoreError};

use super::json_file;

/// Persisted "are we on the backup path, and since when" record.
///
/// Every mutation holds the lock across the file write, and the in-memory
/// value is only replaced after the write succeeded.
pub struct OutageStore {
    path: PathBuf,
    state: Mutex<OutageState>,
}

impl OutageStore {
    /// Load the store from `path`; a missing or unreadable file means no outage.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state: OutageState = json_file::load_or_default(&path).await;
        if let Some(start) = state.start_ts {
            tracing::info!("[Store] Resuming outage that started at {}", start);
        }
        Self { path, state: Mutex::new(state) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn current(&self) -> OutageState {
        *self.state.lock().await
    }

    /// Mark the link as on backup since `now`.
    ///
    /// A start already in progress is overwritten; its timestamp is returned.
    pub async fn begin_outage(&self, now: i64) -> Result<Option<i64>, StoreError> {
        let mut guard = self.state.lock().await;
        let next = OutageState { start_ts: Some(now) };
        json_file::save_atomic(&self.path, &next).await?;
        let previous = guard.start_ts;
        *guard = next;
        Ok(previous)
    }

    /// Close the current outage and return its duration in seconds.
    ///
    /// `None` (and no write) when no outage is in progress. A clock that went
    /// backwards yields a zero duration.
    pub async fn end_outage(&self, now: i64) -> Result<Option<u64>, StoreError> {
        let mut guard = self.state.lock().await;
        let Some(start) = guard.start_ts else {
            return Ok(None);
        };
        let next = OutageState::default();
        json_file::save_atomic(&self.path, &next).await?;
        *guard = next;
        Ok(Some(now.saturating_sub(start).max(0) as u64))
    }
}
