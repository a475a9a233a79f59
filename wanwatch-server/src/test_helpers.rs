//! Test helpers for wanwatch-server unit tests.

use std::sync::Arc;

use tempfile::TempDir;

use wanwatch_core::{ManualClock, MemoryNotifier};

use crate::config::ServerConfig;
use crate::state::AppState;

/// 2024-05-15 12:00:00 UTC.
pub const NOON: i64 = 1_715_774_400;

pub struct TestContext {
    pub state: AppState,
    pub notifier: Arc<MemoryNotifier>,
    pub clock: Arc<ManualClock>,
    /// Keep alive for the test duration.
    pub dir: TempDir,
}

/// Create an `AppState` backed by a temp data dir, an in-memory notifier and
/// a manual clock set to [`NOON`].
pub async fn test_app_state() -> TestContext {
    let dir = TempDir::new().expect("failed to create temp dir");
    let notifier = Arc::new(MemoryNotifier::new());
    let clock = Arc::new(ManualClock::at(NOON));

    let state = AppState::initialize(
        ServerConfig::new(dir.path().to_path_buf()),
        notifier.clone(),
        clock.clone(),
    )
    .await
    .expect("failed to create test AppState");

    TestContext { state, notifier, clock, dir }
}
