//! # wanwatch Core
//!
//! Core logic for the mwan3 failover watcher.
//!
//! ```text
//! wanwatch-core/src/
//! ├── store/       # JSON file stores (outage state, per-day stats)
//! ├── retention.rs # Midnight rollover planning
//! ├── calendar.rs  # Day/month keys, next-midnight computation
//! ├── monitor.rs   # Transition handling (ingestion side)
//! ├── status.rs    # `/status` command handling (poller side)
//! ├── notify/      # Notifier trait + Telegram Bot API client
//! └── format.rs    # Human-readable durations and message texts
//! ```
//!
//! Both stores serialize their read-modify-write cycles behind a mutex, so
//! the ingestion endpoint, the retention task and the status poller can
//! share them freely.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod calendar;
pub mod clock;
pub mod error;
pub mod format;
pub mod monitor;
pub mod notify;
pub mod retention;
pub mod status;
pub mod store;


pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{AppError, AppResult};
pub use monitor::{FailoverMonitor, IngestOutcome};
pub use notify::{dispatch, MemoryNotifier, Notifier, TelegramClient};
pub use retention::RetentionAction;
pub use status::{StatusResponder, UpdateCursor, STATUS_COMMAND};
pub use store::{OutageStore, StatsStore};
