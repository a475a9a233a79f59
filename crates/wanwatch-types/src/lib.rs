//! # wanwatch Types
//!
//! Core types, models, and error definitions for wanwatch.
//!
//! - **`error`** - Typed errors for persistence and event ingestion
//! - **`models`** - Domain models (outage state, day/month stats, transition events)
//!
//! ## Architecture Role
//!
//! `wanwatch-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!        wanwatch-types (this crate)
//!                │
//!                ▼
//!          wanwatch-core
//!                │
//!                ▼
//!         wanwatch-server
//! ```
//!
//! The persisted shapes here are the on-disk file formats, so changing a
//! field name changes the files written by the daemon.

pub mod error;
pub mod models;

pub use error::{IngestError, StoreError};

pub use models::{
    DayStats, MonthStats, OutageState, StatsMap, StatusReport, Transition, TransitionEvent,
};
