//! JSON file stores.
//!
//! - `state.json`: [`OutageStore`], whether the link is on backup
//! - `stats.json`: [`StatsStore`], per-day downtime counters

pub mod json_file;
mod outage;
mod stats;

#[cfg(test)]
mod stats_tests;

pub use outage::OutageStore;
pub use stats::{summarize_map, StatsStore};

pub const STATE_FILE: &str = "state.json";
pub const STATS_FILE: &str = "stats.json";
