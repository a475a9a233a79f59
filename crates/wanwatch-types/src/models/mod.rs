//! Domain models.

mod event;
mod outage;
mod stats;

pub use event::{Transition, TransitionEvent, EVENT_TO_MAIN, EVENT_TO_RESERVE};
pub use outage::OutageState;
pub use stats::{DayStats, MonthStats, StatsMap, StatusReport};
