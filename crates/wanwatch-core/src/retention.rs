//! Midnight rollover of the stats store.
//!
//! On the first day of a month everything is dropped. On any other day only
//! today's entry and the entries of the current month survive.

use chrono::NaiveDate;
use wanwatch_types::StoreError;

use crate::calendar;
use crate::store::StatsStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetentionAction {
    ResetAll,
    Prune { day: String, month: String },
}

impl RetentionAction {
    /// What to do for the day that just started.
    pub fn plan(today: NaiveDate) -> Self {
        if calendar::is_first_of_month(today) {
            Self::ResetAll
        } else {
            Self::Prune { day: calendar::day_key(today), month: calendar::month_key(today) }
        }
    }

    pub fn keeps(&self, key: &str) -> bool {
        match self {
            Self::ResetAll => false,
            Self::Prune { day, month } => key == day || key.starts_with(month.as_str()),
        }
    }

    /// Execute against `store`; returns the number of removed days.
    pub async fn apply(&self, store: &StatsStore) -> Result<usize, StoreError> {
        match self {
            Self::ResetAll => store.reset_all().await,
            Self::Prune { .. } => store.prune(|key| self.keeps(key)).await,
        }
    }
}

impl std::fmt::Display for RetentionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResetAll => write!(f, "full reset (first day of month)"),
            Self::Prune { day, month } => write!(f, "prune to {} / {}", day, month),
        }
    }
}
