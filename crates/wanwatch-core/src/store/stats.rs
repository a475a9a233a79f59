use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use wanwatch_types::{DayStats, MonthStats, StatsMap, StatusReport, StoreError};

use super::json_file;

/// Per-day downtime counters with month rollups.
pub struct StatsStore {
    path: PathBuf,
    stats: Mutex<StatsMap>,
}

impl StatsStore {
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let stats: StatsMap = json_file::load_or_default(&path).await;
        tracing::debug!("[Store] Loaded {} day(s) of stats from {:?}", stats.len(), path);
        Self { path, stats: Mutex::new(stats) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn snapshot(&self) -> StatsMap {
        self.stats.lock().await.clone()
    }

    /// Count one completed outage of `duration_secs` against `date_key`.
    pub async fn record(&self, date_key: &str, duration_secs: u64) -> Result<DayStats, StoreError> {
        self.mutate(|stats| {
            let day = stats.entry(date_key.to_string()).or_default();
            day.add_outage(duration_secs);
            *day
        })
        .await
    }

    pub async fn summarize(&self, date_key: &str, month_key: &str) -> StatusReport {
        summarize_map(&*self.stats.lock().await, date_key, month_key)
    }

    /// Drop every entry. Returns how many were removed.
    pub async fn reset_all(&self) -> Result<usize, StoreError> {
        self.mutate(|stats| {
            let removed = stats.len();
            stats.clear();
            removed
        })
        .await
    }

    /// Drop every entry whose key fails `keep`. Returns how many were removed.
    pub async fn prune<F>(&self, keep: F) -> Result<usize, StoreError>
    where
        F: Fn(&str) -> bool,
    {
        self.mutate(|stats| {
            let before = stats.len();
            stats.retain(|key, _| keep(key));
            before - stats.len()
        })
        .await
    }

    /// Apply `f` to a copy of the map, persist it, then publish it.
    async fn mutate<F, R>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut StatsMap) -> R,
    {
        let mut guard = self.stats.lock().await;
        let mut next = guard.clone();
        let result = f(&mut next);
        json_file::save_atomic(&self.path, &next).await?;
        *guard = next;
        Ok(result)
    }
}

pub fn summarize_map(stats: &StatsMap, date_key: &str, month_key: &str) -> StatusReport {
    let today = stats.get(date_key).copied().unwrap_or_default();
    let month_totals = stats
        .iter()
        .filter(|(key, _)| key.starts_with(month_key))
        .fold(MonthStats::default(), |mut acc, (_, day)| {
            acc.add_day(day);
            acc
        });

    StatusReport {
        date: date_key.to_string(),
        month: month_key.to_string(),
        today,
        month_totals,
    }
}
