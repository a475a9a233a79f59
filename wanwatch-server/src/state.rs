//! Application State
//!
//! Holds the two stores, the failover monitor and the clock shared by the
//! HTTP handler and the background schedulers.

use anyhow::{Context, Result};
use std::sync::Arc;

use wanwatch_core::store::json_file;
use wanwatch_core::{Clock, FailoverMonitor, Notifier, OutageStore, StatsStore};
use wanwatch_types::{OutageState, StatsMap};

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub(crate) inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub config: ServerConfig,
    pub outage: Arc<OutageStore>,
    pub stats: Arc<StatsStore>,
    pub monitor: Arc<FailoverMonitor>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create the data files if needed, load both stores and wire the monitor.
    pub async fn initialize(
        config: ServerConfig,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let state_path = config.state_path();
        let stats_path = config.stats_path();

        if json_file::ensure_exists(&stats_path, &StatsMap::new())
            .await
            .with_context(|| format!("Failed to initialize {}", stats_path.display()))?
        {
            tracing::info!("📄 Created file: {}", stats_path.display());
        }
        if json_file::ensure_exists(&state_path, &OutageState::default())
            .await
            .with_context(|| format!("Failed to initialize {}", state_path.display()))?
        {
            tracing::info!("📄 Created file: {}", state_path.display());
        }

        let outage = Arc::new(OutageStore::open(state_path).await);
        let stats = Arc::new(StatsStore::open(stats_path).await);
        let monitor = Arc::new(FailoverMonitor::new(
            Arc::clone(&outage),
            Arc::clone(&stats),
            notifier,
            Arc::clone(&clock),
        ));

        Ok(Self {
            inner: Arc::new(AppStateInner { config, outage, stats, monitor, clock }),
        })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    pub fn stats(&self) -> &Arc<StatsStore> {
        &self.inner.stats
    }

    pub fn outage(&self) -> &Arc<OutageStore> {
        &self.inner.outage
    }

    pub fn monitor(&self) -> &FailoverMonitor {
        &self.inner.monitor
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.inner.clock
    }
}
