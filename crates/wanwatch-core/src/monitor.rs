//! Failover transition handling.
//!
//! `to_reserve` opens an outage, `to_main` closes it, records the duration
//! against today's stats and tells the operator. Anything else is rejected
//! with a named [`IngestError`] and changes nothing.

use std::sync::Arc;

use wanwatch_types::{IngestError, Transition};

use crate::calendar;
use crate::clock::Clock;
use crate::format;
use crate::notify::{dispatch, Notifier};
use crate::store::{OutageStore, StatsStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    SwitchedToReserve {
        interface: Option<String>,
        /// Start of an outage that was already open and got overwritten
        replaced_start: Option<i64>,
    },
    RecoveredToMain {
        duration_secs: u64,
    },
    /// `to_main` arrived while no outage was open
    NotInOutage,
}

pub struct FailoverMonitor {
    outage: Arc<OutageStore>,
    stats: Arc<StatsStore>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
}

impl FailoverMonitor {
    pub fn new(
        outage: Arc<OutageStore>,
        stats: Arc<StatsStore>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { outage, stats, notifier, clock }
    }

    /// Decode a raw request body and apply it.
    pub async fn handle_payload(&self, body: &[u8]) -> Result<IngestOutcome, IngestError> {
        let transition = Transition::from_slice(body)?;
        self.apply(transition).await
    }

    pub async fn apply(&self, transition: Transition) -> Result<IngestOutcome, IngestError> {
        let now = self.clock.now();
        let now_ts = now.timestamp();

        match transition {
            Transition::ToReserve { interface } => {
                let replaced_start = self.outage.begin_outage(now_ts).await?;
                if let Some(previous) = replaced_start {
                    tracing::info!(
                        "[Ingest] Outage already open since {}, restarting it at {}",
                        previous,
                        now_ts
                    );
                }
                dispatch(
                    self.notifier.as_ref(),
                    &format::switched_to_reserve_message(interface.as_deref()),
                )
                .await;
                Ok(IngestOutcome::SwitchedToReserve { interface, replaced_start })
            },
            Transition::ToMain => {
                let Some(duration_secs) = self.outage.end_outage(now_ts).await? else {
                    return Ok(IngestOutcome::NotInOutage);
                };
                let day = calendar::day_key(now.date_naive());
                if let Err(e) = self.stats.record(&day, duration_secs).await {
                    tracing::error!(
                        "[Ingest] Outage of {}s closed but not recorded: {}",
                        duration_secs,
                        e
                    );
                }
                dispatch(self.notifier.as_ref(), &format::back_to_main_message(duration_secs))
                    .await;
                Ok(IngestOutcome::RecoveredToMain { duration_secs })
            },
        }
    }
}
