//! `/status` command handling for the Telegram poller.

use std::sync::Arc;

use wanwatch_types::StatusReport;

use crate::calendar;
use crate::clock::Clock;
use crate::format;
use crate::notify::telegram::{IncomingMessage, UpdateBatch};
use crate::notify::{dispatch, Notifier};
use crate::store::StatsStore;

pub const STATUS_COMMAND: &str = "/status";

/// `getUpdates` offset bookkeeping.
///
/// The offset only ever moves forward, so a batch that arrives out of order
/// (or a stale retry) can never rewind it and replay old commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateCursor {
    next: Option<i64>,
}

impl UpdateCursor {
    pub fn offset(&self) -> Option<i64> {
        self.next
    }

    pub fn advance(&mut self, batch: &UpdateBatch) {
        if let Some(max_id) = batch.max_update_id {
            let candidate = max_id.saturating_add(1);
            self.next = Some(self.next.map_or(candidate, |n| n.max(candidate)));
        }
    }
}

pub struct StatusResponder {
    stats: Arc<StatsStore>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    chat_id: String,
}

impl StatusResponder {
    pub fn new(
        stats: Arc<StatsStore>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self { stats, notifier, clock, chat_id: chat_id.into() }
    }

    /// Today's and this month's totals as of now.
    pub async fn report(&self) -> StatusReport {
        let today = self.clock.now().date_naive();
        self.stats.summarize(&calendar::day_key(today), &calendar::month_key(today)).await
    }

    pub fn is_status_request(&self, message: &IncomingMessage) -> bool {
        message.chat_id.as_deref() == Some(self.chat_id.as_str())
            && message.text.as_deref().map(str::trim) == Some(STATUS_COMMAND)
    }

    /// Answer every status request in `batch`. Returns how many were answered.
    pub async fn handle_batch(&self, batch: &UpdateBatch) -> usize {
        let mut answered = 0;
        for message in batch.messages.iter().filter(|m| self.is_status_request(m)) {
            let report = self.report().await;
            tracing::info!(
                "[StatusPoll] Status requested (update {}): {} event(s) today",
                message.update_id,
                report.today.events
            );
            dispatch(self.notifier.as_ref(), &format::status_report_message(&report)).await;
            answered += 1;
        }
        answered
    }
}
