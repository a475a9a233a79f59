//! Background Schedulers
//!
//! ## Retention Rollover
//! Sleeps until the next local midnight, then prunes the stats store:
//! - first day of the month: everything is dropped
//! - any other day: only today and the current month are kept
//!
//! The wait is recomputed from the wall clock every cycle, and the log file
//! (when configured) is truncated after each rollover.
//!
//! ## Status Poller
//! Long-polls Telegram `getUpdates` and answers `/status` from the operator
//! chat with today's and this month's downtime.
//!
//! Both tasks stop when the shared `CancellationToken` is cancelled.

pub mod retention;
pub mod status_poll;
