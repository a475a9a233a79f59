use chrono::NaiveDate;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use wanwatch_core::calendar;
use wanwatch_core::RetentionAction;

use crate::logging;
use crate::state::AppState;

/// Start the midnight retention scheduler as a background tokio task
pub fn start(state: AppState, cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!("[Retention] Retention scheduler started");

        loop {
            let now = state.clock().now();
            let target = calendar::next_midnight_after(&now);
            let wait = calendar::until_next_midnight(&now);
            tracing::info!("[Retention] Waiting {}s until rollover at {}", wait.as_secs(), target);

            tokio::select! {
                () = cancel.cancelled() => {
                    tracing::info!("[Retention] Scheduler stopped");
                    return;
                },
                () = tokio::time::sleep(wait) => {},
            }

            // The monotonic timer can fire a hair before the wall clock
            // reaches midnight; never act on the day that just ended.
            let today = state.clock().now().date_naive().max(target.date_naive());
            rollover(&state, today).await;
        }
    })
}

/// Prune the stats for the day that just started and truncate the log file.
pub(crate) async fn rollover(state: &AppState, today: NaiveDate) -> RetentionAction {
    let action = RetentionAction::plan(today);
    match action.apply(state.stats()).await {
        Ok(removed) => {
            tracing::info!("[Retention] {}: removed {} day(s) from stats", action, removed);
        },
        Err(e) => {
            tracing::warn!("[Retention] {} failed: {}", action, e);
        },
    }

    if let Some(path) = state.config().log_file.as_deref() {
        match logging::truncate_log_file(path).await {
            Ok(()) => tracing::info!("[Retention] Log file cleared"),
            Err(e) => tracing::error!("[Retention] Failed to clear log file {:?}: {}", path, e),
        }
    }

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use std::time::Duration;

    use crate::test_helpers::test_app_state;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_rollover_mid_month_prunes() {
        let ctx = test_app_state().await;
        for key in ["2024-04-29", "2024-05-02", "2024-05-15"] {
            ctx.state.stats().record(key, 10).await.unwrap();
        }

        let action = rollover(&ctx.state, date(2024, 5, 16)).await;
        assert!(matches!(action, RetentionAction::Prune { .. }));

        let keys: Vec<String> = ctx.state.stats().snapshot().await.into_keys().collect();
        assert_eq!(keys, vec!["2024-05-02", "2024-05-15"]);
    }

    #[tokio::test]
    async fn test_rollover_on_first_resets_and_persists() {
        let ctx = test_app_state().await;
        ctx.state.stats().record("2024-05-31", 10).await.unwrap();

        assert_eq!(rollover(&ctx.state, date(2024, 6, 1)).await, RetentionAction::ResetAll);
        assert!(ctx.state.stats().snapshot().await.is_empty());

        let on_disk = tokio::fs::read_to_string(ctx.state.config().stats_path()).await.unwrap();
        assert_eq!(on_disk, "{}");
    }

    /// Local epoch seconds for `hh:mm:ss` on the given day.
    fn local_ts(day: NaiveDate, h: u32, m: u32, s: u32) -> i64 {
        day.and_hms_opt(h, m, s).unwrap().and_local_timezone(Local).earliest().unwrap().timestamp()
    }

    async fn has_day(state: &AppState, key: &str) -> bool {
        state.stats().snapshot().await.contains_key(key)
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduler_resets_after_last_day_of_month() {
        let ctx = test_app_state().await;
        ctx.clock.set(local_ts(date(2024, 5, 31), 23, 59, 55));
        ctx.state.stats().record("2024-05-31", 10).await.unwrap();

        let cancel = CancellationToken::new();
        let handle = start(ctx.state.clone(), cancel.clone());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(has_day(&ctx.state, "2024-05-31").await, "rolled over before midnight");

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(ctx.state.stats().snapshot().await.is_empty());
        let on_disk = tokio::fs::read_to_string(ctx.state.config().stats_path()).await.unwrap();
        assert_eq!(on_disk, "{}");

        cancel.cancel();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduler_prunes_after_mid_month_midnight() {
        let ctx = test_app_state().await;
        ctx.clock.set(local_ts(date(2024, 5, 15), 23, 59, 55));
        for key in ["2024-04-30", "2024-05-15"] {
            ctx.state.stats().record(key, 10).await.unwrap();
        }

        let cancel = CancellationToken::new();
        let handle = start(ctx.state.clone(), cancel.clone());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(has_day(&ctx.state, "2024-04-30").await, "rolled over before midnight");

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(!has_day(&ctx.state, "2024-04-30").await);
        assert!(has_day(&ctx.state, "2024-05-15").await);

        cancel.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_scheduler_stops_on_cancel() {
        let ctx = test_app_state().await;
        let cancel = CancellationToken::new();
        let handle = start(ctx.state.clone(), cancel.clone());

        cancel.cancel();
        tokio::time::timeout(std::time::Duration::from_secs(5), handle)
            .await
            .expect("scheduler did not stop")
            .unwrap();
    }
}
