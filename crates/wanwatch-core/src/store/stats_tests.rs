use std::sync::Arc;

use wanwatch_types::{DayStats, MonthStats};

use super::StatsStore;

async fn open_temp() -> (StatsStore, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::open(dir.path().join("stats.json")).await;
    (store, dir)
}

#[tokio::test]
async fn test_record_creates_and_accumulates_day() {
    let (store, _dir) = open_temp().await;

    store.record("2024-05-10", 30).await.unwrap();
    let day = store.record("2024-05-10", 90).await.unwrap();

    assert_eq!(day, DayStats { events: 2, total_downtime_seconds: 120 });
    assert_eq!(store.snapshot().await.len(), 1);
}

#[tokio::test]
async fn test_summarize_single_day_month_matches_day() {
    let (store, _dir) = open_temp().await;
    store.record("2024-05-10", 30).await.unwrap();
    store.record("2024-05-10", 90).await.unwrap();

    let report = store.summarize("2024-05-10", "2024-05").await;
    assert_eq!(report.today, DayStats { events: 2, total_downtime_seconds: 120 });
    assert_eq!(report.month_totals, MonthStats { events: 2, total_downtime_seconds: 120 });
}

#[tokio::test]
async fn test_summarize_month_only_counts_prefix() {
    let (store, _dir) = open_temp().await;
    store.record("2024-04-30", 500).await.unwrap();
    store.record("2024-05-01", 10).await.unwrap();
    store.record("2024-05-09", 20).await.unwrap();

    let report = store.summarize("2024-05-10", "2024-05").await;
    assert_eq!(report.today, DayStats::default());
    assert_eq!(report.month_totals, MonthStats { events: 2, total_downtime_seconds: 30 });
    assert_eq!(report.date, "2024-05-10");
    assert_eq!(report.month, "2024-05");
}

#[tokio::test]
async fn test_summarize_empty_store_is_zero() {
    let (store, _dir) = open_temp().await;
    let report = store.summarize("2024-05-10", "2024-05").await;
    assert_eq!(report.today.events, 0);
    assert_eq!(report.today.total_downtime_seconds, 0);
    assert_eq!(report.month_totals, MonthStats::default());
}

#[tokio::test]
async fn test_reset_all_and_prune() {
    let (store, _dir) = open_temp().await;
    store.record("2024-04-30", 1).await.unwrap();
    store.record("2024-05-01", 2).await.unwrap();
    store.record("2024-05-02", 3).await.unwrap();

    let removed = store.prune(|key| key.starts_with("2024-05")).await.unwrap();
    assert_eq!(removed, 1);
    let keys: Vec<String> = store.snapshot().await.into_keys().collect();
    assert_eq!(keys, vec!["2024-05-01".to_string(), "2024-05-02".to_string()]);

    assert_eq!(store.reset_all().await.unwrap(), 2);
    assert!(store.snapshot().await.is_empty());
}

#[tokio::test]
async fn test_stats_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.json");
    {
        let store = StatsStore::open(&path).await;
        store.record("2024-05-10", 125).await.unwrap();
        store.record("2024-05-11", 5).await.unwrap();
    }

    let reopened = StatsStore::open(&path).await;
    let snapshot = reopened.snapshot().await;
    assert_eq!(snapshot["2024-05-10"], DayStats { events: 1, total_downtime_seconds: 125 });
    assert_eq!(snapshot["2024-05-11"], DayStats { events: 1, total_downtime_seconds: 5 });

    let raw: serde_json::Value =
        serde_json::from_str(&tokio::fs::read_to_string(&path).await.unwrap()).unwrap();
    assert_eq!(raw["2024-05-10"]["events"], 1);
    assert_eq!(raw["2024-05-10"]["total_downtime_seconds"], 125);
}

#[tokio::test]
async fn test_concurrent_records_are_not_lost() {
    let (store, _dir) = open_temp().await;
    let store = Arc::new(store);

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.record("2024-05-10", i).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let day = store.snapshot().await["2024-05-10"];
    assert_eq!(day.events, 32);
    assert_eq!(day.total_downtime_seconds, (0..32).sum::<u64>());

    let on_disk = StatsStore::open(store.path()).await.snapshot().await;
    assert_eq!(on_disk["2024-05-10"], day);
}

#[tokio::test]
async fn test_failed_write_leaves_memory_untouched() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be makes the rename fail.
    let path = dir.path().join("stats.json");
    tokio::fs::create_dir(&path).await.unwrap();

    let store = StatsStore::open(&path).await;
    assert!(store.record("2024-05-10", 10).await.is_err());
    assert!(store.snapshot().await.is_empty());
}

#[tokio::test]
async fn test_fractional_totals_on_disk_survive_a_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.json");
    tokio::fs::write(
        &path,
        r#"{
            "2024-05-01": {"events": 3, "total_downtime_seconds": 400.5},
            "2024-05-02": {"events": 1, "total_downtime_seconds": 60}
        }"#,
    )
    .await
    .unwrap();

    let store = StatsStore::open(&path).await;
    assert_eq!(store.snapshot().await.len(), 2);
    store.record("2024-05-03", 10).await.unwrap();

    let on_disk = StatsStore::open(&path).await.snapshot().await;
    let keys: Vec<&str> = on_disk.keys().map(String::as_str).collect();
    assert_eq!(keys, ["2024-05-01", "2024-05-02", "2024-05-03"]);
    assert_eq!(on_disk["2024-05-01"], DayStats { events: 3, total_downtime_seconds: 401 });
    assert_eq!(on_disk["2024-05-02"], DayStats { events: 1, total_downtime_seconds: 60 });
}
