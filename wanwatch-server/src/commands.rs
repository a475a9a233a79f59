use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use wanwatch_core::format::format_duration;
use wanwatch_core::store::{STATE_FILE, STATS_FILE};
use wanwatch_core::{calendar, Clock, OutageStore, StatsStore, SystemClock};

/// Print today's and this month's downtime from the files in `data_dir`.
pub async fn handle_status(data_dir: &Path, json: bool) -> Result<()> {
    let clock = SystemClock;
    let now = clock.now();
    let today = now.date_naive();

    let stats = StatsStore::open(data_dir.join(STATS_FILE)).await;
    let outage = OutageStore::open(data_dir.join(STATE_FILE)).await.current().await;
    let report = stats.summarize(&calendar::day_key(today), &calendar::month_key(today)).await;

    if json {
        let output = serde_json::json!({
            "report": report,
            "on_backup_since": outage.start_ts,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "wanwatch status".cyan().bold());
    match outage.start_ts {
        Some(start) => println!(
            "  Link: {} for {}",
            "on backup".yellow(),
            format_duration(now.timestamp().saturating_sub(start).max(0) as u64)
        ),
        None => println!("  Link: {}", "primary".green()),
    }
    println!("  Today ({}):", report.date);
    println!("    Switches: {}", report.today.events);
    println!("    Time on backup: {}", format_duration(report.today.total_downtime_seconds));
    println!("  This month ({}):", report.month);
    println!("    Switches: {}", report.month_totals.events);
    println!(
        "    Time on backup: {}",
        format_duration(report.month_totals.total_downtime_seconds)
    );
    Ok(())
}
