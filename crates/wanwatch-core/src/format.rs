//! Human-readable durations and notification texts.

use wanwatch_types::StatusReport;

/// Renders seconds as `"<m> min <s> sec"`.
///
/// The minutes part is dropped when zero; the seconds part is dropped only
/// when minutes are present and seconds are zero.
pub fn format_duration(seconds: u64) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;
    match (minutes, secs) {
        (0, s) => format!("{s} sec"),
        (m, 0) => format!("{m} min"),
        (m, s) => format!("{m} min {s} sec"),
    }
}

pub fn switched_to_reserve_message(interface: Option<&str>) -> String {
    format!("[MWAN3] Switched to backup link: {}", interface.unwrap_or("unknown"))
}

pub fn back_to_main_message(duration_secs: u64) -> String {
    format!(
        "[MWAN3] Back on primary link.\nOutage duration: {}.",
        format_duration(duration_secs)
    )
}

pub fn status_report_message(report: &StatusReport) -> String {
    format!(
        "📅 Today ({date}):\n\
         - Switches: {day_events}\n\
         - Time on backup: {day_downtime}\n\n\
         📊 This month ({month}):\n\
         - Switches: {month_events}\n\
         - Time on backup: {month_downtime}",
        date = report.date,
        day_events = report.today.events,
        day_downtime = format_duration(report.today.total_downtime_seconds),
        month = report.month,
        month_events = report.month_totals.events,
        month_downtime = format_duration(report.month_totals.total_downtime_seconds),
    )
}
