//! Day/month keys and local midnight math.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone};

/// `YYYY-MM-DD`, the stats map key.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `YYYY-MM`, the prefix shared by every day key of the month.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

pub fn is_first_of_month(date: NaiveDate) -> bool {
    date.day() == 1
}

/// The next local midnight strictly after `now`.
///
/// If midnight does not exist on that day (DST gap), the first existing
/// instant of the day is returned instead.
pub fn next_midnight_after<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let tomorrow = now.date_naive().succ_opt().unwrap_or(NaiveDate::MAX);
    start_of_day(&now.timezone(), tomorrow)
}

/// Time left until [`next_midnight_after`], never negative.
pub fn until_next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> std::time::Duration {
    let next = next_midnight_after(now);
    next.signed_duration_since(now.clone()).to_std().unwrap_or(std::time::Duration::ZERO)
}

fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let mut probe = midnight;
            for _ in 0..96 {
                probe += Duration::minutes(15);
                if let Some(dt) = tz.from_local_datetime(&probe).earliest() {
                    return dt;
                }
            }
            tz.from_utc_datetime(&midnight)
        },
    }
}
