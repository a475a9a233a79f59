//! Downtime statistics models (`stats.json`).

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Per-day stats keyed by `YYYY-MM-DD`.
pub type StatsMap = BTreeMap<String, DayStats>;

/// Counters for one calendar day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DayStats {
    /// Completed outage recoveries attributed to the day
    #[serde(default)]
    pub events: u64,
    /// Sum of the recorded outage durations, in seconds
    #[serde(default, deserialize_with = "whole_seconds")]
    pub total_downtime_seconds: u64,
}

/// Accept any JSON number: fractions are rounded, negatives clamp to zero.
fn whole_seconds<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct WholeSeconds;

    impl<'de> Visitor<'de> for WholeSeconds {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number of seconds")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            Ok(u64::try_from(v).unwrap_or(0))
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
            if !v.is_finite() {
                return Err(E::invalid_value(de::Unexpected::Float(v), &self));
            }
            Ok(v.round().max(0.0) as u64)
        }
    }

    deserializer.deserialize_any(WholeSeconds)
}

impl DayStats {
    /// Count one completed outage of `duration_secs`.
    pub fn add_outage(&mut self, duration_secs: u64) {
        self.events = self.events.saturating_add(1);
        self.total_downtime_seconds = self.total_downtime_seconds.saturating_add(duration_secs);
    }
}

/// Month-level rollup over every stored day of the month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MonthStats {
    pub events: u64,
    pub total_downtime_seconds: u64,
}

impl MonthStats {
    pub fn add_day(&mut self, day: &DayStats) {
        self.events = self.events.saturating_add(day.events);
        self.total_downtime_seconds =
            self.total_downtime_seconds.saturating_add(day.total_downtime_seconds);
    }
}

/// Snapshot answered to a status query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusReport {
    /// Day key the `today` counters belong to (`YYYY-MM-DD`)
    pub date: String,
    /// Month prefix the rollup covers (`YYYY-MM`)
    pub month: String,
    pub today: DayStats,
    pub month_totals: MonthStats,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_file_format() {
        let raw = r#"{
            "2024-05-01": {"events": 2, "total_downtime_seconds": 120},
            "2024-05-02": {"events": 1, "total_downtime_seconds": 7}
        }"#;
        let map: StatsMap = serde_json::from_str(raw).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["2024-05-01"], DayStats { events: 2, total_downtime_seconds: 120 });

        let back: StatsMap = serde_json::from_str(&serde_json::to_string(&map).unwrap()).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_fractional_and_negative_totals_are_accepted() {
        let raw = r#"{
            "2024-05-01": {"events": 3, "total_downtime_seconds": 400.5},
            "2024-05-02": {"events": 1, "total_downtime_seconds": -4},
            "2024-05-03": {"events": 1}
        }"#;
        let map: StatsMap = serde_json::from_str(raw).unwrap();
        assert_eq!(map["2024-05-01"], DayStats { events: 3, total_downtime_seconds: 401 });
        assert_eq!(map["2024-05-02"].total_downtime_seconds, 0);
        assert_eq!(map["2024-05-03"].total_downtime_seconds, 0);

        let bad = r#"{"2024-05-01": {"events": 1, "total_downtime_seconds": "ten"}}"#;
        assert!(serde_json::from_str::<StatsMap>(bad).is_err());
    }

    #[test]
    fn test_add_outage_accumulates() {
        let mut day = DayStats::default();
        day.add_outage(30);
        day.add_outage(90);
        assert_eq!(day, DayStats { events: 2, total_downtime_seconds: 120 });

        let mut month = MonthStats::default();
        month.add_day(&day);
        month.add_day(&DayStats { events: 1, total_downtime_seconds: 5 });
        assert_eq!(month.events, 3);
        assert_eq!(month.total_downtime_seconds, 125);
    }
}
