//! Wall-clock source.
//!
//! Everything that stamps an event or picks a day key reads the time through
//! [`Clock`] so tests can pin it.

use chrono::{DateTime, Local};
use std::sync::atomic::{AtomicI64, Ordering};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    fn timestamp(&self) -> i64 {
        self.now().timestamp()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    secs: AtomicI64,
}

impl ManualClock {
    pub fn at(epoch_secs: i64) -> Self {
        Self { secs: AtomicI64::new(epoch_secs) }
    }

    pub fn set(&self, epoch_secs: i64) {
        self.secs.store(epoch_secs, Ordering::SeqCst);
    }

    pub fn advance(&self, secs: i64) {
        self.secs.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        DateTime::from_timestamp(self.secs.load(Ordering::SeqCst), 0)
            .unwrap_or_default()
            .with_timezone(&Local)
    }

    fn timestamp(&self) -> i64 {
        self.secs.load(Ordering::SeqCst)
    }
}
