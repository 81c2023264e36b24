//! Current date and time, injectable so defaults and timestamps are testable.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of "now" for default dates and log timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// Today as `YYYY-MM-DD`, the default for date form fields
    fn today_iso(&self) -> String {
        self.now().format("%Y-%m-%d").to_string()
    }

    /// Today as `M/D/YYYY`, the attendance sheet date format
    fn today_short(&self) -> String {
        self.now().format("%-m/%-d/%Y").to_string()
    }

    /// Date and time as `M/D/YYYY, h:mm:ss AM`, used for log timestamps
    fn timestamp(&self) -> String {
        self.now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
    }
}

/// Wall-clock time in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stopped at a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: NaiveDateTime,
}

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self { instant }
    }

    /// The given date at 09:30:00
    pub fn on(date: NaiveDate) -> Self {
        Self::new(date.and_hms_opt(9, 30, 0).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant
    }
}
