//! Calendar decomposition of event timestamps.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// One row of the time dimension: a UTC instant broken into the calendar
/// parts the analytics queries group by.
///
/// Weekday is Monday = 0 through Sunday = 6 and weeks use ISO 8601 numbering.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeRecord {
    pub start_time: DateTime<Utc>,
    pub hour: u32,
    pub day: u32,
    pub week: u32,
    pub month: u32,
    pub year: i32,
    pub weekday: u32,
}

impl TimeRecord {
    /// Decompose an epoch-millisecond timestamp, as carried by the `ts`
    /// field of log rows. Returns `None` if the value is outside the range
    /// chrono can represent.
    pub fn from_epoch_millis(millis: i64) -> Option<Self> {
        let start_time = DateTime::<Utc>::from_timestamp_millis(millis)?;
        Some(Self {
            start_time,
            hour: start_time.hour(),
            day: start_time.day(),
            week: start_time.iso_week().week(),
            month: start_time.month(),
            year: start_time.year(),
            weekday: start_time.weekday().num_days_from_monday(),
        })
    }

    /// The instant as epoch milliseconds, as stored in the warehouse.
    pub fn epoch_millis(&self) -> i64 {
        self.start_time.timestamp_millis()
    }
}
