//! Timestamp decomposition
//!
//! Converts a call's epoch timestamps into calendar dates and times of
//! day in one configured timezone, and measures the call's duration.

use callbill_core::{models::CallTimes, AppError, AppResult};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Derives calendar fields for calls in a fixed timezone
#[derive(Debug, Clone, Copy)]
pub struct TimeDecomposer {
    tz: Tz,
}

impl TimeDecomposer {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn utc() -> Self {
        Self::new(Tz::UTC)
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// The instant `timestamp` as seen in the configured timezone
    pub fn zoned(&self, timestamp: i64) -> AppResult<DateTime<Tz>> {
        DateTime::<Utc>::from_timestamp(timestamp, 0)
            .map(|utc| utc.with_timezone(&self.tz))
            .ok_or_else(|| AppError::Internal(format!("Timestamp out of range: {}", timestamp)))
    }

    /// Split start and end timestamps into dates and times of day
    ///
    /// The duration is measured between the two zoned instants, so it is
    /// exactly `end - start` seconds even when the call spans a DST change.
    pub fn decompose(&self, start_timestamp: i64, end_timestamp: i64) -> AppResult<CallTimes> {
        let start = self.zoned(start_timestamp)?;
        let end = self.zoned(end_timestamp)?;

        Ok(CallTimes {
            start_date: start.date_naive(),
            end_date: end.date_naive(),
            start_time: start.time(),
            end_time: end.time(),
            duration: end.signed_duration_since(start).num_seconds(),
        })
    }
}

impl Default for TimeDecomposer {
    fn default() -> Self {
        Self::utc()
    }
}
