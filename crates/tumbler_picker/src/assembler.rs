//! Composite date assembly
//!
//! Combines the five columns' latest committed values into one UTC
//! timestamp. The cells here are written only by the picker's commit
//! routing path and read synchronously by the confirm path.

use chrono::{DateTime, Datelike, TimeDelta, TimeZone, Timelike, Utc};
use tumbler_core::PickerError;

/// Latest committed value per axis.
///
/// `day` is the 1-based day-of-month value (the day list's entry values are
/// already 1-based; nothing here re-offsets them). `month0` is 0-based,
/// 0 = January. `year` is absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateAssembler {
    day: i64,
    month0: i64,
    year: i64,
    hour: i64,
    minute: i64,
}

impl DateAssembler {
    /// Seed every cell from an initial date.
    pub fn new(initial: &DateTime<Utc>) -> Self {
        Self {
            day: initial.day() as i64,
            month0: initial.month0() as i64,
            year: initial.year() as i64,
            hour: initial.hour() as i64,
            minute: initial.minute() as i64,
        }
    }

    pub fn set_day(&mut self, day: i64) {
        self.day = day;
    }

    pub fn set_month0(&mut self, month0: i64) {
        self.month0 = month0;
    }

    pub fn set_year(&mut self, year: i64) {
        self.year = year;
    }

    pub fn set_hour(&mut self, hour: i64) {
        self.hour = hour;
    }

    pub fn set_minute(&mut self, minute: i64) {
        self.minute = minute;
    }

    /// Assemble the committed values into a UTC timestamp.
    ///
    /// The date is built as the first of the committed month plus
    /// day/hour/minute durations, so out-of-range fields roll forward
    /// rather than clamp: day 31 committed while the month holds 30 days
    /// lands in the next month. The day list is not rebuilt when month or
    /// year change, and this path accepts the stale value.
    ///
    /// The assembled hour runs one behind the committed hour value; hour 0
    /// rolls back to 23:00 of the previous day. Callers depend on that
    /// offset.
    pub fn current_date(&self) -> Result<DateTime<Utc>, PickerError> {
        let year = i32::try_from(self.year).map_err(|_| PickerError::DateOutOfRange)?;
        let month = u32::try_from(self.month0 + 1).map_err(|_| PickerError::DateOutOfRange)?;
        let anchor = Utc
            .with_ymd_and_hms(year, month, 1, 0, 0, 0)
            .single()
            .ok_or(PickerError::DateOutOfRange)?;
        let days = TimeDelta::try_days(self.day - 1).ok_or(PickerError::DateOutOfRange)?;
        let hours = TimeDelta::try_hours(self.hour - 1).ok_or(PickerError::DateOutOfRange)?;
        let minutes = TimeDelta::try_minutes(self.minute).ok_or(PickerError::DateOutOfRange)?;
        let offset = days
            .checked_add(&hours)
            .and_then(|sum| sum.checked_add(&minutes))
            .ok_or(PickerError::DateOutOfRange)?;
        anchor
            .checked_add_signed(offset)
            .ok_or(PickerError::DateOutOfRange)
    }
}
