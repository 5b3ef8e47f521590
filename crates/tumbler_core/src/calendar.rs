//! Gregorian calendar helpers
//!
//! Thin wrappers over `chrono` so the rest of the workspace never hand-rolls
//! month lengths or leap-year rules.

use chrono::NaiveDate;

use crate::error::PickerError;

/// Number of days in the given month.
///
/// `month0` is 0-based (0 = January), matching the month axis values.
pub fn days_in_month(year: i32, month0: u32) -> Result<u32, PickerError> {
    if month0 > 11 {
        return Err(PickerError::MonthOutOfRange(month0));
    }
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or(PickerError::DateOutOfRange)?;
    let (next_year, next_month) = if month0 == 11 {
        (year + 1, 1)
    } else {
        (year, month0 + 2)
    };
    let next =
        NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or(PickerError::DateOutOfRange)?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_tracks_leap_years() {
        assert_eq!(days_in_month(2024, 1), Ok(29));
        assert_eq!(days_in_month(2023, 1), Ok(28));
        assert_eq!(days_in_month(2000, 1), Ok(29));
        assert_eq!(days_in_month(1900, 1), Ok(28));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 0), Ok(31));
        assert_eq!(days_in_month(2024, 3), Ok(30));
        assert_eq!(days_in_month(2024, 11), Ok(31));
    }

    #[test]
    fn december_rolls_into_next_year() {
        assert_eq!(days_in_month(1999, 11), Ok(31));
    }

    #[test]
    fn month_out_of_range_is_rejected() {
        assert_eq!(days_in_month(2024, 12), Err(PickerError::MonthOutOfRange(12)));
    }
}
