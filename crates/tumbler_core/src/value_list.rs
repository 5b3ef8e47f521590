//! Labeled value enumerations for each picker axis
//!
//! A [`ValueList`] is pure data: an ordered sequence of `(value, label)`
//! entries where index `i` corresponds 1:1 to rest scroll offset
//! `i * item_height`. Labels are unique within one list and serve as stable
//! identity keys for the host's row widgets; values are unique, contiguous
//! and monotone in presentation order.

use crate::calendar::days_in_month;
use crate::error::PickerError;

/// Fixed 3-letter month labels, index 0 = January.
const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One selectable row: the semantic integer and its display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueEntry {
    /// Semantic integer (day 1-31, month 0-11, raw year, hour 0-23,
    /// minute 0-59).
    pub value: i64,
    /// Display string; unique within the list.
    pub label: String,
}

impl ValueEntry {
    fn new(value: i64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Ordered, immutable enumeration of selectable values for one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueList {
    entries: Vec<ValueEntry>,
}

impl ValueList {
    /// Every year in `[min_year, max_year]`, most recent first.
    ///
    /// Descending order is a deliberate UX choice unique to the year axis.
    pub fn years(min_year: i32, max_year: i32) -> Result<Self, PickerError> {
        if min_year > max_year {
            return Err(PickerError::InvalidYearRange {
                min: min_year,
                max: max_year,
            });
        }
        let entries = (min_year..=max_year)
            .rev()
            .map(|year| ValueEntry::new(year as i64, year.to_string()))
            .collect();
        Ok(Self { entries })
    }

    /// The twelve months, values 0-11, fixed 3-letter labels, ascending.
    pub fn months() -> Self {
        let entries = MONTH_LABELS
            .iter()
            .enumerate()
            .map(|(month0, label)| ValueEntry::new(month0 as i64, *label))
            .collect();
        Self { entries }
    }

    /// Days of the given month, values `1..=N` ascending, decimal labels.
    ///
    /// `month0` is 0-based (0 = January). `N` follows Gregorian rules,
    /// including leap years.
    pub fn days(year: i32, month0: u32) -> Result<Self, PickerError> {
        let count = days_in_month(year, month0)?;
        let entries = (1..=count as i64)
            .map(|day| ValueEntry::new(day, day.to_string()))
            .collect();
        Ok(Self { entries })
    }

    /// Hours 0-23 ascending, labels zero-padded to two digits.
    pub fn hours() -> Self {
        Self::padded_range(24)
    }

    /// Minutes 0-59 ascending, labels zero-padded to two digits.
    pub fn minutes() -> Self {
        Self::padded_range(60)
    }

    fn padded_range(count: i64) -> Self {
        let entries = (0..count)
            .map(|value| ValueEntry::new(value, format!("{value:02}")))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ValueEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ValueEntry> {
        self.entries.get(index)
    }

    /// Semantic value at `index`, if in bounds.
    pub fn value_at(&self, index: usize) -> Option<i64> {
        self.entries.get(index).map(|entry| entry.value)
    }

    /// Index of the entry carrying `value`, if present.
    ///
    /// Used to seed a column's default index from an absolute value, e.g.
    /// finding the row for the current year in the descending year list.
    pub fn index_of_value(&self, value: i64) -> Option<usize> {
        self.entries.iter().position(|entry| entry.value == value)
    }
}
