//! Error types shared across the picker crates

use thiserror::Error;

/// Errors surfaced by list construction and date assembly.
///
/// Garbage scroll-offset reports (NaN, out of bounds) are never errors —
/// the resolver tolerates and drops them silently. Everything here is a
/// synchronous, caller-visible failure.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PickerError {
    /// Year list requested with `min > max`.
    #[error("invalid year range: min {min} exceeds max {max}")]
    InvalidYearRange { min: i32, max: i32 },

    /// Month index outside `0..=11` (0 = January).
    #[error("month index {0} out of range (expected 0..=11)")]
    MonthOutOfRange(u32),

    /// Assembled timestamp falls outside the representable date range.
    #[error("assembled date is outside the representable range")]
    DateOutOfRange,
}
