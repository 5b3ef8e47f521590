//! Tumbler Core
//!
//! This crate provides the data layer for the Tumbler carousel picker:
//!
//! - **Value Lists**: ordered, labeled enumerations of selectable integers
//!   for each axis (day, month, year, hour, minute)
//! - **Wheel Metrics**: the fixed row geometry that ties list indices to
//!   scroll offsets
//! - **Calendar Arithmetic**: Gregorian day counts and leap years, backed
//!   by `chrono`
//!
//! # Example
//!
//! ```rust
//! use tumbler_core::ValueList;
//!
//! let years = ValueList::years(2002, 2003).unwrap();
//!
//! // Years are presented most-recent-first.
//! assert_eq!(years.value_at(0), Some(2003));
//! assert_eq!(years.index_of_value(2002), Some(1));
//! ```

pub mod calendar;
pub mod error;
pub mod metrics;
pub mod value_list;

pub use error::PickerError;
pub use metrics::WheelMetrics;
pub use value_list::{ValueEntry, ValueList};
