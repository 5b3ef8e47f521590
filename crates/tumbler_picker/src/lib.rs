//! Tumbler Picker Runtime
//!
//! The stateful layer of the Tumbler carousel picker:
//!
//! - **ScrollResolver**: quantizes continuous scroll offsets into discrete,
//!   de-duplicated selection commits
//! - **ColumnController**: one scrollable axis — value list, resolver, and
//!   carousel transform
//! - **DateAssembler**: folds the five columns' committed values into one
//!   UTC timestamp
//! - **DatePicker**: the composite picker the host talks to
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use tumbler_picker::{Axis, DatePicker, PickerConfig};
//!
//! let initial = Utc.with_ymd_and_hms(2010, 6, 15, 10, 30, 0).unwrap();
//! let config = PickerConfig::default()
//!     .year_range(1900, 2030)
//!     .initial(initial);
//! let mut picker = DatePicker::new(config).unwrap();
//!
//! // The host scrolls each column to its start position and reports it.
//! for axis in Axis::ALL {
//!     let target = picker.initial_scroll_target(axis);
//!     picker.on_offset_report(axis, target);
//! }
//!
//! // Confirm reads the composite date on demand.
//! let date = picker.current_date().unwrap();
//! assert_eq!(date, Utc.with_ymd_and_hms(2010, 6, 15, 9, 30, 0).unwrap());
//! ```

pub mod assembler;
pub mod column;
pub mod picker;
pub mod resolver;

pub use assembler::DateAssembler;
pub use column::{ChangeCallback, ColumnController};
pub use picker::{Axis, DatePicker, PickerConfig};
pub use resolver::{Commit, ScrollResolver, SettlePhase};
