//! Composite date/time picker
//!
//! Wires five [`ColumnController`]s (day, month, year, hour, minute) to one
//! [`DateAssembler`]. The host forwards each column's scroll reports here;
//! commits are routed into the assembler's cells, and the confirm action
//! pulls the composite date on demand.

use chrono::{DateTime, Datelike, Timelike, Utc};
use tracing::debug;
use tumbler_carousel::DEFAULT_PERSPECTIVE;
use tumbler_core::{PickerError, ValueList, WheelMetrics};

use crate::assembler::DateAssembler;
use crate::column::{ChangeCallback, ColumnController};

/// One scrollable axis of the composite picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Day,
    Month,
    Year,
    Hour,
    Minute,
}

impl Axis {
    pub const ALL: [Axis; 5] = [Axis::Day, Axis::Month, Axis::Year, Axis::Hour, Axis::Minute];

    fn ordinal(self) -> usize {
        match self {
            Axis::Day => 0,
            Axis::Month => 1,
            Axis::Year => 2,
            Axis::Hour => 3,
            Axis::Minute => 4,
        }
    }
}

/// Picker configuration.
///
/// All fields have defaults; override with the builder-style setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerConfig {
    /// Oldest selectable year (default 1900).
    pub min_year: i32,
    /// Most recent selectable year (default: the current UTC year).
    pub max_year: i32,
    /// Date the columns scroll to on startup (default: now).
    pub initial: DateTime<Utc>,
    /// Row geometry shared by all five columns.
    pub metrics: WheelMetrics,
    /// Camera distance for the carousel transform.
    pub perspective: f32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            min_year: 1900,
            max_year: now.year(),
            initial: now,
            metrics: WheelMetrics::default(),
            perspective: DEFAULT_PERSPECTIVE,
        }
    }
}

impl PickerConfig {
    pub fn year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    pub fn initial(mut self, initial: DateTime<Utc>) -> Self {
        self.initial = initial;
        self
    }

    pub fn metrics(mut self, metrics: WheelMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn perspective(mut self, perspective: f32) -> Self {
        self.perspective = perspective;
        self
    }
}

/// The composite five-column picker.
///
/// The day list is built once from the initial year/month and is NOT
/// rebuilt when the month or year column changes; a stale day value rolls
/// forward through [`DateAssembler::current_date`]'s duration arithmetic.
pub struct DatePicker {
    columns: [ColumnController; 5],
    assembler: DateAssembler,
    scroll_targets: [f32; 5],
}

impl DatePicker {
    /// Build the five columns and seed their defaults from the configured
    /// initial date.
    pub fn new(config: PickerConfig) -> Result<Self, PickerError> {
        let initial = config.initial;
        let years = ValueList::years(config.min_year, config.max_year)?;
        let days = ValueList::days(initial.year(), initial.month0())?;

        let year_index = years.index_of_value(initial.year() as i64).unwrap_or_else(|| {
            debug!(
                year = initial.year(),
                min_year = config.min_year,
                max_year = config.max_year,
                "initial year outside the configured range, defaulting to the newest"
            );
            0
        });

        let mut columns = [
            ColumnController::new(days, config.metrics, config.perspective),
            ColumnController::new(ValueList::months(), config.metrics, config.perspective),
            ColumnController::new(years, config.metrics, config.perspective),
            ColumnController::new(ValueList::hours(), config.metrics, config.perspective),
            ColumnController::new(ValueList::minutes(), config.metrics, config.perspective),
        ];

        let defaults = [
            initial.day0() as usize,
            initial.month0() as usize,
            year_index,
            initial.hour() as usize,
            initial.minute() as usize,
        ];
        let mut scroll_targets = [0.0f32; 5];
        for (slot, (column, default_index)) in scroll_targets
            .iter_mut()
            .zip(columns.iter_mut().zip(defaults))
        {
            *slot = column.initialize(default_index);
        }

        Ok(Self {
            columns,
            assembler: DateAssembler::new(&initial),
            scroll_targets,
        })
    }

    /// Pixel offset the host must programmatically scroll `axis` to once,
    /// at startup.
    pub fn initial_scroll_target(&self, axis: Axis) -> f32 {
        self.scroll_targets[axis.ordinal()]
    }

    /// Forward one scroll-offset report for `axis`.
    ///
    /// On a commit the new entry value is written into the assembler's cell
    /// for that axis (the only write path to the composite state) and
    /// returned; the column's registered change callbacks fire as well.
    pub fn on_offset_report(&mut self, axis: Axis, offset_px: f32) -> Option<i64> {
        let value = self.columns[axis.ordinal()].on_offset_report(offset_px)?;
        match axis {
            Axis::Day => self.assembler.set_day(value),
            Axis::Month => self.assembler.set_month0(value),
            Axis::Year => self.assembler.set_year(value),
            Axis::Hour => self.assembler.set_hour(value),
            Axis::Minute => self.assembler.set_minute(value),
        }
        Some(value)
    }

    /// Register a change handler for one axis.
    pub fn on_change(&mut self, axis: Axis, callback: ChangeCallback) {
        self.columns[axis.ordinal()].on_change(callback);
    }

    pub fn column(&self, axis: Axis) -> &ColumnController {
        &self.columns[axis.ordinal()]
    }

    pub fn column_mut(&mut self, axis: Axis) -> &mut ColumnController {
        &mut self.columns[axis.ordinal()]
    }

    /// The composite date assembled from the latest committed values; the
    /// confirm action's read path.
    pub fn current_date(&self) -> Result<DateTime<Utc>, PickerError> {
        self.assembler.current_date()
    }

    /// Tear all five columns down; in-flight reports become no-ops.
    pub fn detach(&mut self) {
        for column in &mut self.columns {
            column.detach();
        }
    }
}
