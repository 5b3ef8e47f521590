//! Per-axis column controller
//!
//! Owns one value list, its scroll resolver, and the carousel transform
//! used to render its rows. The committed selection is plain owned state
//! with a synchronous getter; only the resolver's commit path writes it.

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::trace;
use tumbler_carousel::{CarouselTransform, ItemTransform};
use tumbler_core::{ValueList, WheelMetrics};

use crate::resolver::{Commit, ScrollResolver, SettlePhase};

/// Change handler invoked with the newly committed entry value.
pub type ChangeCallback = Arc<dyn Fn(i64) + Send + Sync>;

/// One scrollable axis of the composite picker.
pub struct ColumnController {
    values: ValueList,
    resolver: ScrollResolver,
    transform: CarouselTransform,
    metrics: WheelMetrics,
    committed_index: usize,
    offset_units: f32,
    callbacks: SmallVec<[ChangeCallback; 2]>,
}

impl ColumnController {
    pub fn new(values: ValueList, metrics: WheelMetrics, perspective: f32) -> Self {
        let resolver = ScrollResolver::new(values.len(), metrics.item_height);
        Self {
            values,
            resolver,
            transform: CarouselTransform::with_perspective(metrics, perspective),
            metrics,
            committed_index: 0,
            offset_units: 0.0,
            callbacks: SmallVec::new(),
        }
    }

    /// Record the default selection and return the pixel offset the host
    /// must programmatically scroll to. Emits nothing.
    ///
    /// The programmatic scroll produces the first offset report, which
    /// positions the column. When the default index is 0 no scroll happens,
    /// so the column is positioned here instead.
    pub fn initialize(&mut self, default_index: usize) -> f32 {
        let index = default_index.min(self.values.len().saturating_sub(1));
        self.committed_index = index;
        self.offset_units = index as f32;
        if index == 0 {
            self.resolver.mark_positioned();
        }
        self.metrics.offset_for_index(index)
    }

    /// Feed one scroll-offset report from the host.
    ///
    /// Mid-scroll reports only move the rendering offset. A commit updates
    /// the committed index, invokes every registered change callback with
    /// the new entry value, and returns that value.
    pub fn on_offset_report(&mut self, offset_px: f32) -> Option<i64> {
        if self.resolver.phase() == SettlePhase::Detached {
            return None;
        }
        if offset_px.is_finite() {
            self.offset_units = offset_px / self.metrics.item_height;
        }
        let Commit { index } = self.resolver.on_offset_report(offset_px)?;
        self.committed_index = index;
        let value = self.values.value_at(index)?;
        trace!(index, value, "column committed");
        for callback in &self.callbacks {
            callback(value);
        }
        Some(value)
    }

    /// Register a change handler fired on every commit.
    pub fn on_change(&mut self, callback: ChangeCallback) {
        self.callbacks.push(callback);
    }

    /// Value of the entry at the last committed index.
    pub fn committed_value(&self) -> i64 {
        // committed_index is clamped to the list on every write.
        self.values.entries()[self.committed_index].value
    }

    pub fn committed_index(&self) -> usize {
        self.committed_index
    }

    /// Current scroll position in row units (fractional mid-scroll).
    pub fn offset_units(&self) -> f32 {
        self.offset_units
    }

    /// Carousel transform for row `item_index` at the current position.
    pub fn item_transform(&self, item_index: usize) -> ItemTransform {
        self.transform.compute(item_index, self.offset_units)
    }

    /// Whether the column has been positioned. Hosts drive the settle
    /// fade-in from this; the core does not animate.
    pub fn is_settled(&self) -> bool {
        self.resolver.is_settled()
    }

    pub fn values(&self) -> &ValueList {
        &self.values
    }

    /// Tear the column down; every further report is a no-op.
    pub fn detach(&mut self) {
        self.resolver.detach();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    const H: f32 = 40.0;

    fn hour_column() -> ColumnController {
        ColumnController::new(
            ValueList::hours(),
            WheelMetrics::default(),
            tumbler_carousel::DEFAULT_PERSPECTIVE,
        )
    }

    #[test]
    fn initialize_returns_the_scroll_target() {
        let mut column = hour_column();
        assert_eq!(column.initialize(10), 10.0 * H);
        assert_eq!(column.committed_value(), 10);
        assert!(!column.is_settled());
    }

    #[test]
    fn initialize_at_zero_settles_immediately() {
        let mut column = hour_column();
        assert_eq!(column.initialize(0), 0.0);
        assert!(column.is_settled());
    }

    #[test]
    fn commit_reports_the_entry_value_not_the_index() {
        // Yearly values differ from their indices; commits must carry the
        // semantic value.
        let years = ValueList::years(2000, 2010).unwrap();
        let mut column = ColumnController::new(
            years,
            WheelMetrics::default(),
            tumbler_carousel::DEFAULT_PERSPECTIVE,
        );
        column.initialize(0);
        assert_eq!(column.on_offset_report(3.0 * H), Some(2007));
        assert_eq!(column.committed_value(), 2007);
    }

    #[test]
    fn callbacks_fire_once_per_commit() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();

        let mut column = hour_column();
        column.on_change(Arc::new(move |value| {
            sink.lock().unwrap().push(value);
        }));
        column.initialize(0);

        column.on_offset_report(3.0 * H);
        column.on_offset_report(3.0 * H);
        column.on_offset_report(3.5 * H);
        column.on_offset_report(5.0 * H);

        assert_eq!(*seen.lock().unwrap(), vec![3, 5]);
    }

    #[test]
    fn programmatic_scroll_report_does_not_fire_callbacks() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();

        let mut column = hour_column();
        column.on_change(Arc::new(move |value| {
            sink.lock().unwrap().push(value);
        }));
        let target = column.initialize(10);

        // Host performs the programmatic scroll and reports it.
        assert_eq!(column.on_offset_report(target), None);
        assert!(column.is_settled());
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(column.committed_value(), 10);
    }

    #[test]
    fn mid_scroll_updates_render_offset_only() {
        let mut column = hour_column();
        column.initialize(0);
        assert_eq!(column.on_offset_report(2.5 * H), None);
        assert_eq!(column.offset_units(), 2.5);
        assert_eq!(column.committed_value(), 0);
    }

    #[test]
    fn item_transform_tracks_the_scroll_position() {
        let mut column = hour_column();
        column.initialize(0);
        column.on_offset_report(3.0 * H);
        let t = column.item_transform(3);
        assert!(t.rotate_x.abs() < 1e-6);
        assert!((t.scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn detached_column_ignores_reports() {
        let mut column = hour_column();
        column.initialize(0);
        column.on_offset_report(3.0 * H);
        column.detach();
        assert_eq!(column.on_offset_report(5.0 * H), None);
        assert_eq!(column.committed_value(), 3);
        assert_eq!(column.offset_units(), 3.0);
    }
}
