//! Per-row carousel perspective transform
//!
//! Rows live on a vertical cylinder of radius `visible_items / 2 *
//! item_height`, viewed by a perspective camera at distance `perspective`.
//! The signed pixel distance of a row from the viewport centerline maps to
//! a rotation about the horizontal axis plus the scale produced by the
//! perspective division, which together read as a spinning wheel.
//!
//! Rows beyond two row-heights from center are rendered as if exactly at
//! two row-heights — rotation and scale stop growing there.

use tumbler_core::WheelMetrics;

use crate::interpolate::interpolate_clamped;

/// Default camera distance for the perspective projection.
pub const DEFAULT_PERSPECTIVE: f32 = 600.0;

/// Sine of the row rotation at the two-row clamp edge.
const EDGE_SIN: f32 = 0.8;

/// Resolved transform for one row.
///
/// Hosts apply the parts in order: perspective projection, then rotation
/// about the horizontal axis, then uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTransform {
    /// Rotation about the horizontal axis, in radians.
    pub rotate_x: f32,
    /// Uniform scale from the perspective division.
    pub scale: f32,
    /// Camera distance used for the projection.
    pub perspective: f32,
}

/// Stateless per-row transform calculator for one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselTransform {
    metrics: WheelMetrics,
    perspective: f32,
}

impl CarouselTransform {
    pub fn new(metrics: WheelMetrics) -> Self {
        Self::with_perspective(metrics, DEFAULT_PERSPECTIVE)
    }

    pub fn with_perspective(metrics: WheelMetrics, perspective: f32) -> Self {
        Self {
            metrics,
            perspective,
        }
    }

    /// Transform for row `item_index` when the column's scroll position has
    /// row `center_offset_units` on the centerline (fractional mid-scroll).
    pub fn compute(&self, item_index: usize, center_offset_units: f32) -> ItemTransform {
        let h = self.metrics.item_height;
        let distance = (center_offset_units - item_index as f32) * h;
        let y = interpolate_clamped(
            distance,
            &[-2.0 * h, 0.0, 2.0 * h],
            &[-EDGE_SIN, 0.0, EDGE_SIN],
        );
        // |y| <= EDGE_SIN < 1, so asin is always defined.
        let rotate_x = y.asin();
        let radius = self.metrics.radius();
        let z = radius * rotate_x.cos() - radius;
        let scale = self.perspective / (self.perspective - z);
        ItemTransform {
            rotate_x,
            scale,
            perspective: self.perspective,
        }
    }
}
