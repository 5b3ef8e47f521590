//! Wheel geometry configuration

/// Fixed row geometry for one picker column.
///
/// `item_height` is the unit of offset-to-index quantization: list index `i`
/// sits at rest offset `i * item_height`. `visible_items` is the number of
/// rows shown in the viewport at once and fixes the virtual cylinder radius
/// used by the carousel transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelMetrics {
    /// Pixel height of one row.
    pub item_height: f32,
    /// Rows visible in the viewport at once.
    pub visible_items: u32,
}

impl Default for WheelMetrics {
    fn default() -> Self {
        Self {
            item_height: 40.0,
            visible_items: 5,
        }
    }
}

impl WheelMetrics {
    pub fn new(item_height: f32, visible_items: u32) -> Self {
        Self {
            item_height,
            visible_items,
        }
    }

    /// Radius of the virtual cylinder the rows sit on.
    pub fn radius(&self) -> f32 {
        self.visible_items as f32 * 0.5 * self.item_height
    }

    /// Rest offset of row `index`, in pixels.
    pub fn offset_for_index(&self, index: usize) -> f32 {
        index as f32 * self.item_height
    }

    /// Total viewport height of one column.
    pub fn viewport_height(&self) -> f32 {
        self.visible_items as f32 * self.item_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_half_the_viewport() {
        let metrics = WheelMetrics::default();
        assert_eq!(metrics.radius(), 100.0);
        assert_eq!(metrics.viewport_height(), 200.0);
    }

    #[test]
    fn offsets_are_index_times_row_height() {
        let metrics = WheelMetrics::new(32.0, 5);
        assert_eq!(metrics.offset_for_index(0), 0.0);
        assert_eq!(metrics.offset_for_index(3), 96.0);
    }
}
