//! Piecewise-linear interpolation with clamped extrapolation

/// Map `value` through the piecewise-linear function defined by matching
/// `domain`/`range` breakpoints.
///
/// Inside a segment the output is the linear blend between its range
/// endpoints; outside the domain it is clamped to the first/last range
/// value (no extrapolation).
///
/// `domain` must be non-decreasing and the slices must have equal length,
/// at least 2.
pub fn interpolate_clamped(value: f32, domain: &[f32], range: &[f32]) -> f32 {
    debug_assert_eq!(domain.len(), range.len());
    debug_assert!(domain.len() >= 2);

    if value <= domain[0] {
        return range[0];
    }
    if value >= domain[domain.len() - 1] {
        return range[range.len() - 1];
    }

    let mut seg = 0;
    while seg + 2 < domain.len() && value > domain[seg + 1] {
        seg += 1;
    }

    let span = domain[seg + 1] - domain[seg];
    if span.abs() < 1e-12 {
        return range[seg];
    }
    let t = (value - domain[seg]) / span;
    range[seg] + (range[seg + 1] - range[seg]) * t
}
