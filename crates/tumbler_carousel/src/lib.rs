//! Tumbler Carousel
//!
//! Pure math for the wheel illusion: each row of a column is modeled as a
//! point on a vertical cylinder viewed under a perspective camera, so rows
//! tilt away and shrink as they leave the centerline.
//!
//! No state lives here — [`CarouselTransform`] is a pure function of the
//! current scroll position, evaluated per row at render time.
//!
//! # Example
//!
//! ```rust
//! use tumbler_carousel::CarouselTransform;
//! use tumbler_core::WheelMetrics;
//!
//! let carousel = CarouselTransform::new(WheelMetrics::default());
//!
//! // A row exactly on the centerline is flat and unscaled.
//! let centered = carousel.compute(3, 3.0);
//! assert!(centered.rotate_x.abs() < 1e-6);
//! assert!((centered.scale - 1.0).abs() < 1e-6);
//! ```

pub mod interpolate;
pub mod transform;

pub use interpolate::interpolate_clamped;
pub use transform::{CarouselTransform, ItemTransform, DEFAULT_PERSPECTIVE};
