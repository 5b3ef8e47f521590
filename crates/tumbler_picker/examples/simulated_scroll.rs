//! Simulated scroll session for the composite picker
//!
//! Drives the five columns with synthetic offset reports — the programmatic
//! start scrolls, then a drag on the day column and a fling on the minute
//! column — and prints the composite date a confirm button would read.
//!
//! Run with: cargo run -p tumbler_picker --example simulated_scroll

use chrono::{TimeZone, Utc};
use tumbler_picker::{Axis, DatePicker, PickerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let initial = Utc.with_ymd_and_hms(2010, 6, 15, 10, 30, 0).unwrap();
    let config = PickerConfig::default()
        .year_range(1900, 2030)
        .initial(initial);
    let metrics = config.metrics;
    let mut picker = DatePicker::new(config)?;

    picker.on_change(
        Axis::Day,
        std::sync::Arc::new(|value| println!("day column committed {value}")),
    );

    // Host lays the columns out and scrolls each to its start position.
    for axis in Axis::ALL {
        let target = picker.initial_scroll_target(axis);
        picker.on_offset_report(axis, target);
    }
    println!("seeded date: {}", picker.current_date()?);

    // Drag the day column two rows down, with fractional waypoints.
    for units in [14.4, 15.1, 15.8, 16.0] {
        picker.on_offset_report(Axis::Day, units * metrics.item_height);
    }

    // Fling the minute column; it passes through one exact boundary on the
    // way to its rest position.
    for units in [31.6, 38.0, 44.7, 45.0] {
        picker.on_offset_report(Axis::Minute, units * metrics.item_height);
    }

    // Show the carousel transform of a few day rows around the centerline.
    let day = picker.column(Axis::Day);
    for index in 14..=18 {
        let t = day.item_transform(index);
        println!(
            "day row {index}: rotate_x={:+.3} rad, scale={:.3}",
            t.rotate_x, t.scale
        );
    }

    println!("confirmed date: {}", picker.current_date()?);
    Ok(())
}
