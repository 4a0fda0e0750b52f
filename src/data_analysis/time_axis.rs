// src/data_analysis/time_axis.rs

use ndarray::Array1;
use std::ops::Range;

use crate::constants::SECONDS_PER_HOUR;
use crate::data_input::sensor_table::SensorTable;

/// Converts 1 Hz row indices to hours since the start of the test.
/// Row 0 is time 0.0.
pub fn hours_axis(len: usize) -> Array1<f64> {
    Array1::from_iter((0..len).map(|i| i as f64 / SECONDS_PER_HOUR))
}

pub fn time_axis_for(table: &SensorTable) -> Array1<f64> {
    hours_axis(table.len())
}

/// Plot range covering the axis. Axes shorter than two samples are widened
/// to one sample period so the range is never empty.
pub fn hours_range(axis: &Array1<f64>) -> Range<f64> {
    let (start, end) = match axis.len() {
        0 => (0.0, 0.0),
        len => (axis[0], axis[len - 1]),
    };
    if end > start {
        start..end
    } else {
        start..start + 1.0 / SECONDS_PER_HOUR
    }
}
