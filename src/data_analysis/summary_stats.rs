// src/data_analysis/summary_stats.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use crate::channel_names::{Channel, PLOTTED_CHANNELS};
use crate::constants::SECONDS_PER_HOUR;
use crate::data_input::sensor_table::SensorTable;
use crate::error::PreconditionViolation;

/// Max and mean of one raw (unsmoothed) channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelSummary {
    pub channel: Channel,
    pub max_value: f64,
    /// Row index of the first occurrence of `max_value`.
    pub max_position: usize,
    pub mean_value: f64,
}

impl ChannelSummary {
    pub fn max_time_hours(&self) -> f64 {
        self.max_position as f64 / SECONDS_PER_HOUR
    }
}

pub fn summarize_column(
    channel: Channel,
    column: &Array1<f64>,
) -> Result<ChannelSummary, PreconditionViolation> {
    // Loader guarantees finite values, so max() only fails on an empty column.
    let max_value = *column
        .max()
        .map_err(|_| PreconditionViolation::EmptyColumn(channel))?;
    let max_position = column
        .iter()
        .position(|&v| v == max_value)
        .ok_or(PreconditionViolation::EmptyColumn(channel))?;
    let mean_value = column
        .mean()
        .ok_or(PreconditionViolation::EmptyColumn(channel))?;

    Ok(ChannelSummary {
        channel,
        max_value,
        max_position,
        mean_value,
    })
}

/// Summaries for Current, Voltage, Power and Temperature, in report order.
/// Power must already be derived.
pub fn summarize_table(table: &SensorTable) -> Result<Vec<ChannelSummary>, PreconditionViolation> {
    PLOTTED_CHANNELS
        .iter()
        .map(|&channel| summarize_column(channel, table.column(channel)?))
        .collect()
}


// src/data_analysis/summary_stats.rs
