// src/pipeline.rs

use log::{debug, info};
use ndarray::Array1;
use std::io;

use crate::channel_names::PLOTTED_CHANNELS;
use crate::config::RunConfig;
use crate::constants::SECONDS_PER_HOUR;
use crate::data_analysis::derived_columns::append_power_column;
use crate::data_analysis::rolling_mean::SmoothingWindow;
use crate::data_analysis::summary_stats::{summarize_table, ChannelSummary};
use crate::data_analysis::time_axis::time_axis_for;
use crate::data_input::sensor_table::SensorTable;
use crate::data_input::table_loader::load_sensor_table;
use crate::error::{PipelineError, PreconditionViolation};
use crate::plot_functions::plot_runtime_channels::plot_runtime_channels;
use crate::report::write_summary;
use crate::types::ChannelSeries;

/// Everything computed from one input file, ready for rendering and reporting.
#[derive(Debug, Clone)]
pub struct ProcessedRun {
    pub table: SensorTable,
    pub time_axis: Array1<f64>,
    /// Smoothed Current, Voltage, Power, Temperature, in panel order.
    pub smoothed: Vec<ChannelSeries>,
    /// Raw-column statistics, in report order.
    pub summaries: Vec<ChannelSummary>,
}

/// Derive, smooth, build the time axis and summarize a freshly loaded table.
pub fn process_table(
    mut table: SensorTable,
    smoothing: SmoothingWindow,
) -> Result<ProcessedRun, PreconditionViolation> {
    append_power_column(&mut table)?;

    let mut smoothed: Vec<ChannelSeries> = Vec::with_capacity(PLOTTED_CHANNELS.len());
    for channel in PLOTTED_CHANNELS {
        let column = table.column(channel)?;
        smoothed.push((channel, smoothing.apply(column)));
    }
    debug!(
        "Smoothed {} channels (window {}, min periods {})",
        smoothed.len(),
        smoothing.size,
        smoothing.min_periods
    );

    let time_axis = time_axis_for(&table);
    let summaries = summarize_table(&table)?;

    Ok(ProcessedRun {
        table,
        time_axis,
        smoothed,
        summaries,
    })
}

/// Renders the stacked runtime chart to `config.output_path`.
pub fn render(run: &ProcessedRun, config: &RunConfig) -> Result<(), PipelineError> {
    let output_file = config.output_path.to_string_lossy();
    plot_runtime_channels(
        &run.time_axis,
        &run.smoothed,
        &config.test_number,
        &config.test_date,
        &output_file,
    )
    .map_err(|e| PipelineError::Render(e.to_string()))
}

/// Full run: load, compute, render, then print the summary.
///
/// Nothing is drawn or printed unless every earlier stage succeeded.
pub fn run(config: &RunConfig) -> Result<ProcessedRun, PipelineError> {
    println!("\n--- Loading Sensor Log ---");
    let table = load_sensor_table(&config.input_path)?;
    println!("  Read {} rows ({:.2} hours).", table.len(), table.len() as f64 / SECONDS_PER_HOUR);

    let processed = process_table(table, config.smoothing)?;

    println!("\n--- Generating Stacked Runtime Plot ---");
    render(&processed, config)?;

    println!("\n--- Summary ---");
    let stdout = io::stdout();
    write_summary(&mut stdout.lock(), &processed.summaries).map_err(PipelineError::Report)?;

    info!("Run complete for '{}'", config.input_path.display());
    Ok(processed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel_names::Channel;

    fn constant_table(rows: usize, current: f64, voltage: f64) -> SensorTable {
        SensorTable::from_columns(
            Array1::zeros(rows),
            Array1::from_elem(rows, current),
            Array1::from_elem(rows, voltage),
            Array1::from_elem(rows, 70.0),
        )
        .unwrap()
    }

    #[test]
    fn test_one_hour_constant_run() {
        let run = process_table(constant_table(3600, 5.0, 12.0), SmoothingWindow::default()).unwrap();

        let power = run.table.column(Channel::Power).unwrap();
        assert!(power.iter().all(|&p| p == 60.0));

        let (channel, smoothed_power) = &run.smoothed[2];
        assert_eq!(*channel, Channel::Power);
        assert_eq!(smoothed_power.len(), 3600);
        assert!(smoothed_power.iter().all(|v| *v == Some(60.0)));

        let power_summary = run.summaries[2];
        assert_eq!(power_summary.channel, Channel::Power);
        assert_eq!(power_summary.mean_value, 60.0);
        assert_eq!(power_summary.max_value, 60.0);
        assert_eq!(power_summary.max_position, 0);

        assert_eq!(run.time_axis[0], 0.0);
        assert!(run.time_axis[3599] < 1.0);
        assert!(run.time_axis[3599] > 0.999);
    }

    #[test]
    fn test_smoothed_channel_order_matches_panels() {
        let run = process_table(constant_table(3, 1.0, 1.0), SmoothingWindow::default()).unwrap();
        let order: Vec<Channel> = run.smoothed.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, PLOTTED_CHANNELS.to_vec());
    }

    #[test]
    fn test_summaries_use_raw_columns() {
        let table = SensorTable::from_columns(
            Array1::zeros(3),
            ndarray::array![1.0, 9.0, 2.0],
            Array1::from_elem(3, 1.0),
            Array1::from_elem(3, 70.0),
        )
        .unwrap();
        let run = process_table(table, SmoothingWindow { size: 2, min_periods: 1 }).unwrap();
        // Smoothed peak would be 5.5; the raw peak is 9.0 at row 1.
        assert_eq!(run.summaries[0].max_value, 9.0);
        assert_eq!(run.summaries[0].max_position, 1);
    }

    #[test]
    fn test_processing_twice_is_rejected() {
        let run = process_table(constant_table(2, 1.0, 1.0), SmoothingWindow::default()).unwrap();
        assert!(matches!(
            process_table(run.table, SmoothingWindow::default()),
            Err(PreconditionViolation::AlreadyDerived(Channel::Power))
        ));
    }
}

// src/pipeline.rs
