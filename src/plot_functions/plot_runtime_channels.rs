// src/plot_functions/plot_runtime_channels.rs

use ndarray::Array1;
use plotters::style::RGBColor;
use std::error::Error;

use crate::channel_names::Channel;
use crate::constants::{
    CHART_TITLE_PREFIX, COLOR_CURRENT, COLOR_FLOW, COLOR_POWER, COLOR_TEMPERATURE, COLOR_VOLTAGE,
    LINE_WIDTH_PLOT, TIME_AXIS_LABEL,
};
use crate::data_analysis::time_axis::hours_range;
use crate::plot_framework::{
    calculate_range, draw_shared_time_stacked_plot, PanelConfig, PlotSeries,
};
use crate::types::ChannelSeries;

/// Title shown on the top panel.
pub fn runtime_chart_title(test_number: &str, test_date: &str) -> String {
    format!("{CHART_TITLE_PREFIX}, Test # {test_number} : {test_date}")
}

fn channel_color(channel: Channel) -> RGBColor {
    match channel {
        Channel::Flow => *COLOR_FLOW,
        Channel::Current => *COLOR_CURRENT,
        Channel::Voltage => *COLOR_VOLTAGE,
        Channel::Power => *COLOR_POWER,
        Channel::Temperature => *COLOR_TEMPERATURE,
    }
}

/// Builds one panel from a smoothed series. Positions without a value are
/// skipped.
fn build_panel(time_axis: &Array1<f64>, series: &ChannelSeries, title: Option<String>) -> PanelConfig {
    let (channel, values) = series;

    let mut val_min = f64::INFINITY;
    let mut val_max = f64::NEG_INFINITY;
    let mut data: Vec<(f64, f64)> = Vec::with_capacity(values.len());
    for (time, value) in time_axis.iter().zip(values) {
        if let Some(v) = value {
            val_min = val_min.min(*v);
            val_max = val_max.max(*v);
            data.push((*time, *v));
        }
    }

    let y_range = if data.is_empty() {
        0.0..0.0
    } else {
        let (lo, hi) = calculate_range(val_min, val_max);
        lo..hi
    };

    PanelConfig {
        name: channel.name().to_string(),
        title,
        y_range,
        series: vec![PlotSeries {
            data,
            color: channel_color(*channel),
            stroke_width: LINE_WIDTH_PLOT,
        }],
        y_label: channel.axis_label(),
    }
}

/// Generates the stacked runtime plot: one panel per smoothed channel, in the
/// order given, sharing the hours axis.
pub fn plot_runtime_channels(
    time_axis: &Array1<f64>,
    smoothed: &[ChannelSeries],
    test_number: &str,
    test_date: &str,
    output_file: &str,
) -> Result<(), Box<dyn Error>> {
    let panels: Vec<PanelConfig> = smoothed
        .iter()
        .enumerate()
        .map(|(idx, series)| {
            let title = (idx == 0).then(|| runtime_chart_title(test_number, test_date));
            build_panel(time_axis, series, title)
        })
        .collect();

    draw_shared_time_stacked_plot(output_file, hours_range(time_axis), TIME_AXIS_LABEL, &panels)
}


// src/plot_functions/plot_runtime_channels.rs
