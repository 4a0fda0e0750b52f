// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::Text;
use plotters::series::LineSeries;
use plotters::style::colors::{RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use log::debug;
use std::error::Error;
use std::ops::Range;

use crate::constants::{
    COLOR_GRID, FONT_SIZE_MESSAGE, MAX_TICK_DECIMALS, PLOT_HEIGHT, PLOT_WIDTH,
    X_LABEL_AREA_SIZE_BOTTOM, X_LABEL_COUNT, Y_LABEL_AREA_SIZE, Y_LABEL_COUNT,
};
use crate::font_config::{FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_MESSAGE};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Spacing between adjacent ticks when `range` is split into `ticks` intervals.
pub fn tick_step(range: &Range<f64>, ticks: usize) -> f64 {
    (range.end - range.start).abs() / ticks.max(1) as f64
}

/// Decimal places needed for ticks `step` apart to print differently.
pub fn tick_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    // Nudge so a step of 0.0999.. from float division still reads as 0.1.
    let magnitude = (step.log10() + 1e-9).floor();
    (-magnitude).clamp(0.0, MAX_TICK_DECIMALS as f64) as usize
}

/// Y tick formatting: "k"/"M" notation for large values. Precision follows
/// the tick spacing, so a narrow band such as 12.0..12.6 V keeps its
/// decimals.
pub fn format_y_axis_value(y: f64, step: f64) -> String {
    let y = if y.abs() < step * 1e-6 { 0.0 } else { y };
    if y.abs() >= 1_000_000.0 {
        let decimals = tick_decimals(step / 1_000_000.0).max(1);
        format!("{:.*}M", decimals, y / 1_000_000.0)
    } else if y.abs() >= 1000.0 {
        format!("{:.*}k", tick_decimals(step / 1000.0), y / 1000.0)
    } else {
        format!("{:.*}", tick_decimals(step), y)
    }
}

/// X tick formatting for the hours axis.
pub fn format_time_tick(x: f64, step: f64) -> String {
    let x = if x.abs() < step * 1e-6 { 0.0 } else { x };
    format!("{:.*}", tick_decimals(step), x)
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel_name: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size

    let (width, height) = area.dim_in_pixel();
    let message = format!("{panel_name} Data Unavailable: {reason}");
    let estimated_text_width =
        (message.chars().count() as f32 * FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - FONT_SIZE_MESSAGE / 2;

    let text_style = FONT_TUPLE_MESSAGE.into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub color: RGBColor,
    pub stroke_width: u32,
}

/// One panel of a stacked plot. All panels share the x range.
#[derive(Clone)]
pub struct PanelConfig {
    pub name: String,
    pub title: Option<String>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub y_label: String,
}

impl PanelConfig {
    fn has_data(&self) -> bool {
        self.series.iter().any(|s| !s.data.is_empty())
    }
}

fn draw_time_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel: &PanelConfig,
    x_range: Range<f64>,
    x_label: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let mut builder = ChartBuilder::on(area);
    if let Some(title) = &panel.title {
        builder.caption(title, FONT_TUPLE_CHART_TITLE);
    }
    // Only the panel carrying the x label reserves room for tick labels.
    let x_label_area = if x_label.is_some() {
        X_LABEL_AREA_SIZE_BOTTOM
    } else {
        0
    };
    let mut chart = builder
        .margin(5)
        .x_label_area_size(x_label_area)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(x_range.clone(), panel.y_range.clone())?;

    let y_step = tick_step(&panel.y_range, Y_LABEL_COUNT);
    let x_step = tick_step(&x_range, X_LABEL_COUNT);
    let y_formatter = |y: &f64| format_y_axis_value(*y, y_step);
    let x_formatter = |x: &f64| format_time_tick(*x, x_step);
    let hidden_formatter = |_: &f64| String::new();

    let mut mesh = chart.configure_mesh();
    mesh.y_desc(panel.y_label.as_str())
        .x_labels(X_LABEL_COUNT)
        .y_labels(Y_LABEL_COUNT)
        .y_label_formatter(&y_formatter)
        .bold_line_style(COLOR_GRID)
        .light_line_style(COLOR_GRID.mix(0.3))
        .label_style(FONT_TUPLE_AXIS_LABEL);
    match x_label {
        Some(label) => {
            mesh.x_desc(label).x_label_formatter(&x_formatter);
        }
        None => {
            mesh.x_label_formatter(&hidden_formatter);
        }
    }
    mesh.draw()?;

    for s in &panel.series {
        if s.data.is_empty() {
            continue;
        }
        chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            s.color.stroke_width(s.stroke_width),
        ))?;
    }
    Ok(())
}

/// Creates a stacked plot image, one panel per entry, sharing a single time
/// axis. Only the bottom panel shows x tick labels and `x_label`.
pub fn draw_shared_time_stacked_plot(
    output_filename: &str,
    x_range: Range<f64>,
    x_label: &str,
    panels: &[PanelConfig],
) -> Result<(), Box<dyn Error>> {
    if panels.is_empty() {
        return Err("stacked plot needs at least one panel".into());
    }
    if x_range.end <= x_range.start {
        return Err(format!("invalid time range {:?}", x_range).into());
    }

    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    let margined_root_area = root_area.margin(10, 10, 10, 20);
    let sub_plot_areas = margined_root_area.split_evenly((panels.len(), 1));
    let mut any_panel_plotted = false;

    for (panel_index, (area, panel)) in sub_plot_areas.iter().zip(panels).enumerate() {
        let is_bottom = panel_index + 1 == panels.len();
        let has_data = panel.has_data();
        let valid_ranges = panel.y_range.end > panel.y_range.start;
        if has_data && valid_ranges {
            draw_time_panel(area, panel, x_range.clone(), is_bottom.then_some(x_label))?;
            any_panel_plotted = true;
        } else {
            let reason = if !has_data {
                "No data points"
            } else {
                "Invalid ranges"
            };
            debug!("Panel '{}' unavailable: {}", panel.name, reason);
            draw_unavailable_message(area, &panel.name, reason)?;
        }
    }

    root_area.present()?;
    if any_panel_plotted {
        println!("  Stacked plot saved as '{output_filename}'.");
    } else {
        println!("  Saved '{output_filename}' with placeholder messages only: no panel had data.");
    }
    Ok(())
}


// src/plot_framework.rs
