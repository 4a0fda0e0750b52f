// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{
    BLUE_800, BLUEGREY_700, DEEPORANGE_700, GREEN_700, RED_700,
};
use plotters::style::RGBColor;

// Plot dimensions (10 x 10 inch figure at 100 dpi).
pub const PLOT_WIDTH: u32 = 1000;
pub const PLOT_HEIGHT: u32 = 1000;

// The test stand samples every channel once per second.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

// Smoothing window: half an hour of 1 Hz samples.
pub const SMOOTHING_WINDOW_SAMPLES: usize = 1800;
pub const SMOOTHING_MIN_PERIODS: usize = 1;

// Fixed input layout: no header row, four columns.
pub const INPUT_COLUMN_COUNT: usize = 4;
pub const CSV_DELIMITER: u8 = b',';

// Output file suffix appended to the input file stem.
pub const OUTPUT_FILE_SUFFIX: &str = "_Runtime_stacked.png";

pub const CHART_TITLE_PREFIX: &str = "Bilge Pump Runtime Results";
pub const TIME_AXIS_LABEL: &str = "Time (hours)";

// --- Plot Color Assignments ---
pub const COLOR_CURRENT: &RGBColor = &BLUE_800;
pub const COLOR_VOLTAGE: &RGBColor = &GREEN_700;
pub const COLOR_POWER: &RGBColor = &DEEPORANGE_700;
pub const COLOR_TEMPERATURE: &RGBColor = &RED_700;
pub const COLOR_FLOW: &RGBColor = &BLUEGREY_700;
pub const COLOR_GRID: RGBColor = RGBColor(200, 200, 200);

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;

// Font sizes
pub const FONT_SIZE_CHART_TITLE: i32 = 22;
pub const FONT_SIZE_AXIS_LABEL: i32 = 15;
pub const FONT_SIZE_MESSAGE: i32 = 18;

// Label area sizes (pixels) for the stacked panels.
pub const Y_LABEL_AREA_SIZE: u32 = 70;
pub const X_LABEL_AREA_SIZE_BOTTOM: u32 = 50;

// Tick label counts and the precision cap for their labels.
pub const X_LABEL_COUNT: usize = 10;
pub const Y_LABEL_COUNT: usize = 6;
pub const MAX_TICK_DECIMALS: usize = 6;

// src/constants.rs
