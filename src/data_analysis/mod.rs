// src/data_analysis/mod.rs

pub mod derived_columns;
pub mod rolling_mean;
pub mod summary_stats;
pub mod time_axis;

// src/data_analysis/mod.rs
