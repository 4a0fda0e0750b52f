// src/plot_functions/mod.rs

pub mod plot_runtime_channels;

// src/plot_functions/mod.rs
