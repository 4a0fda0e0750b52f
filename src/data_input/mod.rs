// src/data_input/mod.rs

pub mod sensor_table;
pub mod table_loader;
