// src/data_input/table_loader.rs

use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::channel_names::{Channel, INPUT_CHANNELS};
use crate::constants::{CSV_DELIMITER, INPUT_COLUMN_COUNT};
use crate::data_input::sensor_table::{SensorRow, SensorTable};
use crate::error::LoadError;

/// Loads a test stand log from disk.
///
/// The file has no header row and exactly four numeric columns per row:
/// Flow, Current, Voltage, Temperature. Any deviation aborts the load.
pub fn load_sensor_table(input_file_path: &Path) -> Result<SensorTable, LoadError> {
    info!("Loading sensor log '{}'", input_file_path.display());
    // File handle is dropped when parsing returns.
    let file = File::open(input_file_path)?;
    let table = parse_sensor_table(BufReader::new(file))?;
    info!("Finished reading {} data rows.", table.len());
    Ok(table)
}

/// Parses headerless four-column CSV content from any reader.
pub fn parse_sensor_table<R: Read>(reader: R) -> Result<SensorTable, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(CSV_DELIMITER)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<SensorRow> = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(rows.len() as u64 + 1);
        rows.push(parse_record(&record, line)?);
    }

    if rows.is_empty() {
        return Err(LoadError::Empty);
    }
    debug!("Parsed {} rows", rows.len());
    Ok(SensorTable::from_rows(&rows))
}

fn parse_record(record: &StringRecord, line: u64) -> Result<SensorRow, LoadError> {
    if record.len() != INPUT_COLUMN_COUNT {
        return Err(LoadError::ColumnCount {
            line,
            expected: INPUT_COLUMN_COUNT,
            found: record.len(),
        });
    }

    let mut values = [0.0; INPUT_COLUMN_COUNT];
    for (idx, (value, channel)) in values.iter_mut().zip(INPUT_CHANNELS).enumerate() {
        let cell = record.get(idx).unwrap_or("");
        *value = parse_cell(cell, channel, line)?;
    }

    Ok(SensorRow {
        flow: values[0],
        current: values[1],
        voltage: values[2],
        temperature: values[3],
    })
}

// Rust's float parser accepts "NaN" and "inf"; neither is a sensor reading.
fn parse_cell(cell: &str, channel: Channel, line: u64) -> Result<f64, LoadError> {
    match cell.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(LoadError::NonNumeric {
            line,
            channel,
            value: cell.to_string(),
        }),
    }
}


// src/data_input/table_loader.rs
