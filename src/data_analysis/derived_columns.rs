// src/data_analysis/derived_columns.rs

use log::debug;

use crate::channel_names::Channel;
use crate::data_input::sensor_table::SensorTable;
use crate::error::PreconditionViolation;

/// Appends `Power = Current * Voltage`, computed element-wise.
///
/// Must run exactly once, after load and before any smoothing.
pub fn append_power_column(table: &mut SensorTable) -> Result<(), PreconditionViolation> {
    let current = table.column(Channel::Current)?;
    let voltage = table.column(Channel::Voltage)?;
    if current.len() != voltage.len() {
        return Err(PreconditionViolation::LengthMismatch {
            left: Channel::Current,
            left_len: current.len(),
            right: Channel::Voltage,
            right_len: voltage.len(),
        });
    }

    let power = current * voltage;
    debug!("Derived {} Power samples", power.len());
    table.set_power(power)
}
