// src/data_input/sensor_table.rs

use ndarray::Array1;

use crate::channel_names::Channel;
use crate::error::PreconditionViolation;

/// One parsed row of the test stand log, in file column order.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SensorRow {
    pub flow: f64,        // Flow rate.
    pub current: f64,     // Pump current (A).
    pub voltage: f64,     // Supply voltage (V).
    pub temperature: f64, // Temperature (°F).
}

/// Column-oriented table of one test run. Row `i` is second `i` of the test.
///
/// The four base columns always share one length. `Power` is absent until
/// [`crate::data_analysis::derived_columns::append_power_column`] runs.
#[derive(Debug, Clone, Default)]
pub struct SensorTable {
    flow: Array1<f64>,
    current: Array1<f64>,
    voltage: Array1<f64>,
    temperature: Array1<f64>,
    power: Option<Array1<f64>>,
}

impl SensorTable {
    /// Builds a table from base columns, rejecting columns of unequal length.
    #[cfg(test)]
    pub(crate) fn from_columns(
        flow: Array1<f64>,
        current: Array1<f64>,
        voltage: Array1<f64>,
        temperature: Array1<f64>,
    ) -> Result<Self, PreconditionViolation> {
        for (channel, column) in [
            (Channel::Current, &current),
            (Channel::Voltage, &voltage),
            (Channel::Temperature, &temperature),
        ] {
            if column.len() != flow.len() {
                return Err(PreconditionViolation::LengthMismatch {
                    left: Channel::Flow,
                    left_len: flow.len(),
                    right: channel,
                    right_len: column.len(),
                });
            }
        }
        Ok(Self {
            flow,
            current,
            voltage,
            temperature,
            power: None,
        })
    }

    pub fn from_rows(rows: &[SensorRow]) -> Self {
        Self {
            flow: rows.iter().map(|r| r.flow).collect(),
            current: rows.iter().map(|r| r.current).collect(),
            voltage: rows.iter().map(|r| r.voltage).collect(),
            temperature: rows.iter().map(|r| r.temperature).collect(),
            power: None,
        }
    }

    /// Number of rows (seconds of test time).
    pub fn len(&self) -> usize {
        self.flow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flow.is_empty()
    }

    pub fn has_power(&self) -> bool {
        self.power.is_some()
    }

    /// Returns the raw column for `channel`.
    pub fn column(&self, channel: Channel) -> Result<&Array1<f64>, PreconditionViolation> {
        match channel {
            Channel::Flow => Ok(&self.flow),
            Channel::Current => Ok(&self.current),
            Channel::Voltage => Ok(&self.voltage),
            Channel::Temperature => Ok(&self.temperature),
            Channel::Power => self
                .power
                .as_ref()
                .ok_or(PreconditionViolation::MissingColumn(Channel::Power)),
        }
    }

    pub(crate) fn set_power(&mut self, power: Array1<f64>) -> Result<(), PreconditionViolation> {
        if self.has_power() {
            return Err(PreconditionViolation::AlreadyDerived(Channel::Power));
        }
        if power.len() != self.len() {
            return Err(PreconditionViolation::LengthMismatch {
                left: Channel::Flow,
                left_len: self.len(),
                right: Channel::Power,
                right_len: power.len(),
            });
        }
        self.power = Some(power);
        Ok(())
    }
}


// src/data_input/sensor_table.rs
