/// Centralized channel naming utilities
///
/// Provides consistent channel names and units across the loader, the
/// plot functions and the console report.
use std::fmt;

/// A sensor channel, either read from the input file or derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Flow,
    Current,
    Voltage,
    Temperature,
    Power,
}

/// Column order of the input file. No header row, so this is the contract.
pub const INPUT_CHANNELS: [Channel; 4] = [
    Channel::Flow,
    Channel::Current,
    Channel::Voltage,
    Channel::Temperature,
];

/// Panel order (top to bottom) and console report order.
pub const PLOTTED_CHANNELS: [Channel; 4] = [
    Channel::Current,
    Channel::Voltage,
    Channel::Power,
    Channel::Temperature,
];

impl Channel {
    /// Get the display name of the channel
    pub fn name(self) -> &'static str {
        match self {
            Channel::Flow => "Flow",
            Channel::Current => "Current",
            Channel::Voltage => "Voltage",
            Channel::Temperature => "Temperature",
            Channel::Power => "Power",
        }
    }

    /// Short unit used on chart axes.
    pub fn unit(self) -> &'static str {
        match self {
            Channel::Flow => "GPM",
            Channel::Current => "A",
            Channel::Voltage => "V",
            Channel::Temperature => "°F",
            Channel::Power => "W",
        }
    }

    /// Unit as written in the console summary.
    pub fn report_unit(self) -> &'static str {
        match self {
            Channel::Temperature => "degrees F",
            other => other.unit(),
        }
    }

    /// Y-axis label for the channel's panel.
    pub fn axis_label(self) -> String {
        match self {
            Channel::Temperature => format!("Temp. ({})", self.unit()),
            other => format!("{} ({})", other.name(), other.unit()),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
