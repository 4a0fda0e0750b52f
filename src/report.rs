// src/report.rs

use std::io::{self, Write};

use crate::data_analysis::summary_stats::ChannelSummary;

/// The two console lines for one channel: where the maximum occurs, and the mean.
pub fn summary_lines(summary: &ChannelSummary) -> [String; 2] {
    let name = summary.channel.name();
    let unit = summary.channel.report_unit();
    [
        format!(
            "Max {name} occurs at row {} ({:.3} h) and is {} {unit}",
            summary.max_position,
            summary.max_time_hours(),
            summary.max_value
        ),
        format!("Average {name} is {} {unit}", summary.mean_value),
    ]
}

pub fn write_summary<W: Write>(out: &mut W, summaries: &[ChannelSummary]) -> io::Result<()> {
    for summary in summaries {
        for line in summary_lines(summary) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel_names::Channel;

    #[test]
    fn test_summary_lines() {
        let summary = ChannelSummary {
            channel: Channel::Temperature,
            max_value: 81.5,
            max_position: 5400,
            mean_value: 75.25,
        };
        let [max_line, mean_line] = summary_lines(&summary);
        assert_eq!(max_line, "Max Temperature occurs at row 5400 (1.500 h) and is 81.5 degrees F");
        assert_eq!(mean_line, "Average Temperature is 75.25 degrees F");
    }

    #[test]
    fn test_write_summary_two_lines_per_channel() {
        let summaries = [
            ChannelSummary { channel: Channel::Current, max_value: 5.0, max_position: 0, mean_value: 5.0 },
            ChannelSummary { channel: Channel::Power, max_value: 60.0, max_position: 0, mean_value: 60.0 },
        ];
        let mut out: Vec<u8> = Vec::new();
        write_summary(&mut out, &summaries).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Max Current occurs at row 0 (0.000 h) and is 5 A");
        assert_eq!(lines[3], "Average Power is 60 W");
    }
}
