// tests/pipeline_integration_test.rs

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{tempdir, NamedTempFile};

use bilge_pump_render::channel_names::Channel;
use bilge_pump_render::config::RunConfig;
use bilge_pump_render::data_analysis::rolling_mean::SmoothingWindow;
use bilge_pump_render::data_input::table_loader::load_sensor_table;
use bilge_pump_render::error::{LoadError, PipelineError};
use bilge_pump_render::pipeline::{process_table, run};

fn write_log(rows: &[[f64; 4]]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for row in rows {
        writeln!(file, "{},{},{},{}", row[0], row[1], row[2], row[3]).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_one_hour_constant_log_end_to_end_compute() {
    let rows = vec![[3.0, 5.0, 12.0, 70.0]; 3600];
    let file = write_log(&rows);

    let table = load_sensor_table(file.path()).unwrap();
    assert_eq!(table.len(), 3600);

    let processed = process_table(table, SmoothingWindow::default()).unwrap();
    let power = processed.table.column(Channel::Power).unwrap();
    assert_eq!(power.len(), 3600);
    assert!(power.iter().all(|&p| p == 60.0));

    let (_, smoothed_power) = &processed.smoothed[2];
    assert!(smoothed_power.iter().all(|v| *v == Some(60.0)));

    let power_summary = processed
        .summaries
        .iter()
        .find(|s| s.channel == Channel::Power)
        .unwrap();
    assert_eq!(power_summary.mean_value, 60.0);
    assert_eq!(power_summary.max_value, 60.0);
    assert_eq!(power_summary.max_position, 0);

    assert_eq!(processed.time_axis[0], 0.0);
    assert!((processed.time_axis[3599] - 3599.0 / 3600.0).abs() < 1e-12);
}

#[test]
fn test_two_row_temperature_prefix_smoothing() {
    let file = write_log(&[[0.0, 1.0, 1.0, 70.0], [0.0, 1.0, 1.0, 80.0]]);
    let table = load_sensor_table(file.path()).unwrap();
    let processed = process_table(table, SmoothingWindow::default()).unwrap();

    let (channel, temperature) = &processed.smoothed[3];
    assert_eq!(*channel, Channel::Temperature);
    assert_eq!(temperature, &vec![Some(70.0), Some(75.0)]);
}

#[test]
fn test_malformed_row_aborts_before_any_output() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1.0,5.0,12.0,70.0").unwrap();
    writeln!(file, "1.0,5.0,oops,70.0").unwrap();
    writeln!(file, "1.0,5.0,12.0,70.0").unwrap();
    file.flush().unwrap();

    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("chart.png");
    let config = RunConfig::new(file.path(), "7", "22 Feb 2019").with_output_path(&output);

    match run(&config) {
        Err(PipelineError::Load(LoadError::NonNumeric { line, channel, value })) => {
            assert_eq!(line, 2);
            assert_eq!(channel, Channel::Voltage);
            assert_eq!(value, "oops");
        }
        other => panic!("expected load failure, got {:?}", other.map(|_| ())),
    }
    assert!(!output.exists());
}

#[test]
fn test_missing_input_file_is_load_stage_error() {
    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("chart.png");
    let config = RunConfig::new(out_dir.path().join("absent.csv"), "1", "today")
        .with_output_path(&output);

    let err = run(&config).unwrap_err();
    assert!(matches!(err, PipelineError::Load(LoadError::Io(_))));
    assert!(err.to_string().starts_with("load stage failed"));
    assert!(!output.exists());
}

#[test]
fn test_run_writes_png_then_summary() {
    let rows: Vec<[f64; 4]> = (0..600)
        .map(|i| [2.0, 5.0 + (i % 7) as f64 * 0.1, 12.0 + (i % 5) as f64 * 0.1, 70.0 + i as f64 * 0.01])
        .collect();
    let file = write_log(&rows);

    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("runtime.png");
    let config = RunConfig::new(file.path(), "7", "22 Feb 2019").with_output_path(&output);

    let processed = match run(&config) {
        Ok(processed) => processed,
        // Hosts without any system font cannot draw text; everything else must render.
        Err(PipelineError::Render(msg)) if msg.to_lowercase().contains("font") => {
            eprintln!("skipping render check, no usable font: {msg}");
            return;
        }
        Err(e) => panic!("run failed: {e}"),
    };

    // The summary is only returned after the chart was written.
    assert_eq!(processed.summaries.len(), 4);
    let voltage = processed
        .summaries
        .iter()
        .find(|s| s.channel == Channel::Voltage)
        .unwrap();
    assert!((voltage.max_value - 12.4).abs() < 1e-9);
    assert_eq!(voltage.max_position, 4);

    assert!(Path::new(&output).exists());
    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}
