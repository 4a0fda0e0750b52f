// src/main.rs

use clap::Parser;
use log::error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use bilge_pump_render::config::{resolve_run_config, RunLabels};
use bilge_pump_render::error::PipelineError;
use bilge_pump_render::pipeline;

/// Plot smoothed Current, Voltage, Power and Temperature from a bilge pump
/// runtime test log, then print max/average summaries.
#[derive(Parser)]
#[command(name = "bilge_pump_render", version, about, long_about = None)]
struct Cli {
    /// Headerless CSV log: Flow, Current, Voltage, Temperature at 1 Hz (prompted if omitted)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Test number shown in the chart title (prompted if omitted)
    #[arg(value_name = "TEST_NUMBER")]
    test_number: Option<String>,

    /// Test date shown in the chart title (prompted if omitted)
    #[arg(value_name = "TEST_DATE")]
    test_date: Option<String>,

    /// Output PNG path (defaults to <input stem>_Runtime_stacked.png)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn execute(cli: Cli) -> Result<(), PipelineError> {
    let labels = RunLabels {
        input_file: cli.input,
        test_number: cli.test_number,
        test_date: cli.test_date,
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut config = resolve_run_config(labels, &mut stdin.lock(), &mut stdout.lock())
        .map_err(PipelineError::Prompt)?;
    if let Some(output) = cli.output {
        config = config.with_output_path(output);
    }

    pipeline::run(&config)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

// src/main.rs
