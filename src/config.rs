// src/config.rs

use log::debug;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::constants::OUTPUT_FILE_SUFFIX;
use crate::data_analysis::rolling_mean::SmoothingWindow;

pub const PROMPT_FILE_NAME: &str = "Enter file name of CSV: ";
pub const PROMPT_TEST_NUMBER: &str = "Enter test number: ";
pub const PROMPT_TEST_DATE: &str = "Enter test date: ";

/// Everything one run needs. Test number and date only feed the chart title.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub test_number: String,
    pub test_date: String,
    pub output_path: PathBuf,
    pub smoothing: SmoothingWindow,
}

impl RunConfig {
    pub fn new(
        input_path: impl Into<PathBuf>,
        test_number: impl Into<String>,
        test_date: impl Into<String>,
    ) -> Self {
        let input_path = input_path.into();
        let output_path = default_output_path(&input_path);
        Self {
            input_path,
            test_number: test_number.into(),
            test_date: test_date.into(),
            output_path,
            smoothing: SmoothingWindow::default(),
        }
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }
}

/// `<input stem>_Runtime_stacked.png` in the working directory.
pub fn default_output_path(input_path: &Path) -> PathBuf {
    let root_name = input_path.file_stem().unwrap_or_default().to_string_lossy();
    PathBuf::from(format!("{root_name}{OUTPUT_FILE_SUFFIX}"))
}

/// Run labels as given on the command line. Missing ones are prompted for.
#[derive(Debug, Clone, Default)]
pub struct RunLabels {
    pub input_file: Option<String>,
    pub test_number: Option<String>,
    pub test_date: Option<String>,
}

/// Writes `prompt`, reads one line and returns it trimmed.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    output.write_all(prompt.as_bytes())?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("no answer for prompt '{}'", prompt.trim()),
        ));
    }
    Ok(line.trim().to_string())
}

/// Fills in missing labels by prompting, in file name, test number, test date order.
pub fn resolve_run_config<R: BufRead, W: Write>(
    labels: RunLabels,
    input: &mut R,
    output: &mut W,
) -> io::Result<RunConfig> {
    let mut ask = |given: Option<String>, prompt: &str| match given {
        Some(value) => Ok(value),
        None => prompt_line(input, output, prompt),
    };
    let input_file = ask(labels.input_file, PROMPT_FILE_NAME)?;
    let test_number = ask(labels.test_number, PROMPT_TEST_NUMBER)?;
    let test_date = ask(labels.test_date, PROMPT_TEST_DATE)?;
    debug!("Run labels: file='{input_file}', test='{test_number}', date='{test_date}'");
    Ok(RunConfig::new(input_file, test_number, test_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_uses_stem() {
        let path = default_output_path(Path::new("/data/runs/test7.csv"));
        assert_eq!(path, PathBuf::from("test7_Runtime_stacked.png"));
    }

    #[test]
    fn test_prompts_in_order_for_missing_labels() {
        let mut input = "pump.csv\n7\n22 Feb 2019\n".as_bytes();
        let mut output: Vec<u8> = Vec::new();
        let config = resolve_run_config(RunLabels::default(), &mut input, &mut output).unwrap();

        assert_eq!(config.input_path, PathBuf::from("pump.csv"));
        assert_eq!(config.test_number, "7");
        assert_eq!(config.test_date, "22 Feb 2019");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("{PROMPT_FILE_NAME}{PROMPT_TEST_NUMBER}{PROMPT_TEST_DATE}")
        );
    }

    #[test]
    fn test_given_labels_are_not_prompted() {
        let labels = RunLabels {
            input_file: Some("pump.csv".to_string()),
            test_number: None,
            test_date: Some("24 Feb".to_string()),
        };
        let mut input = "12\n".as_bytes();
        let mut output: Vec<u8> = Vec::new();
        let config = resolve_run_config(labels, &mut input, &mut output).unwrap();

        assert_eq!(config.test_number, "12");
        assert_eq!(config.test_date, "24 Feb");
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT_TEST_NUMBER);
    }

    #[test]
    fn test_eof_on_prompt_is_an_error() {
        let mut input = "".as_bytes();
        let mut output: Vec<u8> = Vec::new();
        let err = resolve_run_config(RunLabels::default(), &mut input, &mut output).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_with_output_path_overrides_default() {
        let config = RunConfig::new("a.csv", "1", "today").with_output_path("out/chart.png");
        assert_eq!(config.output_path, PathBuf::from("out/chart.png"));
        assert_eq!(config.smoothing, SmoothingWindow::default());
    }
}

// src/config.rs
