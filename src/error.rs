// src/error.rs

use crate::channel_names::Channel;

/// Errors raised while reading the input CSV into a table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File missing or unreadable
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record the CSV reader itself rejected
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: {channel} value '{value}' is not a finite number")]
    NonNumeric {
        line: u64,
        channel: Channel,
        value: String,
    },

    #[error("no data rows found")]
    Empty,
}

/// An internal invariant was broken. Never recoverable.
#[derive(Debug, thiserror::Error)]
pub enum PreconditionViolation {
    #[error("{0} column has not been derived yet")]
    MissingColumn(Channel),

    #[error("{0} column has already been derived")]
    AlreadyDerived(Channel),

    #[error("column length mismatch: {left} has {left_len} rows, {right} has {right_len}")]
    LengthMismatch {
        left: Channel,
        left_len: usize,
        right: Channel,
        right_len: usize,
    },

    #[error("cannot summarize empty {0} column")]
    EmptyColumn(Channel),
}

/// Run failure, tagged with the stage that failed.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("prompt failed: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("load stage failed: {0}")]
    Load(#[from] LoadError),

    #[error("compute stage failed: {0}")]
    Compute(#[from] PreconditionViolation),

    #[error("render stage failed: {0}")]
    Render(String),

    #[error("report output failed: {0}")]
    Report(#[source] std::io::Error),
}

// src/error.rs
