// src/data_analysis/rolling_mean.rs

use ndarray::Array1;
use std::collections::VecDeque;

use crate::constants::{SMOOTHING_MIN_PERIODS, SMOOTHING_WINDOW_SAMPLES};

/// Compensated (Kahan) running sum. Values leave the window as well as
/// enter it, so a plain `f64` accumulator drifts over long logs.
#[derive(Debug, Default, Clone, Copy)]
struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    fn add(&mut self, val: f64) {
        let y = val - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
    }

    fn remove(&mut self, val: f64) {
        self.add(-val);
    }

    fn value(&self) -> f64 {
        self.sum
    }
}

/// Trailing (causal) moving average.
///
/// `output[i]` is the mean of `data[max(0, i + 1 - window) ..= i]` when that
/// range holds at least `min_periods` samples, otherwise `None`. Near the
/// start the window is truncated to the available prefix, not padded, so the
/// first `window - 1` values are noticeably less smooth.
///
/// A window holding one repeated value yields exactly that value.
///
/// A `window` or `min_periods` of 0 behaves as 1.
pub fn rolling_mean(data: &[f64], window: usize, min_periods: usize) -> Vec<Option<f64>> {
    let window = window.max(1);
    let min_periods = min_periods.max(1);

    let mut smoothed_data = Vec::with_capacity(data.len());
    let mut current_sum = CompensatedSum::default();
    let mut history: VecDeque<f64> = VecDeque::with_capacity(window.min(data.len()) + 1);
    // Length of the run of identical values ending at the newest sample.
    let mut same_value_run: usize = 0;
    let mut last_val = f64::NAN;
    for &val in data {
        history.push_back(val);
        current_sum.add(val);
        if val == last_val {
            same_value_run += 1;
        } else {
            same_value_run = 1;
            last_val = val;
        }
        if history.len() > window {
            if let Some(old_val) = history.pop_front() {
                current_sum.remove(old_val);
            }
        }
        let current_window_len = history.len();
        if current_window_len < min_periods {
            smoothed_data.push(None);
        } else if same_value_run >= current_window_len {
            smoothed_data.push(Some(last_val));
        } else {
            smoothed_data.push(Some(current_sum.value() / current_window_len as f64));
        }
    }
    smoothed_data
}

/// Window size and minimum-periods threshold for channel smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothingWindow {
    pub size: usize,
    pub min_periods: usize,
}

impl Default for SmoothingWindow {
    fn default() -> Self {
        Self {
            size: SMOOTHING_WINDOW_SAMPLES,
            min_periods: SMOOTHING_MIN_PERIODS,
        }
    }
}

impl SmoothingWindow {
    pub fn apply(&self, column: &Array1<f64>) -> Vec<Option<f64>> {
        match column.as_slice() {
            Some(slice) => rolling_mean(slice, self.size, self.min_periods),
            None => rolling_mean(&column.to_vec(), self.size, self.min_periods),
        }
    }
}


// src/data_analysis/rolling_mean.rs
