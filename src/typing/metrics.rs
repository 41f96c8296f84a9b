use crate::consts::CHARS_PER_WORD;
use serde::{Deserialize, Serialize};

/// Speed and accuracy figures, all rounded to whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub wpm: u32,
    pub raw_wpm: u32,
    pub accuracy: u32,
    pub time_seconds: u32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsInput {
    /// Every character keystroke ever made (backspace excluded).
    pub total_keystrokes: u64,
    /// Every wrong keystroke ever made, corrected or not.
    pub total_errors: u64,
    pub elapsed_secs: f64,
    /// Characters currently correct (typed minus distinct error positions).
    pub correct_chars: usize,
    /// Characters currently typed.
    pub total_chars: usize,
}

pub fn compute(input: &MetricsInput) -> Metrics {
    Metrics {
        wpm: words_per_minute(input.correct_chars, input.elapsed_secs),
        raw_wpm: words_per_minute(input.total_chars, input.elapsed_secs),
        accuracy: accuracy(input.total_keystrokes, input.total_errors),
        time_seconds: round_non_negative(input.elapsed_secs),
    }
}

/// `round((keystrokes - errors) / keystrokes * 100)`; 100 before any
/// keystroke, never below 0.
pub fn accuracy(total_keystrokes: u64, total_errors: u64) -> u32 {
    if total_keystrokes == 0 {
        return 100;
    }
    let correct = total_keystrokes.saturating_sub(total_errors);
    round_non_negative(correct as f64 / total_keystrokes as f64 * 100.0).min(100)
}

/// `round((chars / 5) / seconds * 60)`; 0 when no time has passed.
pub fn words_per_minute(chars: usize, elapsed_secs: f64) -> u32 {
    if !(elapsed_secs > 0.0) {
        return 0;
    }
    round_non_negative((chars as f64 / CHARS_PER_WORD) / elapsed_secs * 60.0)
}

/// Steadiness of per-second speed: `100 * (1 - stddev / mean)`, clamped to
/// [0, 100]. Fewer than two samples count as perfectly steady.
pub fn consistency(samples: &[f64]) -> u32 {
    if samples.len() < 2 {
        return 100;
    }
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    if !(mean > 0.0) {
        return 0;
    }
    let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    let cv = variance.sqrt() / mean;
    round_non_negative(100.0 * (1.0 - cv)).min(100)
}

#[inline]
fn round_non_negative(x: f64) -> u32 {
    if x.is_finite() && x > 0.0 {
        x.round() as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_chars_in_one_second_is_36_wpm() {
        assert_eq!(words_per_minute(3, 1.0), 36);
    }

    #[test]
    fn degenerate_inputs_are_safe() {
        assert_eq!(words_per_minute(50, 0.0), 0);
        assert_eq!(words_per_minute(50, f64::NAN), 0);
        assert_eq!(words_per_minute(50, -1.0), 0);
        assert_eq!(accuracy(0, 0), 100);
        assert_eq!(accuracy(3, 10), 0);
    }

    #[test]
    fn steady_samples_are_fully_consistent() {
        assert_eq!(consistency(&[60.0, 60.0, 60.0]), 100);
        assert_eq!(consistency(&[60.0]), 100);
        assert_eq!(consistency(&[0.0, 0.0]), 0);
        // mean 60, stddev 30 -> cv 0.5
        assert_eq!(consistency(&[30.0, 90.0]), 50);
    }
}
