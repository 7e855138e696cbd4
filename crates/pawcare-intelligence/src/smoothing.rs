// ABOUTME: Centered moving-average smoothing for observation series
// ABOUTME: Produces annotated copies with smoothed values for chart overlays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health
#![allow(clippy::cast_precision_loss)] // Safe: window lengths are tiny

use pawcare_core::models::Observation;

/// Apply a centered moving average
///
/// For index `i` the window is `[i - floor(w/2), i + ceil(w/2))`, clamped to
/// the series bounds, so edge points average over fewer samples. The input
/// is left untouched; the returned copies carry `smoothed_value`. A window of
/// zero is treated as one.
#[must_use]
pub fn moving_average(series: &[Observation], window: usize) -> Vec<Observation> {
    let window = window.max(1);
    let before = window / 2;
    let after = window - before;

    series
        .iter()
        .enumerate()
        .map(|(i, observation)| {
            let start = i.saturating_sub(before);
            let end = (i + after).min(series.len());
            let slice = &series[start..end];
            let average = slice.iter().map(|p| p.value).sum::<f64>() / slice.len() as f64;

            Observation {
                smoothed_value: Some(average),
                ..observation.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(values: &[f64]) -> Vec<Observation> {
        let start = NaiveDate::MIN;
        values
            .iter()
            .zip(start.iter_days())
            .map(|(&value, date)| Observation::new(date, value))
            .collect()
    }

    fn smoothed(points: &[Observation]) -> Vec<f64> {
        points.iter().filter_map(|p| p.smoothed_value).collect()
    }

    #[test]
    fn test_window_three_clamps_at_edges() {
        let result = moving_average(&series(&[1.0, 2.0, 3.0, 4.0]), 3);
        // [0,2) [0,3) [1,4) [2,4)
        assert_eq!(smoothed(&result), vec![1.5, 2.0, 3.0, 3.5]);
    }

    #[test]
    fn test_even_window_leans_forward() {
        let result = moving_average(&series(&[2.0, 4.0, 6.0]), 2);
        // [i-1, i+1)
        assert_eq!(smoothed(&result), vec![2.0, 3.0, 5.0]);
    }

    #[test]
    fn test_zero_window_treated_as_one() {
        let input = series(&[5.0, 7.0]);
        let result = moving_average(&input, 0);
        assert_eq!(smoothed(&result), vec![5.0, 7.0]);
        assert!(input.iter().all(|p| p.smoothed_value.is_none()));
    }
}
