// ABOUTME: Descriptive statistics, index-based linear regression, and outlier detection
// ABOUTME: Pure numeric routines behind chart annotations and trend classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health
#![allow(clippy::cast_precision_loss)] // Safe: series lengths are far below 2^52

use pawcare_core::constants::smoothing::MODIFIED_Z_SCALE;
use pawcare_core::constants::trend::MIN_REGRESSION_POINTS;
use pawcare_core::errors::{AppError, AppResult};
use pawcare_core::models::Observation;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::cmp::Ordering;

/// Summary statistics over a numeric series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    /// Number of values
    pub count: usize,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Value at index `floor(n * 0.5)` of the sorted series
    pub median: f64,
    /// Value at index `floor(n * 0.25)` of the sorted series
    pub q1: f64,
    /// Value at index `floor(n * 0.75)` of the sorted series
    pub q3: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Population variance (divides by `count`)
    pub variance: f64,
    /// `max - min`
    pub range: f64,
    /// `q3 - q1`
    pub iqr: f64,
}

/// Complete linear regression results against sample index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Change in value per sample
    pub slope: f64,
    /// Fitted value at index 0
    pub intercept: f64,
    /// Coefficient of determination (0-1)
    pub r_squared: f64,
    /// Pearson correlation coefficient (-1 to 1), 0 for a constant series
    pub correlation: f64,
    /// Standard error of the estimate
    pub standard_error: f64,
    /// Degrees of freedom (n - 2)
    pub degrees_of_freedom: usize,
    /// Number of points fitted
    pub sample_count: usize,
}

impl RegressionResult {
    /// Fitted value at a (possibly fractional) sample index
    #[must_use]
    pub fn predict(&self, index: f64) -> f64 {
        self.slope.mul_add(index, self.intercept)
    }
}

/// Statistical routines over plain numeric series
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Compute count, extremes, mean, quartiles, and spread
    ///
    /// Quartiles use the sorted value at `floor(n * p)` without
    /// interpolation. Returns `None` for an empty series.
    #[must_use]
    pub fn descriptive_statistics(values: &[f64]) -> Option<StatisticsSummary> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let count = sorted.len();
        let n = count as f64;
        let min = sorted[0];
        let max = sorted[count - 1];
        let mean = sorted.iter().sum::<f64>() / n;
        let variance = sorted
            .iter()
            .map(|value| {
                let diff = value - mean;
                diff * diff
            })
            .sum::<f64>()
            / n;

        let q1 = Self::percentile_floor(&sorted, 0.25);
        let median = Self::percentile_floor(&sorted, 0.5);
        let q3 = Self::percentile_floor(&sorted, 0.75);

        Some(StatisticsSummary {
            count,
            min,
            max,
            mean,
            median,
            q1,
            q3,
            std_dev: variance.sqrt(),
            variance,
            range: max - min,
            iqr: q3 - q1,
        })
    }

    /// Descriptive statistics over the values of an observation series
    #[must_use]
    pub fn statistics_for(series: &[Observation]) -> Option<StatisticsSummary> {
        let values: Vec<f64> = series.iter().map(|p| p.value).collect();
        Self::descriptive_statistics(&values)
    }

    /// Sorted value at index `floor(len * p)`, kept in bounds
    fn percentile_floor(sorted: &[f64], p: f64) -> f64 {
        let index = (sorted.len() as f64 * p).floor() as usize;
        sorted[index.min(sorted.len() - 1)]
    }

    /// Ordinary least-squares fit of value against sample index `0..n-1`
    ///
    /// Samples are treated as evenly spaced regardless of their dates.
    /// When the series is constant the total sum of squares is zero; R² is
    /// then 1 if the residuals are also zero (exact fit) and 0 otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than two values
    pub fn linear_regression(values: &[f64]) -> AppResult<RegressionResult> {
        if values.len() < MIN_REGRESSION_POINTS {
            return Err(AppError::invalid_input(format!(
                "Insufficient data points for regression: need at least {MIN_REGRESSION_POINTS}, got {}",
                values.len()
            )));
        }

        let n = values.len() as f64;

        // Calculate sums for regression
        let (sum_x, sum_y, sum_xy, sum_xx) = values.iter().enumerate().fold(
            (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64),
            |(sx, sy, sxy, sxx), (i, &y)| {
                let x = i as f64;
                (sx + x, sy + y, x.mul_add(y, sxy), x.mul_add(x, sxx))
            },
        );

        let denominator = n.mul_add(sum_xx, -(sum_x * sum_x));
        if denominator.abs() < f64::EPSILON {
            return Err(AppError::invalid_input(
                "Cannot calculate regression: zero variance in x",
            ));
        }

        let slope = n.mul_add(sum_xy, -(sum_x * sum_y)) / denominator;
        let intercept = slope.mul_add(-sum_x, sum_y) / n;
        let mean_y = sum_y / n;

        let (ss_res, ss_tot) = values
            .iter()
            .enumerate()
            .fold((0.0_f64, 0.0_f64), |(res, tot), (i, &y)| {
                let residual = y - slope.mul_add(i as f64, intercept);
                let deviation = y - mean_y;
                (
                    residual.mul_add(residual, res),
                    deviation.mul_add(deviation, tot),
                )
            });

        // Constant means every value is identical; tiny variation still counts
        let (min_y, max_y) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| {
                (lo.min(y), hi.max(y))
            });
        let constant_series = max_y <= min_y;
        let r_squared = if constant_series {
            // Fit residue scales with the magnitude of the values
            if ss_res <= f64::EPSILON * max_y.abs().max(1.0) {
                1.0
            } else {
                0.0
            }
        } else if ss_tot > 0.0 {
            (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let correlation = if constant_series {
            0.0
        } else {
            slope.signum() * r_squared.sqrt()
        };

        let degrees_of_freedom = values.len().saturating_sub(2);
        let standard_error = if degrees_of_freedom > 0 {
            (ss_res / degrees_of_freedom as f64).sqrt()
        } else {
            0.0
        };

        Ok(RegressionResult {
            slope,
            intercept,
            r_squared,
            correlation,
            standard_error,
            degrees_of_freedom,
            sample_count: values.len(),
        })
    }

    /// Detect outliers using modified Z-score
    ///
    /// Returns the indices whose `0.6745 * (x - median) / MAD` exceeds the
    /// threshold in absolute value. Series shorter than three points, or
    /// whose MAD is zero, have no outliers.
    #[must_use]
    pub fn detect_outliers(values: &[f64], threshold: f64) -> Vec<usize> {
        if values.len() < 3 {
            return Vec::new();
        }

        let median = Self::calculate_median(values);

        // Calculate median absolute deviation (MAD)
        let deviations: Vec<f64> = values.iter().map(|v| (v - median).abs()).collect();
        let mad = Self::calculate_median(&deviations);

        if mad <= f64::EPSILON {
            return Vec::new();
        }

        values
            .iter()
            .enumerate()
            .filter(|(_, value)| (MODIFIED_Z_SCALE * (**value - median) / mad).abs() > threshold)
            .map(|(i, _)| i)
            .collect()
    }

    /// Interpolated median, used for robust spread estimates
    fn calculate_median(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let len = sorted.len();
        if len % 2 == 0 {
            f64::midpoint(sorted[len / 2 - 1], sorted[len / 2])
        } else {
            sorted[len / 2]
        }
    }

    /// Two-tailed Student-t critical value for a confidence level and degrees of freedom
    ///
    /// Zero degrees of freedom, or a level that is NaN or at least 1, yields infinity.
    #[must_use]
    pub fn t_critical_value(confidence_level: f64, degrees_of_freedom: usize) -> f64 {
        if degrees_of_freedom == 0 || confidence_level.is_nan() || confidence_level >= 1.0 {
            return f64::INFINITY;
        }
        if confidence_level <= 0.0 {
            return 0.0;
        }

        let upper_tail = f64::midpoint(1.0, confidence_level);
        match StudentsT::new(0.0, 1.0, degrees_of_freedom as f64) {
            Ok(distribution) => {
                let t = distribution.inverse_cdf(upper_tail);
                if t.is_finite() {
                    t
                } else {
                    f64::INFINITY
                }
            }
            Err(_) => f64::INFINITY,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_percentiles_use_floor_index() {
        let stats = StatisticalAnalyzer::descriptive_statistics(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        // sorted [1, 2, 3, 4]: q1 = s[1], median = s[2], q3 = s[3]
        assert!((stats.q1 - 2.0).abs() < f64::EPSILON);
        assert!((stats.median - 3.0).abs() < f64::EPSILON);
        assert!((stats.q3 - 4.0).abs() < f64::EPSILON);
        assert!((stats.iqr - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_population_variance() {
        let stats = StatisticalAnalyzer::descriptive_statistics(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])
            .unwrap();
        assert!((stats.mean - 5.0).abs() < 1e-12);
        assert!((stats.variance - 4.0).abs() < 1e-12);
        assert!((stats.std_dev - 2.0).abs() < 1e-12);
    }

    /// Published two-tailed values for 90/95/99% at df 1 through 5
    const T_TABLE: [(f64, [f64; 5]); 3] = [
        (0.90, [6.314, 2.920, 2.353, 2.132, 2.015]),
        (0.95, [12.706, 4.303, 3.182, 2.776, 2.571]),
        (0.99, [63.657, 9.925, 5.841, 4.604, 4.032]),
    ];

    #[test]
    fn test_t_critical_matches_published_table() {
        for (level, row) in T_TABLE {
            for (index, expected) in row.iter().enumerate() {
                let t = StatisticalAnalyzer::t_critical_value(level, index + 1);
                assert!(
                    (t - expected).abs() < 2e-3,
                    "level {level} df {}: got {t}, expected {expected}",
                    index + 1
                );
            }
        }
    }

    #[test]
    fn test_t_critical_untabulated_levels_at_small_df() {
        assert!((StatisticalAnalyzer::t_critical_value(0.80, 1) - 3.078).abs() < 2e-3);
        assert!((StatisticalAnalyzer::t_critical_value(0.975, 2) - 6.205).abs() < 2e-3);
        assert!((StatisticalAnalyzer::t_critical_value(0.95, 6) - 2.447).abs() < 2e-3);
    }

    #[test]
    fn test_t_critical_large_df_approaches_z() {
        let t = StatisticalAnalyzer::t_critical_value(0.95, 1000);
        assert!((t - 1.96).abs() < 0.01);
    }
}
