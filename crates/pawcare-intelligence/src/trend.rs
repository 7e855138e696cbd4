// ABOUTME: Trend estimation over observation series with direction, strength, and confidence
// ABOUTME: Wraps index-based regression and produces confidence bands for chart shading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health
#![allow(clippy::cast_precision_loss)] // Safe: series lengths are far below 2^52

//! Trend estimation
//!
//! Regression is performed against sample index rather than elapsed time:
//! unevenly spaced readings are treated as evenly spaced. Charts built on
//! this engine place trend lines by index, so the simplification is kept.

use crate::config::TrendThresholds;
use crate::statistical_analysis::{RegressionResult, StatisticalAnalyzer};
use chrono::NaiveDate;
use pawcare_core::errors::{AppError, AppResult};
use pawcare_core::models::Observation;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Direction of a fitted trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Slope above the stable threshold
    Increasing,
    /// Slope below the negative stable threshold
    Decreasing,
    /// Slope magnitude within the stable threshold
    Stable,
}

/// How well the line explains a non-stable series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendStrength {
    /// R² at or below the moderate threshold, or a stable trend
    Weak,
    /// R² above the moderate threshold
    Moderate,
    /// R² above the strong threshold
    Strong,
}

/// Confidence in the fitted line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendConfidence {
    /// R² at or below the medium threshold
    Low,
    /// R² above the medium threshold
    Medium,
    /// R² above the high threshold
    High,
}

/// Classified trend of a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Change in value per sample
    pub slope: f64,
    /// Fitted value at the first sample
    pub intercept: f64,
    /// Direction classification
    pub direction: TrendDirection,
    /// Strength classification
    pub strength: TrendStrength,
    /// Coefficient of determination
    pub r_squared: f64,
    /// Confidence classification
    pub confidence: TrendConfidence,
}

impl TrendResult {
    /// Result reported for series too short to fit
    #[must_use]
    pub fn degenerate(series: &[Observation]) -> Self {
        Self {
            slope: 0.0,
            intercept: series.first().map_or(0.0, |p| p.value),
            direction: TrendDirection::Stable,
            strength: TrendStrength::Weak,
            r_squared: 0.0,
            confidence: TrendConfidence::Low,
        }
    }
}

/// One point of the shaded band around a trend line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandPoint {
    /// Sample index
    pub index: usize,
    /// Date of the observation at this index
    pub date: NaiveDate,
    /// Fitted value
    pub predicted: f64,
    /// Lower edge of the band
    pub lower: f64,
    /// Upper edge of the band
    pub upper: f64,
}

/// Fits and classifies trends using configurable thresholds
#[derive(Debug, Clone, Default)]
pub struct TrendEstimator {
    thresholds: TrendThresholds,
}

impl TrendEstimator {
    /// Create an estimator with the default policy thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an estimator with custom thresholds
    #[must_use]
    pub const fn with_thresholds(thresholds: TrendThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &TrendThresholds {
        &self.thresholds
    }

    /// Fit and classify the trend of a series
    ///
    /// Never fails: a series with fewer than two points yields the
    /// degenerate stable result.
    #[must_use]
    pub fn estimate(&self, series: &[Observation]) -> TrendResult {
        match self.regression(series) {
            Ok(regression) => self.classify(&regression),
            Err(_) => TrendResult::degenerate(series),
        }
    }

    /// Full regression detail for a series
    ///
    /// # Errors
    ///
    /// Returns an error if the series has fewer than two points
    pub fn regression(&self, series: &[Observation]) -> AppResult<RegressionResult> {
        let values: Vec<f64> = series.iter().map(|p| p.value).collect();
        StatisticalAnalyzer::linear_regression(&values)
    }

    /// Classify a regression against the configured thresholds
    #[must_use]
    pub fn classify(&self, regression: &RegressionResult) -> TrendResult {
        let t = &self.thresholds;
        let slope = regression.slope;
        let r_squared = regression.r_squared;

        let direction = if slope.abs() <= t.stable_slope {
            TrendDirection::Stable
        } else if slope > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        };

        let strength = if direction == TrendDirection::Stable {
            TrendStrength::Weak
        } else if r_squared > t.strong_r_squared {
            TrendStrength::Strong
        } else if r_squared > t.moderate_r_squared {
            TrendStrength::Moderate
        } else {
            TrendStrength::Weak
        };

        let confidence = if r_squared > t.high_confidence_r_squared {
            TrendConfidence::High
        } else if r_squared > t.medium_confidence_r_squared {
            TrendConfidence::Medium
        } else {
            TrendConfidence::Low
        };

        debug!(
            slope,
            r_squared,
            ?direction,
            ?strength,
            ?confidence,
            "classified trend"
        );

        TrendResult {
            slope,
            intercept: regression.intercept,
            direction,
            strength,
            r_squared,
            confidence,
        }
    }

    /// Confidence band for the fitted mean at every sample index
    ///
    /// The half-width at index `x` is
    /// `t * se * sqrt(1/n + (x - x̄)² / Sxx)`, widest at the ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the series has fewer than three points or the
    /// confidence level is not strictly between 0 and 1
    pub fn confidence_band(
        &self,
        series: &[Observation],
        confidence_level: f64,
    ) -> AppResult<Vec<BandPoint>> {
        if confidence_level.is_nan() || confidence_level <= 0.0 || confidence_level >= 1.0 {
            return Err(AppError::out_of_range(format!(
                "confidence level must be between 0 and 1, got {confidence_level}"
            )));
        }

        let regression = self.regression(series)?;
        if regression.degrees_of_freedom == 0 {
            return Err(AppError::invalid_input(
                "Cannot calculate confidence band with zero degrees of freedom",
            ));
        }

        let n = series.len() as f64;
        let mean_x = (n - 1.0) / 2.0;
        // Sum of squared index deviations for x = 0..n-1
        let sxx = n * n.mul_add(n, -1.0) / 12.0;
        let t_critical =
            StatisticalAnalyzer::t_critical_value(confidence_level, regression.degrees_of_freedom);

        Ok(series
            .iter()
            .enumerate()
            .map(|(index, observation)| {
                let x = index as f64;
                let leverage = ((x - mean_x) * (x - mean_x)).mul_add(1.0 / sxx, 1.0 / n);
                let margin = t_critical * regression.standard_error * leverage.sqrt();
                let predicted = regression.predict(x);
                BandPoint {
                    index,
                    date: observation.date,
                    predicted,
                    lower: predicted - margin,
                    upper: predicted + margin,
                }
            })
            .collect())
    }
}

/// Fit and classify a series with the default thresholds
#[must_use]
pub fn compute_trend(series: &[Observation]) -> TrendResult {
    TrendEstimator::new().estimate(series)
}
