// ABOUTME: Engine configuration with environment overrides for thresholds and windows
// ABOUTME: Defaults reproduce the fixed policy constants used by existing charts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

//! Engine Configuration
//!
//! Every threshold the engine uses lives here with a default taken from
//! `pawcare_core::constants`. Deployments can override individual values
//! through `PAWCARE_*` environment variables; `validate` rejects overrides
//! that would make the classification bands inconsistent.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use crate::insights::InsightConfig;
use pawcare_core::constants::{health_score, smoothing, trend};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::env;
use std::str::FromStr;

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Trend direction, strength, and confidence thresholds
    pub trend: TrendThresholds,
    /// Health score penalties
    pub health_score: HealthScoreConfig,
    /// Smoothing window and band settings
    pub smoothing: SmoothingConfig,
    /// Outlier detection settings
    pub outliers: OutlierConfig,
    /// Insight card thresholds
    pub insights: InsightConfig,
}

/// Thresholds used to classify a fitted trend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendThresholds {
    /// Absolute slope at or below which the trend is stable
    pub stable_slope: f64,
    /// R² above which a trend is strong
    pub strong_r_squared: f64,
    /// R² above which a trend is moderate
    pub moderate_r_squared: f64,
    /// R² above which confidence is high
    pub high_confidence_r_squared: f64,
    /// R² above which confidence is medium
    pub medium_confidence_r_squared: f64,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self {
            stable_slope: trend::STABLE_SLOPE_THRESHOLD,
            strong_r_squared: trend::STRONG_R_SQUARED,
            moderate_r_squared: trend::MODERATE_R_SQUARED,
            high_confidence_r_squared: trend::HIGH_CONFIDENCE_R_SQUARED,
            medium_confidence_r_squared: trend::MEDIUM_CONFIDENCE_R_SQUARED,
        }
    }
}

/// Penalty settings for the composite health score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthScoreConfig {
    /// Activity score used when the bundle carries no activity data
    pub default_activity_score: f64,
    /// Fraction of the activity shortfall subtracted
    pub activity_weight: f64,
    /// Fraction of the adherence shortfall subtracted
    pub medication_weight: f64,
    /// Penalty per high-severity alert
    pub high_alert_penalty: f64,
    /// Penalty per medium-severity alert
    pub medium_alert_penalty: f64,
}

impl Default for HealthScoreConfig {
    fn default() -> Self {
        Self {
            default_activity_score: health_score::DEFAULT_ACTIVITY_SCORE,
            activity_weight: health_score::ACTIVITY_WEIGHT,
            medication_weight: health_score::MEDICATION_WEIGHT,
            high_alert_penalty: health_score::HIGH_ALERT_PENALTY,
            medium_alert_penalty: health_score::MEDIUM_ALERT_PENALTY,
        }
    }
}

/// Smoothing and confidence band settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Centered moving-average window
    pub window_size: usize,
    /// Confidence level of the band drawn around the trend line
    pub confidence_level: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            window_size: smoothing::DEFAULT_SMOOTHING_WINDOW,
            confidence_level: smoothing::DEFAULT_CONFIDENCE_LEVEL,
        }
    }
}

/// Outlier detection settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierConfig {
    /// Modified Z-score above which a reading is flagged
    pub modified_z_threshold: f64,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            modified_z_threshold: smoothing::DEFAULT_OUTLIER_THRESHOLD,
        }
    }
}

/// Apply an environment override when the variable is set
fn override_from_env<T: FromStr>(variable: &'static str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(raw) = env::var(variable) {
        *target = raw.trim().parse().map_err(|_| ConfigError::Parse {
            variable,
            value: raw.clone(),
        })?;
    }
    Ok(())
}

impl EngineConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the resulting
    /// configuration fails validation
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        override_from_env("PAWCARE_STABLE_SLOPE_THRESHOLD", &mut config.trend.stable_slope)?;
        override_from_env("PAWCARE_STRONG_R_SQUARED", &mut config.trend.strong_r_squared)?;
        override_from_env(
            "PAWCARE_MODERATE_R_SQUARED",
            &mut config.trend.moderate_r_squared,
        )?;
        override_from_env(
            "PAWCARE_HIGH_CONFIDENCE_R_SQUARED",
            &mut config.trend.high_confidence_r_squared,
        )?;
        override_from_env(
            "PAWCARE_MEDIUM_CONFIDENCE_R_SQUARED",
            &mut config.trend.medium_confidence_r_squared,
        )?;
        override_from_env("PAWCARE_SMOOTHING_WINDOW", &mut config.smoothing.window_size)?;
        override_from_env(
            "PAWCARE_CONFIDENCE_LEVEL",
            &mut config.smoothing.confidence_level,
        )?;
        override_from_env(
            "PAWCARE_OUTLIER_THRESHOLD",
            &mut config.outliers.modified_z_threshold,
        )?;
        override_from_env(
            "PAWCARE_DEFAULT_ACTIVITY_SCORE",
            &mut config.health_score.default_activity_score,
        )?;
        override_from_env(
            "PAWCARE_LOW_ADHERENCE_THRESHOLD",
            &mut config.insights.low_adherence,
        )?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = 0.0..=1.0;
        let t = &self.trend;

        if t.stable_slope.is_nan() || t.stable_slope < 0.0 {
            return Err(ConfigError::InvalidRange("stable_slope must be >= 0"));
        }
        if !unit.contains(&t.strong_r_squared) || !unit.contains(&t.moderate_r_squared) {
            return Err(ConfigError::InvalidRange(
                "strength R² thresholds must be between 0 and 1",
            ));
        }
        if !unit.contains(&t.high_confidence_r_squared)
            || !unit.contains(&t.medium_confidence_r_squared)
        {
            return Err(ConfigError::InvalidRange(
                "confidence R² thresholds must be between 0 and 1",
            ));
        }
        if t.strong_r_squared < t.moderate_r_squared {
            return Err(ConfigError::InvalidOrdering(
                "strong_r_squared must be >= moderate_r_squared",
            ));
        }
        if t.high_confidence_r_squared < t.medium_confidence_r_squared {
            return Err(ConfigError::InvalidOrdering(
                "high_confidence_r_squared must be >= medium_confidence_r_squared",
            ));
        }

        if self.smoothing.window_size == 0 {
            return Err(ConfigError::InvalidRange("window_size must be >= 1"));
        }
        let level = self.smoothing.confidence_level;
        if level.is_nan() || level <= 0.0 || level >= 1.0 {
            return Err(ConfigError::InvalidRange(
                "confidence_level must be strictly between 0 and 1",
            ));
        }

        let z = self.outliers.modified_z_threshold;
        if z.is_nan() || z <= 0.0 {
            return Err(ConfigError::InvalidRange("modified_z_threshold must be > 0"));
        }

        if !(0.0..=100.0).contains(&self.health_score.default_activity_score) {
            return Err(ConfigError::InvalidRange(
                "default_activity_score must be between 0 and 100",
            ));
        }

        self.validate_insights()
    }

    fn validate_insights(&self) -> Result<(), ConfigError> {
        let insights = &self.insights;
        if !(0.0..=100.0).contains(&insights.low_adherence) {
            return Err(ConfigError::InvalidRange(
                "low_adherence must be between 0 and 100",
            ));
        }
        if insights.weight_ratio_low.partial_cmp(&insights.weight_ratio_high) != Some(Ordering::Less) {
            return Err(ConfigError::InvalidOrdering(
                "weight_ratio_low must be < weight_ratio_high",
            ));
        }
        if !matches!(
            insights
                .low_activity_progress
                .partial_cmp(&insights.activity_goal_progress),
            Some(Ordering::Less | Ordering::Equal)
        ) {
            return Err(ConfigError::InvalidOrdering(
                "low_activity_progress must be <= activity_goal_progress",
            ));
        }

        Ok(())
    }
}
