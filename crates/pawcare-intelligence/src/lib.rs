// ABOUTME: Statistics and trend engine for pet health charts and dashboards
// ABOUTME: Descriptive statistics, trend estimation, smoothing, health scores, and insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

#![deny(unsafe_code)]

//! # Pawcare Intelligence
//!
//! Pure computation over pet health data. Nothing here performs I/O: hosts
//! hand in observation series and health bundles and receive serializable
//! results for rendering.
//!
//! ## Modules
//!
//! - **`statistical_analysis`**: descriptive statistics, regression, outliers
//! - **trend**: direction, strength, and confidence classification
//! - **smoothing**: centered moving average
//! - **`health_score`**: composite 0-100 score with breakdown
//! - **insights**: advisory cards for the dashboard
//! - **report**: combined series analysis and pet health report

/// Engine configuration and environment overrides
pub mod config;

/// Composite health score
pub mod health_score;

/// Advisory insight generation
pub mod insights;

/// Combined analyses for hosts
pub mod report;

/// Moving-average smoothing
pub mod smoothing;

/// Statistics, regression, and outlier detection
pub mod statistical_analysis;

/// Trend estimation and confidence bands
pub mod trend;

pub use config::{ConfigError, EngineConfig};
pub use health_score::{compute_health_score, HealthScoreAggregator, HealthScoreBreakdown};
pub use insights::{generate_health_insights, InsightConfig, InsightGenerator};
pub use report::{analyze_series, build_health_report, HealthReport, SeriesAnalysis};
pub use smoothing::moving_average;
pub use statistical_analysis::{RegressionResult, StatisticalAnalyzer, StatisticsSummary};
pub use trend::{
    compute_trend, BandPoint, TrendConfidence, TrendDirection, TrendEstimator, TrendResult,
    TrendStrength,
};
