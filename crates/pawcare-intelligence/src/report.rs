// ABOUTME: Assembles series analyses and pet health reports from the individual engine components
// ABOUTME: Single entry points used by the CLI and by dashboard consumers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

use crate::config::EngineConfig;
use crate::health_score::{HealthScoreAggregator, HealthScoreBreakdown};
use crate::insights::InsightGenerator;
use crate::smoothing::moving_average;
use crate::statistical_analysis::{StatisticalAnalyzer, StatisticsSummary};
use crate::trend::{BandPoint, TrendEstimator, TrendResult};
use chrono::NaiveDate;
use pawcare_core::models::{HealthDataBundle, HealthInsight, Observation, PetProfile};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Everything a weight chart needs for one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesAnalysis {
    /// Summary statistics, absent for an empty series
    pub statistics: Option<StatisticsSummary>,
    /// Classified trend
    pub trend: TrendResult,
    /// Copies of the input carrying `smoothed_value`
    pub smoothed: Vec<Observation>,
    /// Band around the trend line, absent when the series is too short
    pub confidence_band: Option<Vec<BandPoint>>,
    /// Indices flagged by the modified z-score test
    pub outliers: Vec<usize>,
}

/// Score, breakdown, insights, and weight trend for a single pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Composite score 0-100
    pub score: u8,
    /// Per-factor penalties
    pub breakdown: HealthScoreBreakdown,
    /// Advisory cards in display order
    pub insights: Vec<HealthInsight>,
    /// Trend of the bundle's weight history
    pub weight_trend: TrendResult,
}

/// Analyze a date-ordered series
#[must_use]
pub fn analyze_series(series: &[Observation], config: &EngineConfig) -> SeriesAnalysis {
    let estimator = TrendEstimator::with_thresholds(config.trend);
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();

    let confidence_band = match estimator.confidence_band(series, config.smoothing.confidence_level)
    {
        Ok(band) => Some(band),
        Err(e) => {
            warn!(points = series.len(), error = %e, "omitting confidence band");
            None
        }
    };

    let analysis = SeriesAnalysis {
        statistics: StatisticalAnalyzer::descriptive_statistics(&values),
        trend: estimator.estimate(series),
        smoothed: moving_average(series, config.smoothing.window_size),
        confidence_band,
        outliers: StatisticalAnalyzer::detect_outliers(
            &values,
            config.outliers.modified_z_threshold,
        ),
    };

    debug!(
        points = series.len(),
        outliers = analysis.outliers.len(),
        direction = ?analysis.trend.direction,
        "analyzed series"
    );

    analysis
}

/// Build the dashboard report for one pet as of the given date
#[must_use]
pub fn build_health_report(
    pet: &PetProfile,
    data: &HealthDataBundle,
    as_of: NaiveDate,
    config: &EngineConfig,
) -> HealthReport {
    let breakdown = HealthScoreAggregator::with_config(config.health_score).breakdown(pet, data, as_of);
    let insights = InsightGenerator::with_config(config.insights).generate(pet, data);
    let weight_trend = TrendEstimator::with_thresholds(config.trend).estimate(&data.weight_history);

    HealthReport {
        score: breakdown.score,
        breakdown,
        insights,
        weight_trend,
    }
}
