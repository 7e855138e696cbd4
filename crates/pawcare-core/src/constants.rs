// ABOUTME: Policy constants for trend classification, smoothing, and health scoring
// ABOUTME: Fixed thresholds shared by the engine defaults and configuration validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

//! Policy constants
//!
//! Thresholds used by the statistics, trend, and health score components.
//! Charts and dashboards built on earlier releases depend on these exact
//! values, so configuration defaults are taken from here.

/// Trend classification thresholds
pub mod trend {
    /// Absolute slope at or below which a trend is reported as stable
    pub const STABLE_SLOPE_THRESHOLD: f64 = 0.1;

    /// R² above which a non-stable trend is strong
    pub const STRONG_R_SQUARED: f64 = 0.7;

    /// R² above which a non-stable trend is moderate
    pub const MODERATE_R_SQUARED: f64 = 0.4;

    /// R² above which confidence is high
    pub const HIGH_CONFIDENCE_R_SQUARED: f64 = 0.5;

    /// R² above which confidence is medium
    pub const MEDIUM_CONFIDENCE_R_SQUARED: f64 = 0.3;

    /// Minimum number of points for a regression
    pub const MIN_REGRESSION_POINTS: usize = 2;
}

/// Smoothing and band parameters used by weight charts
pub mod smoothing {
    /// Default centered moving-average window (one week of daily readings)
    pub const DEFAULT_SMOOTHING_WINDOW: usize = 7;

    /// Default confidence level for the shaded band around a trend line
    pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

    /// Modified Z-score above which a reading is flagged as an outlier
    pub const DEFAULT_OUTLIER_THRESHOLD: f64 = 3.5;

    /// Scale factor converting MAD to a standard-deviation equivalent
    pub const MODIFIED_Z_SCALE: f64 = 0.6745;
}

/// Composite health score policy
pub mod health_score {
    /// Starting (and maximum) score
    pub const MAX_SCORE: f64 = 100.0;

    /// Weight ratio band outside of which the large penalty applies
    pub const WEIGHT_RATIO_WIDE_LOW: f64 = 0.85;
    /// Upper edge of the wide weight band
    pub const WEIGHT_RATIO_WIDE_HIGH: f64 = 1.15;
    /// Weight ratio band outside of which the small penalty applies
    pub const WEIGHT_RATIO_NARROW_LOW: f64 = 0.9;
    /// Upper edge of the narrow weight band
    pub const WEIGHT_RATIO_NARROW_HIGH: f64 = 1.1;
    /// Penalty when outside the wide band
    pub const WEIGHT_PENALTY_SEVERE: f64 = 20.0;
    /// Penalty when outside the narrow band only
    pub const WEIGHT_PENALTY_MILD: f64 = 10.0;

    /// Activity score assumed when no activity data is available
    pub const DEFAULT_ACTIVITY_SCORE: f64 = 70.0;
    /// Fraction of the activity shortfall subtracted from the score
    pub const ACTIVITY_WEIGHT: f64 = 0.25;

    /// Adherence assumed for a medication that does not report one
    pub const DEFAULT_ADHERENCE: f64 = 100.0;
    /// Fraction of the adherence shortfall subtracted from the score
    pub const MEDICATION_WEIGHT: f64 = 0.2;

    /// Penalty per high-severity alert
    pub const HIGH_ALERT_PENALTY: f64 = 10.0;
    /// Penalty per medium-severity alert
    pub const MEDIUM_ALERT_PENALTY: f64 = 5.0;

    /// Checkup older than this many days gets the full penalty
    pub const CHECKUP_OVERDUE_DAYS: i64 = 365;
    /// Checkup older than this many days gets the partial penalty
    pub const CHECKUP_DUE_SOON_DAYS: i64 = 180;
    /// Penalty for a missing or overdue checkup
    pub const CHECKUP_OVERDUE_PENALTY: f64 = 10.0;
    /// Penalty for a checkup that is due soon
    pub const CHECKUP_DUE_SOON_PENALTY: f64 = 5.0;
}

/// Thresholds for advisory insights
pub mod insights {
    /// Activity progress below which a low-activity insight is raised
    pub const LOW_ACTIVITY_PROGRESS: f64 = 50.0;
    /// Activity progress at or above which the goal counts as reached
    pub const ACTIVITY_GOAL_PROGRESS: f64 = 100.0;
    /// Mean adherence below which an adherence insight is raised
    pub const LOW_ADHERENCE: f64 = 80.0;
}
