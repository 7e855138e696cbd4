// ABOUTME: Composite 0-100 health score from weight, activity, medication, alerts, and checkups
// ABOUTME: Deterministic penalty model with per-factor breakdown and parallel batch scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

//! Health score aggregation
//!
//! The score starts at 100 and loses points per factor:
//!
//! | Factor | Penalty |
//! |--------|---------|
//! | Weight ratio outside 0.85-1.15 / 0.9-1.1 | 20 / 10 |
//! | Activity shortfall | `(100 - activity) * 0.25` |
//! | Medication adherence shortfall | `(100 - mean adherence) * 0.2` |
//! | Alerts | 10 per high, 5 per medium |
//! | Last vet visit missing or > 365 days / > 180 days | 10 / 5 |
//!
//! The result is clamped to 0-100 and rounded. The evaluation date is an
//! explicit argument so that identical inputs always produce identical scores.

use crate::config::HealthScoreConfig;
use chrono::NaiveDate;
use pawcare_core::constants::health_score::{
    CHECKUP_DUE_SOON_DAYS, CHECKUP_DUE_SOON_PENALTY, CHECKUP_OVERDUE_DAYS,
    CHECKUP_OVERDUE_PENALTY, DEFAULT_ADHERENCE, MAX_SCORE, WEIGHT_PENALTY_MILD,
    WEIGHT_PENALTY_SEVERE, WEIGHT_RATIO_NARROW_HIGH, WEIGHT_RATIO_NARROW_LOW,
    WEIGHT_RATIO_WIDE_HIGH, WEIGHT_RATIO_WIDE_LOW,
};
use pawcare_core::models::{AlertSeverity, HealthDataBundle, PetProfile};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Score together with the points each factor removed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthScoreBreakdown {
    /// Final clamped, rounded score
    pub score: u8,
    /// Points removed for weight deviation
    pub weight_penalty: f64,
    /// Points removed for activity shortfall
    pub activity_penalty: f64,
    /// Points removed for missed medication doses
    pub medication_penalty: f64,
    /// Points removed for open alerts
    pub alert_penalty: f64,
    /// Points removed for a missing or stale checkup
    pub checkup_penalty: f64,
}

impl HealthScoreBreakdown {
    /// Sum of all factor penalties before clamping
    #[must_use]
    pub fn total_penalty(&self) -> f64 {
        self.weight_penalty
            + self.activity_penalty
            + self.medication_penalty
            + self.alert_penalty
            + self.checkup_penalty
    }
}

/// Computes composite health scores
#[derive(Debug, Clone, Default)]
pub struct HealthScoreAggregator {
    config: HealthScoreConfig,
}

impl HealthScoreAggregator {
    /// Create an aggregator with the default penalty policy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aggregator with a custom penalty policy
    #[must_use]
    pub const fn with_config(config: HealthScoreConfig) -> Self {
        Self { config }
    }

    /// Score a pet as of the given date
    #[must_use]
    pub fn score(&self, pet: &PetProfile, data: &HealthDataBundle, as_of: NaiveDate) -> u8 {
        self.breakdown(pet, data, as_of).score
    }

    /// Score together with per-factor penalties
    #[must_use]
    pub fn breakdown(
        &self,
        pet: &PetProfile,
        data: &HealthDataBundle,
        as_of: NaiveDate,
    ) -> HealthScoreBreakdown {
        let mut breakdown = HealthScoreBreakdown {
            score: 0,
            weight_penalty: Self::weight_penalty(pet),
            activity_penalty: self.activity_penalty(data),
            medication_penalty: self.medication_penalty(data),
            alert_penalty: self.alert_penalty(data),
            checkup_penalty: Self::checkup_penalty(data, as_of),
        };

        let raw = MAX_SCORE - breakdown.total_penalty();
        // NaN survives clamp and casts to 0
        breakdown.score = raw.clamp(0.0, MAX_SCORE).round() as u8;

        debug!(
            pet = pet.id.as_deref().unwrap_or("unknown"),
            score = breakdown.score,
            total_penalty = breakdown.total_penalty(),
            "computed health score"
        );

        breakdown
    }

    /// Score many pets in parallel, preserving input order
    #[must_use]
    pub fn score_batch(&self, pets: &[(PetProfile, HealthDataBundle)], as_of: NaiveDate) -> Vec<u8> {
        pets.par_iter()
            .map(|(pet, data)| self.score(pet, data, as_of))
            .collect()
    }

    fn weight_penalty(pet: &PetProfile) -> f64 {
        let Some(ratio) = pet.weight_ratio() else {
            return 0.0;
        };

        if !(WEIGHT_RATIO_WIDE_LOW..=WEIGHT_RATIO_WIDE_HIGH).contains(&ratio) {
            WEIGHT_PENALTY_SEVERE
        } else if !(WEIGHT_RATIO_NARROW_LOW..=WEIGHT_RATIO_NARROW_HIGH).contains(&ratio) {
            WEIGHT_PENALTY_MILD
        } else {
            0.0
        }
    }

    fn activity_penalty(&self, data: &HealthDataBundle) -> f64 {
        let activity_score = data.activity.as_ref().map_or(
            self.config.default_activity_score,
            |activity| activity.progress.min(MAX_SCORE),
        );
        (MAX_SCORE - activity_score) * self.config.activity_weight
    }

    fn medication_penalty(&self, data: &HealthDataBundle) -> f64 {
        data.average_adherence(DEFAULT_ADHERENCE)
            .map_or(0.0, |adherence| {
                (MAX_SCORE - adherence) * self.config.medication_weight
            })
    }

    #[allow(clippy::cast_precision_loss)] // alert counts are tiny
    fn alert_penalty(&self, data: &HealthDataBundle) -> f64 {
        let high = data.alert_count(AlertSeverity::High) as f64;
        let medium = data.alert_count(AlertSeverity::Medium) as f64;
        high.mul_add(
            self.config.high_alert_penalty,
            medium * self.config.medium_alert_penalty,
        )
    }

    fn checkup_penalty(data: &HealthDataBundle, as_of: NaiveDate) -> f64 {
        let Some(last_visit) = data.last_vet_visit() else {
            return CHECKUP_OVERDUE_PENALTY;
        };

        let days_since = (as_of - last_visit).num_days();
        if days_since > CHECKUP_OVERDUE_DAYS {
            CHECKUP_OVERDUE_PENALTY
        } else if days_since > CHECKUP_DUE_SOON_DAYS {
            CHECKUP_DUE_SOON_PENALTY
        } else {
            0.0
        }
    }
}

/// Score a pet with the default policy as of the given date
#[must_use]
pub fn compute_health_score(pet: &PetProfile, data: &HealthDataBundle, as_of: NaiveDate) -> u8 {
    HealthScoreAggregator::new().score(pet, data, as_of)
}
