// ABOUTME: Advisory insight generation from a pet profile and its health data bundle
// ABOUTME: Weight, body condition, activity, medication, and alert insights for dashboard cards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

//! Insight generation for the pet health dashboard

use pawcare_core::constants::health_score::{
    DEFAULT_ADHERENCE, WEIGHT_RATIO_NARROW_HIGH, WEIGHT_RATIO_NARROW_LOW,
};
use pawcare_core::constants::insights::{
    ACTIVITY_GOAL_PROGRESS, LOW_ACTIVITY_PROGRESS, LOW_ADHERENCE,
};
use pawcare_core::models::{
    AlertSeverity, BodyCondition, HealthDataBundle, HealthInsight, InsightType, PetProfile,
};
use serde::{Deserialize, Serialize};

/// Thresholds for insight generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Weight ratio below which an underweight warning is raised
    pub weight_ratio_low: f64,
    /// Weight ratio above which an overweight warning is raised
    pub weight_ratio_high: f64,
    /// Activity progress below which a low-activity note is raised
    pub low_activity_progress: f64,
    /// Activity progress at which the goal counts as reached
    pub activity_goal_progress: f64,
    /// Mean adherence below which an adherence error is raised
    pub low_adherence: f64,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            weight_ratio_low: WEIGHT_RATIO_NARROW_LOW,
            weight_ratio_high: WEIGHT_RATIO_NARROW_HIGH,
            low_activity_progress: LOW_ACTIVITY_PROGRESS,
            activity_goal_progress: ACTIVITY_GOAL_PROGRESS,
            low_adherence: LOW_ADHERENCE,
        }
    }
}

/// Generates advisory insights
#[derive(Debug, Clone, Default)]
pub struct InsightGenerator {
    config: InsightConfig,
}

impl InsightGenerator {
    /// Create a generator with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with custom thresholds
    #[must_use]
    pub const fn with_config(config: InsightConfig) -> Self {
        Self { config }
    }

    /// Generate insights in display order
    ///
    /// Weight comes first, then body condition, activity, medication, and
    /// alerts. When nothing needs attention a single success card is returned.
    #[must_use]
    pub fn generate(&self, pet: &PetProfile, data: &HealthDataBundle) -> Vec<HealthInsight> {
        let mut insights = Vec::new();

        insights.extend(self.weight_insight(pet));
        insights.extend(Self::body_condition_insight(pet));
        insights.extend(self.activity_insight(data));
        insights.extend(self.medication_insight(data));
        insights.extend(Self::alert_insight(data));

        if insights.is_empty() {
            insights.push(HealthInsight::new(
                InsightType::Success,
                "Looking Healthy",
                format!("{} has no health concerns right now.", pet.display_name()),
                "Keep up the current routine",
            ));
        }

        insights
    }

    fn weight_insight(&self, pet: &PetProfile) -> Option<HealthInsight> {
        let ratio = pet.weight_ratio()?;
        let percent = ((ratio - 1.0) * 100.0).abs();
        let name = pet.display_name();

        if ratio > self.config.weight_ratio_high {
            Some(HealthInsight::new(
                InsightType::Warning,
                "Weight Above Ideal",
                format!("{name} is {percent:.0}% above ideal weight."),
                "Review diet and portion sizes with your vet",
            ))
        } else if ratio < self.config.weight_ratio_low {
            Some(HealthInsight::new(
                InsightType::Warning,
                "Weight Below Ideal",
                format!("{name} is {percent:.0}% below ideal weight."),
                "Schedule a nutrition check with your vet",
            ))
        } else {
            None
        }
    }

    fn body_condition_insight(pet: &PetProfile) -> Option<HealthInsight> {
        let condition = pet.body_condition()?;
        let score = pet.body_condition_score?;
        let name = pet.display_name();

        match condition {
            BodyCondition::Ideal => None,
            BodyCondition::Underweight => Some(HealthInsight::new(
                InsightType::Warning,
                "Body Condition Low",
                format!("{name} has a body condition score of {score}/9 (underweight)."),
                "Ask your vet about a weight gain plan",
            )),
            BodyCondition::Overweight | BodyCondition::Obese => Some(HealthInsight::new(
                InsightType::Warning,
                "Body Condition Elevated",
                format!(
                    "{name} has a body condition score of {score}/9 ({}).",
                    condition.label()
                ),
                "Increase exercise and review calorie intake",
            )),
        }
    }

    fn activity_insight(&self, data: &HealthDataBundle) -> Option<HealthInsight> {
        let progress = data.activity.as_ref()?.progress;

        if progress < self.config.low_activity_progress {
            Some(HealthInsight::new(
                InsightType::Info,
                "Low Activity",
                format!("Only {progress:.0}% of the activity goal has been reached."),
                "Add a short walk or play session today",
            ))
        } else if progress >= self.config.activity_goal_progress {
            Some(HealthInsight::new(
                InsightType::Success,
                "Activity Goal Reached",
                format!("{progress:.0}% of the activity goal completed."),
                "Keep the routine going",
            ))
        } else {
            None
        }
    }

    fn medication_insight(&self, data: &HealthDataBundle) -> Option<HealthInsight> {
        let adherence = data.average_adherence(DEFAULT_ADHERENCE)?;
        (adherence < self.config.low_adherence).then(|| {
            HealthInsight::new(
                InsightType::Error,
                "Medication Adherence",
                format!("Average medication adherence is {adherence:.0}%."),
                "Set reminders for each scheduled dose",
            )
        })
    }

    fn alert_insight(data: &HealthDataBundle) -> Option<HealthInsight> {
        let high = data.alert_count(AlertSeverity::High);
        (high > 0).then(|| {
            HealthInsight::new(
                InsightType::Error,
                "Active High-Severity Alerts",
                format!("{high} high-severity alert(s) need attention."),
                "Contact your vet",
            )
        })
    }
}

/// Generate insights with default thresholds
#[must_use]
pub fn generate_health_insights(pet: &PetProfile, data: &HealthDataBundle) -> Vec<HealthInsight> {
    InsightGenerator::new().generate(pet, data)
}
