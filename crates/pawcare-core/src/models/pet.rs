// ABOUTME: Pet profile model with weight and body condition fields
// ABOUTME: PetProfile, ActivityLevel, and body condition score interpretation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

use serde::{Deserialize, Serialize};

/// Owner-declared activity level of a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Mostly resting
    Low,
    /// Daily walks or play
    Moderate,
    /// Regular vigorous exercise
    High,
    /// Working or sporting animal
    VeryHigh,
}

/// Interpretation of a 1-9 body condition score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyCondition {
    /// Scores 1-3: ribs and hip bones easily visible
    Underweight,
    /// Scores 4-5
    Ideal,
    /// Scores 6-7: fat cover obscures the waist
    Overweight,
    /// Scores 8-9
    Obese,
}

impl BodyCondition {
    /// Classify a body condition score; `None` outside the 1-9 scale
    #[must_use]
    pub const fn from_score(score: u8) -> Option<Self> {
        match score {
            1..=3 => Some(Self::Underweight),
            4..=5 => Some(Self::Ideal),
            6..=7 => Some(Self::Overweight),
            8..=9 => Some(Self::Obese),
            _ => None,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Ideal => "ideal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }
}

/// Profile fields of a pet used by scoring and insights
///
/// Every field is optional; an absent field removes the corresponding
/// factor from the score rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PetProfile {
    /// Backend identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Species (dog, cat, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    /// Latest recorded weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_weight: Option<f64>,
    /// Target weight set by the vet, same unit as `current_weight`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_weight: Option<f64>,
    /// Declared activity level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Body condition score on the 1-9 scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_condition_score: Option<u8>,
}

impl PetProfile {
    /// Ratio of current to ideal weight, when both are known and ideal is positive
    #[must_use]
    pub fn weight_ratio(&self) -> Option<f64> {
        match (self.current_weight, self.ideal_weight) {
            (Some(current), Some(ideal)) if ideal > 0.0 => Some(current / ideal),
            _ => None,
        }
    }

    /// Interpreted body condition, when a valid score is present
    #[must_use]
    pub fn body_condition(&self) -> Option<BodyCondition> {
        self.body_condition_score.and_then(BodyCondition::from_score)
    }

    /// Name to use in messages
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Your pet")
    }
}
