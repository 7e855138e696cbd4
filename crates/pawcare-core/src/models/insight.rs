// ABOUTME: Advisory insight records produced from a pet profile and health data
// ABOUTME: HealthInsight and InsightType definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

use serde::{Deserialize, Serialize};

/// Presentation category of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// Something trending the wrong way
    Warning,
    /// Neutral observation
    Info,
    /// Requires prompt action
    Error,
    /// Positive reinforcement
    Success,
}

/// An advisory record rendered as an insight card by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthInsight {
    /// Insight category
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    /// Card title
    pub title: String,
    /// Explanation shown to the owner
    pub message: String,
    /// Suggested next step
    pub action: String,
}

impl HealthInsight {
    /// Create an insight
    pub fn new(
        insight_type: InsightType,
        title: impl Into<String>,
        message: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            insight_type,
            title: title.into(),
            message: message.into(),
            action: action.into(),
        }
    }
}
