// ABOUTME: Health data bundle assembled by the host from several backend resources
// ABOUTME: Activity summary, medications, alerts, and health records consumed by scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

use super::Observation;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate health input for one pet
///
/// Read-only from the engine's point of view: nothing is retained or
/// modified between calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthDataBundle {
    /// Weight readings, ascending by date
    #[serde(default, rename = "weightHistory", alias = "weight_history")]
    pub weight_history: Vec<Observation>,
    /// Activity goal progress, if tracked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<ActivitySummary>,
    /// Active medications
    #[serde(default)]
    pub medications: Vec<Medication>,
    /// Open health alerts
    #[serde(default)]
    pub alerts: Vec<HealthAlert>,
    /// Medical history records
    #[serde(default)]
    pub records: Vec<HealthRecord>,
}

impl HealthDataBundle {
    /// Mean adherence across medications, `None` when no medications exist
    ///
    /// A medication without a reported adherence counts as fully adherent.
    #[must_use]
    pub fn average_adherence(&self, default_adherence: f64) -> Option<f64> {
        if self.medications.is_empty() {
            return None;
        }
        let total: f64 = self
            .medications
            .iter()
            .map(|medication| medication.adherence.unwrap_or(default_adherence))
            .sum();
        #[allow(clippy::cast_precision_loss)] // medication lists are tiny
        Some(total / self.medications.len() as f64)
    }

    /// Number of alerts with the given severity
    #[must_use]
    pub fn alert_count(&self, severity: AlertSeverity) -> usize {
        self.alerts
            .iter()
            .filter(|alert| alert.severity == severity)
            .count()
    }

    /// Date of the most recent vet visit, if any
    #[must_use]
    pub fn last_vet_visit(&self) -> Option<NaiveDate> {
        self.records
            .iter()
            .filter(|record| record.record_type == RecordType::VetVisit)
            .map(|record| record.date)
            .max()
    }
}

/// Progress towards the pet's activity goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    /// Percentage of the goal achieved; may exceed 100
    pub progress: f64,
    /// Daily goal in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_minutes: Option<f64>,
    /// Minutes actually recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_minutes: Option<f64>,
}

/// A prescribed medication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    /// Medication name
    pub name: String,
    /// Percentage of prescribed doses administered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adherence: Option<f64>,
}

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Needs attention soon
    Medium,
    /// Needs attention now
    High,
    /// Informational; unknown severities also land here
    #[serde(other)]
    Low,
}

/// An open health alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAlert {
    /// Severity used for scoring
    pub severity: AlertSeverity,
    /// Short title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Detail message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Kind of medical history record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    /// Clinic checkup
    VetVisit,
    /// Vaccination
    Vaccination,
    /// Medication administration or prescription
    Medication,
    /// Anything else
    #[serde(other)]
    Other,
}

/// A medical history record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    /// Record kind
    #[serde(rename = "type", alias = "record_type")]
    pub record_type: RecordType,
    /// Day of the event
    pub date: NaiveDate,
    /// Short title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
