// ABOUTME: Time-series observation model and the weight history payload it arrives in
// ABOUTME: Observation, WeightHistoryResponse, and date-sorting conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

use crate::errors::{AppError, AppResult, ErrorCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated numeric sample in a series (e.g. a weight reading)
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use pawcare_core::models::Observation;
///
/// let reading = Observation::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), 12.4);
/// assert!(reading.smoothed_value.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Day the sample was recorded
    pub date: NaiveDate,
    /// Sample value. Accepts the backend's `weight` key as an alias.
    #[serde(alias = "weight")]
    pub value: f64,
    /// Free-form notes attached by the owner or clinic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Smoothed value, populated only on copies returned by the smoother
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoothed_value: Option<f64>,
}

impl Observation {
    /// Create an observation without notes
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            value,
            notes: None,
            smoothed_value: None,
        }
    }

    /// Attach notes to the observation
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Backend response carrying a pet's weight history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightHistoryResponse {
    /// Whether the backend considered the request successful
    pub success: bool,
    /// Weight readings in whatever order the backend returned them
    #[serde(default, rename = "weightHistory")]
    pub weight_history: Vec<Observation>,
    /// Error or status message from the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WeightHistoryResponse {
    /// Convert into observations sorted by ascending date
    ///
    /// The trend estimator assumes sorted input; this is the place where a
    /// host that fetched the history from the backend gets that ordering.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend reported `success: false`
    pub fn into_sorted_observations(self) -> AppResult<Vec<Observation>> {
        if !self.success {
            let message = self
                .message
                .unwrap_or_else(|| "weight history request was not successful".to_owned());
            return Err(AppError::new(ErrorCode::InvalidInput, message));
        }

        let mut observations = self.weight_history;
        observations.sort_by_key(|observation| observation.date);
        Ok(observations)
    }
}
