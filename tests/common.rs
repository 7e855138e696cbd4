// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Builds observation series, pet profiles, and health data bundles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test fixtures for `pawcare_health`

use chrono::{Duration, NaiveDate};
use pawcare_health::models::{
    ActivitySummary, AlertSeverity, HealthAlert, HealthDataBundle, HealthRecord, Medication,
    Observation, PetProfile, RecordType,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed evaluation date used across tests
pub fn as_of() -> NaiveDate {
    date(2025, 6, 1)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Daily observations starting on 2025-01-01
pub fn series(values: &[f64]) -> Vec<Observation> {
    values
        .iter()
        .zip(date(2025, 1, 1).iter_days())
        .map(|(&value, day)| Observation::new(day, value))
        .collect()
}

/// Pet with a known weight ratio
pub fn pet_with_ratio(ratio: f64) -> PetProfile {
    PetProfile {
        id: Some("pet-1".to_owned()),
        name: Some("Biscuit".to_owned()),
        species: Some("dog".to_owned()),
        current_weight: Some(20.0 * ratio),
        ideal_weight: Some(20.0),
        ..PetProfile::default()
    }
}

/// Pet at exactly its ideal weight with an ideal body condition
pub fn ideal_pet() -> PetProfile {
    PetProfile {
        body_condition_score: Some(5),
        ..pet_with_ratio(1.0)
    }
}

pub fn vet_visit(days_ago: i64) -> HealthRecord {
    HealthRecord {
        record_type: RecordType::VetVisit,
        date: as_of() - Duration::days(days_ago),
        title: Some("Annual checkup".to_owned()),
    }
}

pub fn alert(severity: AlertSeverity) -> HealthAlert {
    HealthAlert {
        severity,
        title: None,
        message: None,
    }
}

pub fn medication(name: &str, adherence: Option<f64>) -> Medication {
    Medication {
        name: name.to_owned(),
        adherence,
    }
}

/// Bundle where every factor is neutral or maximal
pub fn healthy_bundle() -> HealthDataBundle {
    HealthDataBundle {
        weight_history: series(&[20.0, 20.0, 20.1, 20.0]),
        activity: Some(ActivitySummary {
            progress: 100.0,
            goal_minutes: Some(60.0),
            actual_minutes: Some(60.0),
        }),
        medications: vec![medication("Heartworm", Some(100.0))],
        alerts: Vec::new(),
        records: vec![vet_visit(30)],
    }
}
