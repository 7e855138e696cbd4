// ABOUTME: Integration tests for the composite health score
// ABOUTME: Validates each penalty factor, clamping, rounding, and batch scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    alert, as_of, healthy_bundle, ideal_pet, medication, pet_with_ratio, vet_visit,
};
use pawcare_health::intelligence::config::HealthScoreConfig;
use pawcare_health::intelligence::{compute_health_score, HealthScoreAggregator};
use pawcare_health::models::{
    ActivitySummary, AlertSeverity, HealthDataBundle, HealthRecord, PetProfile, RecordType,
};

fn score(pet: &PetProfile, data: &HealthDataBundle) -> u8 {
    compute_health_score(pet, data, as_of())
}

fn with_weights(current: f64, ideal: f64) -> PetProfile {
    PetProfile {
        current_weight: Some(current),
        ideal_weight: Some(ideal),
        ..ideal_pet()
    }
}

#[test]
fn test_ideal_pet_scores_full_marks() {
    assert_eq!(score(&ideal_pet(), &healthy_bundle()), 100);
}

#[test]
fn test_thirty_percent_overweight_loses_twenty() {
    let pet = pet_with_ratio(1.3);
    assert_eq!(score(&pet, &healthy_bundle()), 80);

    let breakdown = HealthScoreAggregator::new().breakdown(&pet, &healthy_bundle(), as_of());
    assert!((breakdown.weight_penalty - 20.0).abs() < f64::EPSILON);
    assert!((breakdown.total_penalty() - 20.0).abs() < f64::EPSILON);
}

#[test]
fn test_weight_bands() {
    let data = healthy_bundle();

    assert_eq!(score(&with_weights(22.4, 20.0), &data), 90);
    assert_eq!(score(&with_weights(17.6, 20.0), &data), 90);
    assert_eq!(score(&with_weights(16.0, 20.0), &data), 80);
    // 1.15 and 0.85 sit inside the wide band
    assert_eq!(score(&with_weights(23.0, 20.0), &data), 90);
    assert_eq!(score(&with_weights(17.0, 20.0), &data), 90);
    // 1.1 and 0.9 sit inside the narrow band
    assert_eq!(score(&with_weights(22.0, 20.0), &data), 100);
    assert_eq!(score(&with_weights(18.0, 20.0), &data), 100);
}

#[test]
fn test_unknown_or_zero_ideal_weight_is_neutral() {
    let data = healthy_bundle();
    let unknown = PetProfile {
        ideal_weight: None,
        ..ideal_pet()
    };
    let zero = with_weights(20.0, 0.0);

    assert_eq!(score(&unknown, &data), 100);
    assert_eq!(score(&zero, &data), 100);
}

#[test]
fn test_activity_penalty() {
    let mut data = healthy_bundle();

    data.activity = None;
    // default activity 70 costs 7.5, rounded half away from zero
    assert_eq!(score(&ideal_pet(), &data), 93);

    data.activity = Some(ActivitySummary {
        progress: 40.0,
        goal_minutes: None,
        actual_minutes: None,
    });
    assert_eq!(score(&ideal_pet(), &data), 85);

    data.activity = Some(ActivitySummary {
        progress: 150.0,
        goal_minutes: None,
        actual_minutes: None,
    });
    assert_eq!(score(&ideal_pet(), &data), 100);
}

#[test]
fn test_medication_penalty_uses_mean_adherence() {
    let mut data = healthy_bundle();

    data.medications = vec![medication("Apoquel", Some(80.0)), medication("Fish oil", None)];
    assert_eq!(score(&ideal_pet(), &data), 98);

    data.medications.clear();
    assert_eq!(score(&ideal_pet(), &data), 100);
}

#[test]
fn test_alert_penalty_by_severity() {
    let mut data = healthy_bundle();
    data.alerts = vec![
        alert(AlertSeverity::High),
        alert(AlertSeverity::High),
        alert(AlertSeverity::Medium),
        alert(AlertSeverity::Low),
    ];

    assert_eq!(score(&ideal_pet(), &data), 75);
}

#[test]
fn test_checkup_recency() {
    let mut data = healthy_bundle();

    data.records.clear();
    assert_eq!(score(&ideal_pet(), &data), 90);

    data.records = vec![vet_visit(180)];
    assert_eq!(score(&ideal_pet(), &data), 100);

    data.records = vec![vet_visit(181)];
    assert_eq!(score(&ideal_pet(), &data), 95);

    data.records = vec![vet_visit(365)];
    assert_eq!(score(&ideal_pet(), &data), 95);

    data.records = vec![vet_visit(400)];
    assert_eq!(score(&ideal_pet(), &data), 90);

    // the most recent visit wins
    data.records = vec![vet_visit(400), vet_visit(20), vet_visit(200)];
    assert_eq!(score(&ideal_pet(), &data), 100);
}

#[test]
fn test_non_visit_records_do_not_count_as_checkups() {
    let mut data = healthy_bundle();
    data.records = vec![HealthRecord {
        record_type: RecordType::Vaccination,
        date: as_of(),
        title: None,
    }];

    assert_eq!(score(&ideal_pet(), &data), 90);
}

#[test]
fn test_score_clamps_at_zero() {
    let mut data = healthy_bundle();
    data.alerts = (0..20).map(|_| alert(AlertSeverity::High)).collect();
    data.records.clear();

    assert_eq!(score(&pet_with_ratio(2.0), &data), 0);
}

#[test]
fn test_inputs_are_not_mutated() {
    let pet = pet_with_ratio(1.2);
    let data = healthy_bundle();
    let (pet_before, data_before) = (pet.clone(), data.clone());

    let _ = score(&pet, &data);

    assert_eq!(pet, pet_before);
    assert_eq!(data, data_before);
}

#[test]
fn test_custom_penalty_policy() {
    let aggregator = HealthScoreAggregator::with_config(HealthScoreConfig {
        high_alert_penalty: 30.0,
        ..HealthScoreConfig::default()
    });
    let mut data = healthy_bundle();
    data.alerts = vec![alert(AlertSeverity::High)];

    assert_eq!(aggregator.score(&ideal_pet(), &data, as_of()), 70);
}

#[test]
fn test_batch_matches_individual_scores() {
    let mut overdue = healthy_bundle();
    overdue.records.clear();
    let pets = vec![
        (ideal_pet(), healthy_bundle()),
        (pet_with_ratio(1.3), healthy_bundle()),
        (pet_with_ratio(0.88), overdue),
        (PetProfile::default(), HealthDataBundle::default()),
    ];

    let batch = HealthScoreAggregator::new().score_batch(&pets, as_of());
    let individual: Vec<u8> = pets.iter().map(|(pet, data)| score(pet, data)).collect();

    assert_eq!(batch, individual);
    assert_eq!(batch[..3], [100, 80, 80]);
}
