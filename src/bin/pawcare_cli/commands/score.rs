// ABOUTME: Score command for pawcare-cli
// ABOUTME: Parses a pet profile with its health data and prints the health report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

use chrono::{NaiveDate, Utc};
use pawcare_health::errors::AppResult;
use pawcare_health::intelligence::{build_health_report, EngineConfig};
use pawcare_health::models::{HealthDataBundle, PetProfile};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::helpers::display::print_json;
use crate::helpers::input::read_input;

/// Pet profile together with its dashboard data
#[derive(Deserialize)]
struct ScoreInput {
    pet: PetProfile,
    #[serde(default, rename = "healthData", alias = "health_data")]
    health_data: HealthDataBundle,
}

/// Build a health report for a pet file and print it
pub fn run(
    file: &Path,
    as_of: Option<NaiveDate>,
    config: &EngineConfig,
    pretty: bool,
) -> AppResult<()> {
    let raw = read_input(file)?;
    let mut input: ScoreInput = serde_json::from_str(&raw)?;
    input
        .health_data
        .weight_history
        .sort_by_key(|observation| observation.date);

    let as_of = as_of.unwrap_or_else(|| Utc::now().date_naive());
    info!(
        pet = input.pet.display_name(),
        %as_of,
        "building health report"
    );

    let report = build_health_report(&input.pet, &input.health_data, as_of, config);
    print_json(&report, pretty)
}
