// ABOUTME: Series command for pawcare-cli
// ABOUTME: Parses a weight history export and prints the full series analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

use pawcare_health::errors::AppResult;
use pawcare_health::intelligence::{analyze_series, EngineConfig};
use pawcare_health::models::{Observation, WeightHistoryResponse};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::helpers::display::print_json;
use crate::helpers::input::read_input;

/// Accepted shapes for a series file
#[derive(Deserialize)]
#[serde(untagged)]
enum SeriesInput {
    Response(WeightHistoryResponse),
    Observations(Vec<Observation>),
}

impl SeriesInput {
    fn into_observations(self) -> AppResult<Vec<Observation>> {
        match self {
            Self::Response(response) => response.into_sorted_observations(),
            Self::Observations(mut observations) => {
                observations.sort_by_key(|observation| observation.date);
                Ok(observations)
            }
        }
    }
}

/// Analyze a series file and print the result
pub fn run(
    file: &Path,
    window: Option<usize>,
    config: &EngineConfig,
    pretty: bool,
) -> AppResult<()> {
    let raw = read_input(file)?;
    let series = serde_json::from_str::<SeriesInput>(&raw)?.into_observations()?;

    let mut config = config.clone();
    if let Some(window) = window {
        config.smoothing.window_size = window;
    }

    info!(
        points = series.len(),
        window = config.smoothing.window_size,
        "analyzing series"
    );

    let analysis = analyze_series(&series, &config);
    print_json(&analysis, pretty)
}
