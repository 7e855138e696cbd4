// ABOUTME: Output formatting helpers for pawcare-cli
// ABOUTME: Writes serializable results to stdout as compact or pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

use pawcare_health::errors::AppResult;
use serde::Serialize;

/// Print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
