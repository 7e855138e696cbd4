// ABOUTME: Input helpers for pawcare-cli
// ABOUTME: Reads a JSON document from a file path or from stdin when the path is `-`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

use pawcare_health::errors::{AppError, AppResult};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read the whole input document
pub fn read_input(path: &Path) -> AppResult<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    fs::read_to_string(path).map_err(|e| {
        AppError::from(e).with_details(serde_json::json!({ "path": path.display().to_string() }))
    })
}
