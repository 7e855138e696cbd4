// ABOUTME: Configuration error types for engine configuration validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

//! Configuration error types for engine configuration validation.

use pawcare_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., R² threshold not between 0-1)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error for {variable}: {value:?}")]
    Parse {
        /// Environment variable name
        variable: &'static str,
        /// Raw value that failed to parse
        value: String,
    },

    /// Thresholds that must be ordered are not
    #[error("Invalid threshold ordering: {0}")]
    InvalidOrdering(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::Parse { .. } => ErrorCode::ConfigError,
            ConfigError::InvalidRange(_) | ConfigError::InvalidOrdering(_) => {
                ErrorCode::ConfigInvalid
            }
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
