// ABOUTME: Main library entry point for the Pawcare pet health engine
// ABOUTME: Re-exports the core models and the intelligence engine, and owns logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

#![deny(unsafe_code)]

//! # Pawcare Health
//!
//! Statistics and trend engine behind the Pawcare weight charts and health
//! dashboard.
//!
//! ## Architecture
//!
//! - **`pawcare-core`**: errors, policy constants, and data models
//! - **`pawcare-intelligence`**: statistics, trends, smoothing, scoring, and insights
//! - **logging**: tracing subscriber setup shared by binaries
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pawcare_health::intelligence::{analyze_series, EngineConfig, TrendDirection};
//! use pawcare_health::models::Observation;
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let series: Vec<Observation> = [10.0, 10.4, 10.9, 11.3]
//!     .iter()
//!     .zip(start.iter_days())
//!     .map(|(&value, date)| Observation::new(date, value))
//!     .collect();
//!
//! let analysis = analyze_series(&series, &EngineConfig::default());
//! assert_eq!(analysis.trend.direction, TrendDirection::Increasing);
//! ```

/// Unified error handling with `AppError` and `ErrorCode`
pub use pawcare_core::errors;

/// Policy constants organized by domain
pub use pawcare_core::constants;

/// Observations, pet profiles, health bundles, and insights
pub use pawcare_core::models;

/// Statistics, trend, smoothing, and scoring engine
pub use pawcare_intelligence as intelligence;

/// Logging configuration and subscriber setup
pub mod logging;
