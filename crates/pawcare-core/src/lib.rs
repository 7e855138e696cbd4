// ABOUTME: Core types and constants for the Pawcare pet health engine
// ABOUTME: Foundation crate with error handling, domain models, and policy constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

#![deny(unsafe_code)]

//! # Pawcare Core
//!
//! Foundation crate providing shared types and constants for the Pawcare pet
//! health engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Scoring and classification thresholds organized by domain
//! - **models**: Observations, pet profiles, health data bundles and insights

/// Unified error handling system with standard error codes
pub mod errors;

/// Policy constants organized by domain
pub mod constants;

/// Core data models (Observation, `PetProfile`, `HealthDataBundle`, etc.)
pub mod models;
