// ABOUTME: Core data models for the pet health engine
// ABOUTME: Re-exports Observation, PetProfile, HealthDataBundle, and insight types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

//! # Data Models
//!
//! Plain value objects exchanged between the hosting UI and the engine.
//!
//! ## Design Principles
//!
//! - **Immutable inputs**: the engine never mutates what the host passes in
//! - **Optional-tolerant**: missing profile or bundle fields mean "no penalty",
//!   never an error
//! - **Serializable**: every model round-trips through the backend's JSON shape

mod health;
mod insight;
mod observation;
mod pet;

pub use health::{
    ActivitySummary, AlertSeverity, HealthAlert, HealthDataBundle, HealthRecord, Medication,
    RecordType,
};
pub use insight::{HealthInsight, InsightType};
pub use observation::{Observation, WeightHistoryResponse};
pub use pet::{ActivityLevel, BodyCondition, PetProfile};
