// ABOUTME: Re-exports command modules for pawcare-cli
// ABOUTME: Provides the series analysis and health score commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

pub mod score;
pub mod series;
