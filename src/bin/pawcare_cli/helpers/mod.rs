// ABOUTME: Helper modules for pawcare-cli
// ABOUTME: Input reading and JSON output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health

pub mod display;
pub mod input;
