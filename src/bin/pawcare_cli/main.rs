// ABOUTME: Pawcare CLI - runs the statistics engine over JSON exports from the command line
// ABOUTME: Analyzes weight series and builds pet health reports, printing JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pawcare Health
//!
//! Usage:
//! ```bash
//! # Analyze a weight history export with a 5-point smoothing window
//! pawcare-cli series weight_history.json --window 5
//!
//! # Build a health report as of a fixed date
//! pawcare-cli score pet.json --as-of 2025-06-01 --pretty
//!
//! # Read from stdin with debug logging
//! cat weight_history.json | pawcare-cli series - --verbose
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pawcare_health::errors::AppError;
use pawcare_health::intelligence::EngineConfig;
use pawcare_health::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pawcare-cli",
    about = "Pawcare health statistics engine",
    long_about = "Runs descriptive statistics, trend estimation, smoothing, and health scoring over JSON exports."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Analyze a weight series (statistics, trend, smoothing, band, outliers)
    Series {
        /// Weight history response or observation array, `-` for stdin
        file: PathBuf,

        /// Smoothing window override
        #[arg(long)]
        window: Option<usize>,
    },

    /// Build a health report for one pet
    Score {
        /// Object with `pet` and `healthData`, `-` for stdin
        file: PathBuf,

        /// Evaluation date (defaults to today, UTC)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let config = EngineConfig::from_environment().map_err(AppError::from)?;
    debug!(?config, "loaded engine configuration");

    match cli.command {
        Command::Series { file, window } => {
            commands::series::run(&file, window, &config, cli.pretty)?;
        }
        Command::Score { file, as_of } => {
            commands::score::run(&file, as_of, &config, cli.pretty)?;
        }
    }

    Ok(())
}
