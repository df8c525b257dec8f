// ABOUTME: vdot-paces CLI - resolves a VDOT from a reference race and prints training paces
// ABOUTME: Parses arguments, initializes logging, runs the calculator and renders the report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Training paces from a 20:00 5k
//! vdot-paces 5k 00:20:00
//!
//! # Same, as JSON, picking the closest VDOT threshold
//! vdot-paces 5k 00:20:00 --format json --strategy tightest
//! ```

use clap::Parser;
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{debug, error};
use vdot_core::errors::{AppError, AppResult};
use vdot_core::models::RaceDistance;
use vdot_paces::config::CalculatorConfig;
use vdot_paces::formatters::{format_error, format_report, OutputFormat};
use vdot_paces::intelligence::{MatchStrategy, TrainingPaceCalculator};
use vdot_paces::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "vdot-paces",
    version,
    about = "VDOT and training paces from a reference race",
    long_about = "Looks up a VDOT fitness score from a reference race time and prints Easy, Marathon, Threshold, Interval and Repetition paces per mile."
)]
struct Cli {
    /// The reference race distance (5k)
    #[arg(value_parser = RaceDistance::from_str)]
    distance: RaceDistance,

    /// The reference race time, in HH:MM:SS format
    time: String,

    /// Output format (overrides `VDOT_OUTPUT_FORMAT`)
    #[arg(long, value_parser = OutputFormat::from_str)]
    format: Option<OutputFormat>,

    /// VDOT match strategy (overrides `VDOT_MATCH_STRATEGY`)
    #[arg(long, value_parser = MatchStrategy::from_str)]
    strategy: Option<MatchStrategy>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    if let Err(e) = logging.init() {
        eprintln!("{e}");
    }

    let mut config = CalculatorConfig::from_env();
    if let Some(format) = cli.format {
        config = config.with_output_format(format);
    }
    if let Some(strategy) = cli.strategy {
        config = config.with_match_strategy(strategy);
    }

    match run(&cli, config) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Table defects are logged; bad input only shows up with --verbose
            if e.code.is_user_error() {
                debug!(code = ?e.code, "{}", e.message);
            } else {
                error!(code = ?e.code, "{}", e.message);
            }
            eprintln!("{}", format_error(&e, config.output_format));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: CalculatorConfig) -> AppResult<String> {
    let calculator = TrainingPaceCalculator::default().with_strategy(config.match_strategy);
    calculator.validate().map_err(AppError::from)?;

    let report = calculator.calculate(cli.distance, &cli.time)?;
    let mut output = format_report(&report, config.output_format)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}
