// ABOUTME: Output format abstraction for rendering pace reports and errors
// ABOUTME: Supports plain text (default) and pretty-printed JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: status line, VDOT line, then one block per training zone
//! - **JSON**: the whole report as a single pretty-printed object
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vdot_paces::formatters::{format_report, OutputFormat};
//! use vdot_paces::intelligence::TrainingPaceCalculator;
//! use vdot_core::models::RaceDistance;
//!
//! let calculator = TrainingPaceCalculator::default();
//! if let Ok(report) = calculator.calculate(RaceDistance::FiveK, "00:20:00") {
//!     if let Ok(output) = format_report(&report, OutputFormat::Json) {
//!         println!("{output}");
//!     }
//! }
//! ```

use serde::Serialize;
use std::error::Error as StdError;
use std::fmt;
use std::str::FromStr;
use vdot_core::errors::{AppError, ErrorResponse};

use crate::intelligence::PaceReport;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::invalid_input(format!(
                "Unknown output format: '{other}'. Valid options: text, json"
            ))),
        }
    }
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl StdError for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::internal(error.message.clone()).with_source(error)
    }
}

/// Render a pace report
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails.
pub fn format_report(report: &PaceReport, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{}\n{}\n\n{}",
            report.status_line(),
            report.vdot_line(),
            report.paces
        )),
        OutputFormat::Json => to_pretty_json(report, format),
    }
}

/// Render an error for stderr
///
/// JSON output falls back to the text form if the error body cannot be
/// serialized.
#[must_use]
pub fn format_error(error: &AppError, format: OutputFormat) -> String {
    let text = format!("Error: {error}");
    match format {
        OutputFormat::Text => text,
        OutputFormat::Json => to_pretty_json(&ErrorResponse::from(error), format).unwrap_or(text),
    }
}

fn to_pretty_json<T: Serialize>(data: &T, format: OutputFormat) -> Result<String, FormatError> {
    serde_json::to_string_pretty(data).map_err(|e| FormatError {
        message: e.to_string(),
        format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::TrainingPaceCalculator;
    use vdot_core::errors::PaceError;
    use vdot_core::models::RaceDistance;

    fn report() -> PaceReport {
        TrainingPaceCalculator::default()
            .calculate(RaceDistance::FiveK, "00:20:00")
            .unwrap()
    }

    #[test]
    fn test_text_report_layout() {
        let text = format_report(&report(), OutputFormat::Text).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Calculating VDOT values using reference race distance is 5k in 0:20:00")
        );
        assert!(lines.next().is_some_and(|l| l.starts_with("VDOT is ")));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("Easy (E):"));
        for header in ["Marathon (M):", "Threshold (T):", "Interval (I):", "Repetition (R):"] {
            assert_eq!(text.matches(header).count(), 1, "missing {header}");
        }
    }

    #[test]
    fn test_json_report_parses_back() {
        let json = format_report(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["paces"]["zones"][0]["zone"], "easy");
        assert_eq!(value["paces"]["zones"][4]["zone"], "repetition");
    }

    #[test]
    fn test_format_error() {
        let error = AppError::from(PaceError::time_format("20:00", "HH:MM:SS"));
        let text = format_error(&error, OutputFormat::Text);
        assert!(text.starts_with("Error: "));
        assert!(text.contains("20:00"));

        let json = format_error(&error, OutputFormat::Json);
        assert!(json.contains("INVALID_FORMAT"));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("toon".parse::<OutputFormat>().is_err());
    }
}
