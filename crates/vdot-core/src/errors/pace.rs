// ABOUTME: Domain error types for time parsing, VDOT resolution and pace derivation
// ABOUTME: Converts into AppError so the CLI reports every failure the same way
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use crate::models::{Duration, RaceDistance, SubDistance};

/// Errors raised along the time → VDOT → pace pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaceError {
    /// Time string does not match the expected clock pattern
    #[error("Invalid time '{input}': expected {expected}")]
    TimeFormat {
        /// The rejected input
        input: String,
        /// Human readable pattern, e.g. `HH:MM:SS`
        expected: &'static str,
    },

    /// Reference time is slower than every threshold for the distance
    #[error("No VDOT found for a {distance} in {time}")]
    VdotNotFound {
        /// Reference race distance
        distance: RaceDistance,
        /// Reference race time
        time: Duration,
    },

    /// VDOT is absent from the pace table
    #[error("No training paces for VDOT {vdot}")]
    PaceLookup {
        /// Requested VDOT
        vdot: u8,
    },

    /// A required sub-distance pace is missing from a pace table row
    #[error("{zone} pace for VDOT {vdot} is missing the required {sub_distance} entry")]
    MissingSubDistance {
        /// VDOT of the incomplete row
        vdot: u8,
        /// Zone label
        zone: &'static str,
        /// The missing sub-distance
        sub_distance: SubDistance,
    },

    /// Reference table violates an ordering or completeness invariant
    #[error("Invalid reference table: {0}")]
    InvalidTable(String),
}

impl PaceError {
    /// Create a time format error
    #[must_use]
    pub fn time_format(input: impl Into<String>, expected: &'static str) -> Self {
        Self::TimeFormat {
            input: input.into(),
            expected,
        }
    }
}
