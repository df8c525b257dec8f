// ABOUTME: VDOT resolution from a reference race distance and finish time
// ABOUTME: Scans an ascending threshold table and returns an explicit result instead of a sentinel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use vdot_core::errors::{AppError, PaceError};
use vdot_core::models::{Duration, RaceDistance};

use crate::tables::VDOT_TABLE;

/// A resolved VDOT fitness score
///
/// Zero is not a valid score, so a `Vdot` can never carry the "not found"
/// sentinel the plain table scan would otherwise produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Vdot(u8);

impl Vdot {
    /// Wrap a table score, rejecting zero
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Self(value))
        }
    }

    /// The integer score
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Vdot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the VDOT table: the slowest qualifying time per distance
#[derive(Debug, Clone, Copy)]
pub struct VdotRow {
    /// VDOT score for this row
    pub vdot: u8,
    /// Threshold finish time per race distance
    pub thresholds: &'static [(RaceDistance, Duration)],
}

impl VdotRow {
    /// Threshold for `distance`, if this row lists one
    #[must_use]
    pub fn threshold(&self, distance: RaceDistance) -> Option<Duration> {
        self.thresholds
            .iter()
            .find(|(d, _)| *d == distance)
            .map(|(_, t)| *t)
    }
}

/// How the resolver picks among qualifying rows
///
/// A row qualifies when the reference time is at or under its threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchStrategy {
    /// First qualifying row in ascending VDOT order (the lowest VDOT)
    #[default]
    FirstQualifying,
    /// Last qualifying row in ascending VDOT order (the closest threshold)
    Tightest,
}

impl MatchStrategy {
    /// Get strategy name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FirstQualifying => "first",
            Self::Tightest => "tightest",
        }
    }
}

impl FromStr for MatchStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" | "first_qualifying" => Ok(Self::FirstQualifying),
            "tightest" => Ok(Self::Tightest),
            other => Err(AppError::invalid_input(format!(
                "Unknown match strategy: '{other}'. Valid options: first, tightest"
            ))),
        }
    }
}

/// Ordered VDOT threshold table with a match strategy
#[derive(Debug, Clone, Copy)]
pub struct VdotTable<'a> {
    rows: &'a [VdotRow],
    strategy: MatchStrategy,
}

impl Default for VdotTable<'static> {
    fn default() -> Self {
        Self::new(VDOT_TABLE)
    }
}

impl<'a> VdotTable<'a> {
    /// Wrap `rows`, which must be sorted by ascending VDOT
    #[must_use]
    pub const fn new(rows: &'a [VdotRow]) -> Self {
        Self {
            rows,
            strategy: MatchStrategy::FirstQualifying,
        }
    }

    /// Use `strategy` when several rows qualify
    #[must_use]
    pub const fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Active match strategy
    #[must_use]
    pub const fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Resolve the VDOT for a race `time` over `distance`
    ///
    /// Returns `None` when the time is slower than every threshold listed for
    /// the distance, or the matching row carries a zero VDOT.
    #[must_use]
    pub fn resolve(&self, distance: RaceDistance, time: Duration) -> Option<Vdot> {
        let mut qualifying = self.rows.iter().filter(|row| {
            row.thresholds
                .iter()
                .any(|(d, threshold)| *d == distance && time <= *threshold)
        });

        let row = match self.strategy {
            MatchStrategy::FirstQualifying => qualifying.next(),
            MatchStrategy::Tightest => qualifying.last(),
        }?;
        Vdot::new(row.vdot)
    }

    /// Resolve the VDOT or report that none qualifies
    ///
    /// # Errors
    ///
    /// Returns [`PaceError::VdotNotFound`] when no row qualifies.
    pub fn lookup(&self, distance: RaceDistance, time: Duration) -> Result<Vdot, PaceError> {
        let vdot = self
            .resolve(distance, time)
            .ok_or(PaceError::VdotNotFound { distance, time })?;
        debug!(
            distance = %distance,
            time = %time,
            vdot = vdot.value(),
            strategy = self.strategy.name(),
            "Resolved VDOT"
        );
        Ok(vdot)
    }

    /// Check ordering invariants the scan relies on
    ///
    /// # Errors
    ///
    /// Returns [`PaceError::InvalidTable`] if the table is empty, lists a zero
    /// VDOT, is not strictly ascending, or a distance threshold gets slower as
    /// VDOT rises.
    pub fn validate(&self) -> Result<(), PaceError> {
        if self.rows.is_empty() {
            return Err(PaceError::InvalidTable("VDOT table is empty".to_owned()));
        }
        if let Some(row) = self.rows.iter().find(|row| row.vdot == 0) {
            return Err(PaceError::InvalidTable(format!(
                "VDOT table lists a zero score with {} thresholds",
                row.thresholds.len()
            )));
        }

        for pair in self.rows.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            if lower.vdot >= upper.vdot {
                return Err(PaceError::InvalidTable(format!(
                    "VDOT {} listed before VDOT {}",
                    lower.vdot, upper.vdot
                )));
            }
            for distance in RaceDistance::ALL {
                if let (Some(slow), Some(fast)) =
                    (lower.threshold(distance), upper.threshold(distance))
                {
                    if fast > slow {
                        return Err(PaceError::InvalidTable(format!(
                            "{distance} threshold for VDOT {} ({fast}) is slower than VDOT {} ({slow})",
                            upper.vdot, lower.vdot
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
