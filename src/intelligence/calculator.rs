// ABOUTME: End-to-end pipeline from a reference race to training paces
// ABOUTME: Parses the race time, resolves the VDOT and derives per-mile paces in one pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use tracing::{debug, info};
use vdot_core::errors::PaceError;
use vdot_core::models::{Duration, RaceDistance};

use crate::intelligence::training_paces::{PaceSet, PaceTable};
use crate::intelligence::vdot::{MatchStrategy, Vdot, VdotTable};

/// Result of one calculation, discarded after output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaceReport {
    /// Reference race distance
    pub distance: RaceDistance,
    /// Reference race time
    #[serde(serialize_with = "serialize_clock")]
    pub time: Duration,
    /// Resolved VDOT
    pub vdot: Vdot,
    /// Training paces for that VDOT
    pub paces: PaceSet,
}

impl PaceReport {
    /// Line describing the parsed inputs
    #[must_use]
    pub fn status_line(&self) -> String {
        format!(
            "Calculating VDOT values using reference race distance is {} in {}",
            self.distance,
            self.time.to_clock_string()
        )
    }

    /// Line announcing the resolved VDOT
    #[must_use]
    pub fn vdot_line(&self) -> String {
        format!("VDOT is {}", self.vdot)
    }
}

fn serialize_clock<S: serde::Serializer>(time: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.to_clock_string())
}

/// Resolves a VDOT from a race and derives its training paces
#[derive(Debug, Clone, Copy)]
pub struct TrainingPaceCalculator<'a> {
    vdot_table: VdotTable<'a>,
    pace_table: PaceTable<'a>,
}

impl Default for TrainingPaceCalculator<'static> {
    fn default() -> Self {
        Self::new(VdotTable::default(), PaceTable::default())
    }
}

impl<'a> TrainingPaceCalculator<'a> {
    /// Build from explicit tables
    #[must_use]
    pub const fn new(vdot_table: VdotTable<'a>, pace_table: PaceTable<'a>) -> Self {
        Self {
            vdot_table,
            pace_table,
        }
    }

    /// Use `strategy` when several VDOT rows qualify
    #[must_use]
    pub const fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.vdot_table = self.vdot_table.with_strategy(strategy);
        self
    }

    /// Check both reference tables
    ///
    /// # Errors
    ///
    /// Returns [`PaceError::InvalidTable`] or a row parse error when either
    /// table breaks its ordering or completeness invariants.
    pub fn validate(&self) -> Result<(), PaceError> {
        self.vdot_table.validate()?;
        self.pace_table.validate()
    }

    /// Run the full pipeline for a race `time` string in `HH:MM:SS` form
    ///
    /// # Errors
    ///
    /// Returns [`PaceError::TimeFormat`] for a malformed time,
    /// [`PaceError::VdotNotFound`] when the time is slower than every
    /// threshold, and [`PaceError::PaceLookup`] when the pace table lacks the
    /// resolved VDOT.
    pub fn calculate(&self, distance: RaceDistance, time: &str) -> Result<PaceReport, PaceError> {
        let time = Duration::parse_clock(time)?;
        debug!(distance = %distance, time = %time, "Parsed reference race");
        self.calculate_for(distance, time)
    }

    /// Run the pipeline for an already parsed race time
    ///
    /// # Errors
    ///
    /// Same as [`Self::calculate`], minus the time format error.
    pub fn calculate_for(
        &self,
        distance: RaceDistance,
        time: Duration,
    ) -> Result<PaceReport, PaceError> {
        let vdot = self.vdot_table.lookup(distance, time)?;
        let paces = self.pace_table.derive(vdot)?;
        info!(distance = %distance, time = %time, vdot = vdot.value(), "Training paces ready");
        Ok(PaceReport {
            distance,
            time,
            vdot,
            paces,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lines() {
        let report = TrainingPaceCalculator::default()
            .calculate(RaceDistance::FiveK, "00:20:00")
            .unwrap();
        assert_eq!(
            report.status_line(),
            "Calculating VDOT values using reference race distance is 5k in 0:20:00"
        );
        assert_eq!(report.vdot_line(), format!("VDOT is {}", report.vdot));
    }

    #[test]
    fn test_time_format_error_short_circuits() {
        let err = TrainingPaceCalculator::default()
            .calculate(RaceDistance::FiveK, "20:00")
            .unwrap_err();
        assert!(matches!(err, PaceError::TimeFormat { .. }));
    }

    #[test]
    fn test_report_serializes_clock_time() {
        let report = TrainingPaceCalculator::default()
            .calculate(RaceDistance::FiveK, "00:25:00")
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["distance"], "5k");
        assert_eq!(json["time"], "0:25:00");
        assert_eq!(json["paces"]["zones"].as_array().map(Vec::len), Some(5));
    }
}
