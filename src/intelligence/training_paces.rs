// ABOUTME: Training pace derivation from a resolved VDOT (Easy, Marathon, Threshold, Interval, Repetition)
// ABOUTME: Parses table pace strings and normalizes every zone to a per-mile pace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training Paces
//!
//! Looks up the Daniels pace row for a VDOT and converts each zone to a pace
//! per mile. Track paces quoted over 200 m, 400 m or 1 km are scaled by
//! `1600 / meters`, so a 400 m split of 1:42 becomes 6:48 per mile.
//!
//! ## Zones
//!
//! - **Easy**: fastest and slowest easy pace per mile
//! - **Marathon**: a single pace per mile
//! - **Threshold**: 400 m, km and mile paces, all required
//! - **Interval**: 400 m required; km and mile only when the table has them
//! - **Repetition**: 200 m required; 400 m only when the table has it

use serde::Serialize;
use std::fmt;
use tracing::debug;
use vdot_core::constants::zones;
use vdot_core::errors::PaceError;
use vdot_core::models::{Duration, SubDistance};

use crate::intelligence::vdot::Vdot;
use crate::tables::PACE_TABLE;

/// Sub-distance → pace string pairs for one zone
pub type ZoneSpec = &'static [(SubDistance, &'static str)];

/// One row of the pace table
#[derive(Debug, Clone, Copy)]
pub struct PaceRow {
    /// VDOT score for this row
    pub vdot: u8,
    /// Easy pace per mile, fastest then slowest
    pub easy: [&'static str; 2],
    /// Marathon pace per mile
    pub marathon: &'static str,
    /// Threshold paces
    pub threshold: ZoneSpec,
    /// Interval paces
    pub interval: ZoneSpec,
    /// Repetition paces
    pub repetition: ZoneSpec,
}

/// A training zone with its paces normalized to per mile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "zone", rename_all = "snake_case")]
pub enum PaceZone {
    /// Easy and long runs
    Easy {
        /// Fastest easy pace
        min: Duration,
        /// Slowest easy pace
        max: Duration,
    },
    /// Marathon race pace
    Marathon {
        /// Pace per mile
        pace: Duration,
    },
    /// Comfortably hard tempo pace
    Threshold {
        /// From the 400 m split
        per_400: Duration,
        /// From the km split
        per_km: Duration,
        /// From the mile split
        per_mile: Duration,
    },
    /// VO2max intervals
    Interval {
        /// From the 400 m split
        per_400: Duration,
        /// From the km split, when listed
        #[serde(skip_serializing_if = "Option::is_none")]
        per_km: Option<Duration>,
        /// From the mile split, when listed
        #[serde(skip_serializing_if = "Option::is_none")]
        per_mile: Option<Duration>,
    },
    /// Fast repetitions
    Repetition {
        /// From the 200 m split
        per_200: Duration,
        /// From the 400 m split, when listed
        #[serde(skip_serializing_if = "Option::is_none")]
        per_400: Option<Duration>,
    },
}

impl PaceZone {
    /// Zone name
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Easy { .. } => zones::EASY,
            Self::Marathon { .. } => zones::MARATHON,
            Self::Threshold { .. } => zones::THRESHOLD,
            Self::Interval { .. } => zones::INTERVAL,
            Self::Repetition { .. } => zones::REPETITION,
        }
    }

    /// Single-letter zone symbol
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Easy { .. } => 'E',
            Self::Marathon { .. } => 'M',
            Self::Threshold { .. } => 'T',
            Self::Interval { .. } => 'I',
            Self::Repetition { .. } => 'R',
        }
    }

    /// Tagged per-mile paces in render order; absent optional paces are skipped
    #[must_use]
    pub fn lines(&self) -> Vec<(&'static str, Duration)> {
        let tagged: [(&'static str, Option<Duration>); 3] = match *self {
            Self::Easy { min, max } => [("min", Some(min)), ("max", Some(max)), ("", None)],
            Self::Marathon { pace } => [("mile", Some(pace)), ("", None), ("", None)],
            Self::Threshold {
                per_400,
                per_km,
                per_mile,
            } => [
                ("400", Some(per_400)),
                ("km", Some(per_km)),
                ("mile", Some(per_mile)),
            ],
            Self::Interval {
                per_400,
                per_km,
                per_mile,
            } => [("400", Some(per_400)), ("km", per_km), ("mile", per_mile)],
            Self::Repetition { per_200, per_400 } => {
                [("200", Some(per_200)), ("400", per_400), ("", None)]
            }
        };
        tagged
            .into_iter()
            .filter_map(|(tag, pace)| pace.map(|p| (tag, p)))
            .collect()
    }
}

impl fmt::Display for PaceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}):", self.label(), self.symbol())?;
        for (tag, pace) in self.lines() {
            writeln!(f, "  {tag:>4}: {pace}/mile")?;
        }
        Ok(())
    }
}

/// Per-mile paces for all five zones at one VDOT
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaceSet {
    /// VDOT the paces were derived for
    pub vdot: Vdot,
    /// Zones in E, M, T, I, R order
    pub zones: [PaceZone; 5],
}

impl fmt::Display for PaceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, zone) in self.zones.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{zone}")?;
        }
        Ok(())
    }
}

/// Pace table keyed by VDOT
#[derive(Debug, Clone, Copy)]
pub struct PaceTable<'a> {
    rows: &'a [PaceRow],
}

impl Default for PaceTable<'static> {
    fn default() -> Self {
        Self::new(PACE_TABLE)
    }
}

impl<'a> PaceTable<'a> {
    /// Wrap `rows`, sorted by ascending VDOT
    #[must_use]
    pub const fn new(rows: &'a [PaceRow]) -> Self {
        Self { rows }
    }

    /// Row for `vdot`
    ///
    /// # Errors
    ///
    /// Returns [`PaceError::PaceLookup`] when the table has no row for `vdot`.
    pub fn row(&self, vdot: Vdot) -> Result<&'a PaceRow, PaceError> {
        self.rows
            .iter()
            .find(|row| row.vdot == vdot.value())
            .ok_or(PaceError::PaceLookup { vdot: vdot.value() })
    }

    /// Derive the five per-mile training zones for `vdot`
    ///
    /// # Errors
    ///
    /// Returns [`PaceError::PaceLookup`] if `vdot` is absent,
    /// [`PaceError::TimeFormat`] if a table pace does not parse, and
    /// [`PaceError::MissingSubDistance`] if a required split is missing.
    pub fn derive(&self, vdot: Vdot) -> Result<PaceSet, PaceError> {
        let row = self.row(vdot)?;
        let zones = derive_zones(row)?;
        debug!(vdot = vdot.value(), "Derived training paces");
        Ok(PaceSet { vdot, zones })
    }

    /// Check ordering and completeness of every row
    ///
    /// # Errors
    ///
    /// Returns [`PaceError::InvalidTable`] for an empty or unsorted table, or
    /// the underlying parse or completeness error for a bad row.
    pub fn validate(&self) -> Result<(), PaceError> {
        if self.rows.is_empty() {
            return Err(PaceError::InvalidTable("Pace table is empty".to_owned()));
        }
        for pair in self.rows.windows(2) {
            if pair[0].vdot >= pair[1].vdot {
                return Err(PaceError::InvalidTable(format!(
                    "VDOT {} listed before VDOT {}",
                    pair[0].vdot, pair[1].vdot
                )));
            }
        }
        self.rows.iter().try_for_each(|row| derive_zones(row).map(|_| ()))
    }
}

fn derive_zones(row: &PaceRow) -> Result<[PaceZone; 5], PaceError> {
    let [fastest, slowest] = row.easy;
    let easy = PaceZone::Easy {
        min: per_mile(SubDistance::Mile, fastest)?,
        max: per_mile(SubDistance::Mile, slowest)?,
    };
    let marathon = PaceZone::Marathon {
        pace: per_mile(SubDistance::Mile, row.marathon)?,
    };

    let threshold = ZonePaces::new(row, zones::THRESHOLD, row.threshold);
    let interval = ZonePaces::new(row, zones::INTERVAL, row.interval);
    let repetition = ZonePaces::new(row, zones::REPETITION, row.repetition);

    Ok([
        easy,
        marathon,
        PaceZone::Threshold {
            per_400: threshold.required(SubDistance::Meters400)?,
            per_km: threshold.required(SubDistance::Kilometer)?,
            per_mile: threshold.required(SubDistance::Mile)?,
        },
        PaceZone::Interval {
            per_400: interval.required(SubDistance::Meters400)?,
            per_km: interval.optional(SubDistance::Kilometer)?,
            per_mile: interval.optional(SubDistance::Mile)?,
        },
        PaceZone::Repetition {
            per_200: repetition.required(SubDistance::Meters200)?,
            per_400: repetition.optional(SubDistance::Meters400)?,
        },
    ])
}

/// Parse a table pace over `sub_distance` and convert it to per mile
fn per_mile(sub_distance: SubDistance, pace: &str) -> Result<Duration, PaceError> {
    let parsed = Duration::parse_pace(pace)?;
    sub_distance.to_per_mile(parsed).ok_or_else(|| {
        PaceError::InvalidTable(format!("{sub_distance} pace '{pace}' overflows"))
    })
}

struct ZonePaces<'r> {
    vdot: u8,
    zone: &'static str,
    entries: &'r [(SubDistance, &'static str)],
}

impl<'r> ZonePaces<'r> {
    const fn new(row: &PaceRow, zone: &'static str, entries: &'r [(SubDistance, &'static str)]) -> Self {
        Self {
            vdot: row.vdot,
            zone,
            entries,
        }
    }

    fn optional(&self, sub_distance: SubDistance) -> Result<Option<Duration>, PaceError> {
        self.entries
            .iter()
            .find(|(d, _)| *d == sub_distance)
            .map(|(d, pace)| per_mile(*d, pace))
            .transpose()
    }

    fn required(&self, sub_distance: SubDistance) -> Result<Duration, PaceError> {
        self.optional(sub_distance)?
            .ok_or(PaceError::MissingSubDistance {
                vdot: self.vdot,
                zone: self.zone,
                sub_distance,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SubDistance::{Kilometer, Meters200, Meters400, Mile};

    const VDOT_50: PaceRow = PaceRow {
        vdot: 50,
        easy: ["08:14", "09:04"],
        marathon: "07:16",
        threshold: &[(Meters400, "01:42"), (Kilometer, "04:15"), (Mile, "06:51")],
        interval: &[(Meters400, "01:34"), (Kilometer, "03:55")],
        repetition: &[(Meters200, "00:45"), (Meters400, "01:30")],
    };

    fn vdot(value: u8) -> Vdot {
        Vdot::new(value).unwrap()
    }

    #[test]
    fn test_derive_normalizes_to_per_mile() {
        let rows = [VDOT_50];
        let paces = PaceTable::new(&rows).derive(vdot(50)).unwrap();

        assert_eq!(
            paces.zones[2],
            PaceZone::Threshold {
                per_400: Duration::from_secs(408),
                per_km: Duration::from_secs(408),
                per_mile: Duration::from_secs(411),
            }
        );
        assert_eq!(
            paces.zones[3],
            PaceZone::Interval {
                per_400: Duration::from_secs(376),
                per_km: Some(Duration::from_secs(376)),
                per_mile: None,
            }
        );
        assert_eq!(
            paces.zones[4],
            PaceZone::Repetition {
                per_200: Duration::from_secs(360),
                per_400: Some(Duration::from_secs(360)),
            }
        );
    }

    #[test]
    fn test_zone_order_and_symbols() {
        let rows = [VDOT_50];
        let paces = PaceTable::new(&rows).derive(vdot(50)).unwrap();
        let symbols: String = paces.zones.iter().map(PaceZone::symbol).collect();
        assert_eq!(symbols, "EMTIR");
        assert_eq!(
            paces.zones[0],
            PaceZone::Easy {
                min: Duration::from_secs(494),
                max: Duration::from_secs(544),
            }
        );
    }

    #[test]
    fn test_missing_vdot_is_pace_lookup_error() {
        let rows = [VDOT_50];
        let err = PaceTable::new(&rows).derive(vdot(49)).unwrap_err();
        assert_eq!(err, PaceError::PaceLookup { vdot: 49 });
    }

    #[test]
    fn test_missing_required_split() {
        let rows = [PaceRow {
            repetition: &[(Meters400, "01:30")],
            ..VDOT_50
        }];
        let err = PaceTable::new(&rows).derive(vdot(50)).unwrap_err();
        assert_eq!(
            err,
            PaceError::MissingSubDistance {
                vdot: 50,
                zone: zones::REPETITION,
                sub_distance: Meters200,
            }
        );
    }

    #[test]
    fn test_bad_pace_string_is_time_format_error() {
        let rows = [PaceRow {
            marathon: "7m16s",
            ..VDOT_50
        }];
        let err = PaceTable::new(&rows).derive(vdot(50)).unwrap_err();
        assert!(matches!(err, PaceError::TimeFormat { .. }));
        assert!(PaceTable::new(&rows).validate().is_err());
    }

    #[test]
    fn test_zone_rendering() {
        let rows = [VDOT_50];
        let paces = PaceTable::new(&rows).derive(vdot(50)).unwrap();
        let rendered = paces.zones[3].to_string();
        assert_eq!(rendered, "Interval (I):\n   400: 6:16/mile\n    km: 6:16/mile\n");
        assert_eq!(paces.to_string().matches("/mile").count(), 10);
    }
}
