// ABOUTME: Reference race distances and the sub-distances training paces are quoted over
// ABOUTME: Converts a sub-distance pace into the common per-mile unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::constants::units::{METERS_PER_KM, PACE_METERS_PER_MILE};
use crate::errors::AppError;
use crate::models::Duration;

/// Reference race distance a VDOT can be resolved from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RaceDistance {
    /// 5 kilometers
    #[serde(rename = "5k")]
    FiveK,
}

impl RaceDistance {
    /// Every supported distance
    pub const ALL: [Self; 1] = [Self::FiveK];

    /// Label used on the command line and in tables
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FiveK => "5k",
        }
    }
}

impl fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RaceDistance {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|distance| distance.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown race distance: '{s}'. Valid options: 5k"
                ))
            })
    }
}

/// Distance a table pace is quoted over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubDistance {
    /// 200 meters
    Meters200,
    /// 400 meters
    Meters400,
    /// 1 kilometer
    Kilometer,
    /// 1 mile
    Mile,
}

impl SubDistance {
    /// Table label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Meters200 => "200",
            Self::Meters400 => "400",
            Self::Kilometer => "km",
            Self::Mile => "mile",
        }
    }

    /// Length in meters, with the mile at the 1600 m pace convention
    #[must_use]
    pub const fn meters(self) -> u64 {
        match self {
            Self::Meters200 => 200,
            Self::Meters400 => 400,
            Self::Kilometer => METERS_PER_KM,
            Self::Mile => PACE_METERS_PER_MILE,
        }
    }

    /// Convert a pace over this sub-distance into a per-mile pace
    ///
    /// `per_mile = pace * 1600 / meters`; a mile pace is returned unchanged.
    #[must_use]
    pub fn to_per_mile(self, pace: Duration) -> Option<Duration> {
        match self {
            Self::Mile => Some(pace),
            _ => pace.scale(PACE_METERS_PER_MILE, self.meters()),
        }
    }
}

impl fmt::Display for SubDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
