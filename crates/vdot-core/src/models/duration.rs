// ABOUTME: Elapsed-time value used for both race times and training paces
// ABOUTME: Parses HH:MM:SS and MM:SS clock strings and scales by rational factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::constants::units::{
    HOURS_PER_DAY, MINUTES_PER_HOUR, MS_PER_SECOND, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::errors::PaceError;

/// Expected shape of a race time, shown in error messages
pub const CLOCK_FORMAT: &str = "HH:MM:SS";

/// Expected shape of a table pace, shown in error messages
pub const PACE_FORMAT: &str = "MM:SS";

/// Stored as Option so a bad pattern surfaces as a parse error rather than a panic
static CLOCK_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2}):(\d{2})$").ok());

static PACE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").ok());

/// Normalised elapsed time with millisecond resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    millis: u64,
}

impl Duration {
    /// Build from hours, minutes and seconds
    #[must_use]
    pub const fn from_hms(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self::from_secs(hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds)
    }

    /// Build from whole seconds
    #[must_use]
    pub const fn from_secs(seconds: u64) -> Self {
        Self {
            millis: seconds * MS_PER_SECOND,
        }
    }

    /// Build from milliseconds
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Total seconds rounded half-up to the nearest whole second
    const fn rounded_secs(self) -> u64 {
        (self.millis + MS_PER_SECOND / 2) / MS_PER_SECOND
    }

    /// Multiply by `numerator / denominator`, truncating to whole milliseconds
    ///
    /// Returns `None` for a zero denominator or on overflow.
    #[must_use]
    pub const fn scale(self, numerator: u64, denominator: u64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        match self.millis.checked_mul(numerator) {
            Some(product) => Some(Self {
                millis: product / denominator,
            }),
            None => None,
        }
    }

    /// Parse a race time in `H:MM:SS` / `HH:MM:SS` form
    ///
    /// # Errors
    ///
    /// Returns [`PaceError::TimeFormat`] when the string is not three colon
    /// separated numeric fields, or a field is out of range (hour < 24,
    /// minute and second < 60).
    pub fn parse_clock(input: &str) -> Result<Self, PaceError> {
        let fields = capture_fields(&CLOCK_PATTERN, input, CLOCK_FORMAT)?;
        let [hours, minutes, seconds] = fields[..] else {
            return Err(PaceError::time_format(input, CLOCK_FORMAT));
        };
        if hours >= HOURS_PER_DAY || minutes >= MINUTES_PER_HOUR || seconds >= SECONDS_PER_MINUTE
        {
            return Err(PaceError::time_format(input, CLOCK_FORMAT));
        }
        Ok(Self::from_hms(hours, minutes, seconds))
    }

    /// Parse a table pace in `M:SS` / `MM:SS` form
    ///
    /// # Errors
    ///
    /// Returns [`PaceError::TimeFormat`] when the string is not two colon
    /// separated numeric fields, or a field is 60 or more.
    pub fn parse_pace(input: &str) -> Result<Self, PaceError> {
        let fields = capture_fields(&PACE_PATTERN, input, PACE_FORMAT)?;
        let [minutes, seconds] = fields[..] else {
            return Err(PaceError::time_format(input, PACE_FORMAT));
        };
        if minutes >= MINUTES_PER_HOUR || seconds >= SECONDS_PER_MINUTE {
            return Err(PaceError::time_format(input, PACE_FORMAT));
        }
        Ok(Self::from_hms(0, minutes, seconds))
    }

    /// Render as `H:MM:SS` regardless of magnitude
    #[must_use]
    pub fn to_clock_string(self) -> String {
        let (hours, minutes, seconds) = self.hms();
        format!("{hours}:{minutes:02}:{seconds:02}")
    }

    fn hms(self) -> (u64, u64, u64) {
        let total = self.rounded_secs();
        (
            total / SECONDS_PER_HOUR,
            (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            total % SECONDS_PER_MINUTE,
        )
    }
}

fn capture_fields(
    pattern: &LazyLock<Option<Regex>>,
    input: &str,
    expected: &'static str,
) -> Result<Vec<u64>, PaceError> {
    let captures = pattern
        .as_ref()
        .and_then(|re| re.captures(input))
        .ok_or_else(|| PaceError::time_format(input, expected))?;

    captures
        .iter()
        .skip(1)
        .map(|group| {
            group
                .and_then(|m| m.as_str().parse::<u64>().ok())
                .ok_or_else(|| PaceError::time_format(input, expected))
        })
        .collect()
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes, seconds) = self.hms();
        if hours > 0 {
            write!(f, "{hours}:{minutes:02}:{seconds:02}")
        } else {
            write!(f, "{minutes}:{seconds:02}")
        }
    }
}

impl FromStr for Duration {
    type Err = PaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_clock(s)
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
