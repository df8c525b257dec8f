// ABOUTME: Unit conversion constants for distance and time
// ABOUTME: Provides named constants to eliminate magic numbers in pace conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meters per mile used when normalising table paces to a per-mile value.
///
/// The pace tables assume a 1600 m mile (four laps of a 400 m track), not the
/// statute mile. Conversions must keep this value.
pub const PACE_METERS_PER_MILE: u64 = 1600;

/// Statute mile in meters
pub const METERS_PER_MILE: f64 = 1609.344;

/// Meters per kilometer
pub const METERS_PER_KM: u64 = 1000;

/// Milliseconds per second
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Minutes per hour
pub const MINUTES_PER_HOUR: u64 = 60;

/// Hours per day, the exclusive upper bound of the clock hour field
pub const HOURS_PER_DAY: u64 = 24;

/// Seconds per hour
pub const SECONDS_PER_HOUR: u64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;
