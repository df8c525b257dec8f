// ABOUTME: Core value types for race times, paces and distances
// ABOUTME: Re-exports Duration, RaceDistance and SubDistance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Millisecond-resolution elapsed time with clock-format parsing
pub mod duration;

/// Race and pace sub-distances
pub mod distance;

pub use distance::{RaceDistance, SubDistance};
pub use duration::Duration;
