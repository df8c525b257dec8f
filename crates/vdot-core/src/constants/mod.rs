// ABOUTME: Application-wide constants for VDOT lookup and pace conversion
// ABOUTME: Groups unit factors, environment variable names and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unit conversion constants (distances, time)
pub mod units;

/// Service identity used in structured logs
pub mod service_names {
    /// Binary and log target name
    pub const VDOT_PACES: &str = "vdot-paces";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Output format for the report (`text` or `json`)
    pub const OUTPUT_FORMAT: &str = "VDOT_OUTPUT_FORMAT";

    /// Resolver match strategy (`first` or `tightest`)
    pub const MATCH_STRATEGY: &str = "VDOT_MATCH_STRATEGY";

    /// Log output format (`pretty`, `compact` or `json`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";

    /// Include file and line in log records when set
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
}

/// Zone labels used in rendered output and error messages
pub mod zones {
    /// Easy / long run pace
    pub const EASY: &str = "Easy";
    /// Marathon pace
    pub const MARATHON: &str = "Marathon";
    /// Threshold (tempo) pace
    pub const THRESHOLD: &str = "Threshold";
    /// Interval (VO2max) pace
    pub const INTERVAL: &str = "Interval";
    /// Repetition (speed) pace
    pub const REPETITION: &str = "Repetition";
}
