// ABOUTME: Core types and constants for the VDOT training pace calculator
// ABOUTME: Foundation crate with error handling, unit constants, durations and distances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # VDOT Core
//!
//! Foundation crate providing shared types and constants for VDOT lookup and
//! training pace derivation. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `PaceError`
//! - **constants**: Unit conversion factors and environment variable names
//! - **models**: `Duration`, `RaceDistance` and `SubDistance`

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversion constants and configuration keys
pub mod constants;

/// Core value types (durations, race distances, pace sub-distances)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode, PaceError};
pub use models::{Duration, RaceDistance, SubDistance};
