// ABOUTME: Main library entry point for the VDOT training pace calculator
// ABOUTME: Resolves a VDOT from a reference race and derives Daniels training paces per mile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # VDOT Paces
//!
//! Computes a runner's VDOT from a reference race and derives the five Daniels
//! training zones (Easy, Marathon, Threshold, Interval, Repetition), each
//! normalized to a pace per mile.
//!
//! ## Pipeline
//!
//! time string → [`vdot_core::models::Duration`] → [`intelligence::Vdot`] →
//! [`intelligence::PaceSet`]
//!
//! ## Example
//!
//! ```rust
//! use vdot_core::models::RaceDistance;
//! use vdot_paces::intelligence::TrainingPaceCalculator;
//!
//! let report = TrainingPaceCalculator::default()
//!     .calculate(RaceDistance::FiveK, "00:20:00")
//!     .unwrap();
//! assert_eq!(report.paces.zones.len(), 5);
//! ```

/// Static Daniels reference tables
pub mod tables;

/// VDOT resolution and training pace derivation
pub mod intelligence;

/// Report and error rendering (text, JSON)
pub mod formatters;

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;
