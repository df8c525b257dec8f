// ABOUTME: VDOT intelligence: race-to-VDOT resolution and VDOT-to-pace derivation
// ABOUTME: Re-exports the resolver, the pace deriver and the combined calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Race time → VDOT resolution over the threshold table
pub mod vdot;

/// VDOT → per-mile training paces
pub mod training_paces;

/// Combined time → VDOT → paces pipeline
pub mod calculator;

pub use calculator::{PaceReport, TrainingPaceCalculator};
pub use training_paces::{PaceRow, PaceSet, PaceTable, PaceZone};
pub use vdot::{MatchStrategy, Vdot, VdotRow, VdotTable};
