// ABOUTME: Integration tests for training pace derivation from the Daniels pace table
// ABOUTME: Verifies per-mile normalization, optional splits and missing-VDOT handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use vdot_core::errors::PaceError;
use vdot_core::models::Duration;
use vdot_paces::intelligence::{PaceTable, PaceZone, Vdot};

fn derive(vdot: u8) -> Result<vdot_paces::intelligence::PaceSet, PaceError> {
    PaceTable::default().derive(Vdot::new(vdot).unwrap())
}

fn secs(minutes: u64, seconds: u64) -> Duration {
    Duration::from_hms(0, minutes, seconds)
}

#[test]
fn test_vdot_49_paces_per_mile() {
    let paces = derive(49).unwrap();

    assert_eq!(
        paces.zones[0],
        PaceZone::Easy {
            min: secs(8, 22),
            max: secs(9, 13),
        }
    );
    assert_eq!(paces.zones[1], PaceZone::Marathon { pace: secs(7, 24) });
    // 1:44 per 400 x 4, 4:19 per km x 1.6
    assert_eq!(
        paces.zones[2],
        PaceZone::Threshold {
            per_400: secs(6, 56),
            per_km: Duration::from_millis(414_400),
            per_mile: secs(6, 57),
        }
    );
    assert_eq!(
        paces.zones[3],
        PaceZone::Interval {
            per_400: secs(6, 20),
            per_km: Some(Duration::from_millis(382_400)),
            per_mile: None,
        }
    );
    assert_eq!(
        paces.zones[4],
        PaceZone::Repetition {
            per_200: secs(6, 8),
            per_400: Some(secs(6, 4)),
        }
    );
}

#[test]
fn test_low_vdot_omits_long_interval_and_repetition_splits() {
    let paces = derive(30).unwrap();
    assert!(matches!(
        paces.zones[3],
        PaceZone::Interval {
            per_km: None,
            per_mile: None,
            ..
        }
    ));
    assert!(matches!(
        paces.zones[4],
        PaceZone::Repetition { per_400: None, .. }
    ));
    assert_eq!(paces.zones[3].lines().len(), 1);
    assert_eq!(paces.zones[4].lines().len(), 1);
}

#[test]
fn test_high_vdot_lists_every_interval_split() {
    let paces = derive(85).unwrap();
    assert_eq!(paces.zones[3].lines().len(), 3);
    assert_eq!(paces.zones[4].lines().len(), 2);
}

#[test]
fn test_vdot_outside_table_is_pace_lookup_error() {
    assert_eq!(derive(29).unwrap_err(), PaceError::PaceLookup { vdot: 29 });
    assert_eq!(derive(86).unwrap_err(), PaceError::PaceLookup { vdot: 86 });
}

#[test]
fn test_zero_vdot_cannot_reach_the_deriver() {
    assert!(Vdot::new(0).is_none());
}

#[test]
fn test_rendering_has_five_blocks() {
    let rendered = derive(50).unwrap().to_string();
    let headers: Vec<&str> = rendered
        .lines()
        .filter(|line| line.ends_with("):"))
        .collect();
    assert_eq!(
        headers,
        [
            "Easy (E):",
            "Marathon (M):",
            "Threshold (T):",
            "Interval (I):",
            "Repetition (R):"
        ]
    );
    assert!(rendered
        .lines()
        .filter(|line| !line.is_empty() && !line.ends_with("):"))
        .all(|line| line.ends_with("/mile")));
}

#[test]
fn test_faster_vdot_gives_faster_paces() {
    let slower = derive(40).unwrap();
    let faster = derive(60).unwrap();
    for (slow_zone, fast_zone) in slower.zones.iter().zip(faster.zones.iter()) {
        let slow_first = slow_zone.lines()[0].1;
        let fast_first = fast_zone.lines()[0].1;
        assert!(fast_first < slow_first, "{} did not speed up", slow_zone.label());
    }
}
