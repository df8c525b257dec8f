// ABOUTME: End-to-end tests for the vdot-paces binary
// ABOUTME: Runs the CLI and checks stdout, stderr and exit status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use assert_cmd::Command;
use predicates::prelude::*;

fn vdot_paces() -> Command {
    let mut cmd = Command::cargo_bin("vdot-paces").unwrap();
    cmd.env_remove("VDOT_OUTPUT_FORMAT")
        .env_remove("VDOT_MATCH_STRATEGY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_prints_status_vdot_and_five_zones() {
    vdot_paces()
        .args(["5k", "00:20:00"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Calculating VDOT values using reference race distance is 5k in 0:20:00\nVDOT is 30\n",
        ))
        .stdout(predicate::str::contains("Easy (E):"))
        .stdout(predicate::str::contains("Marathon (M):"))
        .stdout(predicate::str::contains("Threshold (T):"))
        .stdout(predicate::str::contains("Interval (I):"))
        .stdout(predicate::str::contains("Repetition (R):"));
}

#[test]
fn test_tightest_strategy_flag() {
    vdot_paces()
        .args(["5k", "00:20:00", "--strategy", "tightest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VDOT is 49"));
}

#[test]
fn test_strategy_from_env() {
    vdot_paces()
        .env("VDOT_MATCH_STRATEGY", "tightest")
        .args(["5k", "00:19:56"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VDOT is 50"));
}

#[test]
fn test_json_output() {
    let output = vdot_paces()
        .args(["5k", "00:20:00", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["vdot"], 30);
    assert_eq!(value["time"], "0:20:00");
    assert_eq!(value["paces"]["zones"].as_array().map(Vec::len), Some(5));
}

#[test]
fn test_missing_hour_field_fails() {
    vdot_paces()
        .args(["5k", "20:00"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid time '20:00'"));
}

#[test]
fn test_time_slower_than_table_fails() {
    vdot_paces()
        .args(["5k", "00:45:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No VDOT found"));
}

#[test]
fn test_json_error_body() {
    vdot_paces()
        .args(["5k", "bad", "--format", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("INVALID_FORMAT"));
}

#[test]
fn test_unknown_distance_is_usage_error() {
    vdot_paces()
        .args(["10k", "00:40:00"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown race distance: '10k'"));
}

#[test]
fn test_arguments_parse_like_library_values() {
    vdot_paces()
        .args(["5K", "00:19:56", "--strategy", "Tightest", "--format", "TEXT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reference race distance is 5k in 0:19:56"))
        .stdout(predicate::str::contains("VDOT is 50"));

    vdot_paces()
        .args(["5k", "00:20:00", "--strategy", "first_qualifying"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VDOT is 30"));
}

#[test]
fn test_unknown_strategy_is_usage_error() {
    vdot_paces()
        .args(["5k", "00:20:00", "--strategy", "best"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown match strategy: 'best'"));
}

#[test]
fn test_identical_invocations_are_identical() {
    let first = vdot_paces().args(["5k", "00:21:30"]).output().unwrap();
    let second = vdot_paces().args(["5k", "00:21:30"]).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}
