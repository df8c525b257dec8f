// ABOUTME: Integration tests for the full race-to-paces pipeline
// ABOUTME: Checks idempotence, error code mapping and JSON rendering of reports

use proptest::prelude::*;
use vdot_core::errors::{AppError, ErrorCode, PaceError};
use vdot_core::models::{Duration, RaceDistance};
use vdot_paces::formatters::{format_report, OutputFormat};
use vdot_paces::intelligence::{MatchStrategy, TrainingPaceCalculator};

#[test]
fn test_twenty_minute_5k_renders_five_zones() {
    let report = TrainingPaceCalculator::default()
        .calculate(RaceDistance::FiveK, "00:20:00")
        .unwrap();
    assert_eq!(report.vdot.value(), 30);
    assert_eq!(report.paces.zones.len(), 5);

    let text = format_report(&report, OutputFormat::Text).unwrap();
    assert!(text.contains("VDOT is 30\n"));
    assert!(text.contains("Repetition (R):"));
}

#[test]
fn test_errors_map_to_codes() {
    let calculator = TrainingPaceCalculator::default();

    let bad_format = calculator
        .calculate(RaceDistance::FiveK, "20:00")
        .unwrap_err();
    assert_eq!(AppError::from(bad_format).code, ErrorCode::InvalidFormat);

    let too_slow = calculator
        .calculate(RaceDistance::FiveK, "00:40:00")
        .unwrap_err();
    assert!(matches!(too_slow, PaceError::VdotNotFound { .. }));
    assert_eq!(AppError::from(too_slow).code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_out_of_range_clock_fields_are_rejected() {
    let calculator = TrainingPaceCalculator::default();
    for input in ["00:60:00", "00:20:60", "24:00:00", "0:20:0", " 00:20:00"] {
        assert!(
            matches!(
                calculator.calculate(RaceDistance::FiveK, input),
                Err(PaceError::TimeFormat { .. })
            ),
            "{input} was accepted"
        );
    }
}

proptest! {
    #[test]
    fn prop_repeated_calculation_is_identical(secs in 600u64..1841, tightest in any::<bool>()) {
        let strategy = if tightest { MatchStrategy::Tightest } else { MatchStrategy::FirstQualifying };
        let calculator = TrainingPaceCalculator::default().with_strategy(strategy);
        let time = Duration::from_secs(secs);

        let first = calculator.calculate_for(RaceDistance::FiveK, time).unwrap();
        let second = calculator.calculate_for(RaceDistance::FiveK, time).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            format_report(&first, OutputFormat::Text).unwrap(),
            format_report(&second, OutputFormat::Text).unwrap()
        );
    }
}
