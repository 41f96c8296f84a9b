use proptest::prelude::*;
use rstest::rstest;
use typeforge::typing::metrics::{accuracy, compute, consistency, words_per_minute, MetricsInput};

#[rstest]
#[case(0, 0, 100)]
#[case(4, 1, 75)]
#[case(3, 1, 67)]
#[case(10, 10, 0)]
#[case(2, 7, 0)]
fn accuracy_cases(#[case] keystrokes: u64, #[case] errors: u64, #[case] expected: u32) {
    assert_eq!(accuracy(keystrokes, errors), expected);
}

#[rstest]
#[case(3, 1.0, 36)]
#[case(3, 0.8, 45)]
#[case(250, 60.0, 50)]
#[case(0, 10.0, 0)]
#[case(10, 0.0, 0)]
fn wpm_cases(#[case] chars: usize, #[case] secs: f64, #[case] expected: u32) {
    assert_eq!(words_per_minute(chars, secs), expected);
}

#[test]
fn compute_rounds_time() {
    let m = compute(&MetricsInput {
        total_keystrokes: 12,
        total_errors: 2,
        elapsed_secs: 2.6,
        correct_chars: 9,
        total_chars: 10,
    });
    assert_eq!(m.time_seconds, 3);
    assert_eq!(m.accuracy, 83);
    assert_eq!(m.raw_wpm, 46);
    assert_eq!(m.wpm, 42);
}

#[test]
fn uneven_speed_lowers_consistency() {
    let steady = consistency(&[60.0, 62.0, 58.0, 60.0]);
    let uneven = consistency(&[20.0, 100.0, 40.0, 80.0]);
    assert!(steady > uneven);
    assert_eq!(consistency(&[10.0, 1000.0]), 2);
}

proptest! {
    #[test]
    fn prop_accuracy_in_bounds(keystrokes in any::<u64>(), errors in any::<u64>()) {
        prop_assert!(accuracy(keystrokes, errors) <= 100);
    }

    #[test]
    fn prop_consistency_in_bounds(samples in proptest::collection::vec(0.0..500.0f64, 0..30)) {
        prop_assert!(consistency(&samples) <= 100);
    }

    #[test]
    fn prop_wpm_never_panics(chars in 0usize..100_000, secs in any::<f64>()) {
        let _ = words_per_minute(chars, secs);
    }
}
