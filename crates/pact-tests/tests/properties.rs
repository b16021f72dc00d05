//! Property-based suite for the forecasting pipeline.
//!
//! Invariants checked under randomized inputs:
//! - Same seed, same history
//! - Fixed cardinality, non-negative amounts, contiguous daily dates
//! - Train/test split is complete, ordered and non-overlapping
//! - Normalization round-trips and reduction inverts it
//! - Degenerate inputs fail with the documented error

use chrono::Days;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pact_core::constants::*;
use pact_core::error::CoreError;
use pact_core::split::{split_point, split_series};
use pact_core::{
    SynthesisParams, convert_to_ether, convert_to_ether_at, generate_transaction_history,
    generate_with, reduce_predictions,
};
use pact_tests::helpers::series_of;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn history_is_deterministic_per_seed(seed in any::<u64>()) {
        let a = generate_transaction_history(&mut StdRng::seed_from_u64(seed));
        let b = generate_transaction_history(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn history_shape(seed in any::<u64>()) {
        let series = generate_transaction_history(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(series.len(), TRANSACTION_COUNT);

        let records = series.records();
        let (y, m, d) = HISTORY_EPOCH;
        prop_assert_eq!(records[0].date, chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap());
        for pair in records.windows(2) {
            prop_assert_eq!(pair[0].date + Days::new(1), pair[1].date);
        }
        for r in records {
            prop_assert!(r.amount >= 0.0 && r.amount.is_finite());
        }
    }

    #[test]
    fn wide_distribution_is_still_non_negative(
        seed in any::<u64>(),
        mean in -100.0f64..100.0,
        std_dev in 0.0f64..500.0,
        count in 0usize..300,
    ) {
        let params = SynthesisParams { count, mean, std_dev, ..SynthesisParams::default() };
        let series = generate_with(&mut StdRng::seed_from_u64(seed), &params).unwrap();
        prop_assert_eq!(series.len(), count);
        prop_assert!(series.amounts().all(|a| a >= 0.0));
    }
}

// ---------------------------------------------------------------------------
// Normalization and split
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn normalization_round_trips(
        amounts in prop::collection::vec(0.0f64..10_000.0, 1..200),
        price in 1.0f64..100_000.0,
    ) {
        prop_assume!(amounts.iter().any(|a| *a > 0.0));
        let (normalized, unit) = convert_to_ether_at(series_of(&amounts), price).unwrap();
        prop_assert!(unit > 0.0);
        for (r, a) in normalized.records().iter().zip(&amounts) {
            prop_assert_eq!(r.amount, *a);
            prop_assert!(close(r.amount_normalized / unit, *a));
        }
    }

    #[test]
    fn normalized_mean_is_reference_price(
        amounts in prop::collection::vec(0.01f64..10_000.0, 1..200),
    ) {
        let (normalized, _) = convert_to_ether(series_of(&amounts)).unwrap();
        let n = normalized.normalized_amounts();
        let mean = n.iter().sum::<f64>() / n.len() as f64;
        prop_assert!(close(mean, ETHER_PRICE));
    }

    #[test]
    fn split_is_complete_and_ordered(
        amounts in prop::collection::vec(0.01f64..1_000.0, 1..300),
        fraction in 0.0f64..=1.0,
    ) {
        let (normalized, _) = convert_to_ether(series_of(&amounts)).unwrap();
        let original = normalized.records().to_vec();
        let (train, test) = split_series(normalized, fraction).unwrap();

        prop_assert_eq!(train.len(), split_point(amounts.len(), fraction));
        prop_assert_eq!(train.len() + test.len(), amounts.len());
        let rejoined: Vec<_> = train.records().iter().chain(test.records()).cloned().collect();
        prop_assert_eq!(rejoined, original);
    }

    #[test]
    fn split_rejects_fraction_outside_unit_interval(fraction in 1.0001f64..10.0) {
        let (normalized, _) = convert_to_ether(series_of(&[1.0, 2.0])).unwrap();
        prop_assert!(matches!(split_series(normalized.clone(), fraction), Err(CoreError::InvalidInput(_))));
        prop_assert!(matches!(split_series(normalized, -fraction), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn all_zero_history_is_division_by_zero(len in 1usize..100) {
        let err = convert_to_ether(series_of(&vec![0.0; len])).unwrap_err();
        prop_assert_eq!(err, CoreError::DivisionByZero);
    }
}

// ---------------------------------------------------------------------------
// Reduction
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn reduction_is_mean_over_unit(
        predictions in prop::collection::vec(-1e6f64..1e6, 1..200),
        unit in 0.001f64..1_000.0,
    ) {
        let expected = predictions.iter().map(|p| p / unit).sum::<f64>() / predictions.len() as f64;
        let got = reduce_predictions(&predictions, unit).unwrap();
        prop_assert!((got - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }

    #[test]
    fn reducing_normalized_amounts_recovers_mean(
        amounts in prop::collection::vec(0.01f64..10_000.0, 1..200),
    ) {
        let (normalized, unit) = convert_to_ether(series_of(&amounts)).unwrap();
        let mean = amounts.iter().sum::<f64>() / amounts.len() as f64;
        let reduced = reduce_predictions(&normalized.normalized_amounts(), unit).unwrap();
        prop_assert!(close(reduced, mean));
    }
}

#[test]
fn empty_reduction_is_invalid_input() {
    assert!(matches!(reduce_predictions(&[], 1.0), Err(CoreError::InvalidInput(_))));
}
