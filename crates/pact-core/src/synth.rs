//! Synthetic transaction histories.
//!
//! Amounts are normal draws clamped at zero from below; dates run one day
//! apart from a fixed epoch. The generator is passed in explicitly, so two
//! parties drawn from the same generator consume one shared stream, in call
//! order.

use chrono::{Days, NaiveDate};
use rand::Rng;
use rand_distr::StandardNormal;
use tracing::debug;

use crate::constants::{AMOUNT_MEAN, AMOUNT_STD_DEV, HISTORY_EPOCH, TRANSACTION_COUNT};
use crate::error::CoreError;
use crate::types::{TransactionRecord, TransactionSeries};

/// Parameters of a synthetic history.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisParams {
    /// Number of records.
    pub count: usize,
    /// Mean of the amount distribution.
    pub mean: f64,
    /// Standard deviation of the amount distribution.
    pub std_dev: f64,
    /// Date of the first record.
    pub start: NaiveDate,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        let (y, m, d) = HISTORY_EPOCH;
        Self {
            count: TRANSACTION_COUNT,
            mean: AMOUNT_MEAN,
            std_dev: AMOUNT_STD_DEV,
            start: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
        }
    }
}

impl SynthesisParams {
    /// Check that the distribution is well formed and the date range fits.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.mean.is_finite() {
            return Err(CoreError::InvalidInput(format!("mean {} is not finite", self.mean)));
        }
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(CoreError::InvalidInput(format!(
                "standard deviation {} must be finite and non-negative",
                self.std_dev
            )));
        }
        let last_offset = self.count.saturating_sub(1) as u64;
        if self.start.checked_add_days(Days::new(last_offset)).is_none() {
            return Err(CoreError::InvalidInput(format!(
                "{} daily records from {} overflow the calendar",
                self.count, self.start
            )));
        }
        Ok(())
    }
}

/// Generate a history with the fixed defaults: 1000 records, mean 150,
/// standard deviation 50, daily from 2020-01-01.
pub fn generate_transaction_history<R: Rng + ?Sized>(rng: &mut R) -> TransactionSeries {
    synthesize(rng, &SynthesisParams::default())
}

/// Generate a history with explicit parameters.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    params: &SynthesisParams,
) -> Result<TransactionSeries, CoreError> {
    params.validate()?;
    Ok(synthesize(rng, params))
}

fn synthesize<R: Rng + ?Sized>(rng: &mut R, params: &SynthesisParams) -> TransactionSeries {
    let records: Vec<TransactionRecord> = params
        .start
        .iter_days()
        .take(params.count)
        .map(|date| {
            let z: f64 = rng.sample(StandardNormal);
            // Floor, don't discard: the series keeps its length.
            let amount = (params.mean + params.std_dev * z).max(0.0);
            TransactionRecord { amount, date }
        })
        .collect();

    let clamped = records.iter().filter(|r| r.amount == 0.0).count();
    debug!(count = records.len(), clamped, start = %params.start, "synthesized transaction history");

    TransactionSeries::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::constants::DEFAULT_SEED;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(DEFAULT_SEED)
    }

    #[test]
    fn default_history_has_thousand_records() {
        let series = generate_transaction_history(&mut seeded());
        assert_eq!(series.len(), TRANSACTION_COUNT);
    }

    #[test]
    fn amounts_are_non_negative() {
        let series = generate_transaction_history(&mut seeded());
        assert!(series.amounts().all(|a| a >= 0.0));
    }

    #[test]
    fn dates_are_contiguous_from_epoch() {
        let series = generate_transaction_history(&mut seeded());
        let records = series.records();
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        for pair in records.windows(2) {
            assert_eq!((pair[1].date - pair[0].date).num_days(), 1);
        }
    }

    #[test]
    fn same_seed_same_history() {
        let a = generate_transaction_history(&mut seeded());
        let b = generate_transaction_history(&mut seeded());
        assert_eq!(a, b);
    }

    #[test]
    fn shared_stream_advances_between_calls() {
        let mut rng = seeded();
        let first = generate_transaction_history(&mut rng);
        let second = generate_transaction_history(&mut rng);
        assert_ne!(first, second);
        // Same dates, different amounts.
        assert_eq!(first.records()[0].date, second.records()[0].date);
    }

    #[test]
    fn sample_mean_is_near_distribution_mean() {
        let series = generate_transaction_history(&mut seeded());
        let mean = series.amounts().sum::<f64>() / series.len() as f64;
        assert!((mean - AMOUNT_MEAN).abs() < 10.0, "mean {mean}");
    }

    #[test]
    fn negative_draws_are_floored_to_zero() {
        let params = SynthesisParams {
            count: 200,
            mean: -10.0,
            std_dev: 1.0,
            ..SynthesisParams::default()
        };
        let series = generate_with(&mut seeded(), &params).unwrap();
        assert_eq!(series.len(), 200);
        assert!(series.amounts().all(|a| a == 0.0));
    }

    #[test]
    fn zero_std_dev_is_constant() {
        let params = SynthesisParams {
            count: 5,
            std_dev: 0.0,
            ..SynthesisParams::default()
        };
        let series = generate_with(&mut seeded(), &params).unwrap();
        assert!(series.amounts().all(|a| a == AMOUNT_MEAN));
    }

    #[test]
    fn rejects_negative_std_dev() {
        let params = SynthesisParams {
            std_dev: -1.0,
            ..SynthesisParams::default()
        };
        let err = generate_with(&mut seeded(), &params).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn rejects_calendar_overflow() {
        let params = SynthesisParams {
            count: 10,
            start: NaiveDate::MAX,
            ..SynthesisParams::default()
        };
        assert!(generate_with(&mut seeded(), &params).is_err());
    }

    #[test]
    fn zero_count_is_empty() {
        let params = SynthesisParams {
            count: 0,
            ..SynthesisParams::default()
        };
        assert!(generate_with(&mut seeded(), &params).unwrap().is_empty());
    }

    #[test]
    fn works_through_dyn_rng() {
        let mut rng = seeded();
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        assert_eq!(generate_transaction_history(dyn_rng).len(), TRANSACTION_COUNT);
    }
}
