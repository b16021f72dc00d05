//! Shared test helpers for E2E and property tests.

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pact_core::constants::DEFAULT_SEED;
use pact_core::error::PredictorError;
use pact_core::traits::Predictor;
use pact_core::types::{SequenceBatch, TransactionRecord, TransactionSeries};

/// Generator seeded the way the demo run seeds it.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(DEFAULT_SEED)
}

/// Build a daily series from 2020-01-01 with the given amounts.
pub fn series_of(amounts: &[f64]) -> TransactionSeries {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid epoch");
    TransactionSeries::new(
        start
            .iter_days()
            .zip(amounts)
            .map(|(date, &amount)| TransactionRecord { amount, date })
            .collect(),
    )
}

/// Predictor that echoes each sample's last value and counts fits.
#[derive(Debug, Default)]
pub struct EchoPredictor {
    pub fits: usize,
}

impl Predictor for EchoPredictor {
    fn fit(&mut self, inputs: &SequenceBatch, _targets: &[f64]) -> Result<(), PredictorError> {
        if inputs.is_empty() {
            return Err(PredictorError::EmptyTrainingSet);
        }
        self.fits += 1;
        Ok(())
    }

    fn predict(&self, inputs: &SequenceBatch) -> Result<Vec<f64>, PredictorError> {
        if self.fits == 0 {
            return Err(PredictorError::NotFitted);
        }
        Ok((0..inputs.len()).map(|i| inputs.last_step(i)[0]).collect())
    }
}

/// Predictor that succeeds for the first `good_fits` fits, then fails.
#[derive(Debug)]
pub struct FailAfter {
    pub good_fits: usize,
    inner: EchoPredictor,
}

impl FailAfter {
    pub fn new(good_fits: usize) -> Self {
        Self {
            good_fits,
            inner: EchoPredictor::default(),
        }
    }
}

impl Predictor for FailAfter {
    fn fit(&mut self, inputs: &SequenceBatch, targets: &[f64]) -> Result<(), PredictorError> {
        if self.inner.fits >= self.good_fits {
            return Err(PredictorError::EmptyTrainingSet);
        }
        self.inner.fit(inputs, targets)
    }

    fn predict(&self, inputs: &SequenceBatch) -> Result<Vec<f64>, PredictorError> {
        self.inner.predict(inputs)
    }
}
