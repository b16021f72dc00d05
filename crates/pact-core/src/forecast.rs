//! Per-party forecast of the mean next transaction amount.
//!
//! Runs the synthesize → normalize → split pipeline, fits the predictor on
//! the training segment (inputs double as targets), predicts the holdout
//! segment, and reduces the predictions to one value in the original unit.

use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::error::{PactError, PredictorError};
use crate::reduce::reduce_predictions;
use crate::split::{PipelineParams, split_data_with};
use crate::traits::Predictor;

/// Outcome of one party's forecast.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Forecast {
    /// Predicted mean next transaction amount, in the original unit.
    pub predicted_mean: f64,
    /// Actual amounts of the holdout segment.
    pub actual_amounts: Vec<f64>,
    /// Normalization scale of the party's series.
    pub ether_unit: f64,
    pub train_len: usize,
    pub test_len: usize,
}

/// Forecasts for both parties of an agreement.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PartyForecasts {
    pub party_a: Forecast,
    pub party_b: Forecast,
}

/// Forecast one party's mean next transaction amount.
///
/// The predictor is (re)fitted on this party's training segment.
pub fn forecast_mean_amount<R: Rng + ?Sized>(
    rng: &mut R,
    predictor: &mut dyn Predictor,
    params: &PipelineParams,
) -> Result<Forecast, PactError> {
    let (train, test, ether_unit) = split_data_with(rng, params)?;

    let train_inputs = train.to_batch();
    predictor.fit(&train_inputs, &train.normalized_amounts())?;

    let test_inputs = test.to_batch();
    let predictions = predictor.predict(&test_inputs)?;
    if predictions.len() != test_inputs.len() {
        return Err(PredictorError::OutputLength {
            expected: test_inputs.len(),
            got: predictions.len(),
        }
        .into());
    }

    let predicted_mean = reduce_predictions(&predictions, ether_unit)?;
    info!(
        predicted_mean,
        ether_unit,
        train = train.len(),
        test = test.len(),
        "forecast mean next transaction amount"
    );

    Ok(Forecast {
        predicted_mean,
        actual_amounts: test.amounts(),
        ether_unit,
        train_len: train.len(),
        test_len: test.len(),
    })
}

/// Forecast party A then party B from one shared generator.
///
/// Party B's history continues the stream where party A's left off, so it
/// can only be reproduced by replaying party A first.
pub fn forecast_parties<R: Rng + ?Sized>(
    rng: &mut R,
    predictor: &mut dyn Predictor,
    params: &PipelineParams,
) -> Result<PartyForecasts, PactError> {
    let party_a = forecast_mean_amount(rng, predictor, params)?;
    let party_b = forecast_mean_amount(rng, predictor, params)?;
    Ok(PartyForecasts { party_a, party_b })
}
