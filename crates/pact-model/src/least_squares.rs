//! Ordinary least squares predictor implementing the [`Predictor`] trait.
//!
//! Fits `y = weight * x + bias` in closed form, where `x` is the single
//! feature of each sample's last time step. No iterative training: the
//! same inputs always produce the same coefficients.

use ndarray::ArrayView1;
use pact_core::error::PredictorError;
use pact_core::traits::Predictor;
use pact_core::types::SequenceBatch;
use tracing::debug;

/// Fitted line coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub weight: f64,
    pub bias: f64,
}

/// Single-feature linear regressor.
///
/// With fewer than two distinct input values the slope is undefined; the
/// fit then degrades to the constant model `y = mean(targets)`.
#[derive(Debug, Clone, Default)]
pub struct LeastSquaresPredictor {
    coefficients: Option<Coefficients>,
}

impl LeastSquaresPredictor {
    /// Create an unfitted predictor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Coefficients of the last successful fit.
    pub fn coefficients(&self) -> Option<Coefficients> {
        self.coefficients
    }

    fn check_width(inputs: &SequenceBatch) -> Result<(), PredictorError> {
        if inputs.features() != 1 {
            return Err(PredictorError::ShapeMismatch {
                expected: 1,
                got: inputs.features(),
            });
        }
        Ok(())
    }
}

impl Predictor for LeastSquaresPredictor {
    fn fit(&mut self, inputs: &SequenceBatch, targets: &[f64]) -> Result<(), PredictorError> {
        if inputs.is_empty() {
            return Err(PredictorError::EmptyTrainingSet);
        }
        Self::check_width(inputs)?;
        if targets.len() != inputs.len() {
            return Err(PredictorError::TargetLength {
                expected: inputs.len(),
                got: targets.len(),
            });
        }

        let last = inputs.last_steps();
        let xs = last.column(0);
        let ys = ArrayView1::from(targets);
        let n = inputs.len() as f64;
        let mean_x = xs.sum() / n;
        let mean_y = ys.sum() / n;

        let dx = xs.mapv(|x| x - mean_x);
        let dy = ys.mapv(|y| y - mean_y);
        let sxx = dx.dot(&dx);
        let sxy = dx.dot(&dy);

        let coefficients = if sxx > 0.0 {
            let weight = sxy / sxx;
            Coefficients {
                weight,
                bias: mean_y - weight * mean_x,
            }
        } else {
            Coefficients {
                weight: 0.0,
                bias: mean_y,
            }
        };

        debug!(
            samples = inputs.len(),
            weight = coefficients.weight,
            bias = coefficients.bias,
            "fitted least squares predictor"
        );
        self.coefficients = Some(coefficients);
        Ok(())
    }

    fn predict(&self, inputs: &SequenceBatch) -> Result<Vec<f64>, PredictorError> {
        let c = self.coefficients.ok_or(PredictorError::NotFitted)?;
        if inputs.is_empty() {
            return Ok(Vec::new());
        }
        Self::check_width(inputs)?;
        Ok(inputs
            .last_steps()
            .column(0)
            .mapv(|x| c.weight * x + c.bias)
            .to_vec())
    }
}
