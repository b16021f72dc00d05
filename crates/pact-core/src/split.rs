//! Train/test partitioning of a normalized series.

use rand::Rng;
use tracing::debug;

use crate::constants::{ETHER_PRICE, TRAIN_FRACTION};
use crate::error::CoreError;
use crate::normalize::convert_to_ether_at;
use crate::synth::{SynthesisParams, generate_with};
use crate::types::{NormalizedSeries, TestSeries, TrainSeries};

/// Parameters for one synthesize → normalize → split pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineParams {
    pub synthesis: SynthesisParams,
    /// Reference price the normalization scale is derived from.
    pub ether_price: f64,
    /// Share of records assigned to the training segment, in `[0, 1]`.
    pub train_fraction: f64,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            synthesis: SynthesisParams::default(),
            ether_price: ETHER_PRICE,
            train_fraction: TRAIN_FRACTION,
        }
    }
}

/// Index of the first test record: `floor(fraction * len)`.
pub fn split_point(len: usize, fraction: f64) -> usize {
    (len as f64 * fraction) as usize
}

/// Partition into `[0, split)` and `[split, len)` without shuffling.
///
/// An empty segment is a valid result for very short series.
pub fn split_series(
    series: NormalizedSeries,
    train_fraction: f64,
) -> Result<(TrainSeries, TestSeries), CoreError> {
    if !(0.0..=1.0).contains(&train_fraction) {
        return Err(CoreError::InvalidInput(format!(
            "train fraction {train_fraction} is outside [0, 1]"
        )));
    }
    let at = split_point(series.len(), train_fraction);
    Ok(series.split_at(at))
}

/// Generate a fresh default history, normalize it, and split 80/20.
pub fn split_data<R: Rng + ?Sized>(rng: &mut R) -> Result<(TrainSeries, TestSeries, f64), CoreError> {
    split_data_with(rng, &PipelineParams::default())
}

/// [`split_data`] with explicit parameters.
pub fn split_data_with<R: Rng + ?Sized>(
    rng: &mut R,
    params: &PipelineParams,
) -> Result<(TrainSeries, TestSeries, f64), CoreError> {
    let history = generate_with(rng, &params.synthesis)?;
    let (normalized, ether_unit) = convert_to_ether_at(history, params.ether_price)?;
    let (train, test) = split_series(normalized, params.train_fraction)?;
    debug!(train = train.len(), test = test.len(), ether_unit, "split series");
    Ok((train, test, ether_unit))
}
