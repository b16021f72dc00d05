//! Reduction of per-record predictions to one forecast value.

use crate::error::CoreError;

/// Invert normalization on every prediction and average the results:
/// `mean(p / ether_unit)`.
///
/// # Examples
///
/// ```
/// use pact_core::reduce::reduce_predictions;
/// let m = reduce_predictions(&[2.0, 4.0, 6.0], 2.0).unwrap();
/// assert_eq!(m, 2.0);
/// ```
pub fn reduce_predictions(predicted_normalized: &[f64], ether_unit: f64) -> Result<f64, CoreError> {
    if predicted_normalized.is_empty() {
        return Err(CoreError::InvalidInput("no predictions to reduce".into()));
    }
    let sum: f64 = predicted_normalized.iter().map(|p| p / ether_unit).sum();
    Ok(sum / predicted_normalized.len() as f64)
}
