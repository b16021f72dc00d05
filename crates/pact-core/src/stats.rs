//! Summary statistics over amount sequences.

use crate::error::CoreError;

/// Arithmetic mean. Fails on an empty sequence.
pub fn mean(values: &[f64]) -> Result<f64, CoreError> {
    if values.is_empty() {
        return Err(CoreError::InvalidInput("mean of an empty sequence".into()));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator).
///
/// Returns `None` for fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = values.iter().sum::<f64>() / values.len() as f64;
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}
