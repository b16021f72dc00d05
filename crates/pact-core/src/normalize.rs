//! Unit normalization of transaction amounts.
//!
//! The scale (`ether_unit = price / mean(amount)`) is estimated over the
//! whole series. Splitting happens afterwards, so the holdout segment shares
//! the full series' scale. Callers must normalize before splitting.

use tracing::debug;

use crate::constants::ETHER_PRICE;
use crate::error::CoreError;
use crate::stats;
use crate::types::{NormalizedRecord, NormalizedSeries, TransactionSeries};

/// Normalize against the default reference price (2000).
///
/// Returns the normalized series and the scale factor needed to invert it.
pub fn convert_to_ether(series: TransactionSeries) -> Result<(NormalizedSeries, f64), CoreError> {
    convert_to_ether_at(series, ETHER_PRICE)
}

/// Normalize against an explicit reference price.
pub fn convert_to_ether_at(
    series: TransactionSeries,
    reference_price: f64,
) -> Result<(NormalizedSeries, f64), CoreError> {
    if !reference_price.is_finite() || reference_price <= 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "reference price {reference_price} must be finite and positive"
        )));
    }
    if series.is_empty() {
        return Err(CoreError::InvalidInput("cannot normalize an empty series".into()));
    }

    let amounts: Vec<f64> = series.amounts().collect();
    let mean = stats::mean(&amounts)?;
    if !mean.is_finite() {
        return Err(CoreError::InvalidInput(format!("mean amount {mean} is not finite")));
    }
    if mean == 0.0 {
        return Err(CoreError::DivisionByZero);
    }
    // A subnormal mean overflows the scale.
    let ether_unit = reference_price / mean;
    if !ether_unit.is_finite() || ether_unit <= 0.0 {
        return Err(CoreError::DivisionByZero);
    }

    debug!(
        mean,
        std_dev = stats::sample_std_dev(&amounts).unwrap_or(0.0),
        ether_unit,
        "normalizing series"
    );

    let records = series
        .into_records()
        .into_iter()
        .map(|r| NormalizedRecord {
            amount: r.amount,
            date: r.date,
            amount_normalized: r.amount * ether_unit,
        })
        .collect();

    Ok((NormalizedSeries::new(records), ether_unit))
}
