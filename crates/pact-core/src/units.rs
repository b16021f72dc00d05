//! Conversions between ether amounts and wei.

use crate::constants::WEI_PER_ETHER;
use crate::error::LedgerError;

/// Whole ether to wei.
///
/// # Examples
///
/// ```
/// use pact_core::units::ether;
/// assert_eq!(ether(2), 2_000_000_000_000_000_000);
/// ```
pub fn ether(whole: u64) -> u128 {
    whole as u128 * WEI_PER_ETHER
}

/// Fractional ether to wei, rounded to the nearest wei.
///
/// Rejects negative, non-finite, and out-of-range amounts.
pub fn ether_to_wei(amount: f64) -> Result<u128, LedgerError> {
    if !amount.is_finite() {
        return Err(LedgerError::InvalidAmount(format!("{amount} ether is not finite")));
    }
    if amount < 0.0 {
        return Err(LedgerError::InvalidAmount(format!("{amount} ether is negative")));
    }
    let wei = (amount * WEI_PER_ETHER as f64).round();
    if wei >= u128::MAX as f64 {
        return Err(LedgerError::InvalidAmount(format!("{amount} ether overflows")));
    }
    Ok(wei as u128)
}

/// Wei to ether (display helper, lossy).
pub fn wei_to_ether(wei: u128) -> f64 {
    wei as f64 / WEI_PER_ETHER as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_ether() {
        assert_eq!(ether(0), 0);
        assert_eq!(ether(100), 100 * WEI_PER_ETHER);
    }

    #[test]
    fn fractional_ether_rounds() {
        assert_eq!(ether_to_wei(1.5).unwrap(), 1_500_000_000_000_000_000);
        assert_eq!(ether_to_wei(0.0).unwrap(), 0);
    }

    #[test]
    fn rejects_negative() {
        assert!(matches!(ether_to_wei(-0.1), Err(LedgerError::InvalidAmount(_))));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(ether_to_wei(f64::NAN).is_err());
        assert!(ether_to_wei(f64::INFINITY).is_err());
    }

    #[test]
    fn wei_to_ether_inverts_whole_amounts() {
        assert_eq!(wei_to_ether(ether(150)), 150.0);
    }

    #[test]
    fn typical_forecast_survives_conversion() {
        let mean = 150.123_456_789;
        let back = wei_to_ether(ether_to_wei(mean).unwrap());
        assert!((back - mean).abs() < 1e-9);
    }
}
