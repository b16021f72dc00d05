//! Pipeline constants. Monetary values on the ledger are in wei (1 ether = 10^18 wei).

/// Wei per ether.
pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

/// Process-wide seed used by the demo run.
pub const DEFAULT_SEED: u64 = 42;

/// Number of synthetic transactions per party history.
pub const TRANSACTION_COUNT: usize = 1000;

/// Mean of the normal distribution synthetic amounts are drawn from.
pub const AMOUNT_MEAN: f64 = 150.0;

/// Standard deviation of the synthetic amount distribution.
pub const AMOUNT_STD_DEV: f64 = 50.0;

/// First calendar day of every synthetic history, as `(year, month, day)`.
pub const HISTORY_EPOCH: (i32, u32, u32) = (2020, 1, 1);

/// Reference unit price of the target currency used for normalization.
///
/// # Examples
///
/// ```
/// use pact_core::constants::ETHER_PRICE;
/// assert_eq!(ETHER_PRICE, 2000.0);
/// ```
pub const ETHER_PRICE: f64 = 2000.0;

/// Fraction of a series assigned to the training segment.
pub const TRAIN_FRACTION: f64 = 0.8;

/// Agreement value each party escrows on confirmation, in ether.
pub const CONTRACT_VALUE_ETHER: u64 = 100;

/// Agreement lifetime after deployment, in seconds (one day).
pub const CONTRACT_DURATION_SECS: u64 = 86_400;

/// Number of pre-funded accounts on the development ledger.
pub const DEV_ACCOUNT_COUNT: usize = 10;

/// Opening balance of every development account, in ether.
pub const DEV_ACCOUNT_BALANCE_ETHER: u64 = 100;

/// Timestamp of the development ledger's first block (2020-01-01T00:00:00Z).
pub const DEV_GENESIS_TIMESTAMP: u64 = 1_577_836_800;

/// Seconds the development ledger's clock advances per mined block.
pub const DEV_BLOCK_TIME_SECS: u64 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_split_is_eight_hundred() {
        let split = (TRANSACTION_COUNT as f64 * TRAIN_FRACTION) as usize;
        assert_eq!(split, 800);
    }

    #[test]
    fn dev_accounts_cover_every_scenario_role() {
        // deployer, two parties, four lenders
        assert!(DEV_ACCOUNT_COUNT >= 7);
    }

    #[test]
    fn genesis_timestamp_matches_history_epoch() {
        let (y, m, d) = HISTORY_EPOCH;
        let epoch = chrono::NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp();
        assert_eq!(epoch as u64, DEV_GENESIS_TIMESTAMP);
    }
}
