//! Core data types: synthetic transaction series, model input batches,
//! and the ledger-facing agreement types.
//!
//! Series amounts are plain `f64` in the synthetic unit. Ledger values are
//! `u128` wei (see [`crate::units`]).

use std::fmt;

use chrono::NaiveDate;
use ndarray::{Array1, Array3, ArrayView1, ArrayView2, Axis, s};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::CoreError;

/// One synthetic transaction.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TransactionRecord {
    /// Non-negative amount in the synthetic unit.
    pub amount: f64,
    /// Calendar day of the transaction.
    pub date: NaiveDate,
}

/// A date-ordered series of synthetic transactions for one party.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TransactionSeries {
    records: Vec<TransactionRecord>,
}

impl TransactionSeries {
    /// Wrap an already-ordered list of records.
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TransactionRecord> {
        self.records
    }

    /// Amounts in record order.
    pub fn amounts(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.amount)
    }
}

/// A transaction after unit normalization.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct NormalizedRecord {
    pub amount: f64,
    pub date: NaiveDate,
    /// `amount * ether_unit`.
    pub amount_normalized: f64,
}

/// A series whose records all carry `amount_normalized`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NormalizedSeries {
    records: Vec<NormalizedRecord>,
}

/// Leading segment of a split, used for fitting.
pub type TrainSeries = NormalizedSeries;

/// Trailing segment of a split, held out for prediction.
pub type TestSeries = NormalizedSeries;

impl NormalizedSeries {
    pub fn new(records: Vec<NormalizedRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    /// Original amounts in record order.
    pub fn amounts(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.amount).collect()
    }

    /// Normalized amounts in record order.
    pub fn normalized_amounts(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.amount_normalized).collect()
    }

    /// Split into `[0, at)` and `[at, len)`, preserving order.
    ///
    /// `at` is clamped to the series length.
    pub fn split_at(mut self, at: usize) -> (Self, Self) {
        let at = at.min(self.records.len());
        let tail = self.records.split_off(at);
        (self, Self { records: tail })
    }

    /// Normalized amounts as a single-feature, single-step model batch.
    pub fn to_batch(&self) -> SequenceBatch {
        SequenceBatch::from_column(self.normalized_amounts())
    }
}

/// Model input of shape `[samples, timesteps, features]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceBatch {
    data: Array3<f64>,
}

impl SequenceBatch {
    /// One sample per value, each a sequence of one step with one feature.
    pub fn from_column(values: Vec<f64>) -> Self {
        let data = Array1::from_vec(values)
            .insert_axis(Axis(1))
            .insert_axis(Axis(2));
        Self { data }
    }

    /// Build a batch from row-major values with an explicit shape.
    ///
    /// `data.len()` must be a multiple of `timesteps * features`, and both
    /// dimensions must be non-zero.
    pub fn with_shape(data: Vec<f64>, timesteps: usize, features: usize) -> Result<Self, CoreError> {
        let stride = timesteps * features;
        if stride == 0 {
            return Err(CoreError::InvalidInput(format!(
                "batch shape has a zero dimension: timesteps={timesteps}, features={features}"
            )));
        }
        let samples = data.len() / stride;
        let data = Array3::from_shape_vec((samples, timesteps, features), data)
            .map_err(|e| CoreError::InvalidInput(format!("values do not fill samples of {stride}: {e}")))?;
        Ok(Self { data })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn timesteps(&self) -> usize {
        self.data.len_of(Axis(1))
    }

    pub fn features(&self) -> usize {
        self.data.len_of(Axis(2))
    }

    /// The `[timesteps, features]` view of sample `index`. Panics if out of range.
    pub fn sample(&self, index: usize) -> ArrayView2<'_, f64> {
        self.data.index_axis(Axis(0), index)
    }

    /// Feature vector of the last step of sample `index`.
    pub fn last_step(&self, index: usize) -> ArrayView1<'_, f64> {
        self.data.slice(s![index, -1, ..])
    }

    /// The `[samples, features]` view of every sample's last step.
    pub fn last_steps(&self) -> ArrayView2<'_, f64> {
        self.data.slice(s![.., -1, ..])
    }

    /// Iterate over samples in order.
    pub fn samples(&self) -> impl Iterator<Item = ArrayView2<'_, f64>> + '_ {
        self.data.outer_iter()
    }
}

/// A 20-byte ledger account or contract address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address(pub [u8; 20]);

impl Address {
    pub const ZERO: Self = Self([0u8; 20]);

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Constructor arguments for an agreement contract. Values in wei.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgreementParams {
    pub party_a: Address,
    pub party_b: Address,
    /// Amount each party must escrow to confirm.
    pub contract_value: u128,
    pub duration_secs: u64,
    pub party_a_next_transaction_mean: u128,
    pub party_b_next_transaction_mean: u128,
}

/// State of a deployed agreement as read back from the ledger.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AgreementView {
    pub address: Address,
    pub party_a: Address,
    pub party_b: Address,
    pub contract_value: u128,
    pub party_a_next_transaction_mean: u128,
    pub party_b_next_transaction_mean: u128,
    /// Unix timestamp after which the agreement expires.
    pub expiration: u64,
    pub party_a_confirmed: bool,
    pub party_b_confirmed: bool,
    /// Escrowed balance held by the contract.
    pub balance: u128,
}

/// Result of a state-changing ledger call.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub block_number: u64,
    pub timestamp: u64,
    pub from: Address,
    pub to: Address,
    pub value: u128,
}
