//! Capability interfaces for the pipeline's collaborators.
//!
//! - [`Predictor`]: fits a model and produces per-record predictions (pact-model implements)
//! - [`Ledger`]: balances, transfers, and agreement contracts (pact-ledger implements)
//!
//! Both are object-safe so the runner can hold `&mut dyn` handles and tests
//! can substitute stubs.

use crate::error::{LedgerError, PredictorError};
use crate::types::{Address, AgreementParams, AgreementView, Receipt, SequenceBatch};

/// A trainable regressor over sequence batches.
pub trait Predictor {
    /// Fit the model. `targets` holds one value per sample in `inputs`.
    fn fit(&mut self, inputs: &SequenceBatch, targets: &[f64]) -> Result<(), PredictorError>;

    /// One prediction per sample in `inputs`, in order.
    ///
    /// Fails with [`PredictorError::NotFitted`] before a successful `fit`.
    fn predict(&self, inputs: &SequenceBatch) -> Result<Vec<f64>, PredictorError>;
}

/// A ledger holding account balances and agreement contracts.
///
/// All values are in wei.
pub trait Ledger {
    /// Accounts available to sign transactions, in a stable order.
    fn accounts(&self) -> Vec<Address>;

    /// Account at `index` in [`accounts`](Self::accounts).
    ///
    /// Default implementation indexes into `accounts()`.
    fn account(&self, index: usize) -> Result<Address, LedgerError> {
        self.accounts()
            .get(index)
            .copied()
            .ok_or_else(|| LedgerError::UnknownAccount(format!("#{index}")))
    }

    /// Balance of an account or contract.
    fn balance(&self, address: &Address) -> Result<u128, LedgerError>;

    /// Move `value` from one account to another.
    fn transfer(&mut self, from: &Address, to: &Address, value: u128) -> Result<Receipt, LedgerError>;

    /// Deploy an agreement contract and return its address.
    fn deploy(&mut self, deployer: &Address, params: AgreementParams) -> Result<Address, LedgerError>;

    /// Confirm an agreement as `from`, escrowing `value` in the contract.
    fn confirm(&mut self, contract: &Address, from: &Address, value: u128) -> Result<Receipt, LedgerError>;

    /// Read back the agreement's fields.
    fn agreement(&self, contract: &Address) -> Result<AgreementView, LedgerError>;
}
