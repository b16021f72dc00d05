//! Error types for the Pact pipeline and its collaborators.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid input: {0}")] InvalidInput(String),
    #[error("division by zero: mean transaction amount is zero")] DivisionByZero,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictorError {
    #[error("predictor used before fit")] NotFitted,
    #[error("empty training set")] EmptyTrainingSet,
    #[error("shape mismatch: expected {expected} features per step, got {got}")] ShapeMismatch { expected: usize, got: usize },
    #[error("{got} targets for {expected} training samples")] TargetLength { expected: usize, got: usize },
    #[error("predictor returned {got} outputs for {expected} inputs")] OutputLength { expected: usize, got: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("unknown account: {0}")] UnknownAccount(String),
    #[error("unknown contract: {0}")] UnknownContract(String),
    #[error("insufficient funds: have {have}, need {need}")] InsufficientFunds { have: u128, need: u128 },
    #[error("{0} is not a party to the agreement")] NotAParty(String),
    #[error("{0} already confirmed the agreement")] AlreadyConfirmed(String),
    #[error("incorrect value: expected {expected}, got {got}")] IncorrectValue { expected: u128, got: u128 },
    #[error("invalid amount: {0}")] InvalidAmount(String),
}

#[derive(Error, Debug)]
pub enum PactError {
    #[error(transparent)] Core(#[from] CoreError),
    #[error(transparent)] Predictor(#[from] PredictorError),
    #[error(transparent)] Ledger(#[from] LedgerError),
}
