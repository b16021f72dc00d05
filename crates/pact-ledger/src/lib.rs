//! # pact-ledger: In-memory development ledger for Pact.
//!
//! - [`address`]: deterministic account and contract addresses
//! - [`agreement`]: agreement contract state and confirmation rules
//! - [`devnet`]: `DevLedger`, the [`Ledger`](pact_core::traits::Ledger) implementation

pub mod address;
pub mod agreement;
pub mod devnet;

pub use agreement::{Agreement, Side};
pub use devnet::{DevLedger, DevLedgerConfig};
