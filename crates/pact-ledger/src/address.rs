//! Deterministic address derivation for development accounts and contracts.
//!
//! Addresses are the first 20 bytes of a BLAKE3 derived key, so every
//! development ledger starts with the same accounts and assigns the same
//! contract addresses for the same deployment order.

use pact_core::types::Address;

/// BLAKE3 KDF context for development account addresses.
const ACCOUNT_CONTEXT: &str = "pact-ledger-dev-account-v1";

/// BLAKE3 KDF context for contract addresses.
const CONTRACT_CONTEXT: &str = "pact-ledger-contract-v1";

fn truncate(key: [u8; 32]) -> Address {
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&key[..20]);
    Address(bytes)
}

/// Address of the development account at `index`.
pub fn dev_account(index: u64) -> Address {
    truncate(blake3::derive_key(ACCOUNT_CONTEXT, &index.to_le_bytes()))
}

/// Address of the contract created by `deployer` at account nonce `nonce`.
pub fn contract_address(deployer: &Address, nonce: u64) -> Address {
    let mut ikm = Vec::with_capacity(28);
    ikm.extend_from_slice(deployer.as_bytes());
    ikm.extend_from_slice(&nonce.to_le_bytes());
    truncate(blake3::derive_key(CONTRACT_CONTEXT, &ikm))
}
