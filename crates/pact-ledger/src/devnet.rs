//! In-memory development ledger implementing the [`Ledger`] trait.
//!
//! Starts with a fixed set of pre-funded signer accounts and mines one block
//! per state-changing call, advancing a deterministic clock. There is no
//! gas: transfers and confirmations move exactly the stated value.

use std::collections::HashMap;

use pact_core::constants::{
    DEV_ACCOUNT_BALANCE_ETHER, DEV_ACCOUNT_COUNT, DEV_BLOCK_TIME_SECS, DEV_GENESIS_TIMESTAMP,
};
use pact_core::error::LedgerError;
use pact_core::traits::Ledger;
use pact_core::types::{Address, AgreementParams, AgreementView, Receipt};
use pact_core::units::ether;
use tracing::{debug, info};

use crate::address::{contract_address, dev_account};
use crate::agreement::Agreement;

/// Configuration for a development ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevLedgerConfig {
    /// Number of pre-funded signer accounts.
    pub account_count: usize,
    /// Opening balance of each signer, in wei.
    pub account_balance: u128,
    /// Timestamp of block 0.
    pub genesis_timestamp: u64,
    /// Clock advance per mined block.
    pub block_time_secs: u64,
}

impl Default for DevLedgerConfig {
    fn default() -> Self {
        Self {
            account_count: DEV_ACCOUNT_COUNT,
            account_balance: ether(DEV_ACCOUNT_BALANCE_ETHER),
            genesis_timestamp: DEV_GENESIS_TIMESTAMP,
            block_time_secs: DEV_BLOCK_TIME_SECS,
        }
    }
}

/// Development ledger with agreement contract support.
#[derive(Debug, Clone)]
pub struct DevLedger {
    signers: Vec<Address>,
    balances: HashMap<Address, u128>,
    nonces: HashMap<Address, u64>,
    agreements: HashMap<Address, Agreement>,
    block_number: u64,
    timestamp: u64,
    block_time_secs: u64,
}

impl Default for DevLedger {
    fn default() -> Self {
        Self::new(DevLedgerConfig::default())
    }
}

impl DevLedger {
    /// Create a ledger at block 0 with funded signer accounts.
    pub fn new(config: DevLedgerConfig) -> Self {
        let signers: Vec<Address> = (0..config.account_count as u64).map(dev_account).collect();
        let balances = signers
            .iter()
            .map(|addr| (*addr, config.account_balance))
            .collect();

        debug!(
            accounts = signers.len(),
            genesis = config.genesis_timestamp,
            "development ledger initialized"
        );

        Self {
            signers,
            balances,
            nonces: HashMap::new(),
            agreements: HashMap::new(),
            block_number: 0,
            timestamp: config.genesis_timestamp,
            block_time_secs: config.block_time_secs,
        }
    }

    /// Height of the latest mined block.
    pub fn block_number(&self) -> u64 {
        self.block_number
    }

    /// Timestamp of the latest mined block.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Number of transactions sent from `address`.
    pub fn nonce(&self, address: &Address) -> u64 {
        self.nonces.get(address).copied().unwrap_or(0)
    }

    /// Sum of all balances, including contract escrow.
    ///
    /// `None` if the sum does not fit in a `u128`.
    pub fn total_supply(&self) -> Option<u128> {
        self.balances.values().try_fold(0u128, |acc, b| acc.checked_add(*b))
    }

    fn require_signer(&self, address: &Address) -> Result<(), LedgerError> {
        if self.signers.contains(address) {
            Ok(())
        } else {
            Err(LedgerError::UnknownAccount(address.to_string()))
        }
    }

    fn require_funds(&self, address: &Address, need: u128) -> Result<(), LedgerError> {
        let have = self.balances.get(address).copied().unwrap_or(0);
        if have < need {
            return Err(LedgerError::InsufficientFunds { have, need });
        }
        Ok(())
    }

    /// Debit `from`, credit `to`. Nothing changes on error.
    fn move_value(&mut self, from: &Address, to: &Address, value: u128) -> Result<(), LedgerError> {
        let have = self.balances.get(from).copied().unwrap_or(0);
        let debited = have
            .checked_sub(value)
            .ok_or(LedgerError::InsufficientFunds { have, need: value })?;
        if from == to {
            return Ok(());
        }
        let credited = self
            .balances
            .get(to)
            .copied()
            .unwrap_or(0)
            .checked_add(value)
            .ok_or_else(|| LedgerError::InvalidAmount(format!("balance of {to} would overflow")))?;
        self.balances.insert(*from, debited);
        self.balances.insert(*to, credited);
        Ok(())
    }

    /// Bump the sender's nonce and mine a block.
    fn commit(&mut self, from: &Address, to: &Address, value: u128) -> Receipt {
        *self.nonces.entry(*from).or_default() += 1;
        self.block_number += 1;
        self.timestamp += self.block_time_secs;
        Receipt {
            block_number: self.block_number,
            timestamp: self.timestamp,
            from: *from,
            to: *to,
            value,
        }
    }
}

impl Ledger for DevLedger {
    fn accounts(&self) -> Vec<Address> {
        self.signers.clone()
    }

    fn balance(&self, address: &Address) -> Result<u128, LedgerError> {
        Ok(self.balances.get(address).copied().unwrap_or(0))
    }

    fn transfer(&mut self, from: &Address, to: &Address, value: u128) -> Result<Receipt, LedgerError> {
        self.require_signer(from)?;
        self.require_funds(from, value)?;
        self.move_value(from, to, value)?;
        let receipt = self.commit(from, to, value);
        info!(%from, %to, value, block = receipt.block_number, "transfer");
        Ok(receipt)
    }

    fn deploy(&mut self, deployer: &Address, params: AgreementParams) -> Result<Address, LedgerError> {
        self.require_signer(deployer)?;
        let address = contract_address(deployer, self.nonce(deployer));

        // Deployed in the block this call mines.
        let agreement = Agreement::new(params, self.timestamp + self.block_time_secs)?;
        let receipt = self.commit(deployer, &address, 0);
        info!(
            %address,
            %deployer,
            block = receipt.block_number,
            expiration = agreement.expiration(),
            "agreement deployed"
        );

        self.agreements.insert(address, agreement);
        Ok(address)
    }

    fn confirm(&mut self, contract: &Address, from: &Address, value: u128) -> Result<Receipt, LedgerError> {
        self.require_signer(from)?;
        let side = self
            .agreements
            .get(contract)
            .ok_or_else(|| LedgerError::UnknownContract(contract.to_string()))?
            .confirmation_side(from, value)?;
        self.require_funds(from, value)?;

        self.move_value(from, contract, value)?;
        let mut active = false;
        if let Some(agreement) = self.agreements.get_mut(contract) {
            agreement.mark_confirmed(side);
            active = agreement.is_confirmed();
        }
        let receipt = self.commit(from, contract, value);
        info!(%contract, %from, ?side, value, active, block = receipt.block_number, "agreement confirmed");
        Ok(receipt)
    }

    fn agreement(&self, contract: &Address) -> Result<AgreementView, LedgerError> {
        let agreement = self
            .agreements
            .get(contract)
            .ok_or_else(|| LedgerError::UnknownContract(contract.to_string()))?;
        Ok(agreement.view(*contract, self.balances.get(contract).copied().unwrap_or(0)))
    }
}
