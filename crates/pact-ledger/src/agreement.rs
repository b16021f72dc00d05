//! Agreement contract state.
//!
//! An agreement binds two parties to a contract value and carries both
//! parties' predicted mean next transaction amounts. It is active once each
//! party has confirmed by escrowing exactly the contract value.

use pact_core::error::LedgerError;
use pact_core::types::{Address, AgreementParams, AgreementView};

/// Which party a confirmation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

/// On-ledger state of one agreement contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agreement {
    params: AgreementParams,
    expiration: u64,
    party_a_confirmed: bool,
    party_b_confirmed: bool,
}

impl Agreement {
    /// Create the agreement as deployed at `deployed_at` (Unix seconds).
    pub fn new(params: AgreementParams, deployed_at: u64) -> Result<Self, LedgerError> {
        let expiration = deployed_at.checked_add(params.duration_secs).ok_or_else(|| {
            LedgerError::InvalidAmount(format!("duration {} overflows the clock", params.duration_secs))
        })?;
        Ok(Self {
            params,
            expiration,
            party_a_confirmed: false,
            party_b_confirmed: false,
        })
    }

    pub fn params(&self) -> &AgreementParams {
        &self.params
    }

    pub fn expiration(&self) -> u64 {
        self.expiration
    }

    /// Both parties have confirmed.
    pub fn is_confirmed(&self) -> bool {
        self.party_a_confirmed && self.party_b_confirmed
    }

    /// Check a confirmation from `from` carrying `value` without applying it.
    pub fn confirmation_side(&self, from: &Address, value: u128) -> Result<Side, LedgerError> {
        let side = if *from == self.params.party_a && !self.party_a_confirmed {
            Side::A
        } else if *from == self.params.party_b && !self.party_b_confirmed {
            Side::B
        } else if *from == self.params.party_a || *from == self.params.party_b {
            return Err(LedgerError::AlreadyConfirmed(from.to_string()));
        } else {
            return Err(LedgerError::NotAParty(from.to_string()));
        };

        if value != self.params.contract_value {
            return Err(LedgerError::IncorrectValue {
                expected: self.params.contract_value,
                got: value,
            });
        }
        Ok(side)
    }

    /// Record a confirmation previously checked with [`confirmation_side`](Self::confirmation_side).
    pub fn mark_confirmed(&mut self, side: Side) {
        match side {
            Side::A => self.party_a_confirmed = true,
            Side::B => self.party_b_confirmed = true,
        }
    }

    /// Read-back view at `address` holding `balance`.
    pub fn view(&self, address: Address, balance: u128) -> AgreementView {
        AgreementView {
            address,
            party_a: self.params.party_a,
            party_b: self.params.party_b,
            contract_value: self.params.contract_value,
            party_a_next_transaction_mean: self.params.party_a_next_transaction_mean,
            party_b_next_transaction_mean: self.params.party_b_next_transaction_mean,
            expiration: self.expiration,
            party_a_confirmed: self.party_a_confirmed,
            party_b_confirmed: self.party_b_confirmed,
            balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Address = Address([0xA1; 20]);
    const B: Address = Address([0xB2; 20]);
    const STRANGER: Address = Address([0xCC; 20]);

    fn params() -> AgreementParams {
        AgreementParams {
            party_a: A,
            party_b: B,
            contract_value: 100,
            duration_secs: 86_400,
            party_a_next_transaction_mean: 150,
            party_b_next_transaction_mean: 149,
        }
    }

    fn agreement() -> Agreement {
        Agreement::new(params(), 1_000).unwrap()
    }

    #[test]
    fn expiration_is_deploy_time_plus_duration() {
        assert_eq!(agreement().expiration(), 87_400);
    }

    #[test]
    fn expiration_overflow_rejected() {
        let p = AgreementParams {
            duration_secs: u64::MAX,
            ..params()
        };
        assert!(Agreement::new(p, 1).is_err());
    }

    #[test]
    fn starts_unconfirmed() {
        let a = agreement();
        let v = a.view(Address::ZERO, 0);
        assert!(!v.party_a_confirmed && !v.party_b_confirmed);
        assert!(!a.is_confirmed());
    }

    #[test]
    fn both_parties_confirm() {
        let mut a = agreement();
        let side = a.confirmation_side(&A, 100).unwrap();
        assert_eq!(side, Side::A);
        a.mark_confirmed(side);
        assert!(!a.is_confirmed());

        let side = a.confirmation_side(&B, 100).unwrap();
        assert_eq!(side, Side::B);
        a.mark_confirmed(side);
        assert!(a.is_confirmed());
    }

    #[test]
    fn stranger_is_not_a_party() {
        let err = agreement().confirmation_side(&STRANGER, 100).unwrap_err();
        assert!(matches!(err, LedgerError::NotAParty(_)));
    }

    #[test]
    fn second_confirmation_rejected() {
        let mut a = agreement();
        a.mark_confirmed(Side::A);
        let err = a.confirmation_side(&A, 100).unwrap_err();
        assert!(matches!(err, LedgerError::AlreadyConfirmed(_)));
    }

    #[test]
    fn wrong_value_rejected() {
        let err = agreement().confirmation_side(&A, 99).unwrap_err();
        assert_eq!(err, LedgerError::IncorrectValue { expected: 100, got: 99 });
    }

    #[test]
    fn same_address_for_both_parties_confirms_twice() {
        let p = AgreementParams {
            party_b: A,
            ..params()
        };
        let mut a = Agreement::new(p, 0).unwrap();
        a.mark_confirmed(a.confirmation_side(&A, 100).unwrap());
        a.mark_confirmed(a.confirmation_side(&A, 100).unwrap());
        assert!(a.is_confirmed());
        assert!(a.confirmation_side(&A, 100).is_err());
    }

    #[test]
    fn view_carries_forecast_means() {
        let v = agreement().view(STRANGER, 42);
        assert_eq!(v.address, STRANGER);
        assert_eq!(v.balance, 42);
        assert_eq!(v.party_a_next_transaction_mean, 150);
        assert_eq!(v.party_b_next_transaction_mean, 149);
    }
}
