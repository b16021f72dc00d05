//! Scenario configuration.
//!
//! Provides [`ScenarioConfig`] with defaults matching the reference run:
//! seed 42, 1000-record histories, reference price 2000, a 100 ether
//! agreement lasting one day, and the fixed account roles below.

use pact_core::constants::{CONTRACT_DURATION_SECS, CONTRACT_VALUE_ETHER, DEFAULT_SEED};
use pact_core::split::PipelineParams;

/// Ledger account indices for each role in the scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roles {
    /// Signs the agreement deployment.
    pub deployer: usize,
    pub party_a: usize,
    pub party_b: usize,
    /// Funders, in transfer order. Even positions fund party A, odd fund party B.
    pub lenders: Vec<usize>,
}

impl Default for Roles {
    fn default() -> Self {
        Self {
            deployer: 0,
            party_a: 1,
            party_b: 2,
            lenders: vec![3, 4, 5, 6],
        }
    }
}

/// Configuration for one forecast-and-deploy run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    /// Seed of the run's random generator.
    pub seed: u64,
    /// Draw party B from its own generator instead of continuing party A's stream.
    pub independent_parties: bool,
    /// Synthesis, normalization, and split parameters for both parties.
    pub pipeline: PipelineParams,
    /// Amount each lender transfers and each party escrows, in whole ether.
    pub contract_value_ether: u64,
    /// Agreement lifetime in seconds.
    pub duration_secs: u64,
    pub roles: Roles,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            independent_parties: false,
            pipeline: PipelineParams::default(),
            contract_value_ether: CONTRACT_VALUE_ETHER,
            duration_secs: CONTRACT_DURATION_SECS,
            roles: Roles::default(),
        }
    }
}

impl ScenarioConfig {
    /// Seed of party B's generator when parties are independent.
    pub fn party_b_seed(&self) -> u64 {
        self.seed.wrapping_add(1)
    }
}
