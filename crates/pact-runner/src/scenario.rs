//! The forecast-and-deploy scenario.
//!
//! Forecasts both parties' mean next transaction amounts, funds the parties
//! from the lender accounts, deploys the agreement with both forecasts as
//! parameters, and runs the two-party confirmation handshake. Each step runs
//! once; the first failure aborts the run before any later ledger call.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use pact_core::error::{LedgerError, PactError};
use pact_core::forecast::{PartyForecasts, forecast_mean_amount, forecast_parties};
use pact_core::traits::{Ledger, Predictor};
use pact_core::types::{Address, AgreementParams, AgreementView, Receipt};
use pact_core::units::{ether, ether_to_wei};

use crate::config::ScenarioConfig;

/// Resolved ledger addresses for the scenario roles.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Participants {
    pub deployer: Address,
    pub party_a: Address,
    pub party_b: Address,
    pub lenders: Vec<Address>,
}

/// Everything the run observed, in order.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ScenarioReport {
    pub forecasts: PartyForecasts,
    pub participants: Participants,
    pub funding: Vec<Receipt>,
    /// Party balances after funding, in wei.
    pub party_a_balance: u128,
    pub party_b_balance: u128,
    /// Agreement state right after deployment.
    pub deployed: AgreementView,
    pub confirmations: Vec<Receipt>,
    /// Agreement state after both confirmations.
    pub confirmed: AgreementView,
}

/// Forecast both parties according to the configured seeding policy.
pub fn forecast(
    config: &ScenarioConfig,
    predictor: &mut dyn Predictor,
) -> Result<PartyForecasts, PactError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    if !config.independent_parties {
        return forecast_parties(&mut rng, predictor, &config.pipeline);
    }

    let mut rng_b = StdRng::seed_from_u64(config.party_b_seed());
    let party_a = forecast_mean_amount(&mut rng, predictor, &config.pipeline)?;
    let party_b = forecast_mean_amount(&mut rng_b, predictor, &config.pipeline)?;
    Ok(PartyForecasts { party_a, party_b })
}

fn resolve(config: &ScenarioConfig, ledger: &dyn Ledger) -> Result<Participants, LedgerError> {
    let roles = &config.roles;
    Ok(Participants {
        deployer: ledger.account(roles.deployer)?,
        party_a: ledger.account(roles.party_a)?,
        party_b: ledger.account(roles.party_b)?,
        lenders: roles
            .lenders
            .iter()
            .map(|&i| ledger.account(i))
            .collect::<Result<_, _>>()?,
    })
}

/// Run the full scenario against the given collaborators.
pub fn run_scenario(
    config: &ScenarioConfig,
    predictor: &mut dyn Predictor,
    ledger: &mut dyn Ledger,
) -> Result<ScenarioReport, PactError> {
    let forecasts = forecast(config, predictor)?;
    info!(
        party_a = forecasts.party_a.predicted_mean,
        party_b = forecasts.party_b.predicted_mean,
        "forecasts ready"
    );

    let participants = resolve(config, ledger)?;
    let contract_value = ether(config.contract_value_ether);

    let mut funding = Vec::with_capacity(participants.lenders.len());
    for (i, lender) in participants.lenders.iter().enumerate() {
        let recipient = if i % 2 == 0 {
            &participants.party_a
        } else {
            &participants.party_b
        };
        funding.push(ledger.transfer(lender, recipient, contract_value)?);
    }
    let party_a_balance = ledger.balance(&participants.party_a)?;
    let party_b_balance = ledger.balance(&participants.party_b)?;
    info!(party_a_balance, party_b_balance, "parties funded");

    let params = AgreementParams {
        party_a: participants.party_a,
        party_b: participants.party_b,
        contract_value,
        duration_secs: config.duration_secs,
        party_a_next_transaction_mean: ether_to_wei(forecasts.party_a.predicted_mean)?,
        party_b_next_transaction_mean: ether_to_wei(forecasts.party_b.predicted_mean)?,
    };
    let contract = ledger.deploy(&participants.deployer, params)?;
    let deployed = ledger.agreement(&contract)?;

    let confirmations = vec![
        ledger.confirm(&contract, &participants.party_a, contract_value)?,
        ledger.confirm(&contract, &participants.party_b, contract_value)?,
    ];
    let confirmed = ledger.agreement(&contract)?;
    info!(%contract, balance = confirmed.balance, "agreement confirmed by both parties");

    Ok(ScenarioReport {
        forecasts,
        participants,
        funding,
        party_a_balance,
        party_b_balance,
        deployed,
        confirmations,
        confirmed,
    })
}
