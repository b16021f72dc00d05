//! # pact-runner: Forecast-and-deploy scenario composition.
//!
//! Wires a [`Predictor`](pact_core::traits::Predictor) and a
//! [`Ledger`](pact_core::traits::Ledger) into the full run:
//! - [`config::ScenarioConfig`]: seed, pipeline parameters, agreement terms, roles
//! - [`scenario::run_scenario`]: forecast, fund, deploy, confirm
//! - [`report`]: text and JSON rendering of the run

pub mod config;
pub mod report;
pub mod scenario;

pub use config::{Roles, ScenarioConfig};
pub use report::{OutputFormat, render, render_text};
pub use scenario::{Participants, ScenarioReport, forecast, run_scenario};
