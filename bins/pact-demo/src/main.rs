//! Pact demo binary.
//!
//! Forecasts two parties' mean next transaction amounts from synthetic
//! histories, then funds, deploys, and confirms an agreement on an
//! in-memory development ledger using those forecasts as parameters.

use anyhow::{Context, Result};
use clap::Parser;
use pact_core::constants::{CONTRACT_DURATION_SECS, CONTRACT_VALUE_ETHER, DEFAULT_SEED, ETHER_PRICE};
use pact_core::split::PipelineParams;
use pact_ledger::DevLedger;
use pact_model::LeastSquaresPredictor;
use pact_runner::{OutputFormat, ScenarioConfig, render, run_scenario};
use tracing::info;

/// Forecast-parameterized agreement demo.
#[derive(Parser, Debug)]
#[command(
    name = "pact-demo",
    version,
    about = "Forecast two parties' transaction means and deploy an agreement with them"
)]
struct Args {
    /// Seed of the run's random generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Seed party B separately instead of continuing party A's random stream
    #[arg(long)]
    independent_parties: bool,

    /// Reference unit price used to normalize transaction amounts
    #[arg(long, default_value_t = ETHER_PRICE)]
    ether_price: f64,

    /// Amount each party escrows, in whole ether
    #[arg(long, default_value_t = CONTRACT_VALUE_ETHER)]
    contract_value: u64,

    /// Agreement lifetime in seconds
    #[arg(long, default_value_t = CONTRACT_DURATION_SECS)]
    duration_secs: u64,

    /// Report format ("text" or "json")
    #[arg(long, default_value = "text")]
    output: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log output format ("text" or "json")
    #[arg(long, default_value = "text")]
    log_format: String,
}

impl Args {
    /// Convert CLI args into a ScenarioConfig.
    fn into_config(self) -> (ScenarioConfig, OutputFormat, String, String) {
        let config = ScenarioConfig {
            seed: self.seed,
            independent_parties: self.independent_parties,
            pipeline: PipelineParams {
                ether_price: self.ether_price,
                ..PipelineParams::default()
            },
            contract_value_ether: self.contract_value,
            duration_secs: self.duration_secs,
            ..ScenarioConfig::default()
        };
        (config, self.output, self.log_level, self.log_format)
    }
}

fn main() -> Result<()> {
    let (config, output, log_level, log_format) = Args::parse().into_config();
    init_logging(&log_level, &log_format);

    info!("Pact demo v{}", env!("CARGO_PKG_VERSION"));
    info!(
        seed = config.seed,
        independent_parties = config.independent_parties,
        ether_price = config.pipeline.ether_price,
        "starting run"
    );

    let mut predictor = LeastSquaresPredictor::new();
    let mut ledger = DevLedger::default();
    let report =
        run_scenario(&config, &mut predictor, &mut ledger).context("scenario run failed")?;

    println!("{}", render(&report, output).context("failed to render report")?);
    Ok(())
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Logs go to stderr so the report on stdout stays machine-readable.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .init();
    }
}
