//! Console rendering of a [`ScenarioReport`].

use std::fmt::Write;

use chrono::DateTime;
use pact_core::forecast::Forecast;
use pact_core::types::AgreementView;
use pact_core::units::wei_to_ether;

use crate::scenario::ScenarioReport;

/// Holdout amounts printed per line.
const AMOUNTS_PER_LINE: usize = 10;

/// Output format for the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other} (expected text or json)")),
        }
    }
}

/// Render the report in the requested format.
pub fn render(report: &ScenarioReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

fn format_timestamp(secs: u64) -> String {
    i64::try_from(secs)
        .ok()
        .and_then(|s| DateTime::from_timestamp(s, 0))
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| secs.to_string())
}

fn write_forecast(out: &mut String, label: &str, forecast: &Forecast) {
    let _ = writeln!(out, "{label}");
    let _ = writeln!(
        out,
        "  Actual transaction amounts ({} holdout records):",
        forecast.test_len
    );
    for chunk in forecast.actual_amounts.chunks(AMOUNTS_PER_LINE) {
        let line: Vec<String> = chunk.iter().map(|a| format!("{a:8.2}")).collect();
        let _ = writeln!(out, "   {}", line.join(" "));
    }
    let _ = writeln!(
        out,
        "  Predicted transaction amount mean: {} ether",
        forecast.predicted_mean
    );
}

fn write_confirmation(out: &mut String, view: &AgreementView) {
    let _ = writeln!(out, "  party A confirmed: {}", view.party_a_confirmed);
    let _ = writeln!(out, "  party B confirmed: {}", view.party_b_confirmed);
}

/// Human-readable report.
pub fn render_text(report: &ScenarioReport) -> String {
    let mut out = String::new();
    write_forecast(&mut out, "Party A", &report.forecasts.party_a);
    write_forecast(&mut out, "Party B", &report.forecasts.party_b);

    let p = &report.participants;
    let _ = writeln!(out);
    let _ = writeln!(out, "party A balance: {} ether ({})", wei_to_ether(report.party_a_balance), p.party_a);
    let _ = writeln!(out, "party B balance: {} ether ({})", wei_to_ether(report.party_b_balance), p.party_b);

    let deployed = &report.deployed;
    let _ = writeln!(out);
    let _ = writeln!(out, "AgreementContract deployed at: {}", deployed.address);
    let _ = writeln!(out, "Before confirm");
    write_confirmation(&mut out, deployed);

    let c = &report.confirmed;
    let _ = writeln!(out, "After confirm");
    write_confirmation(&mut out, c);
    let _ = writeln!(out, "  party A: {}", c.party_a);
    let _ = writeln!(out, "  party B: {}", c.party_b);
    let _ = writeln!(out, "  contract value: {} ether", wei_to_ether(c.contract_value));
    let _ = writeln!(
        out,
        "  party A next transaction mean: {} ether",
        wei_to_ether(c.party_a_next_transaction_mean)
    );
    let _ = writeln!(
        out,
        "  party B next transaction mean: {} ether",
        wei_to_ether(c.party_b_next_transaction_mean)
    );
    let _ = writeln!(out, "  contract expiration: {}", format_timestamp(c.expiration));
    let _ = writeln!(out, "  contract balance: {} ether", wei_to_ether(c.balance));
    out
}
