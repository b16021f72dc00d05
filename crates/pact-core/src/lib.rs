//! # pact-core
//! Foundation types, traits, and the synthesis/normalization pipeline for Pact.

pub mod constants;
pub mod error;
pub mod forecast;
pub mod normalize;
pub mod reduce;
pub mod split;
pub mod stats;
pub mod synth;
pub mod traits;
pub mod types;
pub mod units;

pub use forecast::{Forecast, PartyForecasts, forecast_mean_amount, forecast_parties};
pub use normalize::{convert_to_ether, convert_to_ether_at};
pub use reduce::reduce_predictions;
pub use split::{PipelineParams, split_data, split_data_with, split_series};
pub use synth::{SynthesisParams, generate_transaction_history, generate_with};
