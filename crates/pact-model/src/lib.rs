//! # pact-model: Predictor implementations for Pact forecasts.
//!
//! - [`least_squares`]: closed-form single-feature linear regression

pub mod least_squares;

pub use least_squares::{Coefficients, LeastSquaresPredictor};
