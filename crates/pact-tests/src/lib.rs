//! Integration test suite for Pact.
//!
//! End-to-end scenario runs across the pipeline, predictor, and ledger
//! crates, plus property tests for the pipeline invariants.

pub mod helpers;
