//! Prediction service interface: wire types and the submission client

pub mod client;
pub mod payload;

pub use client::{submit_async, SubmitOutcome};
pub use payload::{LoanApplication, PredictionResponse};
