//! Prediction Module - single and batch prediction flows

pub mod batch;
pub mod orchestrator;

#[cfg(test)]
mod tests;

// Re-export common types
pub use batch::{build_histogram, predict_batch, BatchResult, Histogram};
pub use orchestrator::{predict_single, PredictionOutcome};
