//! Model Module - targets, results and the local fallback estimator
//!
//! The real model lives server-side; this module only describes its
//! output shapes and approximates them when the server is down.

pub mod fallback;
pub mod result;
pub mod target;

// Re-export common types
pub use fallback::estimate;
pub use result::PredictionResult;
pub use target::{PredictionTarget, ResultKind, TargetInfo, TARGET_TABLE};
