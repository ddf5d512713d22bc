//! Features Module - EEG feature input
//!
//! Decoding of uploaded CSV files into fixed-length feature vectors.

pub mod parser;
pub mod sample;
pub mod vector;

// Re-export common types
pub use parser::parse;
pub use sample::generate_sample_csv;
pub use vector::{FeatureVector, FEATURE_COUNT};
