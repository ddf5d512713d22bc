//! Logic Module - EEG prediction engines
//!
//! - `features/` - CSV decoding into feature vectors, sample CSV
//! - `model/` - targets, result shapes, local fallback estimator
//! - `inference_client/` - remote inference service client
//! - `prediction/` - single (with fallback) and batch flows
//! - `presenter` - chart series for the UI

pub mod error;
pub mod features;
pub mod inference_client;
pub mod model;
pub mod prediction;
pub mod presenter;
pub mod upload;
