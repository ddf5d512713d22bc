//! Inference Client Module - talks to the remote EEG inference service
//!
//! This module handles:
//! - Single-file prediction (`POST /eeg/predict/{target}`)
//! - Batch prediction (`POST /eeg/predict/batch/{target}`)
//! - Sample CSV download (`GET /eeg/sample`, `/eeg/sample.csv`)
//!
//! Callers depend on the [`InferenceService`] trait, so orchestration code
//! can run against [`EegClient`] or an in-process stub.

pub mod client;


pub use client::{ClientConfig, EegClient};

use std::future::Future;

use serde_json::{Map, Value};

use crate::logic::error::ServiceError;
use crate::logic::model::{PredictionResult, PredictionTarget};
use crate::logic::upload::UploadFile;

/// Decoded body of a successful batch request
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchResponse {
    pub results: Vec<PredictionResult>,
    /// Server-side statistics, passed through untouched
    pub summary: Map<String, Value>,
    /// Row count reported by the server (results may be truncated)
    pub count: Option<usize>,
}

/// Remote inference capability
pub trait InferenceService {
    /// Score the first row of `file` for `target`
    fn predict(
        &self,
        file: &UploadFile,
        target: PredictionTarget,
    ) -> impl Future<Output = Result<PredictionResult, ServiceError>> + Send;

    /// Score every row of `file` for `target`
    fn predict_batch(
        &self,
        file: &UploadFile,
        target: PredictionTarget,
    ) -> impl Future<Output = Result<BatchResponse, ServiceError>> + Send;

    /// Fetch the server's sample CSV
    fn fetch_sample(&self) -> impl Future<Output = Result<Vec<u8>, ServiceError>> + Send;
}
