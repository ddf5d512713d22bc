//! Batch prediction and distribution histogram
//!
//! Batch requests have no local fallback: the service is authoritative.
//! Whatever the server returns, the histogram is always rebuilt locally.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::HISTOGRAM_BINS;
use crate::logic::error::ServiceError;
use crate::logic::inference_client::InferenceService;
use crate::logic::model::{PredictionResult, PredictionTarget};
use crate::logic::upload::UploadFile;

/// Fixed 10-bin distribution over `[0, max]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Histogram {
    pub bins: [u32; HISTOGRAM_BINS],
    pub labels: Vec<String>,
    pub max: u32,
}

impl Histogram {
    /// Empty histogram with labels `"0-{w}"`, `"{w}-{2w}"`, ...
    pub fn empty(max: u32) -> Self {
        let width = max / HISTOGRAM_BINS as u32;
        let labels = (0..HISTOGRAM_BINS as u32)
            .map(|i| format!("{}-{}", i * width, (i + 1) * width))
            .collect();

        Self {
            bins: [0; HISTOGRAM_BINS],
            labels,
            max,
        }
    }

    /// Bin index for an observation; `max` itself lands in the last bin
    pub fn bin_index(&self, value: u32) -> usize {
        // floor(value / max * bins), in integers
        let scaled = value as u64 * HISTOGRAM_BINS as u64 / self.max.max(1) as u64;
        (scaled as usize).min(HISTOGRAM_BINS - 1)
    }

    pub fn add(&mut self, value: u32) {
        let index = self.bin_index(value);
        self.bins[index] += 1;
    }

    pub fn total(&self) -> u32 {
        self.bins.iter().sum()
    }
}

/// One batch request's results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub target: PredictionTarget,
    pub results: Vec<PredictionResult>,
    pub summary: Map<String, Value>,
    /// Row count reported by the server, if any
    pub reported_count: Option<usize>,
    pub histogram: Histogram,
}

/// Histogram of the per-row observations for `target`
pub fn build_histogram(target: PredictionTarget, results: &[PredictionResult]) -> Histogram {
    let mut histogram = Histogram::empty(target.histogram_max());
    for result in results {
        histogram.add(result.observation());
    }
    histogram
}

/// Run a batch prediction and aggregate the results
pub async fn predict_batch<S: InferenceService>(
    service: &S,
    file: &UploadFile,
    target: PredictionTarget,
) -> Result<BatchResult, ServiceError> {
    let response = service.predict_batch(file, target).await.map_err(|e| {
        log::error!("Batch prediction for {} failed: {}", target, e);
        e
    })?;

    let histogram = build_histogram(target, &response.results);
    log::info!(
        "Batch prediction for {}: {} results (server count: {:?})",
        target,
        response.results.len(),
        response.count
    );

    Ok(BatchResult {
        target,
        results: response.results,
        summary: response.summary,
        reported_count: response.count,
        histogram,
    })
}
