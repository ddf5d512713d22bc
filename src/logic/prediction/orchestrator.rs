//! Single-file prediction with local fallback
//!
//! One remote attempt; on any service failure the file is parsed locally
//! and scored by the fallback estimator. Only a malformed file is an error.

use serde::Serialize;

use crate::logic::error::FormatError;
use crate::logic::features;
use crate::logic::inference_client::InferenceService;
use crate::logic::model::{self, PredictionResult, PredictionTarget};
use crate::logic::upload::UploadFile;

/// Where a single prediction came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", content = "result", rename_all = "snake_case")]
pub enum PredictionOutcome {
    /// The inference service answered
    Remote(PredictionResult),
    /// The service failed; local approximation
    Degraded(PredictionResult),
}

impl PredictionOutcome {
    pub fn result(&self) -> &PredictionResult {
        match self {
            PredictionOutcome::Remote(result) | PredictionOutcome::Degraded(result) => result,
        }
    }

    pub fn into_result(self) -> PredictionResult {
        match self {
            PredictionOutcome::Remote(result) | PredictionOutcome::Degraded(result) => result,
        }
    }

    pub fn used_fallback(&self) -> bool {
        matches!(self, PredictionOutcome::Degraded(_))
    }
}

/// Predict `target` for `file`, falling back to the local estimator when
/// the service fails.
pub async fn predict_single<S: InferenceService>(
    service: &S,
    file: &UploadFile,
    target: PredictionTarget,
) -> Result<PredictionOutcome, FormatError> {
    match service.predict(file, target).await {
        Ok(result) => {
            log::info!("Remote prediction for {} ({})", target, file.name());
            Ok(PredictionOutcome::Remote(result))
        }
        Err(e) => {
            log::warn!("Inference service failed ({}), using local fallback", e);
            let vector = features::parse(&file.text())?;
            Ok(PredictionOutcome::Degraded(model::estimate(&vector, target)))
        }
    }
}
