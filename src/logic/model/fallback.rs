//! Fallback Estimator
//!
//! Local stand-in for the remote model, used only while the inference
//! service is unreachable. This is NOT a statistical model: it takes the
//! mean of the feature row and linearly remaps it, assuming features are
//! roughly centered in [-1, 1]. Every target uses the same mean, so the
//! result is cheap and deterministic but only an approximation.

use crate::logic::features::FeatureVector;
use super::result::PredictionResult;
use super::target::{PredictionTarget, ResultKind};

/// Estimate a prediction for `target` from the vector's mean.
///
/// - probability kinds: `p = clamp((avg + 1) / 2, 0, 1)`
/// - 0–10 scalars: `clamp(round((avg + 1) * 5), 0, 10)`
/// - 0–100 scalars: `clamp(round((avg + 1) * 50), 0, 100)`
pub fn estimate(vector: &FeatureVector, target: PredictionTarget) -> PredictionResult {
    let avg = vector.mean();

    match target.kind() {
        ResultKind::Probability => PredictionResult::labelled(target, (avg + 1.0) / 2.0),
        kind => {
            let scale = kind.max() as f64 / 2.0;
            PredictionResult::scalar(kind, (avg + 1.0) * scale)
        }
    }
}
