//! Prediction Results
//!
//! One normalized shape for both remote and fallback predictions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::target::{PredictionTarget, ResultKind};

/// Prediction output, keyed by the target's result kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PredictionResult {
    Probability { label: String, probability: f64 },
    Scalar { value: u32 },
    ScalarWide { value: u32 },
}

impl PredictionResult {
    /// Probability result, clamped to [0, 1]
    pub fn probability(label: impl Into<String>, probability: f64) -> Self {
        PredictionResult::Probability {
            label: label.into(),
            probability: clamp_or_floor(probability, 0.0, 1.0),
        }
    }

    /// Probability result labelled from the target's table entry
    pub fn labelled(target: PredictionTarget, probability: f64) -> Self {
        let p = clamp_or_floor(probability, 0.0, 1.0);
        let info = target.info();
        let label = if p >= 0.5 { info.positive_label } else { info.negative_label };
        Self::probability(label, p)
    }

    /// Scalar result for `kind`, rounded to nearest and clamped to its range
    pub fn scalar(kind: ResultKind, raw: f64) -> Self {
        let max = kind.max();
        let value = clamp_or_floor(raw.round(), 0.0, max as f64) as u32;
        match kind {
            ResultKind::ScalarWide => PredictionResult::ScalarWide { value },
            _ => PredictionResult::Scalar { value },
        }
    }

    pub fn kind(&self) -> ResultKind {
        match self {
            PredictionResult::Probability { .. } => ResultKind::Probability,
            PredictionResult::Scalar { .. } => ResultKind::Scalar,
            PredictionResult::ScalarWide { .. } => ResultKind::ScalarWide,
        }
    }

    /// Whether this result has the shape `target` declares
    pub fn matches(&self, target: PredictionTarget) -> bool {
        self.kind() == target.kind()
    }

    /// Observation used for batch histograms: percent for probabilities,
    /// the raw value for scalars.
    pub fn observation(&self) -> u32 {
        match self {
            PredictionResult::Probability { probability, .. } => (probability * 100.0).round() as u32,
            PredictionResult::Scalar { value } | PredictionResult::ScalarWide { value } => *value,
        }
    }

    /// Decode one result object sent by the inference server.
    ///
    /// Probability kinds need `label` and `probability`. Scalar kinds accept
    /// either `value` or the key named after the target (`"severity": 7`).
    pub fn from_remote(target: PredictionTarget, body: &Value) -> Result<Self, String> {
        let obj = body
            .as_object()
            .ok_or_else(|| format!("expected a JSON object for {} result", target))?;

        match target.kind() {
            ResultKind::Probability => {
                let probability = obj
                    .get("probability")
                    .and_then(Value::as_f64)
                    .ok_or_else(|| format!("missing numeric 'probability' for {}", target))?;
                let label = match obj.get("label").and_then(Value::as_str) {
                    Some(label) => label.to_string(),
                    None => return Ok(Self::labelled(target, probability)),
                };
                Ok(Self::probability(label, probability))
            }
            kind => {
                let raw = obj
                    .get("value")
                    .or_else(|| obj.get(target.as_str()))
                    .and_then(Value::as_f64)
                    .ok_or_else(|| format!("missing numeric 'value' for {}", target))?;
                Ok(Self::scalar(kind, raw))
            }
        }
    }
}

/// Clamp to `[lo, hi]`; NaN goes to `lo`.
pub(crate) fn clamp_or_floor(x: f64, lo: f64, hi: f64) -> f64 {
    if x.is_nan() {
        lo
    } else {
        x.clamp(lo, hi)
    }
}
