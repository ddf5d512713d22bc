//! Feature Vector - Core data structure for prediction input
//!
//! One EEG sample as a fixed-length row of finite numbers.
//! The length is part of the type, so a constructed vector is always complete.

use serde::{Deserialize, Serialize};

use crate::constants::NUM_FEATURES;

/// Number of features per EEG sample
pub const FEATURE_COUNT: usize = NUM_FEATURES;

/// Fixed-length EEG feature vector
///
/// Only built through [`FeatureVector::try_from_vec`] or the CSV parser,
/// both of which reject short rows and non-finite values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct FeatureVector {
    values: Box<[f64; FEATURE_COUNT]>,
}

impl FeatureVector {
    /// Build from an owned row.
    ///
    /// Returns the row back when it has the wrong length or holds a
    /// NaN/infinite value.
    pub fn try_from_vec(values: Vec<f64>) -> Result<Self, Vec<f64>> {
        if values.iter().any(|v| !v.is_finite()) {
            return Err(values);
        }
        let boxed: Box<[f64; FEATURE_COUNT]> = values
            .into_boxed_slice()
            .try_into()
            .map_err(|rejected: Box<[f64]>| rejected.into_vec())?;
        Ok(Self { values: boxed })
    }

    /// Vector with every feature set to `value`
    pub fn filled(value: f64) -> Option<Self> {
        value
            .is_finite()
            .then(|| Self { values: Box::new([value; FEATURE_COUNT]) })
    }

    /// Get values as slice
    pub fn as_slice(&self) -> &[f64] {
        &self.values[..]
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Arithmetic mean of all features
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / FEATURE_COUNT as f64
    }
}

impl TryFrom<Vec<f64>> for FeatureVector {
    type Error = String;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        let len = values.len();
        Self::try_from_vec(values).map_err(|_| {
            format!("expected {} finite features, got a row of {}", FEATURE_COUNT, len)
        })
    }
}

impl From<FeatureVector> for Vec<f64> {
    fn from(vector: FeatureVector) -> Self {
        vector.values.to_vec()
    }
}

// ============================================================================
// TESTS
// ============================================================================
