//! Prediction Targets
//!
//! The closed set of clinical/behavioral dimensions the service can score,
//! plus a static table describing how each one is shaped and displayed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Dimension being predicted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionTarget {
    #[default]
    Depression,
    Anxiety,
    Ptsd,
    Ocd,
    Adhd,
    Severity,
    Stress,
    Burnout,
    Insomnia,
    Wellbeing,
}

/// Result shape category of a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    /// `{ label, probability }` with probability in [0, 1]
    Probability,
    /// `{ value }` with value in 0..=10
    Scalar,
    /// `{ value }` with value in 0..=100
    ScalarWide,
}

impl ResultKind {
    /// Upper bound of the scalar range (probabilities are shown as percent)
    pub fn max(&self) -> u32 {
        match self {
            ResultKind::Scalar => 10,
            ResultKind::Probability | ResultKind::ScalarWide => 100,
        }
    }
}

/// Static description of one target
#[derive(Debug, Clone, Copy)]
pub struct TargetInfo {
    pub target: PredictionTarget,
    pub name: &'static str,
    pub kind: ResultKind,
    /// Label when probability >= 0.5 (probability kinds only)
    pub positive_label: &'static str,
    /// Label when probability < 0.5 (probability kinds only)
    pub negative_label: &'static str,
    /// Upper edge of the batch histogram
    pub histogram_max: u32,
    pub title: &'static str,
    /// Caption for scalar scores, e.g. "Stress Score"
    pub score_caption: &'static str,
}

const fn probability(
    target: PredictionTarget,
    name: &'static str,
    positive_label: &'static str,
    negative_label: &'static str,
    title: &'static str,
) -> TargetInfo {
    TargetInfo {
        target,
        name,
        kind: ResultKind::Probability,
        positive_label,
        negative_label,
        histogram_max: 100,
        title,
        score_caption: "Probability",
    }
}

const fn scalar(
    target: PredictionTarget,
    name: &'static str,
    kind: ResultKind,
    title: &'static str,
    score_caption: &'static str,
) -> TargetInfo {
    let histogram_max = match kind {
        ResultKind::Scalar => 10,
        _ => 100,
    };
    TargetInfo {
        target,
        name,
        kind,
        positive_label: "",
        negative_label: "",
        histogram_max,
        title,
        score_caption,
    }
}

/// Lookup table, in declaration order of [`PredictionTarget`]
pub static TARGET_TABLE: [TargetInfo; 10] = [
    probability(PredictionTarget::Depression, "depression", "Depressed", "Not Depressed", "Depression Prediction"),
    probability(PredictionTarget::Anxiety, "anxiety", "Anxious", "Calm", "Anxiety Prediction"),
    probability(PredictionTarget::Ptsd, "ptsd", "PTSD Risk", "Low Risk", "PTSD Prediction"),
    probability(PredictionTarget::Ocd, "ocd", "OCD Traits", "Low Traits", "OCD Prediction"),
    probability(PredictionTarget::Adhd, "adhd", "ADHD Traits", "Low Traits", "ADHD Prediction"),
    scalar(PredictionTarget::Severity, "severity", ResultKind::Scalar, "Severity Prediction", "Predicted Severity"),
    scalar(PredictionTarget::Stress, "stress", ResultKind::ScalarWide, "Stress Prediction", "Stress Score"),
    scalar(PredictionTarget::Burnout, "burnout", ResultKind::ScalarWide, "Burnout Prediction", "Burnout Score"),
    scalar(PredictionTarget::Insomnia, "insomnia", ResultKind::Scalar, "Insomnia Prediction", "Insomnia Score"),
    scalar(PredictionTarget::Wellbeing, "wellbeing", ResultKind::ScalarWide, "Wellbeing Prediction", "Wellbeing Score"),
];

impl PredictionTarget {
    pub const ALL: [PredictionTarget; 10] = [
        PredictionTarget::Depression,
        PredictionTarget::Anxiety,
        PredictionTarget::Ptsd,
        PredictionTarget::Ocd,
        PredictionTarget::Adhd,
        PredictionTarget::Severity,
        PredictionTarget::Stress,
        PredictionTarget::Burnout,
        PredictionTarget::Insomnia,
        PredictionTarget::Wellbeing,
    ];

    /// Table entry for this target
    pub fn info(&self) -> &'static TargetInfo {
        &TARGET_TABLE[*self as usize]
    }

    pub fn as_str(&self) -> &'static str {
        self.info().name
    }

    pub fn kind(&self) -> ResultKind {
        self.info().kind
    }

    pub fn histogram_max(&self) -> u32 {
        self.info().histogram_max
    }
}

impl fmt::Display for PredictionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredictionTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        TARGET_TABLE
            .iter()
            .find(|info| info.name == wanted)
            .map(|info| info.target)
            .ok_or_else(|| s.to_string())
    }
}
