//! Result Presenter
//!
//! Maps predictions and histograms to plain label/value series for a
//! charting backend. Rendering itself goes through [`ChartRenderer`],
//! which the UI shell provides.

use parking_lot::Mutex;
use serde::Serialize;

use crate::logic::model::PredictionResult;
use crate::logic::prediction::Histogram;

/// Chart shape hint for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartStyle {
    /// Two-slice probability chart
    Doughnut,
    /// One-hot bar highlight over a score range
    Bar,
    /// Batch histogram
    Distribution,
}

/// Labels and values, index-aligned
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub style: ChartStyle,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Anything that can be drawn as a chart series
pub trait ToChartSeries {
    fn to_chart_series(&self) -> ChartSeries;
}

impl ToChartSeries for PredictionResult {
    fn to_chart_series(&self) -> ChartSeries {
        match self {
            PredictionResult::Probability { probability, .. } => ChartSeries {
                style: ChartStyle::Doughnut,
                labels: vec!["Not".to_string(), "Yes".to_string()],
                values: vec![1.0 - probability, *probability],
            },
            PredictionResult::Scalar { value } | PredictionResult::ScalarWide { value } => {
                let max = self.kind().max();
                ChartSeries {
                    style: ChartStyle::Bar,
                    labels: (0..=max).map(|i| i.to_string()).collect(),
                    values: (0..=max).map(|i| if i == *value { 1.0 } else { 0.0 }).collect(),
                }
            }
        }
    }
}

impl ToChartSeries for Histogram {
    fn to_chart_series(&self) -> ChartSeries {
        ChartSeries {
            style: ChartStyle::Distribution,
            labels: self.labels.clone(),
            values: self.bins.iter().map(|&count| count as f64).collect(),
        }
    }
}

/// Free-function form of [`ToChartSeries::to_chart_series`]
pub fn to_chart_series<T: ToChartSeries + ?Sized>(item: &T) -> ChartSeries {
    item.to_chart_series()
}

/// Charting capability injected by the UI shell
pub trait ChartRenderer {
    /// Replace whatever `slot` currently shows with `series`
    fn render(&self, slot: ChartSlot, series: &ChartSeries);
}

/// Which chart on the page to draw into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartSlot {
    Prediction,
    BatchDistribution,
}

/// Renderer that keeps the last series per slot; used headless
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    prediction: Mutex<Option<ChartSeries>>,
    batch: Mutex<Option<ChartSeries>>,
}

impl RecordingRenderer {
    pub fn last(&self, slot: ChartSlot) -> Option<ChartSeries> {
        match slot {
            ChartSlot::Prediction => self.prediction.lock().clone(),
            ChartSlot::BatchDistribution => self.batch.lock().clone(),
        }
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, slot: ChartSlot, series: &ChartSeries) {
        let cell = match slot {
            ChartSlot::Prediction => &self.prediction,
            ChartSlot::BatchDistribution => &self.batch,
        };
        *cell.lock() = Some(series.clone());
    }
}
