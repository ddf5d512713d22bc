//! EEG Commands
//!
//! Entry points a UI shell calls for the EEG panel: single upload, batch
//! upload and sample download. Each command owns its surface's busy flag
//! for the duration of the request and turns results into display text
//! plus a chart drawn through the injected renderer.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::{NUM_FEATURES, SAMPLE_FILE_NAME};
use crate::logic::error::{EegError, EegResult};
use crate::logic::features;
use crate::logic::inference_client::InferenceService;
use crate::logic::model::{PredictionResult, PredictionTarget};
use crate::logic::prediction::{self, BatchResult, PredictionOutcome};
use crate::logic::presenter::{ChartRenderer, ChartSlot, ToChartSeries};
use crate::logic::upload::{UploadFile, UploadSurface};

/// Shown next to every degraded-mode prediction
pub const FALLBACK_NOTE: &str = "Using local fallback while server is unavailable.";

/// Display data for a single prediction
#[derive(Debug, Clone, Serialize)]
pub struct SingleView {
    pub title: &'static str,
    pub headline: String,
    /// Set when the result is a local approximation
    pub note: Option<&'static str>,
    pub outcome: PredictionOutcome,
}

/// Display data for a batch prediction
#[derive(Debug, Clone, Serialize)]
pub struct BatchView {
    pub title: &'static str,
    /// Server summary as pretty JSON (`{}` when absent)
    pub summary_text: String,
    pub batch: BatchResult,
}

/// Where a saved sample CSV came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleSource {
    Server,
    Generated,
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleDownload {
    pub path: PathBuf,
    pub source: SampleSource,
}

/// EEG panel: one inference service, one renderer, two upload surfaces
pub struct EegPanel<S, R> {
    service: S,
    renderer: R,
    dropzone: UploadSurface,
    batch_picker: UploadSurface,
}

impl<S: InferenceService, R: ChartRenderer> EegPanel<S, R> {
    pub fn new(service: S, renderer: R) -> Self {
        Self {
            service,
            renderer,
            dropzone: UploadSurface::new("dropzone"),
            batch_picker: UploadSurface::new("batch upload"),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Single-file surface (loading state while busy)
    pub fn dropzone(&self) -> &UploadSurface {
        &self.dropzone
    }

    pub fn batch_picker(&self) -> &UploadSurface {
        &self.batch_picker
    }

    /// Predict `target` for one uploaded file
    pub async fn upload_file(&self, target: PredictionTarget, file: &UploadFile) -> EegResult<SingleView> {
        let _busy = self.dropzone
            .try_begin()
            .ok_or_else(|| EegError::Busy(self.dropzone.name().to_string()))?;

        let outcome = prediction::predict_single(&self.service, file, target).await?;
        self.renderer.render(ChartSlot::Prediction, &outcome.result().to_chart_series());

        Ok(SingleView {
            title: target.info().title,
            headline: headline(target, outcome.result()),
            note: outcome.used_fallback().then_some(FALLBACK_NOTE),
            outcome,
        })
    }

    /// Predict `target` for every row of an uploaded file
    pub async fn upload_batch(&self, target: PredictionTarget, file: &UploadFile) -> EegResult<BatchView> {
        let _busy = self.batch_picker
            .try_begin()
            .ok_or_else(|| EegError::Busy(self.batch_picker.name().to_string()))?;

        let batch = prediction::predict_batch(&self.service, file, target).await?;
        self.renderer.render(ChartSlot::BatchDistribution, &batch.histogram.to_chart_series());

        let summary_text = serde_json::to_string_pretty(&batch.summary)
            .unwrap_or_else(|_| "{}".to_string());

        Ok(BatchView {
            title: target.info().title,
            summary_text,
            batch,
        })
    }

    /// Save a sample CSV into `dir`, from the server if it has one
    pub async fn download_sample(&self, dir: &Path) -> EegResult<SampleDownload> {
        let (bytes, source) = match self.service.fetch_sample().await {
            Ok(bytes) => (bytes, SampleSource::Server),
            Err(e) => {
                log::info!("Sample endpoint unavailable ({}), generating locally", e);
                (features::generate_sample_csv().into_bytes(), SampleSource::Generated)
            }
        };

        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(SAMPLE_FILE_NAME);
        tokio::fs::write(&path, bytes).await?;
        log::info!("Sample CSV saved to {}", path.display());

        Ok(SampleDownload { path, source })
    }
}

/// Parse a target name from user input
pub fn parse_target(name: &str) -> EegResult<PredictionTarget> {
    name.parse().map_err(EegError::UnknownTarget)
}

/// One-line result text, e.g. "Depressed (probability 73%)"
pub fn headline(target: PredictionTarget, result: &PredictionResult) -> String {
    match result {
        PredictionResult::Probability { label, probability } => {
            format!("{} (probability {}%)", label, (probability * 100.0).round())
        }
        PredictionResult::Scalar { value } | PredictionResult::ScalarWide { value } => {
            format!("{}: {} / {}", target.info().score_caption, value, result.kind().max())
        }
    }
}

/// Message to show the user for a failed command
pub fn error_message(err: &EegError) -> String {
    match err {
        EegError::Format(e) => format!("{}. Expected {} numeric features per row.", e, NUM_FEATURES),
        // Batch/service failures show the raw error
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::error::ServiceError;
    use crate::logic::inference_client::BatchResponse;
    use crate::logic::presenter::{ChartStyle, RecordingRenderer};

    struct FixedService {
        up: bool,
    }

    impl InferenceService for FixedService {
        async fn predict(&self, _file: &UploadFile, target: PredictionTarget) -> Result<PredictionResult, ServiceError> {
            if self.up {
                Ok(PredictionResult::labelled(target, 0.734))
            } else {
                Err(ServiceError::Network("connection refused".to_string()))
            }
        }

        async fn predict_batch(&self, _file: &UploadFile, _target: PredictionTarget) -> Result<BatchResponse, ServiceError> {
            if self.up {
                Ok(BatchResponse {
                    results: vec![PredictionResult::Scalar { value: 2 }, PredictionResult::Scalar { value: 9 }],
                    ..Default::default()
                })
            } else {
                Err(ServiceError::Status { status: 502, body: "Bad Gateway".to_string() })
            }
        }

        async fn fetch_sample(&self) -> Result<Vec<u8>, ServiceError> {
            if self.up {
                Ok(b"f0\n0.5".to_vec())
            } else {
                Err(ServiceError::Network("connection refused".to_string()))
            }
        }
    }

    fn panel(up: bool) -> EegPanel<FixedService, RecordingRenderer> {
        EegPanel::new(FixedService { up }, RecordingRenderer::default())
    }

    fn ones_file(columns: usize) -> UploadFile {
        UploadFile::new("ones.csv", vec!["1"; columns].join(","))
    }

    #[tokio::test]
    async fn test_remote_view_has_no_note() {
        let panel = panel(true);
        let view = panel.upload_file(PredictionTarget::Depression, &ones_file(NUM_FEATURES)).await.unwrap();

        assert_eq!(view.title, "Depression Prediction");
        assert_eq!(view.headline, "Depressed (probability 73%)");
        assert!(view.note.is_none());
        assert!(!panel.dropzone().is_busy());

        let chart = panel.renderer().last(ChartSlot::Prediction).unwrap();
        assert_eq!(chart.style, ChartStyle::Doughnut);
    }

    #[tokio::test]
    async fn test_degraded_view_is_marked() {
        let panel = panel(false);
        let view = panel.upload_file(PredictionTarget::Severity, &ones_file(NUM_FEATURES)).await.unwrap();

        assert_eq!(view.note, Some(FALLBACK_NOTE));
        assert_eq!(view.headline, "Predicted Severity: 10 / 10");
        assert!(view.outcome.used_fallback());
        assert!(!panel.dropzone().is_busy());
    }

    #[tokio::test]
    async fn test_format_error_releases_surface() {
        let panel = panel(false);
        let err = panel.upload_file(PredictionTarget::Stress, &ones_file(10)).await.unwrap_err();

        assert!(error_message(&err).contains("1024"));
        assert!(!panel.dropzone().is_busy());
        assert!(panel.renderer().last(ChartSlot::Prediction).is_none());
    }

    #[tokio::test]
    async fn test_busy_surface_rejects_second_request() {
        let panel = panel(true);
        let _held = panel.dropzone().try_begin().unwrap();

        let err = panel.upload_file(PredictionTarget::Ocd, &ones_file(NUM_FEATURES)).await.unwrap_err();
        assert!(matches!(err, EegError::Busy(_)));

        // Batch surface is independent
        assert!(panel.upload_batch(PredictionTarget::Severity, &ones_file(NUM_FEATURES)).await.is_ok());
    }

    #[tokio::test]
    async fn test_batch_view_and_chart() {
        let panel = panel(true);
        let view = panel.upload_batch(PredictionTarget::Severity, &ones_file(NUM_FEATURES)).await.unwrap();

        assert_eq!(view.summary_text, "{}");
        assert_eq!(view.batch.histogram.bins[2], 1);
        assert_eq!(view.batch.histogram.bins[9], 1);

        let chart = panel.renderer().last(ChartSlot::BatchDistribution).unwrap();
        assert_eq!(chart.labels[0], "0-1");
        assert_eq!(chart.values.iter().sum::<f64>(), 2.0);
    }

    #[tokio::test]
    async fn test_batch_failure_shows_raw_error() {
        let panel = panel(false);
        let err = panel.upload_batch(PredictionTarget::Stress, &ones_file(NUM_FEATURES)).await.unwrap_err();

        assert_eq!(error_message(&err), "server returned 502: Bad Gateway");
        assert!(!panel.batch_picker().is_busy());
    }

    #[tokio::test]
    async fn test_sample_from_server() {
        let dir = tempfile::tempdir().unwrap();
        let saved = panel(true).download_sample(dir.path()).await.unwrap();

        assert_eq!(saved.source, SampleSource::Server);
        assert_eq!(saved.path, dir.path().join(SAMPLE_FILE_NAME));
        assert_eq!(std::fs::read(&saved.path).unwrap(), b"f0\n0.5");
    }

    #[tokio::test]
    async fn test_sample_generated_when_server_down() {
        let dir = tempfile::tempdir().unwrap();
        let saved = panel(false).download_sample(dir.path()).await.unwrap();

        assert_eq!(saved.source, SampleSource::Generated);
        let text = std::fs::read_to_string(&saved.path).unwrap();
        assert!(features::parse(&text).is_ok());
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("Stress").unwrap(), PredictionTarget::Stress);
        let err = parse_target("joy").unwrap_err();
        assert_eq!(err.to_string(), "unknown prediction target: joy");
    }

    #[test]
    fn test_headlines() {
        assert_eq!(
            headline(PredictionTarget::Stress, &PredictionResult::ScalarWide { value: 40 }),
            "Stress Score: 40 / 100"
        );
        assert_eq!(
            headline(PredictionTarget::Insomnia, &PredictionResult::Scalar { value: 3 }),
            "Insomnia Score: 3 / 10"
        );
    }
}
