//! Prediction flow tests with a stubbed inference service.

use std::sync::atomic::{AtomicUsize, Ordering};

use proptest::prelude::*;
use serde_json::json;

use super::*;
use crate::logic::error::{FormatError, ServiceError};
use crate::logic::features::FEATURE_COUNT;
use crate::logic::inference_client::{BatchResponse, InferenceService};
use crate::logic::model::{PredictionResult, PredictionTarget};
use crate::logic::upload::UploadFile;

struct StubService {
    single: Result<PredictionResult, ServiceError>,
    batch: Result<BatchResponse, ServiceError>,
    calls: AtomicUsize,
}

impl StubService {
    fn answering(result: PredictionResult) -> Self {
        Self {
            single: Ok(result),
            batch: Ok(BatchResponse::default()),
            calls: AtomicUsize::new(0),
        }
    }

    fn batch_of(results: Vec<PredictionResult>) -> Self {
        Self {
            single: Err(unavailable()),
            batch: Ok(BatchResponse { results, ..Default::default() }),
            calls: AtomicUsize::new(0),
        }
    }

    fn down() -> Self {
        Self {
            single: Err(unavailable()),
            batch: Err(unavailable()),
            calls: AtomicUsize::new(0),
        }
    }
}

impl InferenceService for StubService {
    async fn predict(&self, _file: &UploadFile, _target: PredictionTarget) -> Result<PredictionResult, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.single.clone()
    }

    async fn predict_batch(&self, _file: &UploadFile, _target: PredictionTarget) -> Result<BatchResponse, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.batch.clone()
    }

    async fn fetch_sample(&self) -> Result<Vec<u8>, ServiceError> {
        Err(unavailable())
    }
}

fn unavailable() -> ServiceError {
    ServiceError::Status { status: 503, body: "Service Unavailable".to_string() }
}

fn csv_with_header(value: &str, columns: usize) -> UploadFile {
    let header: Vec<String> = (0..FEATURE_COUNT).map(|i| format!("f{}", i)).collect();
    let row = vec![value; columns].join(",");
    UploadFile::new("eeg.csv", format!("{}\n{}", header.join(","), row))
}

// ============================================================================
// SINGLE PREDICTION
// ============================================================================

#[tokio::test]
async fn test_remote_success_is_not_degraded() {
    let remote = PredictionResult::probability("Depressed", 0.91);
    let service = StubService::answering(remote.clone());

    // Malformed file does not matter when the service answers
    let file = UploadFile::new("broken.csv", "not,a,feature,row");
    let outcome = predict_single(&service, &file, PredictionTarget::Depression).await.unwrap();

    assert!(!outcome.used_fallback());
    assert_eq!(outcome, PredictionOutcome::Remote(remote));
    assert_eq!(service.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_fallback_scenario_all_ones_depression() {
    let service = StubService::down();
    let file = csv_with_header("1", FEATURE_COUNT);

    let outcome = predict_single(&service, &file, PredictionTarget::Depression).await.unwrap();

    assert!(outcome.used_fallback());
    assert_eq!(
        outcome.result(),
        &PredictionResult::Probability { label: "Depressed".into(), probability: 1.0 }
    );
    assert_eq!(service.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_fallback_scalar_target() {
    let service = StubService::down();
    let file = csv_with_header("0", FEATURE_COUNT);

    let outcome = predict_single(&service, &file, PredictionTarget::Severity).await.unwrap();
    assert_eq!(outcome, PredictionOutcome::Degraded(PredictionResult::Scalar { value: 5 }));
}

#[tokio::test]
async fn test_fallback_with_short_file_is_format_error() {
    let service = StubService::down();
    let file = csv_with_header("1", 512);

    let err = predict_single(&service, &file, PredictionTarget::Anxiety).await.unwrap_err();
    assert_eq!(err, FormatError::TooFewColumns { got: 512 });
}

#[tokio::test]
async fn test_fallback_with_empty_file_is_format_error() {
    let service = StubService::down();
    let file = UploadFile::new("empty.csv", "");

    let err = predict_single(&service, &file, PredictionTarget::Stress).await.unwrap_err();
    assert_eq!(err, FormatError::Empty);
}

// ============================================================================
// BATCH PREDICTION
// ============================================================================

#[tokio::test]
async fn test_batch_failure_has_no_fallback() {
    let service = StubService::down();
    let file = csv_with_header("1", FEATURE_COUNT);

    let err = predict_batch(&service, &file, PredictionTarget::Depression).await.unwrap_err();
    assert_eq!(err, unavailable());
}

#[tokio::test]
async fn test_batch_severity_scenario() {
    let results: Vec<_> = (0..10).map(|v| PredictionResult::Scalar { value: v }).collect();
    let service = StubService::batch_of(results);

    let batch = predict_batch(&service, &csv_with_header("0", FEATURE_COUNT), PredictionTarget::Severity)
        .await
        .unwrap();

    let expected_labels: Vec<String> = (0..10).map(|i| format!("{}-{}", i, i + 1)).collect();
    assert_eq!(batch.histogram.labels, expected_labels);
    assert_eq!(batch.histogram.bins, [1; 10]);
    assert!(batch.summary.is_empty());
    assert_eq!(batch.results.len(), 10);
}

#[tokio::test]
async fn test_batch_summary_passthrough() {
    let mut service = StubService::batch_of(vec![PredictionResult::ScalarWide { value: 40 }]);
    if let Ok(batch) = service.batch.as_mut() {
        batch.summary = json!({ "mean": 40.0, "min": 40, "max": 40 }).as_object().unwrap().clone();
        batch.count = Some(1);
    }

    let batch = predict_batch(&service, &csv_with_header("0", FEATURE_COUNT), PredictionTarget::Stress)
        .await
        .unwrap();

    assert_eq!(batch.summary.get("max"), Some(&json!(40)));
    assert_eq!(batch.reported_count, Some(1));
    assert_eq!(batch.histogram.bins[4], 1);
}

#[test]
fn test_histogram_zero_and_max() {
    for target in [PredictionTarget::Severity, PredictionTarget::Wellbeing] {
        let max = target.histogram_max();
        let results = vec![
            PredictionResult::scalar(target.kind(), 0.0),
            PredictionResult::scalar(target.kind(), max as f64),
        ];
        let histogram = build_histogram(target, &results);

        assert_eq!(histogram.bins[0], 1);
        assert_eq!(histogram.bins[9], 1);
        assert_eq!(histogram.total(), 2);
    }
}

#[test]
fn test_histogram_probability_uses_percent() {
    let results = vec![
        PredictionResult::probability("Anxious", 0.734),
        PredictionResult::probability("Anxious", 1.0),
        PredictionResult::probability("Calm", 0.049),
    ];
    let histogram = build_histogram(PredictionTarget::Anxiety, &results);

    assert_eq!(histogram.labels[0], "0-10");
    assert_eq!(histogram.labels[9], "90-100");
    assert_eq!(histogram.bins[7], 1);
    assert_eq!(histogram.bins[9], 1);
    assert_eq!(histogram.bins[0], 1);
}

proptest! {
    #[test]
    fn prop_bins_sum_to_result_count(values in proptest::collection::vec(0u32..=100, 0..200)) {
        let results: Vec<_> = values.iter().map(|&v| PredictionResult::ScalarWide { value: v }).collect();
        let histogram = build_histogram(PredictionTarget::Burnout, &results);

        prop_assert_eq!(histogram.total() as usize, results.len());
        for &v in &values {
            let index = histogram.bin_index(v);
            prop_assert!(index < 10);
            if v == 100 {
                prop_assert_eq!(index, 9);
            } else {
                prop_assert_eq!(index, (v / 10) as usize);
            }
        }
    }
}
