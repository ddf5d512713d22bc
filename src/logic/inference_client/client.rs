//! Inference API Client
//!
//! HTTP client for the EEG inference endpoints.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::logic::error::ServiceError;
use crate::logic::model::{PredictionResult, PredictionTarget};
use crate::logic::upload::UploadFile;
use super::{BatchResponse, InferenceService};

/// Sample endpoints, tried in order
const SAMPLE_PATHS: [&str; 2] = ["/eeg/sample", "/eeg/sample.csv"];

/// Inference server configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL including the `/api` prefix, without trailing slash
    pub api_base: String,
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        use crate::constants;

        Self {
            api_base: constants::get_api_base(),
            timeout_seconds: constants::get_request_timeout(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }
}

/// Inference API client
#[derive(Debug, Clone)]
pub struct EegClient {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl EegClient {
    /// Create new client
    pub fn new(config: ClientConfig) -> Result<Self, ServiceError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ServiceError::Client(e.to_string()))?;

        Ok(Self { config, http_client })
    }

    pub fn api_base(&self) -> &str {
        &self.config.api_base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base, path)
    }

    /// Upload `file` as multipart field `file` and return the JSON body
    async fn post_file(&self, path: &str, file: &UploadFile) -> Result<Value, ServiceError> {
        let url = self.url(path);
        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.name().to_string())
            .mime_str("text/csv")?;
        let form = Form::new().part("file", part);

        log::debug!("POST {} ({} bytes)", url, file.bytes().len());

        let response = self.http_client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status { status: status.as_u16(), body });
        }

        response.json().await
            .map_err(|e| ServiceError::MalformedResponse(e.to_string()))
    }
}

impl InferenceService for EegClient {
    async fn predict(
        &self,
        file: &UploadFile,
        target: PredictionTarget,
    ) -> Result<PredictionResult, ServiceError> {
        let body = self.post_file(&format!("/eeg/predict/{}", target), file).await?;
        decode_single(target, &body)
    }

    async fn predict_batch(
        &self,
        file: &UploadFile,
        target: PredictionTarget,
    ) -> Result<BatchResponse, ServiceError> {
        let body = self.post_file(&format!("/eeg/predict/batch/{}", target), file).await?;
        decode_batch(target, &body)
    }

    async fn fetch_sample(&self) -> Result<Vec<u8>, ServiceError> {
        let mut last_error = ServiceError::Client("no sample endpoint configured".to_string());

        for path in SAMPLE_PATHS {
            let url = self.url(path);
            match self.http_client.get(&url).send().await {
                Ok(response) if response.status().is_success() => {
                    let bytes = response.bytes().await
                        .map_err(|e| ServiceError::Network(e.to_string()))?;
                    log::info!("Sample CSV downloaded from {}", url);
                    return Ok(bytes.to_vec());
                }
                Ok(response) => {
                    log::debug!("Sample endpoint {} returned {}", url, response.status());
                    last_error = ServiceError::Status {
                        status: response.status().as_u16(),
                        body: String::new(),
                    };
                }
                Err(e) => {
                    log::debug!("Sample endpoint {} unreachable: {}", url, e);
                    last_error = ServiceError::Network(e.to_string());
                }
            }
        }

        Err(last_error)
    }
}

/// Decode `{ target, result: {..} }`, or a bare result object
pub(crate) fn decode_single(target: PredictionTarget, body: &Value) -> Result<PredictionResult, ServiceError> {
    let result = body.get("result").unwrap_or(body);
    PredictionResult::from_remote(target, result).map_err(ServiceError::MalformedResponse)
}

/// Decode `{ target, count?, results: [..], summary? }`
pub(crate) fn decode_batch(target: PredictionTarget, body: &Value) -> Result<BatchResponse, ServiceError> {
    let rows = body
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| ServiceError::MalformedResponse("missing 'results' array".to_string()))?;

    let results = rows
        .iter()
        .map(|row| PredictionResult::from_remote(target, row))
        .collect::<Result<Vec<_>, _>>()
        .map_err(ServiceError::MalformedResponse)?;

    let summary = body
        .get("summary")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    let count = body
        .get("count")
        .and_then(Value::as_u64)
        .map(|c| c as usize);

    Ok(BatchResponse { results, summary, count })
}
