//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To point the client at another inference server, set `EEG_API_BASE`
//! (or put it in `.env`) instead of editing this file.

use std::path::PathBuf;

/// Default inference API base URL
///
/// This is the fallback URL when no environment variable is set.
/// The web app serves the API under `/api` on the same origin.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Default request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Number of features in one EEG sample row
pub const NUM_FEATURES: usize = 1024;

/// Number of bins in a batch distribution histogram
pub const HISTOGRAM_BINS: usize = 10;

/// Rows in a locally generated sample CSV
pub const SAMPLE_ROWS: usize = 5;

/// File name used when saving a sample CSV
pub const SAMPLE_FILE_NAME: &str = "sample_eeg.csv";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Mindful Companion";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get inference API base URL from environment or use default
pub fn get_api_base() -> String {
    std::env::var("EEG_API_BASE")
        .map(|s| s.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

/// Get request timeout from environment or use default
pub fn get_request_timeout() -> u64 {
    std::env::var("EEG_REQUEST_TIMEOUT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT)
}

/// Directory where sample CSVs are saved.
///
/// `EEG_SAMPLE_DIR` wins, then the user's download folder, then the
/// working directory.
pub fn get_sample_dir() -> PathBuf {
    std::env::var("EEG_SAMPLE_DIR")
        .map(PathBuf::from)
        .ok()
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
