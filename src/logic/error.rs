//! Error taxonomy for the EEG prediction pipeline.
//!
//! - [`FormatError`]: the uploaded content cannot yield a full feature row.
//! - [`ServiceError`]: the remote inference service failed.
//! - [`EegError`]: umbrella used by the command layer.

use thiserror::Error;

use crate::constants::NUM_FEATURES;

/// The uploaded file cannot be turned into a feature vector.
///
/// Always fatal for the operation that hit it; never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Nothing but whitespace in the upload
    #[error("empty input")]
    Empty,

    /// A header row was found but no data row follows it
    #[error("header row found but no data row follows it")]
    MissingDataRow,

    /// The selected row is too short
    #[error("expected {expected} features, got {got}", expected = NUM_FEATURES)]
    TooFewColumns {
        /// Number of comma-separated fields in the selected row
        got: usize,
    },

    /// A field among the first 1024 is not a finite number
    #[error("non-numeric value {token:?} in column {column}")]
    NonNumeric {
        /// Zero-based column index
        column: usize,
        /// Offending raw field
        token: String,
    },
}

/// The remote inference service could not produce a usable answer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Connection refused, DNS failure, timeout, ...
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("server returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Success status but the body does not have the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The HTTP client itself could not be built or the request assembled
    #[error("client error: {0}")]
    Client(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::MalformedResponse(err.to_string())
        } else if err.is_builder() {
            ServiceError::Client(err.to_string())
        } else {
            ServiceError::Network(err.to_string())
        }
    }
}

/// Errors surfaced by the command layer.
#[derive(Error, Debug)]
pub enum EegError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The upload surface already has a request in flight
    #[error("{0} is busy with another request")]
    Busy(String),

    #[error("unknown prediction target: {0}")]
    UnknownTarget(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EegResult<T> = Result<T, EegError>;
