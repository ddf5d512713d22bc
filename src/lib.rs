//! Mindful Companion - EEG prediction client core
//!
//! Turns an uploaded EEG feature CSV into a displayable prediction. Single
//! uploads fall back to a local estimate when the inference service is
//! down; batch uploads are summarized as a 10-bin distribution.
//!
//! ```text
//! CSV upload ──► features::parse ──┐
//!                                  ├─► prediction::{predict_single, predict_batch}
//! inference_client::EegClient ─────┘              │
//!                                                 ▼
//!                              presenter::ToChartSeries ──► ChartRenderer
//! ```

pub mod api;
pub mod constants;
pub mod logic;

pub use logic::error::{EegError, EegResult, FormatError, ServiceError};
pub use logic::model::{PredictionResult, PredictionTarget};
