//! API Module - commands for the UI shell
//!
//! Commands take the target and file explicitly and report through
//! return values and the injected chart renderer; no global UI state.

pub mod eeg;

pub use eeg::{error_message, headline, parse_target, EegPanel, SampleDownload, SampleSource, SingleView, BatchView, FALLBACK_NOTE};
