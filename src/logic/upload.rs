//! Uploaded files and upload surfaces
//!
//! An [`UploadSurface`] is one place a user can drop a file (single
//! prediction drop zone, batch picker). It admits one request at a time:
//! [`UploadSurface::try_begin`] hands out a guard that marks the surface
//! busy and releases it when dropped, whatever path the request took.

use std::borrow::Cow;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

/// A file selected for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    name: String,
    bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, keeping its file name for the multipart part
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload.csv".to_string());
        Ok(Self { name, bytes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Contents as text; invalid UTF-8 sequences are replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// One upload entry point with a busy flag
#[derive(Debug)]
pub struct UploadSurface {
    name: String,
    busy: AtomicBool,
}

impl UploadSurface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            busy: AtomicBool::new(false),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True while a request from this surface is in flight
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Mark the surface busy. Returns `None` if it already is.
    pub fn try_begin(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| {
                log::debug!("{}: request started", self.name);
                BusyGuard { surface: self }
            })
    }
}

/// Keeps its surface busy until dropped
#[derive(Debug)]
pub struct BusyGuard<'a> {
    surface: &'a UploadSurface,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.surface.busy.store(false, Ordering::Release);
        log::debug!("{}: request finished", self.surface.name);
    }
}
