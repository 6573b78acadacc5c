//! services/viewer/src/adapters/fs.rs
//!
//! This module contains the filesystem adapter for the file-save port, the
//! headless counterpart of the browser's save-as-file action.

use async_trait::async_trait;
use bytes::Bytes;
use openapi_viewer_core::ports::{FileSaver, PortError, PortResult};
use std::io::Write;
use std::path::PathBuf;

/// An adapter that implements the `FileSaver` port against a local directory.
///
/// The blob is staged in a named temporary file inside the target directory
/// and atomically persisted under the requested filename. The temporary file
/// is removed on every failure path; its lifetime is bounded by this call.
#[derive(Clone)]
pub struct FsFileSaver {
    dir: PathBuf,
}

impl FsFileSaver {
    /// Creates a new `FsFileSaver` saving into `dir`.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

#[async_trait]
impl FileSaver for FsFileSaver {
    async fn save(&self, filename: &str, content: Bytes) -> PortResult<()> {
        let dir = self.dir.clone();
        let target = dir.join(filename);

        tokio::task::spawn_blocking(move || -> PortResult<()> {
            let mut staged = tempfile::NamedTempFile::new_in(&dir)
                .map_err(|e| PortError::Download(e.to_string()))?;
            staged
                .write_all(&content)
                .map_err(|e| PortError::Download(e.to_string()))?;
            // On persist failure the handle comes back inside the error and
            // its drop removes the staged file.
            staged
                .persist(&target)
                .map_err(|e| PortError::Download(e.to_string()))?;
            Ok(())
        })
        .await
        .map_err(|e| PortError::Unexpected(e.to_string()))?
    }
}
