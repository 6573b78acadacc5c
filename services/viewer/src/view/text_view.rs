//! services/viewer/src/view/text_view.rs
//!
//! This module contains the plain-text presentation component: the spec
//! document as formatted JSON text, with user-triggered copy-to-clipboard
//! and download-as-file actions.

use crate::view::loader::DocumentLoader;
use crate::view::state::AppState;
use bytes::Bytes;
use openapi_viewer_core::domain::{LoadState, Toast};
use std::sync::Arc;
use tracing::error;

/// The filename suggested to the save-as-file capability.
pub const DEFAULT_DOWNLOAD_FILENAME: &str = "openapi-spec.json";

/// Presents the loaded spec document as indented JSON text.
pub struct JsonTextView {
    state: Arc<AppState>,
    loader: DocumentLoader,
}

impl JsonTextView {
    /// Creates a new, unactivated `JsonTextView`.
    pub fn new(state: Arc<AppState>) -> Self {
        let loader = DocumentLoader::new(state.documents.clone(), state.diagnostics.clone());
        Self { state, loader }
    }

    /// Loads the spec document. Safe to call repeatedly; only the first
    /// call performs work.
    pub async fn activate(&mut self) {
        let location = self.state.config.spec_url.clone();
        self.loader.load(&location).await;
    }

    pub fn load_state(&self) -> &LoadState {
        self.loader.state()
    }

    /// The document serialized as 2-space-indented JSON, with object keys
    /// in document order. Empty until a load has succeeded.
    pub fn presented_text(&self) -> String {
        match self.loader.state().document() {
            Some(document) => serde_json::to_string_pretty(document).unwrap_or_default(),
            None => String::new(),
        }
    }

    /// Writes the presented text to the clipboard and reports the outcome
    /// as a toast. A no-op while nothing is loaded.
    pub async fn copy_to_clipboard(&self) {
        if !self.loader.state().is_loaded() {
            return;
        }

        match self
            .state
            .clipboard
            .write_text(&self.presented_text())
            .await
        {
            Ok(()) => self
                .state
                .toasts
                .notify(Toast::success("Success", "JSON copied to clipboard")),
            Err(e) => {
                error!("Error copying to clipboard: {e}");
                self.state
                    .toasts
                    .notify(Toast::error("Error", "Failed to copy to clipboard"));
            }
        }
    }

    /// Saves the presented text under the default filename.
    pub async fn download(&self) {
        self.download_as(DEFAULT_DOWNLOAD_FILENAME).await;
    }

    /// Saves the presented text as a file. A no-op while nothing is loaded;
    /// a save failure is reported as a toast and leaves the component
    /// functional.
    pub async fn download_as(&self, filename: &str) {
        if !self.loader.state().is_loaded() {
            return;
        }

        let blob = Bytes::from(self.presented_text());
        if let Err(e) = self.state.files.save(filename, blob).await {
            error!("Error downloading spec: {e}");
            self.state
                .toasts
                .notify(Toast::error("Error", "Failed to download file"));
        }
    }
}
