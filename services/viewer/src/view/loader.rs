//! services/viewer/src/view/loader.rs
//!
//! This module contains the single-shot loader for the spec document. Both
//! view components own one; a loader fetches and parses at most once per
//! component lifetime.

use openapi_viewer_core::domain::{Activation, DiagnosticOutcome, LoadState, SpecDocument};
use openapi_viewer_core::ports::{DiagnosticsSink, DocumentSource};
use std::sync::Arc;

/// Fetches and parses the spec document, recording a diagnostic for each
/// stage. No retry, no backoff; the first outcome is terminal.
pub struct DocumentLoader {
    source: Arc<dyn DocumentSource>,
    diagnostics: Arc<dyn DiagnosticsSink>,
    activation: Activation,
    state: LoadState,
}

impl DocumentLoader {
    /// Creates a new, unloaded `DocumentLoader`.
    pub fn new(source: Arc<dyn DocumentSource>, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        Self {
            source,
            diagnostics,
            activation: Activation::Idle,
            state: LoadState::Unloaded,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Issues the single fetch-and-parse for `location`.
    ///
    /// The activation guard advances before the first suspension point, so a
    /// repeated activation signal from the host performs no second fetch; it
    /// simply observes the current state.
    pub async fn load(&mut self, location: &str) -> &LoadState {
        if self.activation != Activation::Idle {
            return &self.state;
        }
        self.activation = Activation::Active;

        self.diagnostics
            .record("fetch", DiagnosticOutcome::Started, location);
        match self.source.fetch_text(location).await {
            Ok(body) => {
                self.diagnostics
                    .record("fetch", DiagnosticOutcome::Succeeded, location);
                match serde_json::from_str::<SpecDocument>(&body) {
                    Ok(document) => {
                        self.diagnostics
                            .record("parse", DiagnosticOutcome::Succeeded, "");
                        self.state = LoadState::Loaded(document);
                    }
                    Err(e) => {
                        let message = e.to_string();
                        self.diagnostics
                            .record("parse", DiagnosticOutcome::Failed, &message);
                        self.state = LoadState::Failed(message);
                    }
                }
            }
            Err(e) => {
                let message = e.to_string();
                self.diagnostics
                    .record("fetch", DiagnosticOutcome::Failed, &message);
                self.state = LoadState::Failed(message);
            }
        }

        self.activation = Activation::Done;
        &self.state
    }
}
