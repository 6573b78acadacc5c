//! services/viewer/src/view/state.rs
//!
//! Defines the shared application state handed to the view components.

use crate::config::Config;
use openapi_viewer_core::ports::{
    AssetSource, Clipboard, DiagnosticsSink, DocumentSource, FileSaver, Mounter,
    NotificationSink, Renderer,
};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all
/// view components. Each capability is an injected port so the workflow
/// logic runs identically under the real host and under tests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub documents: Arc<dyn DocumentSource>,
    pub assets: Arc<dyn AssetSource>,
    pub mounter: Arc<dyn Mounter>,
    pub renderer: Arc<dyn Renderer>,
    pub clipboard: Arc<dyn Clipboard>,
    pub files: Arc<dyn FileSaver>,
    pub toasts: Arc<dyn NotificationSink>,
    pub diagnostics: Arc<dyn DiagnosticsSink>,
}
