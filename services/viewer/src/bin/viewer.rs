//! services/viewer/src/bin/viewer.rs

use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use viewer_lib::{
    adapters::{
        FixedMounter, FsFileSaver, HtmlRenderer, HttpAssetSource, HttpDocumentSource,
        StdoutClipboard, TracingDiagnostics, TracingToasts,
    },
    config::Config,
    error::ViewerError,
    view::{AppState, InteractiveView, JsonTextView, DEFAULT_DOWNLOAD_FILENAME},
};
use openapi_viewer_core::domain::{LoadState, RenderStage};

#[tokio::main]
async fn main() -> Result<(), ViewerError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting viewer...");

    // --- 2. Initialize Capability Adapters ---
    let client = reqwest::Client::new();
    let state = Arc::new(AppState {
        config: config.clone(),
        documents: Arc::new(HttpDocumentSource::new(client.clone())),
        assets: Arc::new(HttpAssetSource::new(client)),
        mounter: Arc::new(FixedMounter::new(config.mount_id.clone())),
        renderer: Arc::new(HtmlRenderer::new(
            config.asset_base_url.clone(),
            config.render_output.clone(),
        )),
        clipboard: Arc::new(StdoutClipboard),
        files: Arc::new(FsFileSaver::new(config.download_dir.clone())),
        toasts: Arc::new(TracingToasts),
        diagnostics: Arc::new(TracingDiagnostics),
    });

    // --- 3. Plain-Text Flow: fetch the spec and save its formatted text ---
    let mut text_view = JsonTextView::new(state.clone());
    text_view.activate().await;
    match text_view.load_state() {
        LoadState::Loaded(_) => {
            text_view.download().await;
            info!(file = DEFAULT_DOWNLOAD_FILENAME, "Spec text saved");
        }
        LoadState::Failed(message) => {
            warn!(%message, "Spec could not be loaded; skipping the text view")
        }
        LoadState::Unloaded => {}
    }

    // --- 4. Interactive Flow: acquire assets and emit the render page ---
    let mut interactive = InteractiveView::new(state);
    interactive.activate().await;
    match interactive.stage() {
        RenderStage::Ready => {
            info!(page = %config.render_output.display(), "Interactive page emitted")
        }
        RenderStage::Failed { stage, message } => {
            warn!(stage = %stage, %message, "Interactive render failed")
        }
        _ => {}
    }

    Ok(())
}
