//! services/viewer/src/view/interactive.rs
//!
//! This module contains the interactive documentation component: the staged
//! pipeline that acquires the spec document and the engine's assets, then
//! performs the single render call and the OAuth initialization.

use crate::view::loader::DocumentLoader;
use crate::view::state::AppState;
use openapi_viewer_core::domain::{
    Activation, DiagnosticOutcome, FailedStage, Layout, LoadState, OAuthConfig, Plugin, Preset,
    RenderConfig, RenderStage,
};
use openapi_viewer_core::redirect::resolve_redirect_url;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Asset names under the configured base URL. The standalone preset
/// registers against globals set up by the main bundle, so bundle loads
/// before preset.
pub const STYLESHEET_ASSET: &str = "swagger-ui.css";
pub const SCRIPT_BUNDLE_ASSET: &str = "swagger-ui-bundle.js";
pub const SCRIPT_PRESET_ASSET: &str = "swagger-ui-standalone-preset.js";

/// Drives the render pipeline: document, stylesheet, script bundles, mount
/// lookup, render, OAuth init. Each stage gates the next; the first failure
/// is terminal for the component.
pub struct InteractiveView {
    state: Arc<AppState>,
    loader: DocumentLoader,
    activation: Activation,
    stage: RenderStage,
    shutdown: CancellationToken,
}

impl InteractiveView {
    /// Creates a new, idle `InteractiveView`.
    pub fn new(state: Arc<AppState>) -> Self {
        let loader = DocumentLoader::new(state.documents.clone(), state.diagnostics.clone());
        Self {
            state,
            loader,
            activation: Activation::Idle,
            stage: RenderStage::Idle,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn stage(&self) -> &RenderStage {
        &self.stage
    }

    /// Marks the component as torn down by the host. The pipeline observes
    /// this between stages and quietly stops performing port calls.
    pub fn teardown(&self) {
        self.shutdown.cancel();
    }

    /// Runs the pipeline to completion. Safe to call repeatedly; only the
    /// first call performs work. Never panics and never returns an error:
    /// failures land in `stage()` and the diagnostics sink.
    pub async fn activate(&mut self) {
        if self.activation != Activation::Idle {
            return;
        }
        self.activation = Activation::Active;

        if let Err((stage, message)) = self.run_pipeline().await {
            error!(stage = %stage, message = %message, "Render pipeline failed");
            self.stage = RenderStage::Failed { stage, message };
        }

        self.activation = Activation::Done;
    }

    async fn run_pipeline(&mut self) -> Result<(), (FailedStage, String)> {
        if self.shutdown.is_cancelled() {
            return Ok(());
        }

        // 1. Acquire the spec document.
        self.stage = RenderStage::AcquiringDocument;
        let location = self.state.config.spec_url.clone();
        let spec = match self.loader.load(&location).await {
            LoadState::Loaded(document) => document.clone(),
            LoadState::Failed(message) => {
                return Err((FailedStage::Document, message.clone()))
            }
            LoadState::Unloaded => {
                return Err((FailedStage::Document, "load did not run".to_string()))
            }
        };
        if self.shutdown.is_cancelled() {
            return Ok(());
        }

        // 2.-4. Acquire the presentation assets, in dependency order.
        self.stage = RenderStage::AcquiringAssets;
        self.acquire_asset(FailedStage::Style, STYLESHEET_ASSET).await?;
        self.acquire_asset(FailedStage::ScriptBundle, SCRIPT_BUNDLE_ASSET)
            .await?;
        self.acquire_asset(FailedStage::ScriptPreset, SCRIPT_PRESET_ASSET)
            .await?;
        if self.shutdown.is_cancelled() {
            return Ok(());
        }

        // 5. Locate the mount point. Its absence is a host configuration or
        // timing error, not recoverable by retry.
        self.stage = RenderStage::Rendering;
        let mount = self
            .state
            .mounter
            .find_mount_point(&self.state.config.mount_id)
            .ok_or_else(|| {
                let message = "container not found".to_string();
                self.state
                    .diagnostics
                    .record("mount", DiagnosticOutcome::Failed, &message);
                (FailedStage::Mount, message)
            })?;

        // 6. Resolve the redirect URL from the current host context.
        let redirect_url = resolve_redirect_url(
            self.state.config.hostname(),
            &self.state.config.origin_str(),
        );
        info!(%redirect_url, "OAuth2 redirect URL resolved");

        // 7. The single render call.
        let config = RenderConfig {
            spec,
            mount_id: mount.id,
            deep_linking: true,
            presets: vec![Preset::Apis, Preset::Standalone],
            plugins: vec![Plugin::DownloadUrl],
            layout: Layout::Standalone,
            oauth2_redirect_url: redirect_url.clone(),
        };
        self.state
            .diagnostics
            .record("render", DiagnosticOutcome::Started, &config.mount_id);
        if let Err(e) = self.state.renderer.render(config).await {
            let message = e.to_string();
            self.state
                .diagnostics
                .record("render", DiagnosticOutcome::Failed, &message);
            return Err((FailedStage::Render, message));
        }
        if self.shutdown.is_cancelled() {
            return Ok(());
        }

        // 8. Completion reached; the OAuth entry point runs exactly once.
        // `render` resolving is the completion signal, so a duplicate
        // callback from the engine cannot re-enter this step.
        let oauth = OAuthConfig::authorization_code(redirect_url);
        if let Err(e) = self.state.renderer.init_oauth(oauth).await {
            let message = e.to_string();
            self.state
                .diagnostics
                .record("render", DiagnosticOutcome::Failed, &message);
            return Err((FailedStage::Render, message));
        }
        self.state
            .diagnostics
            .record("render", DiagnosticOutcome::Succeeded, "");

        self.stage = RenderStage::Ready;
        Ok(())
    }

    async fn acquire_asset(
        &self,
        stage: FailedStage,
        asset: &str,
    ) -> Result<(), (FailedStage, String)> {
        let url = format!(
            "{}/{}",
            self.state.config.asset_base_url.trim_end_matches('/'),
            asset
        );
        let stage_name = stage.to_string();
        self.state
            .diagnostics
            .record(&stage_name, DiagnosticOutcome::Started, &url);

        let result = match stage {
            FailedStage::Style => self.state.assets.load_stylesheet(&url).await,
            _ => self.state.assets.load_script(&url).await,
        };

        match result {
            Ok(()) => {
                self.state
                    .diagnostics
                    .record(&stage_name, DiagnosticOutcome::Succeeded, &url);
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                self.state
                    .diagnostics
                    .record(&stage_name, DiagnosticOutcome::Failed, &message);
                Err((stage, message))
            }
        }
    }
}
