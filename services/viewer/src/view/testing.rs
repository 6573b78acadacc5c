//! services/viewer/src/view/testing.rs
//!
//! In-memory recording adapters shared by the view component tests.

use crate::config::Config;
use crate::view::state::AppState;
use async_trait::async_trait;
use bytes::Bytes;
use openapi_viewer_core::domain::{
    DiagnosticOutcome, MountPoint, OAuthConfig, RenderConfig, Toast,
};
use openapi_viewer_core::ports::{
    AssetSource, Clipboard, DiagnosticsSink, DocumentSource, FileSaver, Mounter,
    NotificationSink, PortError, PortResult, Renderer,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::Level;
use url::Url;

/// A small but structurally real spec document.
pub const SAMPLE_SPEC: &str =
    r#"{"openapi": "3.0.0", "info": {"title": "Test API", "version": "1.0.0"}, "paths": {}}"#;

pub struct ScriptedDocumentSource {
    response: Result<String, String>,
    fetches: AtomicUsize,
}

impl ScriptedDocumentSource {
    pub fn ok(body: &str) -> Self {
        Self {
            response: Ok(body.to_string()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn network_error(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentSource for ScriptedDocumentSource {
    async fn fetch_text(&self, _location: &str) -> PortResult<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(body) => Ok(body.clone()),
            Err(message) => Err(PortError::Network(message.clone())),
        }
    }
}

pub struct RecordingDiagnostics {
    pub records: Mutex<Vec<(String, DiagnosticOutcome, String)>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn outcome_count(&self, outcome: DiagnosticOutcome) -> usize {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, recorded, _)| *recorded == outcome)
            .count()
    }
}

impl DiagnosticsSink for RecordingDiagnostics {
    fn record(&self, stage: &str, outcome: DiagnosticOutcome, detail: &str) {
        self.records
            .lock()
            .unwrap()
            .push((stage.to_string(), outcome, detail.to_string()));
    }
}

pub struct ScriptedAssetSource {
    pub requests: Mutex<Vec<String>>,
    fail_matching: Option<String>,
}

impl ScriptedAssetSource {
    pub fn ok() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_matching: None,
        }
    }

    /// Fails any request whose URL contains `substring`.
    pub fn failing_on(substring: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_matching: Some(substring.to_string()),
        }
    }

    fn acquire(&self, url: &str) -> PortResult<()> {
        self.requests.lock().unwrap().push(url.to_string());
        match &self.fail_matching {
            Some(substring) if url.contains(substring.as_str()) => {
                Err(PortError::AssetLoad(format!("{url} unavailable")))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl AssetSource for ScriptedAssetSource {
    async fn load_stylesheet(&self, url: &str) -> PortResult<()> {
        self.acquire(url)
    }

    async fn load_script(&self, url: &str) -> PortResult<()> {
        self.acquire(url)
    }
}

pub struct TestMounter {
    present: bool,
}

impl TestMounter {
    pub fn present() -> Self {
        Self { present: true }
    }

    pub fn absent() -> Self {
        Self { present: false }
    }
}

impl Mounter for TestMounter {
    fn find_mount_point(&self, id: &str) -> Option<MountPoint> {
        self.present.then(|| MountPoint { id: id.to_string() })
    }
}

pub struct RecordingRenderer {
    pub renders: Mutex<Vec<RenderConfig>>,
    pub oauth_inits: Mutex<Vec<OAuthConfig>>,
    fail_render: bool,
}

impl RecordingRenderer {
    /// Completes every render immediately, as an engine signalling its
    /// completion callback right away.
    pub fn completing() -> Self {
        Self {
            renders: Mutex::new(Vec::new()),
            oauth_inits: Mutex::new(Vec::new()),
            fail_render: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_render: true,
            ..Self::completing()
        }
    }

    pub fn render_count(&self) -> usize {
        self.renders.lock().unwrap().len()
    }

    pub fn oauth_count(&self) -> usize {
        self.oauth_inits.lock().unwrap().len()
    }
}

#[async_trait]
impl Renderer for RecordingRenderer {
    async fn render(&self, config: RenderConfig) -> PortResult<()> {
        self.renders.lock().unwrap().push(config);
        if self.fail_render {
            return Err(PortError::Render("engine initialization threw".to_string()));
        }
        Ok(())
    }

    async fn init_oauth(&self, config: OAuthConfig) -> PortResult<()> {
        self.oauth_inits.lock().unwrap().push(config);
        Ok(())
    }
}

pub struct RecordingClipboard {
    pub texts: Mutex<Vec<String>>,
    reject: bool,
}

impl RecordingClipboard {
    pub fn accepting() -> Self {
        Self {
            texts: Mutex::new(Vec::new()),
            reject: false,
        }
    }

    pub fn rejecting() -> Self {
        Self {
            texts: Mutex::new(Vec::new()),
            reject: true,
        }
    }

    pub fn write_count(&self) -> usize {
        self.texts.lock().unwrap().len()
    }
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> PortResult<()> {
        if self.reject {
            return Err(PortError::Clipboard("write denied".to_string()));
        }
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub struct RecordingFileSaver {
    pub saves: Mutex<Vec<(String, Bytes)>>,
    reject: bool,
}

impl RecordingFileSaver {
    pub fn accepting() -> Self {
        Self {
            saves: Mutex::new(Vec::new()),
            reject: false,
        }
    }

    pub fn rejecting() -> Self {
        Self {
            saves: Mutex::new(Vec::new()),
            reject: true,
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }
}

#[async_trait]
impl FileSaver for RecordingFileSaver {
    async fn save(&self, filename: &str, content: Bytes) -> PortResult<()> {
        if self.reject {
            return Err(PortError::Download("save rejected".to_string()));
        }
        self.saves
            .lock()
            .unwrap()
            .push((filename.to_string(), content));
        Ok(())
    }
}

pub struct RecordingToasts {
    pub toasts: Mutex<Vec<Toast>>,
}

impl RecordingToasts {
    pub fn new() -> Self {
        Self {
            toasts: Mutex::new(Vec::new()),
        }
    }

    pub fn toast_count(&self) -> usize {
        self.toasts.lock().unwrap().len()
    }
}

impl NotificationSink for RecordingToasts {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}

pub fn test_config() -> Config {
    Config {
        spec_url: "https://host/resource/spec.json".to_string(),
        asset_base_url: "https://host/resource/swaggerui".to_string(),
        origin: Url::parse("https://app.lightning.force.com").unwrap(),
        mount_id: "swagger-ui-root".to_string(),
        download_dir: PathBuf::from("."),
        render_output: PathBuf::from("swagger-ui.html"),
        log_level: Level::INFO,
    }
}

/// One full set of recording adapters plus the `AppState` view over them.
/// Tests swap individual fields with struct-update syntax before calling
/// `app_state`.
pub struct TestHarness {
    pub documents: Arc<ScriptedDocumentSource>,
    pub assets: Arc<ScriptedAssetSource>,
    pub mounter: Arc<TestMounter>,
    pub renderer: Arc<RecordingRenderer>,
    pub clipboard: Arc<RecordingClipboard>,
    pub files: Arc<RecordingFileSaver>,
    pub toasts: Arc<RecordingToasts>,
    pub diagnostics: Arc<RecordingDiagnostics>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            documents: Arc::new(ScriptedDocumentSource::ok(SAMPLE_SPEC)),
            assets: Arc::new(ScriptedAssetSource::ok()),
            mounter: Arc::new(TestMounter::present()),
            renderer: Arc::new(RecordingRenderer::completing()),
            clipboard: Arc::new(RecordingClipboard::accepting()),
            files: Arc::new(RecordingFileSaver::accepting()),
            toasts: Arc::new(RecordingToasts::new()),
            diagnostics: Arc::new(RecordingDiagnostics::new()),
        }
    }

    pub fn app_state(&self) -> Arc<AppState> {
        Arc::new(AppState {
            config: Arc::new(test_config()),
            documents: self.documents.clone(),
            assets: self.assets.clone(),
            mounter: self.mounter.clone(),
            renderer: self.renderer.clone(),
            clipboard: self.clipboard.clone(),
            files: self.files.clone(),
            toasts: self.toasts.clone(),
            diagnostics: self.diagnostics.clone(),
        })
    }
}
