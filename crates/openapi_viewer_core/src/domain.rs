//! crates/openapi_viewer_core/src/domain.rs
//!
//! Defines the pure, core data structures for the viewer components.
//! These structs are independent of any network client or host platform.

/// The OpenAPI document as fetched from the platform's static resource.
///
/// No internal schema is validated or relied upon beyond "valid JSON";
/// the raw parsed value is kept verbatim.
pub type SpecDocument = serde_json::Value;

/// The load lifecycle of the spec document within one component lifetime.
///
/// Transitions are single-shot: `Unloaded -> Loaded` on a successful
/// fetch-and-parse, `Unloaded -> Failed` otherwise. Nothing leaves
/// `Loaded` or `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Unloaded,
    Loaded(SpecDocument),
    Failed(String),
}

impl LoadState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    /// Returns the document when loaded.
    pub fn document(&self) -> Option<&SpecDocument> {
        match self {
            LoadState::Loaded(doc) => Some(doc),
            _ => None,
        }
    }
}

/// Explicit lifecycle state for a component's one-shot activation guard.
///
/// Checked and advanced synchronously before the first suspension point,
/// so a rapid re-activation signal from the host performs no second fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Idle,
    Active,
    Done,
}

/// Outcome tag attached to each diagnostic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticOutcome {
    Started,
    Succeeded,
    Failed,
}

/// A handle to the location in the host view where the interactive
/// renderer attaches its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPoint {
    pub id: String,
}

//=========================================================================================
// Interactive Render Pipeline States
//=========================================================================================

/// The pipeline stage at which the interactive view failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedStage {
    Document,
    Style,
    ScriptBundle,
    ScriptPreset,
    Mount,
    Render,
}

impl std::fmt::Display for FailedStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FailedStage::Document => "document",
            FailedStage::Style => "style",
            FailedStage::ScriptBundle => "script-bundle",
            FailedStage::ScriptPreset => "script-preset",
            FailedStage::Mount => "mount",
            FailedStage::Render => "render",
        };
        f.write_str(name)
    }
}

/// An enum representing the current stage of the interactive render
/// pipeline. `Ready` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderStage {
    Idle,
    AcquiringDocument,
    AcquiringAssets,
    Rendering,
    Ready,
    Failed { stage: FailedStage, message: String },
}

//=========================================================================================
// Renderer Configuration
//=========================================================================================

/// Presets handed to the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// The standard API-exploration preset.
    Apis,
    /// The standalone UI preset registered by the secondary script bundle.
    Standalone,
}

/// Plugins handed to the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plugin {
    DownloadUrl,
}

/// Layout mode for the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Standalone,
}

/// The ephemeral configuration object built immediately before the single
/// render call. Not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub spec: SpecDocument,
    pub mount_id: String,
    pub deep_linking: bool,
    pub presets: Vec<Preset>,
    pub plugins: Vec<Plugin>,
    pub layout: Layout,
    pub oauth2_redirect_url: String,
}

/// The fixed scope set requested for the authorization-code flow.
pub const OAUTH_SCOPES: &str = "offline_access refresh_token api";

/// Configuration for the renderer's OAuth initialization entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthConfig {
    pub scopes: String,
    pub use_pkce: bool,
    pub redirect_url: String,
}

impl OAuthConfig {
    /// Builds the standard authorization-code configuration: fixed scopes,
    /// PKCE enabled, and the resolved redirect URL.
    pub fn authorization_code(redirect_url: impl Into<String>) -> Self {
        Self {
            scopes: OAUTH_SCOPES.to_string(),
            use_pkce: true,
            redirect_url: redirect_url.into(),
        }
    }
}

//=========================================================================================
// User Notifications
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

/// A transient user-facing notification. Advisory only; dispatching one
/// never interrupts any other flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            variant: ToastVariant::Success,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            variant: ToastVariant::Error,
        }
    }
}
