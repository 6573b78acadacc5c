//! crates/openapi_viewer_core/src/ports.rs
//!
//! Defines the capability contracts (traits) for the viewer components.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! workflow logic to be independent of the host platform's browser singletons
//! (network fetch, clipboard, file save, the rendering engine itself).

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{DiagnosticOutcome, MountPoint, OAuthConfig, RenderConfig, Toast};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// The error taxonomy for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Asset load error: {0}")]
    AssetLoad(String),
    #[error("Mount error: {0}")]
    Mount(String),
    #[error("Render error: {0}")]
    Render(String),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    #[error("Download error: {0}")]
    Download(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Capability Ports (Traits)
//=========================================================================================

/// Fetches the raw text of the spec document from the platform-resolved
/// location. Parsing is the caller's concern so that fetch and parse
/// failures remain distinguishable.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch_text(&self, location: &str) -> PortResult<String>;
}

/// Acquires the presentation assets (stylesheet and script bundles) the
/// rendering engine depends on. Acquisition order matters to the caller;
/// implementations only guarantee that a returned `Ok` means the asset is
/// available to the engine.
#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn load_stylesheet(&self, url: &str) -> PortResult<()>;
    async fn load_script(&self, url: &str) -> PortResult<()>;
}

/// Locates the designated mount point in the current view.
pub trait Mounter: Send + Sync {
    /// Returns `None` when the container is absent from the host view,
    /// which is a configuration or timing error, not recoverable by retry.
    fn find_mount_point(&self, id: &str) -> Option<MountPoint>;
}

/// The external rendering engine, treated as a black box.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Performs the single render call and resolves when the engine signals
    /// completion. Implementations must coalesce duplicate completion
    /// signals from the engine into a single resolution.
    async fn render(&self, config: RenderConfig) -> PortResult<()>;

    /// Invokes the engine's OAuth initialization entry point. Called at
    /// most once, after `render` has resolved.
    async fn init_oauth(&self, config: OAuthConfig) -> PortResult<()>;
}

/// The system clipboard's write-text capability. May reject.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> PortResult<()>;
}

/// The host-mediated save-as-file capability. Implementations own the
/// lifetime of any temporary resource backing the blob and must release it
/// before returning, whether or not the save succeeds.
#[async_trait]
pub trait FileSaver: Send + Sync {
    async fn save(&self, filename: &str, content: Bytes) -> PortResult<()>;
}

/// The transient user-notification sink.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// The observability sink for stage-by-stage diagnostics. Advisory only;
/// recording must never affect control flow.
pub trait DiagnosticsSink: Send + Sync {
    fn record(&self, stage: &str, outcome: DiagnosticOutcome, detail: &str);
}
