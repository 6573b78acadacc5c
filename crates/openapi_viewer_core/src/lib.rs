pub mod domain;
pub mod ports;
pub mod redirect;

pub use domain::{
    Activation, DiagnosticOutcome, FailedStage, Layout, LoadState, MountPoint, OAuthConfig,
    Plugin, Preset, RenderConfig, RenderStage, SpecDocument, Toast, ToastVariant, OAUTH_SCOPES,
};
pub use ports::{
    AssetSource, Clipboard, DiagnosticsSink, DocumentSource, FileSaver, Mounter,
    NotificationSink, PortError, PortResult, Renderer,
};
pub use redirect::resolve_redirect_url;
