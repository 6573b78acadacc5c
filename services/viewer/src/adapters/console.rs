//! services/viewer/src/adapters/console.rs
//!
//! Headless stand-ins for the host platform's UI capabilities, used by the
//! `viewer` binary: diagnostics and toasts go to the tracing subscriber, the
//! clipboard goes to stdout, and the mount point is the container the
//! emitted page always carries.

use async_trait::async_trait;
use openapi_viewer_core::domain::{DiagnosticOutcome, MountPoint, Toast, ToastVariant};
use openapi_viewer_core::ports::{
    Clipboard, DiagnosticsSink, Mounter, NotificationSink, PortResult,
};
use tracing::{error, info, warn};

/// Forwards stage diagnostics to the tracing subscriber.
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn record(&self, stage: &str, outcome: DiagnosticOutcome, detail: &str) {
        match outcome {
            DiagnosticOutcome::Started => info!(stage, detail, "stage started"),
            DiagnosticOutcome::Succeeded => info!(stage, detail, "stage succeeded"),
            DiagnosticOutcome::Failed => error!(stage, detail, "stage failed"),
        }
    }
}

/// Surfaces toasts as log lines.
pub struct TracingToasts;

impl NotificationSink for TracingToasts {
    fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Success => info!(title = %toast.title, "{}", toast.message),
            ToastVariant::Error => warn!(title = %toast.title, "{}", toast.message),
        }
    }
}

/// The emitted page always contains exactly one container, so the mount
/// lookup succeeds for that id and nothing else.
pub struct FixedMounter {
    id: String,
}

impl FixedMounter {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

impl Mounter for FixedMounter {
    fn find_mount_point(&self, id: &str) -> Option<MountPoint> {
        (self.id == id).then(|| MountPoint { id: id.to_string() })
    }
}

/// Prints the copied text, the closest a terminal gets to a clipboard.
pub struct StdoutClipboard;

#[async_trait]
impl Clipboard for StdoutClipboard {
    async fn write_text(&self, text: &str) -> PortResult<()> {
        println!("{text}");
        Ok(())
    }
}
