pub mod console;
pub mod fs;
pub mod html;
pub mod http;

pub use console::{FixedMounter, StdoutClipboard, TracingDiagnostics, TracingToasts};
pub use fs::FsFileSaver;
pub use html::HtmlRenderer;
pub use http::{HttpAssetSource, HttpDocumentSource};
