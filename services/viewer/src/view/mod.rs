pub mod interactive;
pub mod loader;
pub mod state;
pub mod text_view;

#[cfg(test)]
pub(crate) mod testing;

// Re-export the components to make them easily accessible to the binary
// that wires up the adapters.
pub use interactive::InteractiveView;
pub use loader::DocumentLoader;
pub use state::AppState;
pub use text_view::{JsonTextView, DEFAULT_DOWNLOAD_FILENAME};
