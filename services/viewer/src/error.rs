//! services/viewer/src/error.rs
//!
//! Defines the primary error type for the entire viewer service.

use crate::config::ConfigError;
use openapi_viewer_core::ports::PortError;

/// The primary error type for the `viewer` service.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from one of the capability ports.
    #[error("Capability Port Error: {0}")]
    Port(#[from] PortError),

    /// Represents a standard Input/Output error (e.g., writing the output page).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catch-all for any other unexpected errors.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}
