//! services/viewer/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::path::PathBuf;
use tracing::Level;
use url::Url;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// Platform-resolved URL of the static OpenAPI spec resource.
    pub spec_url: String,
    /// Base URL under which the renderer's stylesheet and script bundles live.
    pub asset_base_url: String,
    /// Origin of the host embedding the components; drives the OAuth2
    /// redirect URL decision.
    pub origin: Url,
    /// Id of the container the interactive renderer mounts into.
    pub mount_id: String,
    /// Directory the download action saves files into.
    pub download_dir: PathBuf,
    /// Path the interactive renderer writes its output page to.
    pub render_output: PathBuf,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        // --- Load Resource Locations ---
        let spec_url = std::env::var("SPEC_URL")
            .map_err(|_| ConfigError::MissingVar("SPEC_URL".to_string()))?;

        let asset_base_url = std::env::var("ASSET_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("ASSET_BASE_URL".to_string()))?;

        // --- Load Host Context ---
        let origin_str = std::env::var("HOST_ORIGIN")
            .map_err(|_| ConfigError::MissingVar("HOST_ORIGIN".to_string()))?;
        let origin = Url::parse(&origin_str).map_err(|e| {
            ConfigError::InvalidValue("HOST_ORIGIN".to_string(), e.to_string())
        })?;
        if origin.host_str().is_none() {
            return Err(ConfigError::InvalidValue(
                "HOST_ORIGIN".to_string(),
                format!("'{}' has no host", origin_str),
            ));
        }

        // --- Load Output Settings ---
        let mount_id =
            std::env::var("MOUNT_ID").unwrap_or_else(|_| "swagger-ui-root".to_string());
        let download_dir = std::env::var("DOWNLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        let render_output = std::env::var("RENDER_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("swagger-ui.html"));

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            spec_url,
            asset_base_url,
            origin,
            mount_id,
            download_dir,
            render_output,
            log_level,
        })
    }

    /// The hostname of the embedding context. Validated non-empty at load time.
    pub fn hostname(&self) -> &str {
        self.origin.host_str().unwrap_or_default()
    }

    /// The origin in `scheme://host[:port]` form, as the redirect resolver
    /// expects it.
    pub fn origin_str(&self) -> String {
        self.origin.origin().ascii_serialization()
    }
}
