//! services/viewer/src/adapters/http.rs
//!
//! This module contains the HTTP adapters for the document and asset
//! acquisition ports. Both share one `reqwest::Client` so connections are
//! reused across the sequential acquisition chain.

use async_trait::async_trait;
use openapi_viewer_core::ports::{AssetSource, DocumentSource, PortError, PortResult};

//=========================================================================================
// Document Source Adapter
//=========================================================================================

/// An adapter that implements the `DocumentSource` port over HTTP.
#[derive(Clone)]
pub struct HttpDocumentSource {
    client: reqwest::Client,
}

impl HttpDocumentSource {
    /// Creates a new `HttpDocumentSource`.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    /// Issues the single fetch for the spec document. A non-success status
    /// is a network failure; no retry.
    async fn fetch_text(&self, location: &str) -> PortResult<String> {
        let response = self
            .client
            .get(location)
            .send()
            .await
            .map_err(|e| PortError::Network(e.to_string()))?
            .error_for_status()
            .map_err(|e| PortError::Network(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| PortError::Network(e.to_string()))
    }
}

//=========================================================================================
// Asset Source Adapter
//=========================================================================================

/// An adapter that implements the `AssetSource` port over HTTP.
///
/// In the browser the platform's resource loader injects each asset into the
/// page; headless, "acquiring" an asset means confirming it is reachable and
/// fully retrievable before the emitted page references it.
#[derive(Clone)]
pub struct HttpAssetSource {
    client: reqwest::Client,
}

impl HttpAssetSource {
    /// Creates a new `HttpAssetSource`.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn acquire(&self, url: &str) -> PortResult<()> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PortError::AssetLoad(e.to_string()))?
            .error_for_status()
            .map_err(|e| PortError::AssetLoad(e.to_string()))?;

        // Drain the body so a truncated transfer surfaces here, not in the page.
        response
            .bytes()
            .await
            .map_err(|e| PortError::AssetLoad(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl AssetSource for HttpAssetSource {
    async fn load_stylesheet(&self, url: &str) -> PortResult<()> {
        self.acquire(url).await
    }

    async fn load_script(&self, url: &str) -> PortResult<()> {
        self.acquire(url).await
    }
}
