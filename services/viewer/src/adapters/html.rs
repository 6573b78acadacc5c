//! services/viewer/src/adapters/html.rs
//!
//! This module contains the headless adapter for the `Renderer` port. It
//! emits a self-contained HTML page that boots the Swagger UI engine with
//! the staged render configuration; opening the page in a browser performs
//! the actual interactive render.

use async_trait::async_trait;
use openapi_viewer_core::domain::{Layout, OAuthConfig, Plugin, Preset, RenderConfig};
use openapi_viewer_core::ports::{PortError, PortResult, Renderer};
use std::path::PathBuf;
use tokio::sync::Mutex;

/// An adapter that implements the `Renderer` port by writing an HTML page.
///
/// `render` stages the configuration; `init_oauth` completes the page with
/// the OAuth block inside the engine's `onComplete` callback and writes it
/// to the output path. Writing happens once; a duplicate completion signal
/// has nothing left to stage and cannot produce a second page.
pub struct HtmlRenderer {
    asset_base_url: String,
    output_path: PathBuf,
    staged: Mutex<Option<RenderConfig>>,
}

impl HtmlRenderer {
    /// Creates a new `HtmlRenderer` writing to `output_path`.
    pub fn new(asset_base_url: String, output_path: PathBuf) -> Self {
        Self {
            asset_base_url: asset_base_url.trim_end_matches('/').to_string(),
            output_path,
            staged: Mutex::new(None),
        }
    }
}

#[async_trait]
impl Renderer for HtmlRenderer {
    async fn render(&self, config: RenderConfig) -> PortResult<()> {
        // A static page is "complete" as soon as its configuration is staged.
        *self.staged.lock().await = Some(config);
        Ok(())
    }

    async fn init_oauth(&self, oauth: OAuthConfig) -> PortResult<()> {
        let staged = self
            .staged
            .lock()
            .await
            .take()
            .ok_or_else(|| PortError::Render("render was never called".to_string()))?;

        let page = build_page(&staged, &oauth, &self.asset_base_url)?;
        std::fs::write(&self.output_path, page)
            .map_err(|e| PortError::Render(e.to_string()))?;
        Ok(())
    }
}

fn preset_expr(preset: Preset) -> &'static str {
    match preset {
        Preset::Apis => "SwaggerUIBundle.presets.apis",
        Preset::Standalone => "SwaggerUIStandalonePreset",
    }
}

fn plugin_expr(plugin: Plugin) -> &'static str {
    match plugin {
        Plugin::DownloadUrl => "SwaggerUIBundle.plugins.DownloadUrl",
    }
}

fn layout_name(layout: Layout) -> &'static str {
    match layout {
        Layout::Standalone => "StandaloneLayout",
    }
}

/// Generates the page that initializes the Swagger UI engine.
fn build_page(
    config: &RenderConfig,
    oauth: &OAuthConfig,
    asset_base_url: &str,
) -> PortResult<String> {
    let spec_json = serde_json::to_string_pretty(&config.spec)
        .map_err(|e| PortError::Render(e.to_string()))?;
    let presets = config
        .presets
        .iter()
        .map(|p| preset_expr(*p))
        .collect::<Vec<_>>()
        .join(", ");
    let plugins = config
        .plugins
        .iter()
        .map(|p| plugin_expr(*p))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!(
        r##"<!doctype html>
<html>
  <head>
    <title>API Reference</title>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <link rel="stylesheet" href="{base}/swagger-ui.css" />
  </head>
  <body>
    <div id="{mount_id}"></div>

    <!-- Load the engine; the standalone preset registers against it -->
    <script src="{base}/swagger-ui-bundle.js"></script>
    <script src="{base}/swagger-ui-standalone-preset.js"></script>

    <!-- Initialize the interactive API reference -->
    <script>
      const ui = SwaggerUIBundle({{
        spec: {spec_json},
        dom_id: "#{mount_id}",
        deepLinking: {deep_linking},
        presets: [{presets}],
        plugins: [{plugins}],
        layout: "{layout}",
        oauth2RedirectUrl: "{redirect_url}",
        onComplete: () => {{
          ui.initOAuth({{
            scopes: "{scopes}",
            usePkceWithAuthorizationCodeGrant: {use_pkce},
            redirectUrl: "{oauth_redirect_url}"
          }});
        }}
      }});
    </script>
  </body>
</html>
"##,
        base = asset_base_url,
        mount_id = config.mount_id,
        spec_json = spec_json,
        deep_linking = config.deep_linking,
        presets = presets,
        plugins = plugins,
        layout = layout_name(config.layout),
        redirect_url = config.oauth2_redirect_url,
        scopes = oauth.scopes,
        use_pkce = oauth.use_pkce,
        oauth_redirect_url = oauth.redirect_url,
    ))
}
