//! crates/openapi_viewer_core/src/redirect.rs
//!
//! Resolves the OAuth2 authorization-code redirect URL from the current
//! host context. The embedding context (Lightning Experience, a public
//! Experience Cloud site, or a generic standalone host) exposes the
//! interactive view at a different route, so each needs a different
//! callback page.

/// Derives the redirect URL for the current host. Pure and total; first
/// matching rule wins.
pub fn resolve_redirect_url(hostname: &str, origin: &str) -> String {
    if hostname.contains("lightning.force.com") {
        format!("{origin}/lightning/n/SwaggerUI")
    } else if hostname.contains("my.site.com") {
        format!("{origin}/api/docs")
    } else {
        format!("{origin}/api/oauth2-redirect.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lightning_hosts_redirect_to_the_lightning_tab() {
        assert_eq!(
            resolve_redirect_url("app.lightning.force.com", "https://x"),
            "https://x/lightning/n/SwaggerUI"
        );
    }

    #[test]
    fn experience_cloud_sites_redirect_to_the_docs_page() {
        assert_eq!(
            resolve_redirect_url("foo.my.site.com", "https://x"),
            "https://x/api/docs"
        );
    }

    #[test]
    fn other_hosts_fall_back_to_the_generic_redirect_page() {
        assert_eq!(
            resolve_redirect_url("localhost", "http://localhost:3000"),
            "http://localhost:3000/api/oauth2-redirect.html"
        );
    }

    #[test]
    fn lightning_wins_over_the_fallback_even_with_extra_labels() {
        assert_eq!(
            resolve_redirect_url("org.sandbox.lightning.force.com", "https://org"),
            "https://org/lightning/n/SwaggerUI"
        );
    }
}
