//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! base_url = "https://example.com"
//! base_url_override = "https://cdn.example.com"   # optional rewrite target
//! languages = ["en", "fr", "de"]
//! default_language = "en"
//! content = "content.toml"
//! output = "sitemaps"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Site-wide settings: canonical base URL, language catalog, source and
/// output locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Canonical base URL used to build absolute sitemap URLs.
    pub base_url: String,

    /// If set, replaces `base_url` in every emitted URL.
    pub base_url_override: Option<String>,

    /// Configured site languages, in sitemap output order.
    pub languages: Vec<String>,

    /// Default site language. Never excludable from variants.
    pub default_language: String,

    /// Content manifest path (relative to project root).
    pub content: PathBuf,

    /// Chunk storage directory (relative to project root).
    pub output: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost".to_string(),
            base_url_override: None,
            languages: vec!["en".to_string()],
            default_language: "en".to_string(),
            content: "content.toml".into(),
            output: "sitemaps".into(),
        }
    }
}
