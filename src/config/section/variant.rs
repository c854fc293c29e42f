//! `[variants.<name>]` section configuration.
//!
//! Each variant is an independently configured, independently chunked
//! sitemap instance. When no variant is configured, a `default` variant
//! with default settings is created at load time.
//!
//! # Example
//!
//! ```toml
//! [variants.default]
//! skip_untranslated = true
//! excluded_languages = ["de"]
//! max_links = 2000
//!
//! [variants.news]
//! max_links = 500
//! ```

use serde::{Deserialize, Serialize};

/// Per-variant generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantConfig {
    /// Only emit variants a content entity is actually translated into.
    /// Entities with unknown language fall back to the default language.
    pub skip_untranslated: bool,

    /// Languages excluded from this variant's output. The default site
    /// language is never excluded, even if listed here.
    pub excluded_languages: Vec<String>,

    /// Maximum entries per sitemap chunk.
    pub max_links: usize,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            skip_untranslated: false,
            excluded_languages: Vec::new(),
            max_links: 2000,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_variant_config() {
        let config = test_parse_config(
            "[variants.default]\nskip_untranslated = true\nexcluded_languages = [\"fr\"]\nmax_links = 100",
        );

        let variant = &config.variants["default"];
        assert!(variant.skip_untranslated);
        assert_eq!(variant.excluded_languages, ["fr"]);
        assert_eq!(variant.max_links, 100);
    }

    #[test]
    fn test_variant_config_defaults() {
        let config = test_parse_config("[variants.news]");

        let variant = &config.variants["news"];
        assert!(!variant.skip_untranslated);
        assert!(variant.excluded_languages.is_empty());
        assert_eq!(variant.max_links, 2000);
    }
}
