//! Configuration management for `sitemap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── generate   # [generate]
//! │   ├── serve      # [serve]
//! │   └── variant    # [variants.<name>]
//! ├── error.rs       # ConfigError
//! ├── handle.rs      # Global config handle
//! └── mod.rs         # SitemapConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section             | Purpose                                          |
//! |---------------------|--------------------------------------------------|
//! | `[site]`            | Base URL, languages, content/output paths        |
//! | `[generate]`        | Expansion thread count, XML minification         |
//! | `[serve]`           | Sitemap server (port, interface, default variant)|
//! | `[variants.<name>]` | Per-variant settings (exclusions, chunk size)    |

mod error;
mod handle;
pub mod section;
mod util;

pub use error::ConfigError;
pub use handle::{cfg, init_config};

pub use section::VariantConfig;
use section::{GenerateConfig, ServeConfig, SiteConfig};
use util::find_config_file;

use crate::{
    cli::{Cli, Commands},
    core::{BaseUrlRewriter, LangId, LanguageCatalog},
    log,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use url::Url;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitemap.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site settings (base URL, languages, paths)
    pub site: SiteConfig,

    /// Generation settings
    pub generate: GenerateConfig,

    /// Sitemap server settings
    pub serve: ServeConfig,

    /// Sitemap variants, keyed by name. Sorted so generation order and
    /// published output are deterministic.
    pub variants: BTreeMap<String, VariantConfig>,
}

impl SitemapConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file; the project root
    /// is the config file's parent directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let config_path = match find_config_file(&cli.config) {
            Some(path) => path,
            None => {
                log!(
                    "error";
                    "Config file '{}' not found. Create one to describe your site.",
                    cli.config.display()
                );
                std::process::exit(1);
            }
        };

        let mut config = Self::from_path(&config_path)?;
        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;
        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Parse a config file from disk.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Ok(toml::from_str(&content)?)
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        // A site without configured variants still gets a default sitemap
        if self.variants.is_empty() {
            self.variants
                .insert(self.serve.default_variant.clone(), VariantConfig::default());
        }

        // CLI overrides
        if let Commands::Serve { interface, port } = &cli.command {
            if let Some(interface) = interface {
                self.serve.interface = *interface;
            }
            if let Some(port) = port {
                self.serve.port = *port;
            }
        }
    }

    /// Validate the loaded configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_base_url(&self.site.base_url, "site.base_url")?;
        if let Some(override_base) = &self.site.base_url_override {
            validate_base_url(override_base, "site.base_url_override")?;
        }

        if self.site.languages.is_empty() {
            return Err(ConfigError::Validation(
                "site.languages must not be empty".to_string(),
            ));
        }
        for (i, lang) in self.site.languages.iter().enumerate() {
            if self.site.languages[..i].contains(lang) {
                return Err(ConfigError::Validation(format!(
                    "duplicate language `{lang}` in site.languages"
                )));
            }
        }
        if !self.site.languages.contains(&self.site.default_language) {
            return Err(ConfigError::Validation(format!(
                "site.default_language `{}` not in site.languages",
                self.site.default_language
            )));
        }

        for (name, variant) in &self.variants {
            if name.is_empty()
                || !name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            {
                return Err(ConfigError::Validation(format!(
                    "variant name `{name}` must be alphanumeric (`-` and `_` allowed)"
                )));
            }
            if variant.max_links == 0 {
                return Err(ConfigError::Validation(format!(
                    "variants.{name}.max_links must be at least 1"
                )));
            }
            for lang in &variant.excluded_languages {
                if !self.site.languages.contains(lang) {
                    return Err(ConfigError::Validation(format!(
                        "variants.{name}.excluded_languages contains unknown language `{lang}`"
                    )));
                }
            }
        }

        if !self.variants.contains_key(&self.serve.default_variant) {
            return Err(ConfigError::Validation(format!(
                "serve.default_variant `{}` is not a configured variant",
                self.serve.default_variant
            )));
        }

        Ok(())
    }

    // ========================================================================
    // derived values
    // ========================================================================

    /// Join a path onto the project root.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Absolute chunk storage directory.
    pub fn output_dir(&self) -> PathBuf {
        self.root_join(&self.site.output)
    }

    /// Absolute content manifest path.
    pub fn content_path(&self) -> PathBuf {
        self.root_join(&self.site.content)
    }

    /// Language catalog derived from `[site]`.
    pub fn catalog(&self) -> LanguageCatalog {
        LanguageCatalog::new(
            self.site.languages.iter().map(|l| LangId::new(l)).collect(),
            LangId::new(&self.site.default_language),
        )
    }

    /// Base-URL rewriter derived from `[site]`.
    pub fn rewriter(&self) -> BaseUrlRewriter {
        BaseUrlRewriter::new(&self.site.base_url, self.site.base_url_override.as_deref())
    }
}

fn validate_base_url(base: &str, field: &str) -> Result<(), ConfigError> {
    let url = Url::parse(base)
        .map_err(|e| ConfigError::Validation(format!("{field} `{base}` is not a valid URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation(format!(
            "{field} `{base}` must use http or https"
        )));
    }
    Ok(())
}

/// Parse a raw TOML document into a config (test helper for section tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SitemapConfig {
    toml::from_str(content).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SitemapConfig {
        let mut config = test_parse_config(
            r#"
            [site]
            base_url = "https://example.com"
            languages = ["en", "fr"]
            default_language = "en"
            "#,
        );
        config
            .variants
            .insert("default".to_string(), VariantConfig::default());
        config
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = valid();
        config.site.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.site.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_default_language() {
        let mut config = valid();
        config.site.default_language = "de".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_language() {
        let mut config = valid();
        config.site.languages.push("en".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_excluded_language() {
        let mut config = valid();
        config
            .variants
            .get_mut("default")
            .unwrap()
            .excluded_languages
            .push("pt".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_max_links() {
        let mut config = valid();
        config.variants.get_mut("default").unwrap().max_links = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_default_variant() {
        let mut config = valid();
        config.serve.default_variant = "news".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_variant_name() {
        let mut config = valid();
        config
            .variants
            .insert("bad name".to_string(), VariantConfig::default());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_catalog_from_config() {
        let config = valid();
        let catalog = config.catalog();
        assert_eq!(catalog.default_language().as_str(), "en");
        assert_eq!(catalog.all().len(), 2);
    }
}
