//! Content manifest (`content.toml`) - the inventory of indexable paths.
//!
//! Plays the role of the site's entity storage: content entities with
//! per-language translations, and custom links (internal routed paths or
//! external literal URLs).
//!
//! # Example
//!
//! ```toml
//! [[entities]]
//! type = "node"
//! id = "1"
//! path = "/about"
//! langcode = "en"
//! lastmod = "2026-01-10"
//! priority = 0.7
//! changefreq = "weekly"
//! images = ["/media/team.png"]
//!
//! [entities.translations.fr]
//! path = "/fr/a-propos"
//! published = true
//!
//! [[links]]
//! path = "/contact"
//! priority = 0.3
//!
//! [[links]]
//! url = "https://status.example.com"
//! ```

use crate::core::{ChangeFreq, Priority};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{collections::BTreeMap, fs, path::Path};

/// Parsed content manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentManifest {
    pub entities: Vec<EntityItem>,
    pub links: Vec<LinkItem>,
}

/// A content entity with optional translations.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityItem {
    /// Entity type (e.g. `node`, `term`).
    #[serde(rename = "type", default = "default_entity_type")]
    pub entity_type: String,

    pub id: String,

    /// Canonical path in the entity's original language.
    pub path: String,

    /// Original language; `und`/`zxx` when unknown.
    #[serde(default = "default_langcode")]
    pub langcode: String,

    /// Whether an anonymous visitor may view the original language.
    #[serde(default = "default_true")]
    pub published: bool,

    pub priority: Option<Priority>,
    pub changefreq: Option<ChangeFreq>,
    pub lastmod: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,

    /// Translations keyed by langcode. Sorted for stable iteration.
    #[serde(default)]
    pub translations: BTreeMap<String, TranslationItem>,
}

/// One translation of a content entity.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TranslationItem {
    /// Path override. When absent, the translation path is derived from
    /// the entity path by language prefixing.
    pub path: Option<String>,

    /// Whether an anonymous visitor may view this translation.
    #[serde(default = "default_true")]
    pub published: bool,
}

/// A custom link: either an internal routed path or an external literal URL.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LinkItem {
    /// Internal routed path (exclusive with `url`).
    pub path: Option<String>,

    /// External, non-routable URL (exclusive with `path`).
    pub url: Option<String>,

    #[serde(default = "default_true")]
    pub published: bool,

    pub priority: Option<Priority>,
    pub changefreq: Option<ChangeFreq>,
    pub lastmod: Option<String>,
}

fn default_entity_type() -> String {
    "node".to_string()
}

fn default_langcode() -> String {
    crate::core::LANGCODE_NOT_SPECIFIED.to_string()
}

fn default_true() -> bool {
    true
}

impl ContentManifest {
    /// Load and validate a manifest from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content manifest {}", path.display()))?;
        let manifest: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse content manifest {}", path.display()))?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        for entity in &self.entities {
            if !entity.path.starts_with('/') {
                bail!(
                    "entity {}/{}: path `{}` must start with `/`",
                    entity.entity_type,
                    entity.id,
                    entity.path
                );
            }
            for (lang, translation) in &entity.translations {
                if let Some(path) = &translation.path
                    && !path.starts_with('/')
                {
                    bail!(
                        "entity {}/{}: translation `{lang}` path `{path}` must start with `/`",
                        entity.entity_type,
                        entity.id
                    );
                }
            }
        }
        for (i, link) in self.links.iter().enumerate() {
            match (&link.path, &link.url) {
                (Some(_), Some(_)) => bail!("links[{i}]: `path` and `url` are exclusive"),
                (None, None) => bail!("links[{i}]: one of `path` or `url` is required"),
                (Some(path), None) if !path.starts_with('/') => {
                    bail!("links[{i}]: path `{path}` must start with `/`")
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
        [[entities]]
        id = "1"
        path = "/about"
        langcode = "en"
        priority = 0.7
        changefreq = "weekly"

        [entities.translations.fr]
        path = "/fr/a-propos"

        [entities.translations.de]
        published = false

        [[links]]
        path = "/contact"

        [[links]]
        url = "https://status.example.com"
    "#;

    #[test]
    fn test_parse_manifest() {
        let manifest: ContentManifest = toml::from_str(MANIFEST).unwrap();
        manifest.validate().unwrap();

        let entity = &manifest.entities[0];
        assert_eq!(entity.entity_type, "node");
        assert_eq!(entity.langcode, "en");
        assert!(entity.published);
        assert_eq!(entity.translations["fr"].path.as_deref(), Some("/fr/a-propos"));
        assert!(!entity.translations["de"].published);

        assert_eq!(manifest.links.len(), 2);
        assert_eq!(manifest.links[0].path.as_deref(), Some("/contact"));
        assert_eq!(manifest.links[1].url.as_deref(), Some("https://status.example.com"));
    }

    #[test]
    fn test_langcode_defaults_to_unspecified() {
        let manifest: ContentManifest =
            toml::from_str("[[entities]]\nid = \"1\"\npath = \"/x\"").unwrap();
        assert_eq!(manifest.entities[0].langcode, "und");
    }

    #[test]
    fn test_validate_rejects_ambiguous_link() {
        let manifest: ContentManifest =
            toml::from_str("[[links]]\npath = \"/a\"\nurl = \"https://example.com\"").unwrap();
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_link() {
        let manifest: ContentManifest = toml::from_str("[[links]]\npublished = true").unwrap();
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_relative_path() {
        let manifest: ContentManifest =
            toml::from_str("[[entities]]\nid = \"1\"\npath = \"about\"").unwrap();
        assert!(manifest.validate().is_err());
    }
}
