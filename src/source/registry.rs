//! Collaborator interfaces consulted during variant expansion, plus their
//! manifest-backed implementations.
//!
//! The expander only sees the three traits; tests substitute doubles and
//! the manifest implementation is one possible backend.

use super::manifest::{ContentManifest, EntityItem, LinkItem};
use crate::core::{BaseUrlRewriter, EntityRef, LangId, LanguageCatalog, PathTarget};
use anyhow::{Result, bail};
use rustc_hash::FxHashMap;

/// Anonymous-visitor access decisions.
///
/// Evaluated as an unauthenticated visitor; there is no session or identity
/// value to thread through.
pub trait AccessChecker: Sync {
    fn can_view(&self, target: &PathTarget, lang: &LangId) -> Result<bool>;
}

/// Translation lookups for content entities.
///
/// The returned set includes the entity's original language. Entities with
/// unknown language report one of the sentinel langcodes (`und`/`zxx`).
pub trait TranslationRegistry: Sync {
    fn translations_of(&self, entity: &EntityRef) -> Result<Vec<LangId>>;
}

/// Resolves a target to an absolute, language-specific URL against the
/// canonical base. Base-URL rewriting happens after resolution.
pub trait PathResolver: Sync {
    fn resolve(&self, target: &PathTarget, lang: &LangId) -> Result<String>;
}

// ============================================================================
// Manifest-backed implementation
// ============================================================================

/// Collaborator implementation backed by the content manifest.
pub struct ManifestRegistry<'a> {
    entities: FxHashMap<(&'a str, &'a str), &'a EntityItem>,
    links_by_path: FxHashMap<&'a str, &'a LinkItem>,
    links_by_url: FxHashMap<&'a str, &'a LinkItem>,
    catalog: &'a LanguageCatalog,
    rewriter: &'a BaseUrlRewriter,
}

impl<'a> ManifestRegistry<'a> {
    pub fn new(
        manifest: &'a ContentManifest,
        catalog: &'a LanguageCatalog,
        rewriter: &'a BaseUrlRewriter,
    ) -> Self {
        let mut entities = FxHashMap::default();
        for entity in &manifest.entities {
            entities.insert((entity.entity_type.as_str(), entity.id.as_str()), entity);
        }

        let mut links_by_path = FxHashMap::default();
        let mut links_by_url = FxHashMap::default();
        for link in &manifest.links {
            if let Some(path) = &link.path {
                links_by_path.insert(path.as_str(), link);
            }
            if let Some(url) = &link.url {
                links_by_url.insert(url.as_str(), link);
            }
        }

        Self {
            entities,
            links_by_path,
            links_by_url,
            catalog,
            rewriter,
        }
    }

    fn entity(&self, entity: &EntityRef) -> Option<&'a EntityItem> {
        self.entities
            .get(&(entity.entity_type.as_str(), entity.id.as_str()))
            .copied()
    }

    /// Localized path for a routed target: translation override if present,
    /// otherwise the canonical path (default language) or a language-prefixed
    /// variant of it.
    fn localized_path(&self, path: &str, entity: Option<&'a EntityItem>, lang: &LangId) -> String {
        if let Some(entity) = entity
            && let Some(translation) = entity.translations.get(lang.as_str())
            && let Some(override_path) = &translation.path
        {
            return override_path.clone();
        }
        if lang == self.catalog.default_language() || lang.is_unspecified() {
            path.to_string()
        } else {
            format!("/{lang}{path}")
        }
    }
}

impl AccessChecker for ManifestRegistry<'_> {
    fn can_view(&self, target: &PathTarget, lang: &LangId) -> Result<bool> {
        match target {
            PathTarget::Literal(url) => Ok(self
                .links_by_url
                .get(url.as_str())
                .is_some_and(|link| link.published)),
            PathTarget::Routed {
                entity: Some(entity),
                ..
            } => {
                let Some(item) = self.entity(entity) else {
                    return Ok(false);
                };
                // Translation-specific visibility; untranslated languages
                // inherit the original entity's visibility
                match item.translations.get(lang.as_str()) {
                    Some(translation) => Ok(translation.published),
                    None => Ok(item.published),
                }
            }
            PathTarget::Routed {
                path, entity: None, ..
            } => Ok(self
                .links_by_path
                .get(path.as_str())
                .is_some_and(|link| link.published)),
        }
    }
}

impl TranslationRegistry for ManifestRegistry<'_> {
    fn translations_of(&self, entity: &EntityRef) -> Result<Vec<LangId>> {
        let Some(item) = self.entity(entity) else {
            bail!("unknown entity {}/{}", entity.entity_type, entity.id);
        };

        let mut languages = vec![LangId::new(&item.langcode)];
        for lang in item.translations.keys() {
            let lang = LangId::new(lang);
            if !languages.contains(&lang) {
                languages.push(lang);
            }
        }
        Ok(languages)
    }
}

impl PathResolver for ManifestRegistry<'_> {
    fn resolve(&self, target: &PathTarget, lang: &LangId) -> Result<String> {
        match target {
            PathTarget::Literal(url) => Ok(url.clone()),
            PathTarget::Routed { path, entity } => {
                let item = entity.as_ref().and_then(|e| self.entity(e));
                Ok(self.rewriter.absolute(&self.localized_path(path, item, lang)))
            }
        }
    }
}
