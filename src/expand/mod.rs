//! URL-variant expansion - the per-path language resolution engine.
//!
//! For one path record, decides which languages to emit, which URL string
//! to use per language, and which languages are cross-linked as alternates.
//! Three policies compose here: translation completeness
//! (`skip_untranslated`), per-language exclusion, and anonymous-view access.

pub mod assemble;

pub use assemble::{EntryAssembler, SitemapEntry};

use crate::core::{BaseUrlRewriter, EntityRef, LangId, LanguageCatalog, PathRecord, PathTarget, RecordMeta};
use crate::debug;
use crate::source::{AccessChecker, PathResolver, TranslationRegistry};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// Per-variant expansion settings, passed explicitly into every call.
#[derive(Debug, Clone, Default)]
pub struct ExpansionSettings {
    pub skip_untranslated: bool,
    pub excluded_languages: FxHashSet<LangId>,
}

impl ExpansionSettings {
    /// Whether a language is excluded. The default site language is never
    /// excluded, even when configured as such.
    fn is_excluded(&self, lang: &LangId, default: &LangId) -> bool {
        lang != default && self.excluded_languages.contains(lang)
    }
}

/// One language-tagged URL entry produced from a path record.
///
/// Every entry produced from the same record carries an identical
/// `alternate_urls` map (the full cross-link set, own language included).
#[derive(Debug, Clone, PartialEq)]
pub struct VariantEntry {
    pub langcode: LangId,
    pub url: String,
    pub alternate_urls: BTreeMap<LangId, String>,
    pub meta: RecordMeta,
}

/// Expands one path record into its accessible language variants.
pub struct VariantExpander<'a> {
    catalog: &'a LanguageCatalog,
    translations: &'a dyn TranslationRegistry,
    access: &'a dyn AccessChecker,
    resolver: &'a dyn PathResolver,
    rewriter: &'a BaseUrlRewriter,
}

impl<'a> VariantExpander<'a> {
    pub fn new(
        catalog: &'a LanguageCatalog,
        translations: &'a dyn TranslationRegistry,
        access: &'a dyn AccessChecker,
        resolver: &'a dyn PathResolver,
        rewriter: &'a BaseUrlRewriter,
    ) -> Self {
        Self {
            catalog,
            translations,
            access,
            resolver,
            rewriter,
        }
    }

    /// Expand a record into language variants.
    ///
    /// Returns an empty vec when nothing is includable; never an error.
    /// Collaborator failures are treated as deny/no-translations for this
    /// record only (fail-closed).
    pub fn expand(&self, record: &PathRecord, settings: &ExpansionSettings) -> Vec<VariantEntry> {
        let alternate_urls = match &record.target {
            // Not a routed URL, including only default variant
            PathTarget::Literal(_) => self.alternates_for_default_language(&record.target),

            PathTarget::Routed {
                entity: Some(entity),
                ..
            } if settings.skip_untranslated => match self.translation_languages(entity) {
                // Entity language unknown, including only default variant
                Some(languages) if languages.iter().any(LangId::is_unspecified) => {
                    self.alternates_for_default_language(&record.target)
                }
                // Including only translated variants of the entity
                Some(languages) => {
                    self.alternates_for_translated_languages(&record.target, &languages, settings)
                }
                // Lookup failed: fail closed, skip the record
                None => BTreeMap::new(),
            },

            // Not a content entity or including all untranslated variants
            PathTarget::Routed { .. } => self.alternates_for_all_languages(&record.target, settings),
        };

        alternate_urls
            .keys()
            .map(|langcode| VariantEntry {
                langcode: langcode.clone(),
                url: alternate_urls[langcode].clone(),
                alternate_urls: alternate_urls.clone(),
                meta: record.meta.clone(),
            })
            .collect()
    }

    /// Default-language-only alternate set: one entry if the anonymous
    /// visitor may view the target, empty otherwise.
    fn alternates_for_default_language(&self, target: &PathTarget) -> BTreeMap<LangId, String> {
        let mut alternate_urls = BTreeMap::new();
        let default = self.catalog.default_language();
        if self.can_view(target, default) {
            if let Some(url) = self.resolve(target, default) {
                alternate_urls.insert(default.clone(), url);
            }
        }
        alternate_urls
    }

    /// Alternates for each actual translation language, gated by exclusion
    /// and a per-translation access check.
    fn alternates_for_translated_languages(
        &self,
        target: &PathTarget,
        languages: &[LangId],
        settings: &ExpansionSettings,
    ) -> BTreeMap<LangId, String> {
        let mut alternate_urls = BTreeMap::new();
        let default = self.catalog.default_language();

        for lang in languages {
            if settings.is_excluded(lang, default) {
                continue;
            }
            if self.can_view(target, lang)
                && let Some(url) = self.resolve(target, lang)
            {
                alternate_urls.insert(lang.clone(), url);
            }
        }
        alternate_urls
    }

    /// Alternates for every configured language. One access check gates the
    /// whole path (translations may carry per-translation permissions,
    /// non-entity targets have a single underlying access decision).
    fn alternates_for_all_languages(
        &self,
        target: &PathTarget,
        settings: &ExpansionSettings,
    ) -> BTreeMap<LangId, String> {
        let mut alternate_urls = BTreeMap::new();
        let default = self.catalog.default_language();

        if !self.can_view(target, default) {
            return alternate_urls;
        }
        for lang in self.catalog.all() {
            if settings.is_excluded(lang, default) {
                continue;
            }
            if let Some(url) = self.resolve(target, lang) {
                alternate_urls.insert(lang.clone(), url);
            }
        }
        alternate_urls
    }

    /// Translation languages of an entity; `None` on lookup failure.
    fn translation_languages(&self, entity: &EntityRef) -> Option<Vec<LangId>> {
        match self.translations.translations_of(entity) {
            Ok(languages) => Some(languages),
            Err(e) => {
                debug!("expand"; "translation lookup failed for {}/{}: {e}", entity.entity_type, entity.id);
                None
            }
        }
    }

    /// Access check, fail-closed on collaborator error.
    fn can_view(&self, target: &PathTarget, lang: &LangId) -> bool {
        match self.access.can_view(target, lang) {
            Ok(allowed) => allowed,
            Err(e) => {
                debug!("expand"; "access check failed ({lang}): {e}");
                false
            }
        }
    }

    /// Resolve and base-URL-rewrite a target URL; `None` on failure
    /// (record is skipped for that language).
    fn resolve(&self, target: &PathTarget, lang: &LangId) -> Option<String> {
        match self.resolver.resolve(target, lang) {
            Ok(url) => Some(self.rewriter.rewrite(&url)),
            Err(e) => {
                debug!("expand"; "url resolution failed ({lang}): {e}");
                None
            }
        }
    }
}
