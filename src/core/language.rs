//! Language identifiers and the configured language catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Langcode for content whose language is not specified.
pub const LANGCODE_NOT_SPECIFIED: &str = "und";

/// Langcode for content to which language does not apply.
pub const LANGCODE_NOT_APPLICABLE: &str = "zxx";

/// Opaque language identifier (a langcode such as `en` or `pt-br`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LangId(String);

impl LangId {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the "language unknown" sentinel codes.
    pub fn is_unspecified(&self) -> bool {
        self.0 == LANGCODE_NOT_SPECIFIED || self.0 == LANGCODE_NOT_APPLICABLE
    }
}

impl fmt::Display for LangId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LangId {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Ordered set of configured site languages with a distinguished default.
///
/// The iteration order of [`LanguageCatalog::all`] is the configuration
/// order; it decides which URL variants are considered for paths that are
/// not translation-gated.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    languages: Vec<LangId>,
    default: LangId,
}

impl LanguageCatalog {
    /// Build a catalog. The default language is appended if missing so the
    /// catalog always contains it.
    pub fn new(languages: Vec<LangId>, default: LangId) -> Self {
        let mut languages = languages;
        if !languages.contains(&default) {
            languages.push(default.clone());
        }
        Self { languages, default }
    }

    pub fn all(&self) -> &[LangId] {
        &self.languages
    }

    pub fn default_language(&self) -> &LangId {
        &self.default
    }

    pub fn contains(&self, lang: &LangId) -> bool {
        self.languages.contains(lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_langid_sentinels() {
        assert!(LangId::from("und").is_unspecified());
        assert!(LangId::from("zxx").is_unspecified());
        assert!(!LangId::from("en").is_unspecified());
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = LanguageCatalog::new(
            vec!["en".into(), "fr".into(), "de".into()],
            LangId::from("en"),
        );
        let codes: Vec<_> = catalog.all().iter().map(LangId::as_str).collect();
        assert_eq!(codes, ["en", "fr", "de"]);
    }

    #[test]
    fn test_catalog_appends_missing_default() {
        let catalog = LanguageCatalog::new(vec!["fr".into()], LangId::from("en"));
        assert!(catalog.contains(&LangId::from("en")));
        assert_eq!(catalog.default_language().as_str(), "en");
    }
}
