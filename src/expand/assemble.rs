//! Entry assembly - merges variant output with record metadata.
//!
//! A pure merge with no policy decisions: metadata fields are preserved
//! exactly, except image URLs which receive the same base-URL rewrite as
//! every other emitted URL.

use super::VariantEntry;
use crate::core::{BaseUrlRewriter, ChangeFreq, LangId, Priority};
use std::collections::BTreeMap;

/// Final sitemap-ready entry written to chunk storage.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub langcode: LangId,
    pub alternates: BTreeMap<LangId, String>,
    pub priority: Option<Priority>,
    pub changefreq: Option<ChangeFreq>,
    pub lastmod: Option<String>,
    pub images: Vec<String>,
}

/// Turns variant entries into storage-ready sitemap entries.
pub struct EntryAssembler<'a> {
    rewriter: &'a BaseUrlRewriter,
}

impl<'a> EntryAssembler<'a> {
    pub fn new(rewriter: &'a BaseUrlRewriter) -> Self {
        Self { rewriter }
    }

    pub fn assemble(&self, entries: Vec<VariantEntry>) -> Vec<SitemapEntry> {
        entries.into_iter().map(|e| self.assemble_one(e)).collect()
    }

    fn assemble_one(&self, entry: VariantEntry) -> SitemapEntry {
        let images = entry
            .meta
            .images
            .iter()
            .map(|image| {
                // Manifest image paths are site-relative; absolute URLs are
                // rewritten like any other emitted URL
                if image.starts_with('/') {
                    self.rewriter.rewrite(&self.rewriter.absolute(image))
                } else {
                    self.rewriter.rewrite(image)
                }
            })
            .collect();

        SitemapEntry {
            loc: entry.url,
            langcode: entry.langcode,
            alternates: entry.alternate_urls,
            priority: entry.meta.priority,
            changefreq: entry.meta.changefreq,
            lastmod: entry.meta.lastmod,
            images,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RecordMeta;

    fn variant_entry(images: Vec<String>) -> VariantEntry {
        let lang = LangId::from("en");
        let url = "https://example.com/about".to_string();
        VariantEntry {
            langcode: lang.clone(),
            url: url.clone(),
            alternate_urls: BTreeMap::from([(lang, url)]),
            meta: RecordMeta {
                priority: Some(Priority::try_from(0.5).unwrap()),
                changefreq: Some(ChangeFreq::Weekly),
                lastmod: Some("2026-01-10".to_string()),
                images,
            },
        }
    }

    #[test]
    fn test_assemble_preserves_metadata() {
        let rewriter = BaseUrlRewriter::new("https://example.com", None);
        let assembler = EntryAssembler::new(&rewriter);

        let entries = assembler.assemble(vec![variant_entry(vec![])]);
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.loc, "https://example.com/about");
        assert_eq!(entry.priority.unwrap().to_string(), "0.5");
        assert_eq!(entry.changefreq, Some(ChangeFreq::Weekly));
        assert_eq!(entry.lastmod.as_deref(), Some("2026-01-10"));
    }

    #[test]
    fn test_assemble_rewrites_image_urls() {
        let rewriter = BaseUrlRewriter::new("https://example.com", Some("https://cdn.example.com"));
        let assembler = EntryAssembler::new(&rewriter);

        let entries = assembler.assemble(vec![variant_entry(vec![
            "/media/a.png".to_string(),
            "https://example.com/media/b.png".to_string(),
            "https://other.example.org/c.png".to_string(),
        ])]);

        assert_eq!(
            entries[0].images,
            [
                "https://cdn.example.com/media/a.png",
                "https://cdn.example.com/media/b.png",
                // Foreign hosts are left alone
                "https://other.example.org/c.png",
            ]
        );
    }
}
