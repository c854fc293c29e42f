//! Chunk splitting.

use crate::expand::SitemapEntry;

/// Split assembled entries into chunks of at most `max_links` entries.
///
/// Chunk numbering starts at 1 (index 0 is chunk 1). Order is preserved,
/// so chunk membership is stable for a given generation run. An empty
/// entry set still yields one empty chunk so every variant has a chunk 1.
pub fn split_chunks(entries: Vec<SitemapEntry>, max_links: usize) -> Vec<Vec<SitemapEntry>> {
    debug_assert!(max_links > 0);
    if entries.is_empty() {
        return vec![Vec::new()];
    }

    let mut chunks = Vec::with_capacity(entries.len().div_ceil(max_links));
    let mut entries = entries;
    while entries.len() > max_links {
        let rest = entries.split_off(max_links);
        chunks.push(entries);
        entries = rest;
    }
    chunks.push(entries);
    chunks
}

/// Last-modified time of a chunk: the maximum entry lastmod.
///
/// Lexicographic max works because lastmod values are W3C datetime strings.
pub fn chunk_lastmod(entries: &[SitemapEntry]) -> Option<String> {
    entries
        .iter()
        .filter_map(|e| e.lastmod.as_deref())
        .max()
        .map(str::to_string)
}
