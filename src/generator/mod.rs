//! Sitemap output generation.
//!
//! Turns assembled entries into the persisted chunk layout:
//!
//! - **xml**: one `<urlset>` document per chunk, with hreflang alternates
//!   and image extensions
//! - **index**: a `<sitemapindex>` document when a variant has >1 chunk
//! - **chunk**: size-bounded chunk splitting
//! - **store**: on-disk chunk storage with atomic per-variant publish
//! - **server**: chunk/index lookup backing the HTTP surface

pub mod chunk;
pub mod index;
pub mod server;
pub mod store;
pub mod xml;

pub use server::{ChunkServer, SitemapPayload};
pub use store::{ChunkManifest, ChunkStore, StoreError};

use std::borrow::Cow;

/// Minify XML content if enabled.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        let xml_str = std::str::from_utf8(content).unwrap_or("");
        let minified = xml_str
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified.into_bytes())
    } else {
        Cow::Borrowed(content)
    }
}
