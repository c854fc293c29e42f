//! Chunk lookup backing the HTTP surface.
//!
//! A pure, stateless read layer over [`ChunkStore`]: repeated calls with
//! the same (variant, page) return byte-identical output until the next
//! regeneration, so the HTTP boundary may cache responses freely.

use super::store::{ChunkStore, StoreError};

/// Successful lookup result.
#[derive(Debug, Clone, PartialEq)]
pub enum SitemapPayload {
    /// One chunk's XML body.
    Chunk(Vec<u8>),
    /// The variant's sitemap index document.
    Index(Vec<u8>),
}

impl SitemapPayload {
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Chunk(bytes) | Self::Index(bytes) => bytes,
        }
    }
}

/// Serves previously generated chunks and index documents.
pub struct ChunkServer {
    store: ChunkStore,
    default_variant: String,
}

impl ChunkServer {
    pub fn new(store: ChunkStore, default_variant: impl Into<String>) -> Self {
        Self {
            store,
            default_variant: default_variant.into(),
        }
    }

    /// Look up a chunk or index document.
    ///
    /// - `variant` `None` means the configured default variant.
    /// - `page` absent or zero returns the index when the variant has more
    ///   than one chunk, otherwise chunk 1.
    /// - `Ok(None)` is "not found": unknown variant or out-of-range page.
    ///   The boundary layer turns it into a bodyless 404, never an empty
    ///   generated chunk.
    pub fn serve(
        &self,
        variant: Option<&str>,
        page: Option<usize>,
    ) -> Result<Option<SitemapPayload>, StoreError> {
        let variant = variant.unwrap_or(&self.default_variant);

        let Some(manifest) = self.store.read_manifest(variant)? else {
            return Ok(None);
        };

        match page {
            None | Some(0) if manifest.chunk_count > 1 => {
                Ok(self.store.read_index(variant)?.map(SitemapPayload::Index))
            }
            None | Some(0) => Ok(self.store.read_chunk(variant, 1)?.map(SitemapPayload::Chunk)),
            Some(page) if page <= manifest.chunk_count => Ok(self
                .store
                .read_chunk(variant, page)?
                .map(SitemapPayload::Chunk)),
            Some(_) => Ok(None),
        }
    }
}
