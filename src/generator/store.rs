//! On-disk chunk storage with atomic per-variant publish.
//!
//! # Layout
//!
//! ```text
//! sitemaps/
//! ├── default/
//! │   ├── sitemap-1.xml
//! │   ├── sitemap-2.xml
//! │   ├── index.xml        # only when more than one chunk
//! │   └── manifest.json
//! └── news/
//!     └── ...
//! ```
//!
//! Publication stages the new chunk set in a scratch directory and swaps
//! it in with directory renames, so readers never observe a mix of old and
//! new chunks; a failed publish leaves the previous set authoritative.

use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Chunk storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("chunk storage IO error at `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("invalid chunk manifest at `{0}`")]
    Manifest(PathBuf, #[source] serde_json::Error),
}

/// Per-variant publication record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkManifest {
    pub chunk_count: usize,
    /// Last-modified time per chunk, indexed by chunk number minus one.
    pub lastmods: Vec<Option<String>>,
}

/// Filesystem-backed chunk storage.
///
/// Reads are pure lookups and safe to run concurrently; writes happen only
/// through [`ChunkStore::publish`].
#[derive(Debug, Clone)]
pub struct ChunkStore {
    root: PathBuf,
}

impl ChunkStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn variant_dir(&self, variant: &str) -> PathBuf {
        self.root.join(variant)
    }

    fn chunk_name(page: usize) -> String {
        format!("sitemap-{page}.xml")
    }

    // ========================================================================
    // publish
    // ========================================================================

    /// Atomically replace a variant's chunk set.
    ///
    /// `chunks[0]` becomes chunk 1. The index document must be given
    /// exactly when there is more than one chunk.
    pub fn publish(
        &self,
        variant: &str,
        chunks: &[String],
        index: Option<&str>,
        manifest: &ChunkManifest,
    ) -> Result<(), StoreError> {
        debug_assert_eq!(manifest.chunk_count, chunks.len());
        debug_assert_eq!(index.is_some(), chunks.len() > 1);

        let staging = self.root.join(format!(".staging-{variant}"));
        let result = self.stage(&staging, chunks, index, manifest);
        if let Err(e) = result {
            let _ = fs::remove_dir_all(&staging);
            return Err(e);
        }

        self.swap_in(variant, &staging)
    }

    fn stage(
        &self,
        staging: &Path,
        chunks: &[String],
        index: Option<&str>,
        manifest: &ChunkManifest,
    ) -> Result<(), StoreError> {
        // Leftover staging from an aborted previous run
        let _ = fs::remove_dir_all(staging);
        fs::create_dir_all(staging).map_err(|e| StoreError::Io(staging.to_path_buf(), e))?;

        for (i, chunk) in chunks.iter().enumerate() {
            let path = staging.join(Self::chunk_name(i + 1));
            fs::write(&path, chunk).map_err(|e| StoreError::Io(path.clone(), e))?;
        }

        if let Some(index) = index {
            let path = staging.join("index.xml");
            fs::write(&path, index).map_err(|e| StoreError::Io(path.clone(), e))?;
        }

        let manifest_path = staging.join("manifest.json");
        let json = serde_json::to_vec_pretty(manifest)
            .map_err(|e| StoreError::Manifest(manifest_path.clone(), e))?;
        fs::write(&manifest_path, json).map_err(|e| StoreError::Io(manifest_path.clone(), e))?;

        Ok(())
    }

    /// Swap the staged directory in over the live one. The previous set is
    /// parked under `.old-<variant>` until the swap succeeds.
    fn swap_in(&self, variant: &str, staging: &Path) -> Result<(), StoreError> {
        let live = self.variant_dir(variant);
        let old = self.root.join(format!(".old-{variant}"));

        let _ = fs::remove_dir_all(&old);
        let had_previous = live.exists();
        if had_previous
            && let Err(e) = fs::rename(&live, &old)
        {
            let _ = fs::remove_dir_all(staging);
            return Err(StoreError::Io(live, e));
        }

        match fs::rename(staging, &live) {
            Ok(()) => {
                let _ = fs::remove_dir_all(&old);
                Ok(())
            }
            Err(e) => {
                // Restore the previous set before reporting the failure
                if had_previous {
                    let _ = fs::rename(&old, &live);
                }
                let _ = fs::remove_dir_all(staging);
                Err(StoreError::Io(live, e))
            }
        }
    }

    // ========================================================================
    // reads
    // ========================================================================

    /// Read a chunk body. `Ok(None)` when the variant or page is absent.
    pub fn read_chunk(&self, variant: &str, page: usize) -> Result<Option<Vec<u8>>, StoreError> {
        self.read_file(&self.variant_dir(variant).join(Self::chunk_name(page)))
    }

    /// Read a variant's index document, if one was published.
    pub fn read_index(&self, variant: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.read_file(&self.variant_dir(variant).join("index.xml"))
    }

    /// Read a variant's manifest. `Ok(None)` when the variant is unknown.
    pub fn read_manifest(&self, variant: &str) -> Result<Option<ChunkManifest>, StoreError> {
        let path = self.variant_dir(variant).join("manifest.json");
        let Some(bytes) = self.read_file(&path)? else {
            return Ok(None);
        };
        let manifest =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Manifest(path, e))?;
        Ok(Some(manifest))
    }

    fn read_file(&self, path: &Path) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(path.to_path_buf(), e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(lastmods: Vec<Option<String>>) -> ChunkManifest {
        ChunkManifest {
            chunk_count: lastmods.len(),
            lastmods,
        }
    }

    #[test]
    fn test_publish_and_read_single_chunk() {
        let dir = tempfile::tempdir().unwrap();
        let store = ChunkStore::new(dir.path());

        store
            .publish(
                "default",
                &["<urlset/>".to_string()],
                None,
                &manifest(vec![None]),
            )
            .unwrap();

        assert_eq!(
            store.read_chunk("default", 1).unwrap().as_deref(),
            Some(b"<urlset/>".as_slice())
        );
        assert_eq!(store.read_chunk("default", 2).unwrap(), None);
        assert_eq!(store.read_index("default").unwrap(), None);

        let m = store.read_manifest("default").unwrap().unwrap();
        assert_eq!(m.chunk_count, 1);
    }

    #[test]
    fn test_publish_with_index() {
        let dir = tempfile::tempdir().unwrap();
        let store = ChunkStore::new(dir.path());

        store
            .publish(
                "default",
                &["<a/>".to_string(), "<b/>".to_string()],
                Some("<sitemapindex/>"),
                &manifest(vec![None, None]),
            )
            .unwrap();

        assert_eq!(
            store.read_index("default").unwrap().as_deref(),
            Some(b"<sitemapindex/>".as_slice())
        );
        assert_eq!(
            store.read_chunk("default", 2).unwrap().as_deref(),
            Some(b"<b/>".as_slice())
        );
    }

    #[test]
    fn test_republish_replaces_whole_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = ChunkStore::new(dir.path());

        store
            .publish(
                "default",
                &["<a/>".to_string(), "<b/>".to_string()],
                Some("<i/>"),
                &manifest(vec![None, None]),
            )
            .unwrap();
        store
            .publish(
                "default",
                &["<only/>".to_string()],
                None,
                &manifest(vec![None]),
            )
            .unwrap();

        // Stale chunk 2 and index are gone after the swap
        assert_eq!(
            store.read_chunk("default", 1).unwrap().as_deref(),
            Some(b"<only/>".as_slice())
        );
        assert_eq!(store.read_chunk("default", 2).unwrap(), None);
        assert_eq!(store.read_index("default").unwrap(), None);
        assert_eq!(store.read_manifest("default").unwrap().unwrap().chunk_count, 1);
    }

    #[test]
    fn test_variants_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = ChunkStore::new(dir.path());

        store
            .publish("default", &["<d/>".to_string()], None, &manifest(vec![None]))
            .unwrap();
        store
            .publish("news", &["<n/>".to_string()], None, &manifest(vec![None]))
            .unwrap();

        assert_eq!(
            store.read_chunk("default", 1).unwrap().as_deref(),
            Some(b"<d/>".as_slice())
        );
        assert_eq!(
            store.read_chunk("news", 1).unwrap().as_deref(),
            Some(b"<n/>".as_slice())
        );
    }

    #[test]
    fn test_unknown_variant_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = ChunkStore::new(dir.path());

        assert_eq!(store.read_chunk("missing", 1).unwrap(), None);
        assert_eq!(store.read_manifest("missing").unwrap(), None);
    }

    #[test]
    fn test_corrupt_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ChunkStore::new(dir.path());

        let variant_dir = dir.path().join("default");
        fs::create_dir_all(&variant_dir).unwrap();
        fs::write(variant_dir.join("manifest.json"), b"not json").unwrap();

        assert!(matches!(
            store.read_manifest("default"),
            Err(StoreError::Manifest(..))
        ));
    }
}
