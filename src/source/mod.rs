//! Record sources - enumeration of indexable paths.
//!
//! Dispatch is a closed set of source kinds (one per path-target kind)
//! behind a single interface: `resolve_target`, `images`, `process_record`.

pub mod manifest;
pub mod registry;

pub use manifest::ContentManifest;
pub use registry::{AccessChecker, ManifestRegistry, PathResolver, TranslationRegistry};

use crate::core::{EntityRef, PathRecord, PathTarget, RecordMeta};
use crate::debug;
use manifest::{EntityItem, LinkItem};

/// One enumerable source of a path record.
pub enum UrlSource<'a> {
    Entity(&'a EntityItem),
    CustomLink(&'a LinkItem),
}

impl UrlSource<'_> {
    /// Resolve this source into a path target. `None` for malformed
    /// sources (skipped, not fatal).
    pub fn resolve_target(&self) -> Option<PathTarget> {
        match self {
            Self::Entity(entity) => Some(PathTarget::routed(
                &entity.path,
                Some(EntityRef::new(&entity.entity_type, &entity.id)),
            )),
            Self::CustomLink(link) => match (&link.path, &link.url) {
                (Some(path), None) => Some(PathTarget::routed(path, None)),
                (None, Some(url)) => Some(PathTarget::literal(url)),
                _ => None,
            },
        }
    }

    /// Image URLs attached to this source (entities only).
    pub fn images(&self) -> &[String] {
        match self {
            Self::Entity(entity) => &entity.images,
            Self::CustomLink(_) => &[],
        }
    }

    /// Build the path record for this source.
    pub fn process_record(&self) -> Option<PathRecord> {
        let target = self.resolve_target()?;
        let meta = match self {
            Self::Entity(entity) => RecordMeta {
                priority: entity.priority,
                changefreq: entity.changefreq,
                lastmod: entity.lastmod.clone(),
                images: self.images().to_vec(),
            },
            Self::CustomLink(link) => RecordMeta {
                priority: link.priority,
                changefreq: link.changefreq,
                lastmod: link.lastmod.clone(),
                images: Vec::new(),
            },
        };
        Some(PathRecord::new(target, meta))
    }
}

/// Enumerate all path records in the manifest, entities first.
///
/// Records are rebuilt fresh for each generation pass.
pub fn collect_records(manifest: &ContentManifest) -> Vec<PathRecord> {
    let sources = manifest
        .entities
        .iter()
        .map(UrlSource::Entity)
        .chain(manifest.links.iter().map(UrlSource::CustomLink));

    let mut records = Vec::with_capacity(manifest.entities.len() + manifest.links.len());
    for source in sources {
        match source.process_record() {
            Some(record) => records.push(record),
            None => debug!("source"; "skipping malformed link record"),
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_records() {
        let manifest: ContentManifest = toml::from_str(
            r#"
            [[entities]]
            id = "1"
            path = "/about"
            priority = 0.7
            images = ["/media/a.png"]

            [[links]]
            path = "/contact"

            [[links]]
            url = "https://status.example.com"
            "#,
        )
        .unwrap();

        let records = collect_records(&manifest);
        assert_eq!(records.len(), 3);

        assert!(matches!(
            &records[0].target,
            PathTarget::Routed { entity: Some(_), .. }
        ));
        assert_eq!(records[0].meta.images, ["/media/a.png"]);

        assert!(matches!(
            &records[1].target,
            PathTarget::Routed { entity: None, .. }
        ));
        assert!(matches!(&records[2].target, PathTarget::Literal(_)));
    }

    #[test]
    fn test_malformed_link_is_skipped() {
        let link = LinkItem::default();
        let source = UrlSource::CustomLink(&link);
        assert!(source.resolve_target().is_none());
        assert!(source.process_record().is_none());
    }
}
