//! Path records - the unit of work submitted to variant expansion.

use super::{ChangeFreq, Priority};

/// Reference to a content entity behind a routed path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub entity_type: String,
    pub id: String,
}

impl EntityRef {
    pub fn new(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}

/// Target of a path record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathTarget {
    /// Non-routable literal URL. Only the default-language variant is
    /// ever considered for these.
    Literal(String),
    /// Site-internal routed path, optionally backed by a content entity.
    Routed {
        path: String,
        entity: Option<EntityRef>,
    },
}

impl PathTarget {
    pub fn literal(url: impl Into<String>) -> Self {
        Self::Literal(url.into())
    }

    pub fn routed(path: impl Into<String>, entity: Option<EntityRef>) -> Self {
        Self::Routed {
            path: path.into(),
            entity,
        }
    }

    /// Content entity behind this target, if any.
    pub fn entity(&self) -> Option<&EntityRef> {
        match self {
            Self::Routed { entity, .. } => entity.as_ref(),
            Self::Literal(_) => None,
        }
    }
}

/// Static metadata carried through expansion untouched.
///
/// Image URLs are rewritten at assembly time; everything else is copied
/// verbatim onto each emitted entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordMeta {
    pub priority: Option<Priority>,
    pub changefreq: Option<ChangeFreq>,
    pub lastmod: Option<String>,
    pub images: Vec<String>,
}

/// One logical path queued for variant expansion.
///
/// Produced fresh per generation pass and discarded after expansion.
#[derive(Debug, Clone)]
pub struct PathRecord {
    pub target: PathTarget,
    pub meta: RecordMeta,
}

impl PathRecord {
    pub fn new(target: PathTarget, meta: RecordMeta) -> Self {
        Self { target, meta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_entity_accessor() {
        let entity = EntityRef::new("node", "1");
        let routed = PathTarget::routed("/about", Some(entity.clone()));
        assert_eq!(routed.entity(), Some(&entity));

        let plain = PathTarget::routed("/contact", None);
        assert_eq!(plain.entity(), None);

        let literal = PathTarget::literal("https://example.com/landing");
        assert_eq!(literal.entity(), None);
    }
}
