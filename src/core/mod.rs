//! Core types - pure abstractions shared across the codebase.

mod changefreq;
mod language;
mod priority;
mod record;
mod state;
mod url;

pub use changefreq::ChangeFreq;
pub use language::{LANGCODE_NOT_APPLICABLE, LANGCODE_NOT_SPECIFIED, LangId, LanguageCatalog};
pub use priority::Priority;
pub use record::{EntityRef, PathRecord, PathTarget, RecordMeta};
pub use state::{is_shutdown, register_server, setup_shutdown_handler};
pub use url::BaseUrlRewriter;
