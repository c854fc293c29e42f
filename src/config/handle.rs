//! Global config with atomic replacement support.
//!
//! Uses `arc-swap` for lock-free reads: the serve request pool reads the
//! config on every request without taking a lock.

use crate::config::SitemapConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<SitemapConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SitemapConfig::default()));

#[inline]
pub fn cfg() -> Arc<SitemapConfig> {
    CONFIG.load_full()
}

#[inline]
pub fn init_config(config: SitemapConfig) -> Arc<SitemapConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}
