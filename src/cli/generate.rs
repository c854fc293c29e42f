//! Sitemap generation command.
//!
//! One bulk pass per variant: enumerate path records from the content
//! manifest, expand them into language variants in parallel, assemble and
//! chunk the entries, then atomically publish the variant's chunk set.

use crate::{
    config::SitemapConfig,
    core::LangId,
    expand::{EntryAssembler, ExpansionSettings, SitemapEntry, VariantExpander},
    generator::{
        ChunkManifest, ChunkStore, chunk,
        index::{self, IndexEntry},
        minify_xml, xml,
    },
    log,
    logger::ProgressLine,
    source::{ContentManifest, ManifestRegistry, collect_records},
};
use anyhow::{Context, Result};
use rayon::prelude::*;

pub fn run(config: &SitemapConfig) -> Result<()> {
    let manifest = ContentManifest::load(&config.content_path())?;
    let catalog = config.catalog();
    let rewriter = config.rewriter();
    let registry = ManifestRegistry::new(&manifest, &catalog, &rewriter);
    let expander = VariantExpander::new(&catalog, &registry, &registry, &registry, &rewriter);
    let assembler = EntryAssembler::new(&rewriter);

    let output_dir = config.output_dir();
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output dir {}", output_dir.display()))?;
    let store = ChunkStore::new(&output_dir);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.generate.threads)
        .build()
        .context("Failed to create expansion thread pool")?;

    let record_count = manifest.entities.len() + manifest.links.len();
    let counters: Vec<(&str, usize)> = config
        .variants
        .keys()
        .map(|name| (name.as_str(), record_count))
        .collect();
    let progress = ProgressLine::new(&counters);

    let mut total_entries = 0usize;
    for (name, variant) in &config.variants {
        let settings = ExpansionSettings {
            skip_untranslated: variant.skip_untranslated,
            excluded_languages: variant
                .excluded_languages
                .iter()
                .map(|l| LangId::new(l))
                .collect(),
        };

        // Records are rebuilt per variant and discarded after expansion
        let records = collect_records(&manifest);
        let entries: Vec<SitemapEntry> = pool.install(|| {
            records
                .par_iter()
                .map(|record| {
                    let variants = expander.expand(record, &settings);
                    progress.inc(name);
                    assembler.assemble(variants)
                })
                .collect::<Vec<_>>()
        })
        .into_iter()
        .flatten()
        .collect();

        total_entries += entries.len();
        publish_variant(config, &store, name, entries)?;
    }

    progress.finish();
    log!(
        "generate";
        "published {} entries across {} variant(s) to {}",
        total_entries,
        config.variants.len(),
        output_dir.display()
    );
    Ok(())
}

/// Render, chunk, and atomically publish one variant.
fn publish_variant(
    config: &SitemapConfig,
    store: &ChunkStore,
    name: &str,
    entries: Vec<SitemapEntry>,
) -> Result<()> {
    let variant = &config.variants[name];
    let minify = config.generate.minify;

    let chunks = chunk::split_chunks(entries, variant.max_links);
    let lastmods: Vec<Option<String>> = chunks.iter().map(|c| chunk::chunk_lastmod(c)).collect();

    let bodies: Vec<String> = chunks
        .iter()
        .map(|entries| minify_str(xml::render_chunk(entries), minify))
        .collect();

    let index_body = (chunks.len() > 1).then(|| {
        let public_base = config.rewriter().public_base().to_string();
        let index_entries: Vec<IndexEntry> = lastmods
            .iter()
            .enumerate()
            .map(|(i, lastmod)| IndexEntry {
                loc: index::chunk_url(&public_base, name, &config.serve.default_variant, i + 1),
                lastmod: lastmod.clone(),
            })
            .collect();
        minify_str(index::render_index(&index_entries), minify)
    });

    let manifest = ChunkManifest {
        chunk_count: chunks.len(),
        lastmods,
    };

    store
        .publish(name, &bodies, index_body.as_deref(), &manifest)
        .with_context(|| format!("Failed to publish sitemap variant `{name}`"))?;

    log!("generate"; "variant `{}`: {} chunk(s)", name, chunks.len());
    Ok(())
}

fn minify_str(xml: String, enabled: bool) -> String {
    if enabled {
        String::from_utf8_lossy(&minify_xml(xml.as_bytes(), true)).into_owned()
    } else {
        xml
    }
}
