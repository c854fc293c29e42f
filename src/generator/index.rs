//! Sitemap index rendering.
//!
//! Written only when a variant has more than one chunk; lists every
//! chunk's URL and, when known, its last-modified time.

use super::xml::{SITEMAP_NS, XSL_PI, escape_xml};

/// One referenced chunk in the index.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub loc: String,
    pub lastmod: Option<String>,
}

/// Render a `<sitemapindex>` document.
pub fn render_index(entries: &[IndexEntry]) -> String {
    let mut xml = String::with_capacity(entries.len() * 128 + 256);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(XSL_PI);
    xml.push('\n');
    xml.push_str("<sitemapindex xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for entry in entries {
        xml.push_str("  <sitemap>\n    <loc>");
        xml.push_str(&escape_xml(&entry.loc));
        xml.push_str("</loc>\n");
        if let Some(lastmod) = &entry.lastmod {
            xml.push_str("    <lastmod>");
            xml.push_str(&escape_xml(lastmod));
            xml.push_str("</lastmod>\n");
        }
        xml.push_str("  </sitemap>\n");
    }

    xml.push_str("</sitemapindex>\n");
    xml
}

/// URL of one chunk of a variant, as referenced from the index.
///
/// The default variant is served at `/sitemap.xml`; named variants at
/// `/sitemap/<name>.xml`.
pub fn chunk_url(public_base: &str, variant: &str, default_variant: &str, page: usize) -> String {
    if variant == default_variant {
        format!("{public_base}/sitemap.xml?page={page}")
    } else {
        format!("{public_base}/sitemap/{variant}.xml?page={page}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_index() {
        let entries = vec![
            IndexEntry {
                loc: "https://example.com/sitemap.xml?page=1".to_string(),
                lastmod: Some("2026-01-10".to_string()),
            },
            IndexEntry {
                loc: "https://example.com/sitemap.xml?page=2".to_string(),
                lastmod: None,
            },
        ];
        let xml = render_index(&entries);

        assert!(xml.contains("<sitemapindex"));
        assert_eq!(xml.matches("<sitemap>").count(), 2);
        assert!(xml.contains("<loc>https://example.com/sitemap.xml?page=1</loc>"));
        assert!(xml.contains("<lastmod>2026-01-10</lastmod>"));
    }

    #[test]
    fn test_chunk_url() {
        assert_eq!(
            chunk_url("https://example.com", "default", "default", 2),
            "https://example.com/sitemap.xml?page=2"
        );
        assert_eq!(
            chunk_url("https://example.com", "news", "default", 1),
            "https://example.com/sitemap/news.xml?page=1"
        );
    }
}
