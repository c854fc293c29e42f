//! Chunk XML rendering.
//!
//! # Output Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <?xml-stylesheet type="text/xsl" href="/sitemap.xsl"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
//!         xmlns:xhtml="http://www.w3.org/1999/xhtml">
//!   <url>
//!     <loc>https://example.com/about</loc>
//!     <xhtml:link rel="alternate" hreflang="fr" href="https://example.com/fr/a-propos"/>
//!     <lastmod>2026-01-10</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.7</priority>
//!   </url>
//! </urlset>
//! ```

use crate::expand::SitemapEntry;
use std::borrow::Cow;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";
pub const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";

/// Stylesheet processing instruction shared by chunks and the index.
pub const XSL_PI: &str = r#"<?xml-stylesheet type="text/xsl" href="/sitemap.xsl"?>"#;

/// Render one chunk of entries into a `<urlset>` document.
pub fn render_chunk(entries: &[SitemapEntry]) -> String {
    let has_alternates = entries.iter().any(|e| e.alternates.len() > 1);
    let has_images = entries.iter().any(|e| !e.images.is_empty());

    let mut xml = String::with_capacity(entries.len() * 256 + 256);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(XSL_PI);
    xml.push('\n');

    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push('"');
    if has_alternates {
        xml.push_str(" xmlns:xhtml=\"");
        xml.push_str(XHTML_NS);
        xml.push('"');
    }
    if has_images {
        xml.push_str(" xmlns:image=\"");
        xml.push_str(IMAGE_NS);
        xml.push('"');
    }
    xml.push_str(">\n");

    for entry in entries {
        write_entry(&mut xml, entry);
    }

    xml.push_str("</urlset>\n");
    xml
}

fn write_entry(xml: &mut String, entry: &SitemapEntry) {
    xml.push_str("  <url>\n    <loc>");
    xml.push_str(&escape_xml(&entry.loc));
    xml.push_str("</loc>\n");

    // Alternate set of size one means no translation siblings to cross-link
    if entry.alternates.len() > 1 {
        for (lang, href) in &entry.alternates {
            xml.push_str("    <xhtml:link rel=\"alternate\" hreflang=\"");
            xml.push_str(&escape_xml(lang.as_str()));
            xml.push_str("\" href=\"");
            xml.push_str(&escape_xml(href));
            xml.push_str("\"/>\n");
        }
    }

    if let Some(lastmod) = &entry.lastmod {
        xml.push_str("    <lastmod>");
        xml.push_str(&escape_xml(lastmod));
        xml.push_str("</lastmod>\n");
    }
    if let Some(changefreq) = entry.changefreq {
        xml.push_str("    <changefreq>");
        xml.push_str(changefreq.as_str());
        xml.push_str("</changefreq>\n");
    }
    if let Some(priority) = entry.priority {
        xml.push_str("    <priority>");
        xml.push_str(&priority.to_string());
        xml.push_str("</priority>\n");
    }

    for image in &entry.images {
        xml.push_str("    <image:image>\n      <image:loc>");
        xml.push_str(&escape_xml(image));
        xml.push_str("</image:loc>\n    </image:image>\n");
    }

    xml.push_str("  </url>\n");
}

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
