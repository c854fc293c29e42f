//! Embedded static assets.
//!
//! The XSL stylesheet is compiled into the binary and carries `[token]`
//! placeholders substituted at render time, so labels stay in one place
//! and could later come from a translation source.

/// XSL stylesheet template for sitemap chunks and index documents.
const SITEMAP_XSL: &str = include_str!("../assets/sitemap.xsl");

/// Label substitutions applied to the stylesheet template.
const XSL_LABELS: &[(&str, &str)] = &[
    ("[title]", "Sitemap file"),
    ("[number-of-sitemaps]", "Number of sitemaps in this index"),
    ("[sitemap-url]", "Sitemap URL"),
    ("[number-of-urls]", "Number of URLs in this sitemap"),
    ("[url-location]", "URL location"),
    ("[lastmod]", "Last modification date"),
    ("[changefreq]", "Change frequency"),
    ("[priority]", "Priority"),
    ("[translation-set]", "Translation set"),
    ("[images]", "Images"),
];

/// Render the stylesheet with all tokens substituted.
pub fn render_stylesheet() -> String {
    let mut xsl = SITEMAP_XSL.to_string();
    for (token, label) in XSL_LABELS {
        xsl = xsl.replace(token, label);
    }
    xsl
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stylesheet_substitutes_all_tokens() {
        let xsl = render_stylesheet();
        for (token, label) in XSL_LABELS {
            assert!(!xsl.contains(token), "unsubstituted token {token}");
            assert!(xsl.contains(label));
        }
    }

    #[test]
    fn test_render_stylesheet_is_stable() {
        assert_eq!(render_stylesheet(), render_stylesheet());
    }
}
