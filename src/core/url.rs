//! URL building and base-URL rewriting.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::borrow::Cow;

/// Characters percent-encoded in URL paths (controls plus the characters
/// that are unsafe inside a path component).
const PATH_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// Percent-encode a URL path, leaving `/` separators intact.
pub fn encode_path(path: &str) -> Cow<'_, str> {
    utf8_percent_encode(path, PATH_SET).into()
}

/// Rewrites the canonical site base URL to a configured override.
///
/// Every URL string emitted into a sitemap (primary location, alternates,
/// image locations) passes through [`BaseUrlRewriter::rewrite`] so the
/// published sitemap never contains the unrewritten canonical base.
#[derive(Debug, Clone)]
pub struct BaseUrlRewriter {
    base: String,
    override_base: Option<String>,
}

impl BaseUrlRewriter {
    /// Both URLs are stored without a trailing slash so prefix replacement
    /// is exact.
    pub fn new(base: &str, override_base: Option<&str>) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            override_base: override_base.map(|url| url.trim_end_matches('/').to_string()),
        }
    }

    /// Canonical base URL (after trailing-slash normalization).
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The base served sitemap URLs should be built against.
    pub fn public_base(&self) -> &str {
        self.override_base.as_deref().unwrap_or(&self.base)
    }

    /// Build an absolute URL for a site-internal path.
    pub fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.base, encode_path(path))
    }

    /// Replace the canonical base prefix with the override, if configured.
    pub fn rewrite(&self, url: &str) -> String {
        match &self.override_base {
            Some(override_base) => match url.strip_prefix(self.base.as_str()) {
                Some(rest) => format!("{override_base}{rest}"),
                None => url.to_string(),
            },
            None => url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_path() {
        assert_eq!(encode_path("/about"), "/about");
        assert_eq!(encode_path("/a b"), "/a%20b");
        assert_eq!(encode_path("/café"), "/caf%C3%A9");
    }

    #[test]
    fn test_rewrite_with_override() {
        let rewriter = BaseUrlRewriter::new("https://internal.example.com/", Some("https://www.example.com"));
        assert_eq!(
            rewriter.rewrite("https://internal.example.com/about"),
            "https://www.example.com/about"
        );
        // Foreign URLs pass through untouched
        assert_eq!(
            rewriter.rewrite("https://other.example.org/x"),
            "https://other.example.org/x"
        );
    }

    #[test]
    fn test_rewrite_without_override() {
        let rewriter = BaseUrlRewriter::new("https://example.com", None);
        assert_eq!(
            rewriter.rewrite("https://example.com/about"),
            "https://example.com/about"
        );
        assert_eq!(rewriter.public_base(), "https://example.com");
    }

    #[test]
    fn test_absolute() {
        let rewriter = BaseUrlRewriter::new("https://example.com", None);
        assert_eq!(rewriter.absolute("/fr/à-propos"), "https://example.com/fr/%C3%A0-propos");
    }
}
