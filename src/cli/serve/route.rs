//! Request routing for the sitemap HTTP surface.

/// Parsed request route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// A sitemap chunk or index request.
    Sitemap {
        /// `None` means the configured default variant.
        variant: Option<String>,
        /// `None` or `Some(0)` means "index or only chunk".
        page: Option<usize>,
    },
    /// The XSL stylesheet.
    Stylesheet,
    Unknown,
}

/// Parse a raw request URL (`/sitemap/news.xml?page=2`).
pub fn parse(url: &str) -> Route {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    };

    match path {
        "/sitemap.xsl" => Route::Stylesheet,
        "/sitemap.xml" => Route::Sitemap {
            variant: None,
            page: parse_page(query),
        },
        _ => match path
            .strip_prefix("/sitemap/")
            .and_then(|rest| rest.strip_suffix(".xml"))
        {
            Some(variant) if !variant.is_empty() && !variant.contains('/') => Route::Sitemap {
                variant: Some(variant.to_string()),
                page: parse_page(query),
            },
            _ => Route::Unknown,
        },
    }
}

/// Extract the `page` query parameter.
///
/// A non-numeric value degrades to 0 ("index or only chunk") rather than
/// failing the request.
fn parse_page(query: Option<&str>) -> Option<usize> {
    let query = query?;
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == "page" {
            return Some(value.parse().unwrap_or(0));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_sitemap() {
        assert_eq!(
            parse("/sitemap.xml"),
            Route::Sitemap {
                variant: None,
                page: None
            }
        );
    }

    #[test]
    fn test_parse_page_parameter() {
        assert_eq!(
            parse("/sitemap.xml?page=3"),
            Route::Sitemap {
                variant: None,
                page: Some(3)
            }
        );
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!(
            parse("/sitemap/news.xml?page=1"),
            Route::Sitemap {
                variant: Some("news".to_string()),
                page: Some(1)
            }
        );
    }

    #[test]
    fn test_parse_stylesheet() {
        assert_eq!(parse("/sitemap.xsl"), Route::Stylesheet);
    }

    #[test]
    fn test_parse_non_numeric_page_degrades_to_zero() {
        assert_eq!(
            parse("/sitemap.xml?page=abc"),
            Route::Sitemap {
                variant: None,
                page: Some(0)
            }
        );
    }

    #[test]
    fn test_parse_unknown_routes() {
        assert_eq!(parse("/"), Route::Unknown);
        assert_eq!(parse("/sitemap/"), Route::Unknown);
        assert_eq!(parse("/sitemap/a/b.xml"), Route::Unknown);
        assert_eq!(parse("/robots.txt"), Route::Unknown);
    }

    #[test]
    fn test_parse_extra_query_parameters() {
        assert_eq!(
            parse("/sitemap.xml?utm=1&page=2"),
            Route::Sitemap {
                variant: None,
                page: Some(2)
            }
        );
    }
}
