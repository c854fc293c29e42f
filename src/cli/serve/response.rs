//! HTTP response handlers.

use anyhow::Result;
use tiny_http::{Header, Method, Request, Response, StatusCode};

const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// Crawler directive for sitemap chunks and index documents: the XML
/// resource itself must not be indexed, but its links may be followed.
const ROBOTS_SITEMAP: &str = "noindex, follow";

/// Crawler directive for the stylesheet: neither indexed nor followed.
const ROBOTS_STYLESHEET: &str = "noindex, nofollow";

/// Respond with a sitemap chunk or index document.
pub fn respond_sitemap(request: Request, body: Vec<u8>) -> Result<()> {
    respond_xml(request, body, ROBOTS_SITEMAP)
}

/// Respond with the XSL stylesheet.
pub fn respond_stylesheet(request: Request, body: Vec<u8>) -> Result<()> {
    respond_xml(request, body, ROBOTS_STYLESHEET)
}

fn respond_xml(request: Request, body: Vec<u8>, robots: &'static str) -> Result<()> {
    if is_head_request(&request) {
        let response = Response::empty(StatusCode(200))
            .with_header(make_header("Content-Type", XML_CONTENT_TYPE))
            .with_header(make_header("X-Robots-Tag", robots));
        request.respond(response)?;
        return Ok(());
    }

    let response = Response::from_data(body)
        .with_status_code(StatusCode(200))
        .with_header(make_header("Content-Type", XML_CONTENT_TYPE))
        .with_header(make_header("X-Robots-Tag", robots));
    request.respond(response)?;
    Ok(())
}

/// Respond with a bodyless 404.
///
/// An unknown variant or out-of-range page is never answered with a
/// generated-but-empty chunk.
pub fn respond_not_found(request: Request) -> Result<()> {
    request.respond(Response::empty(StatusCode(404)))?;
    Ok(())
}

/// Respond with a 500 without leaking internal detail into the body.
pub fn respond_server_error(request: Request) -> Result<()> {
    request.respond(Response::empty(StatusCode(500)))?;
    Ok(())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    request.respond(Response::empty(StatusCode(503)))?;
    Ok(())
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}
