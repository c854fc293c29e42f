//! Sitemap HTTP server.
//!
//! Serves previously generated chunks; every lookup is a pure, stateless
//! read so requests are handled concurrently without locks.

mod response;
mod route;

use crate::{
    config::SitemapConfig,
    core::{is_shutdown, register_server},
    debug,
    embed::render_stylesheet,
    generator::{ChunkServer, ChunkStore},
    log,
};
use anyhow::Result;
use crossbeam::channel;
use route::Route;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Maximum number of port binding attempts.
const MAX_PORT_RETRIES: u16 = 10;

pub fn run(config: &SitemapConfig) -> Result<()> {
    let store = ChunkStore::new(config.output_dir());
    if store.read_manifest(&config.serve.default_variant)?.is_none() {
        log!(
            "serve";
            "no generated sitemap for variant `{}` - run `sitemapper generate` first",
            config.serve.default_variant
        );
    }

    let chunk_server = Arc::new(ChunkServer::new(store, &config.serve.default_variant));
    // Stylesheet output is static between restarts: render once
    let stylesheet = Arc::new(render_stylesheet().into_bytes());

    let (server, addr) = bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);

    let (shutdown_tx, _shutdown_rx) = channel::unbounded::<()>();
    register_server(Arc::clone(&server), shutdown_tx);

    log!("serve"; "http://{}", addr);

    run_request_loop(&server, chunk_server, stylesheet);
    Ok(())
}

/// Bind to the specified interface and port, with automatic port retry.
fn bind_with_retry(interface: IpAddr, base_port: u16) -> Result<(Server, SocketAddr)> {
    for offset in 0..MAX_PORT_RETRIES {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(_) if offset + 1 < MAX_PORT_RETRIES => continue,
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to bind after {} attempts (ports {}-{}): {}",
                    MAX_PORT_RETRIES,
                    base_port,
                    port,
                    e
                ));
            }
        }
    }
    unreachable!()
}

fn run_request_loop(server: &Server, chunk_server: Arc<ChunkServer>, stylesheet: Arc<Vec<u8>>) {
    // Thread pool so slow clients cannot block other requests
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .expect("failed to create thread pool");

    for request in server.incoming_requests() {
        let chunk_server = Arc::clone(&chunk_server);
        let stylesheet = Arc::clone(&stylesheet);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &chunk_server, &stylesheet) {
                log!("serve"; "request error: {e}");
            }
        });
    }
}

/// Handle a single HTTP request
fn handle_request(
    request: Request,
    chunk_server: &ChunkServer,
    stylesheet: &Arc<Vec<u8>>,
) -> Result<()> {
    // Early exit if shutdown requested
    if is_shutdown() {
        return response::respond_unavailable(request);
    }

    debug!("serve"; "{} {}", request.method(), request.url());

    match route::parse(request.url()) {
        Route::Stylesheet => response::respond_stylesheet(request, stylesheet.to_vec()),
        Route::Sitemap { variant, page } => {
            match chunk_server.serve(variant.as_deref(), page) {
                Ok(Some(payload)) => response::respond_sitemap(request, payload.into_bytes()),
                Ok(None) => response::respond_not_found(request),
                Err(e) => {
                    log!("serve"; "chunk storage read failed: {e}");
                    response::respond_server_error(request)
                }
            }
        }
        Route::Unknown => response::respond_not_found(request),
    }
}
