//! Static HTTP endpoint over the output tree.
//!
//! Every request resolves against the output directory as it exists on
//! disk at that moment; nothing is cached, so requests arriving during a
//! rebuild may observe a transiently inconsistent tree. The endpoint never
//! triggers a build.

use crate::error::{CliError, Result};
use crate::ui;
use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use tokio::fs::File;
use tokio_util::io::ReaderStream;
use tower_http::cors::{Any, CorsLayer};

/// Single-listener file server over the output directory.
pub struct StaticServer {
    addr: SocketAddr,
    out_dir: PathBuf,
}

impl StaticServer {
    /// Create a server for the given address and output directory.
    pub fn new(addr: SocketAddr, out_dir: PathBuf) -> Self {
        Self { addr, out_dir }
    }

    /// Bind the listener without entering the request loop.
    ///
    /// Binding is separate from serving so a bind failure stays a fatal
    /// startup error in the caller, while the request loop runs as a
    /// background task.
    ///
    /// # Errors
    ///
    /// Returns a `Server` error when the address cannot be bound.
    pub async fn bind(self) -> Result<BoundServer> {
        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .map_err(|e| CliError::Server(format!("failed to bind {}: {}", self.addr, e)))?;

        let addr = listener
            .local_addr()
            .map_err(|e| CliError::Server(format!("failed to read local address: {}", e)))?;

        Ok(BoundServer {
            listener,
            addr,
            out_dir: self.out_dir,
        })
    }
}

/// Bound listener ready to accept requests.
pub struct BoundServer {
    listener: tokio::net::TcpListener,
    addr: SocketAddr,
    out_dir: PathBuf,
}

impl BoundServer {
    /// The bound address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Run the request loop until the process shuts down.
    pub async fn serve(self) -> Result<()> {
        ui::success(&format!("serving at http://{}", self.addr));

        axum::serve(self.listener, router(self.out_dir))
            .await
            .map_err(|e| CliError::Server(format!("server error: {}", e)))?;

        Ok(())
    }
}

/// Build the router: every route is a read-only view over the output tree.
///
/// CORS is wide open; this is a development listener.
pub fn router(out_dir: PathBuf) -> Router {
    Router::new()
        .fallback(serve_file)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(out_dir)
}

/// Resolve a request path to a candidate file inside the output tree.
///
/// A path ending in a separator resolves to that directory's index
/// document. Paths that would escape the output tree resolve to nothing.
pub(crate) fn resolve(out_dir: &Path, url_path: &str) -> Option<PathBuf> {
    let mut candidate = out_dir.to_path_buf();

    let relative = url_path.trim_start_matches('/');
    if !relative.is_empty() {
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => candidate.push(part),
                Component::CurDir => {}
                _ => return None,
            }
        }
    }

    if url_path.ends_with('/') {
        candidate.push("index.html");
    }

    Some(candidate)
}

/// Serve one request from the output tree, streaming the file body.
async fn serve_file(State(out_dir): State<PathBuf>, uri: Uri) -> Response {
    let Some(candidate) = resolve(&out_dir, uri.path()) else {
        return not_found();
    };

    let file = match File::open(&candidate).await {
        Ok(file) => file,
        Err(_) => return not_found(),
    };

    // Opening a directory can succeed; only regular files are served
    match file.metadata().await {
        Ok(meta) if meta.is_file() => {}
        _ => return not_found(),
    }

    let stream = ReaderStream::new(file);
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type(&candidate))
        .body(Body::from_stream(stream))
        .unwrap()
}

/// The fixed miss response: plain text, non-empty body.
fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain")],
        "404 Not Found",
    )
        .into_response()
}

/// Infer a content type from the file extension.
fn content_type(path: &Path) -> &'static str {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    match extension {
        "js" | "mjs" => "application/javascript",
        "map" | "json" => "application/json",
        "html" => "text/html; charset=utf-8",
        "css" => "text/css",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "wasm" => "application/wasm",
        _ => "application/octet-stream",
    }
}
