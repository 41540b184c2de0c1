//! Integration tests for the serving endpoint.
//!
//! Drives the router over a real output tree: index fallback, byte-exact
//! file serving, the fixed 404 response, and availability across failed
//! rebuilds.

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use kiln::build::{BuildOrchestrator, OutputDir};
use kiln::compiler::{CompileError, Compiler, CompileRequest};
use kiln::config::KilnConfig;
use kiln::dev::server::router;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

fn server_over(out_dir: &Path) -> TestServer {
    TestServer::new(router(out_dir.to_path_buf())).expect("Failed to create test server")
}

#[tokio::test]
async fn test_root_resolves_to_index_document() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("index.html"), "<html>kiln</html>").unwrap();

    let server = server_over(temp.path());
    let response = server.get("/").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "<html>kiln</html>");
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
}

#[tokio::test]
async fn test_nested_file_served_byte_exact() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("styles")).unwrap();
    let content = "body { margin: 0; }\n/* exact bytes */";
    fs::write(temp.path().join("styles/app.css"), content).unwrap();

    let server = server_over(temp.path());
    let response = server.get("/styles/app.css").await;

    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), content.as_bytes());
    assert_eq!(response.header("content-type"), "text/css");
}

#[tokio::test]
async fn test_missing_file_gets_fixed_not_found_body() {
    let temp = TempDir::new().unwrap();

    let server = server_over(temp.path());
    let response = server.get("/missing.js").await;

    response.assert_status_not_found();
    let body = response.text();
    assert!(!body.is_empty());
    assert_eq!(body, "404 Not Found");
}

#[tokio::test]
async fn test_directory_without_index_is_a_miss() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("styles")).unwrap();

    let server = server_over(temp.path());
    // Trailing slash resolves to styles/index.html, which doesn't exist
    server.get("/styles/").await.assert_status_not_found();
    // A bare directory path is not a regular file
    server.get("/styles").await.assert_status_not_found();
}

#[tokio::test]
async fn test_traversal_paths_are_misses() {
    let temp = TempDir::new().unwrap();
    let secret = temp.path().join("secret.txt");
    fs::write(&secret, "do not serve").unwrap();
    let out = temp.path().join("dist");
    fs::create_dir(&out).unwrap();

    let server = server_over(&out);
    let response = server.get("/../secret.txt").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

/// Compiler stub used to drive the output tree through rebuild cycles.
struct ScriptedCompiler {
    fail: Arc<AtomicBool>,
    payload: &'static str,
}

#[async_trait]
impl Compiler for ScriptedCompiler {
    async fn compile(&self, request: &CompileRequest) -> Result<(), CompileError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(CompileError::Failed {
                detail: "forced failure".to_string(),
            });
        }
        fs::create_dir_all(&request.out_dir).unwrap();
        for entry in &request.entrypoints {
            let name = entry.file_stem().unwrap().to_string_lossy();
            fs::write(request.out_dir.join(format!("{name}.js")), self.payload).unwrap();
        }
        Ok(())
    }
}

#[tokio::test]
async fn test_endpoint_keeps_serving_after_failed_rebuild() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src/core")).unwrap();
    fs::create_dir_all(temp.path().join("src/components/button")).unwrap();
    fs::write(temp.path().join("src/core/index.ts"), "export {};").unwrap();
    fs::write(temp.path().join("src/components/button/index.ts"), "export {};").unwrap();
    fs::write(temp.path().join("src/index.html"), "<html></html>").unwrap();

    let config = KilnConfig::default_config();
    let output = OutputDir::new(&config.out_dir, temp.path()).unwrap();
    output.reset().unwrap();

    let fail = Arc::new(AtomicBool::new(false));
    let compiler = ScriptedCompiler {
        fail: fail.clone(),
        payload: "export const generation = 1;",
    };
    let orchestrator = BuildOrchestrator::from_config(&config, temp.path(), compiler);
    orchestrator.build_all().await.unwrap();

    let server = server_over(output.path());
    let response = server.get("/index.js").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "export const generation = 1;");

    // The next build fails; the endpoint is a read-only view over whatever
    // the tree still holds
    fail.store(true, Ordering::SeqCst);
    assert!(orchestrator.build_all().await.is_err());

    let response = server.get("/index.js").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "export const generation = 1;");
    server.get("/index.html").await.assert_status_ok();
}
