//! Full-build orchestration.
//!
//! One `build_all` pass runs three strictly ordered steps: discover the
//! entrypoints, hand them to the compile capability, and on success mirror
//! the static assets. A compile failure fails the whole pass (no partial
//! bundle set is valid) and skips the mirror step; the output tree keeps
//! whatever it held before the attempt.

use crate::build::{entrypoints, AssetMirror, MirrorRoot};
use crate::compiler::{CompileRequest, Compiler, Target};
use crate::config::KilnConfig;
use crate::error::BuildError;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Outcome of one successful build pass.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Number of entrypoints handed to the compiler
    pub entrypoints: usize,
    /// Wall-clock duration of the whole pass
    pub duration: Duration,
}

/// Drives the compile capability and the asset mirror for full builds.
///
/// Holds resolved paths so every pass is self-contained; the entrypoint
/// list is rediscovered per pass.
pub struct BuildOrchestrator<C> {
    compiler: C,
    core_entry: PathBuf,
    components_dir: PathBuf,
    component_entry: String,
    out_dir: PathBuf,
    minify: bool,
    mirror: AssetMirror,
}

impl<C: Compiler> BuildOrchestrator<C> {
    /// Build an orchestrator from configuration, resolving all paths
    /// against the working directory.
    pub fn from_config(config: &KilnConfig, cwd: &Path, compiler: C) -> Self {
        let out_dir = resolve(&config.out_dir, cwd);

        let mut roots = vec![MirrorRoot::File {
            src: resolve(&config.markup_entry, cwd),
            dest: out_dir.join(
                config
                    .markup_entry
                    .file_name()
                    .unwrap_or_else(|| "index.html".as_ref()),
            ),
        }];
        for dir in &config.asset_dirs {
            let dest_name = dir.file_name().unwrap_or_else(|| "assets".as_ref());
            roots.push(MirrorRoot::Tree {
                src: resolve(dir, cwd),
                dest: out_dir.join(dest_name),
            });
        }

        Self {
            compiler,
            core_entry: resolve(&config.core_entry, cwd),
            components_dir: resolve(&config.components_dir, cwd),
            component_entry: config.component_entry.clone(),
            out_dir,
            minify: config.production,
            mirror: AssetMirror::new(roots),
        }
    }

    /// Run one full build pass.
    ///
    /// Safe to call repeatedly; callers that may overlap must serialize
    /// passes through the rebuild gate so at most one is in flight.
    pub async fn build_all(&self) -> Result<BuildReport, BuildError> {
        let start = Instant::now();

        let entrypoints = entrypoints::discover(
            &self.core_entry,
            &self.components_dir,
            &self.component_entry,
        )
        .await?;

        tracing::debug!(entries = entrypoints.len(), "discovered entrypoints");

        let request = CompileRequest {
            entrypoints,
            out_dir: self.out_dir.clone(),
            target: Target::Browser,
            minify: self.minify,
        };
        self.compiler.compile(&request).await?;

        self.mirror.mirror().await?;

        let report = BuildReport {
            entrypoints: request.entrypoints.len(),
            duration: start.elapsed(),
        };
        tracing::info!(
            entries = report.entrypoints,
            elapsed_ms = report.duration.as_millis() as u64,
            "build complete"
        );

        Ok(report)
    }
}

fn resolve(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::CompileError;
    use async_trait::async_trait;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    struct RecordingCompiler {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl Compiler for RecordingCompiler {
        async fn compile(&self, request: &CompileRequest) -> Result<(), CompileError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(CompileError::Failed {
                    detail: "forced failure".to_string(),
                });
            }
            // Emit one bundle per entrypoint, the way a real bundler would.
            fs::create_dir_all(&request.out_dir).unwrap();
            for entry in &request.entrypoints {
                let name = entry.file_stem().unwrap().to_string_lossy();
                fs::write(request.out_dir.join(format!("{name}.js")), "export {};").unwrap();
            }
            Ok(())
        }
    }

    fn project(temp: &TempDir) -> KilnConfig {
        fs::create_dir_all(temp.path().join("src/core")).unwrap();
        fs::create_dir_all(temp.path().join("src/components/button")).unwrap();
        fs::create_dir_all(temp.path().join("src/styles")).unwrap();
        fs::write(temp.path().join("src/core/index.ts"), "export {};").unwrap();
        fs::write(temp.path().join("src/components/button/index.ts"), "export {};").unwrap();
        fs::write(temp.path().join("src/index.html"), "<html></html>").unwrap();
        fs::write(temp.path().join("src/styles/app.css"), "body {}").unwrap();
        KilnConfig::default_config()
    }

    #[tokio::test]
    async fn test_build_all_compiles_then_mirrors() {
        let temp = TempDir::new().unwrap();
        let config = project(&temp);
        let calls = Arc::new(AtomicUsize::new(0));
        let orchestrator = BuildOrchestrator::from_config(
            &config,
            temp.path(),
            RecordingCompiler {
                calls: calls.clone(),
                fail: false,
            },
        );

        let report = orchestrator.build_all().await.unwrap();

        assert_eq!(report.entrypoints, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let out = temp.path().join("dist");
        assert!(out.join("index.js").is_file());
        assert!(out.join("index.html").is_file());
        assert!(out.join("styles/app.css").is_file());
        // Missing images directory was skipped
        assert!(!out.join("images").exists());
    }

    #[tokio::test]
    async fn test_failed_compile_skips_mirror() {
        let temp = TempDir::new().unwrap();
        let config = project(&temp);
        let orchestrator = BuildOrchestrator::from_config(
            &config,
            temp.path(),
            RecordingCompiler {
                calls: Arc::new(AtomicUsize::new(0)),
                fail: true,
            },
        );

        let err = orchestrator.build_all().await.unwrap_err();
        assert!(matches!(err, BuildError::Compile(_)));

        // Nothing was mirrored after the failed compile
        assert!(!temp.path().join("dist/index.html").exists());
    }
}
