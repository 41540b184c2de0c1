//! External-process bundler implementation.
//!
//! Drives a bundler executable with an esbuild-style CLI contract. The
//! program name comes from configuration, so any drop-in compatible bundler
//! works.

use super::{CompileError, Compiler, CompileRequest};
use async_trait::async_trait;
use tokio::process::Command;

/// Compiler that shells out to an esbuild-compatible bundler.
pub struct EsbuildCompiler {
    /// Program name or path of the bundler executable
    program: String,
}

impl EsbuildCompiler {
    /// Create a compiler around the given bundler program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Assemble the bundler command line for a request.
    fn arguments(request: &CompileRequest) -> Vec<String> {
        let mut args: Vec<String> = request
            .entrypoints
            .iter()
            .map(|p| p.display().to_string())
            .collect();

        args.push("--bundle".to_string());
        args.push(format!("--outdir={}", request.out_dir.display()));
        args.push(format!("--platform={}", request.target.as_flag()));
        args.push("--format=esm".to_string());
        args.push("--log-level=warning".to_string());

        if request.minify {
            args.push("--minify".to_string());
        }

        args
    }
}

#[async_trait]
impl Compiler for EsbuildCompiler {
    async fn compile(&self, request: &CompileRequest) -> Result<(), CompileError> {
        let args = Self::arguments(request);

        tracing::debug!(
            program = %self.program,
            entries = request.entrypoints.len(),
            minify = request.minify,
            "invoking bundler"
        );

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .await
            .map_err(|source| CompileError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if stderr.is_empty() {
                format!("exit status {}", output.status)
            } else {
                stderr
            };
            return Err(CompileError::Failed { detail });
        }

        Ok(())
    }
}
