//! The compile capability behind the build pipeline.
//!
//! Bundling and transpilation are not implemented in this crate. The
//! pipeline talks to an opaque [`Compiler`] that turns a set of entry
//! modules into browser-runnable bundles inside the output directory. The
//! production implementation ([`EsbuildCompiler`]) drives an external
//! bundler executable; tests substitute instrumented implementations.

mod esbuild;

pub use esbuild::EsbuildCompiler;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Target environment for emitted bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Browser,
}

impl Target {
    /// The tag passed to the bundler's platform flag.
    pub fn as_flag(&self) -> &'static str {
        match self {
            Target::Browser => "browser",
        }
    }
}

/// A single compile invocation.
///
/// The entrypoint list is rediscovered for every build; requests are not
/// reused across builds.
#[derive(Debug, Clone)]
pub struct CompileRequest {
    /// Entry modules, core entry first
    pub entrypoints: Vec<PathBuf>,
    /// Directory receiving the emitted bundles
    pub out_dir: PathBuf,
    /// Target environment tag
    pub target: Target,
    /// Minify emitted bundles
    pub minify: bool,
}

/// Errors reported by the compile capability.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The bundler executable could not be started
    #[error("Bundler '{program}' could not be started: {source}\n\nHint: Install it or point the 'bundler' config field at a different program")]
    Launch {
        /// The configured bundler program
        program: String,
        source: std::io::Error,
    },

    /// The bundler ran and reported entrypoint failures
    #[error("Bundler reported errors:\n{detail}")]
    Failed {
        /// Bundler diagnostics (stderr tail or exit status)
        detail: String,
    },
}

/// Opaque compile capability: entrypoints in, bundles in the output tree out.
///
/// Implementations must treat any entrypoint failure as failure of the whole
/// invocation; no partial bundle set is reported as success.
#[async_trait]
pub trait Compiler: Send + Sync {
    async fn compile(&self, request: &CompileRequest) -> Result<(), CompileError>;
}
