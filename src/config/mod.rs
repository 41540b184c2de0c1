//! Configuration system for kiln with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and an optional
//! `kiln.config.json`. Priority: CLI > Environment > File > Defaults.
//!
//! The merged [`KilnConfig`] is computed once at process entry and passed
//! explicitly to every component; nothing reads configuration ambiently
//! after startup.

mod defaults;
mod loading;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// kiln configuration - loaded from kiln.config.json, environment, and CLI.
///
/// Field names map directly onto `kiln.config.json` keys and `KILN_*`
/// environment variables (e.g. `out_dir` / `KILN_OUT_DIR`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KilnConfig {
    /// Production mode: minified bundles, file watching disabled
    #[serde(default)]
    pub production: bool,

    /// Port for the HTTP serving endpoint
    #[serde(default = "defaults::port")]
    pub port: u16,

    /// Root of the source tree watched for changes
    #[serde(default = "defaults::source_root")]
    pub source_root: PathBuf,

    /// Core entry module, always compiled first
    #[serde(default = "defaults::core_entry")]
    pub core_entry: PathBuf,

    /// Directory whose immediate subdirectories are components
    #[serde(default = "defaults::components_dir")]
    pub components_dir: PathBuf,

    /// Entry module file name inside each component directory
    #[serde(default = "defaults::component_entry")]
    pub component_entry: String,

    /// Markup entry file mirrored into the output tree root
    #[serde(default = "defaults::markup_entry")]
    pub markup_entry: PathBuf,

    /// Asset directories mirrored into the output tree; missing ones are
    /// skipped silently
    #[serde(default = "defaults::asset_dirs")]
    pub asset_dirs: Vec<PathBuf>,

    /// Output directory, fully owned and rewritten by kiln
    #[serde(default = "defaults::out_dir")]
    pub out_dir: PathBuf,

    /// File extensions (without dot) that trigger a rebuild when changed
    #[serde(default = "defaults::watch_extensions")]
    pub watch_extensions: Vec<String>,

    /// Bundler program driven by the compile step
    #[serde(default = "defaults::bundler")]
    pub bundler: String,

    /// Working directory; defaults to the process working directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
}
