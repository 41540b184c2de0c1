//! Default values for configuration fields.

use std::path::PathBuf;

pub(crate) fn port() -> u16 {
    3000
}

pub(crate) fn source_root() -> PathBuf {
    PathBuf::from("src")
}

pub(crate) fn core_entry() -> PathBuf {
    PathBuf::from("src/core/index.ts")
}

pub(crate) fn components_dir() -> PathBuf {
    PathBuf::from("src/components")
}

pub(crate) fn component_entry() -> String {
    "index.ts".to_string()
}

pub(crate) fn markup_entry() -> PathBuf {
    PathBuf::from("src/index.html")
}

pub(crate) fn asset_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("src/styles"), PathBuf::from("src/images")]
}

pub(crate) fn out_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn watch_extensions() -> Vec<String> {
    vec!["ts".to_string(), "html".to_string(), "css".to_string()]
}

pub(crate) fn bundler() -> String {
    "esbuild".to_string()
}
