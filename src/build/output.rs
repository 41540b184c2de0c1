//! Output directory lifecycle.
//!
//! The output tree is fully owned by this process: it is removed and
//! recreated once at startup, then overwritten in place by subsequent
//! builds. `reset` is never called again during the process lifetime.

use crate::error::{BuildError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Handle on the build output location.
#[derive(Debug, Clone)]
pub struct OutputDir {
    path: PathBuf,
}

impl OutputDir {
    /// Resolve and validate the output location against the working
    /// directory.
    ///
    /// The directory must live inside the working directory (or be a
    /// sibling of it); system locations are refused outright.
    ///
    /// # Errors
    ///
    /// Returns `OutputNotWritable` if the location is unsafe.
    pub fn new(out_dir: &Path, cwd: &Path) -> Result<Self, BuildError> {
        let path = if out_dir.is_absolute() {
            out_dir.to_path_buf()
        } else {
            cwd.join(out_dir)
        };

        validate_placement(&path, cwd)?;

        Ok(Self { path })
    }

    /// The resolved output path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the output directory and everything in it, then recreate it
    /// empty.
    ///
    /// Called exactly once, before the first build. A failure here is a
    /// fatal startup error; the process must not proceed to build or serve.
    ///
    /// # Errors
    ///
    /// Returns `OutputReset` when removal or creation fails, and
    /// `OutputNotWritable` when the path exists but is not a directory.
    pub fn reset(&self) -> Result<(), BuildError> {
        if self.path.exists() {
            if !self.path.is_dir() {
                return Err(BuildError::OutputNotWritable(self.path.clone()));
            }
            fs::remove_dir_all(&self.path).map_err(|source| BuildError::OutputReset {
                path: self.path.clone(),
                source,
            })?;
        }

        fs::create_dir_all(&self.path).map_err(|source| BuildError::OutputReset {
            path: self.path.clone(),
            source,
        })
    }
}

/// Refuse output locations that could corrupt the system or escape the
/// project tree.
fn validate_placement(path: &Path, cwd: &Path) -> Result<(), BuildError> {
    const DANGEROUS_PATHS: &[&str] = &[
        "/bin", "/boot", "/dev", "/etc", "/lib", "/lib64", "/proc", "/root", "/sbin", "/sys",
        "/usr/bin", "/usr/lib", "/usr/sbin", "/var/log",
    ];

    let path_str = path.to_string_lossy();
    if path_str == "/" {
        return Err(BuildError::OutputNotWritable(path.to_path_buf()));
    }
    for dangerous in DANGEROUS_PATHS {
        if path_str.starts_with(dangerous) {
            return Err(BuildError::OutputNotWritable(path.to_path_buf()));
        }
    }

    let is_within_project = path.starts_with(cwd);
    let is_sibling = path
        .parent()
        .and_then(|p| cwd.parent().map(|c| p == c))
        .unwrap_or(false);

    if !is_within_project && !is_sibling {
        return Err(BuildError::OutputNotWritable(path.to_path_buf()));
    }

    Ok(())
}
