//! Shared utilities for command implementations.

use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};

/// Resolve the working directory.
///
/// An explicit directory (from `--cwd` or config) is validated; otherwise
/// the process working directory is used.
///
/// # Errors
///
/// Returns `InvalidArgument` when the explicit directory doesn't exist or
/// isn't a directory.
pub fn resolve_working_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        let absolute = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            std::env::current_dir().map_err(CliError::Io)?.join(dir)
        };

        if !absolute.exists() {
            return Err(CliError::InvalidArgument(format!(
                "Specified working directory does not exist: {}",
                absolute.display()
            )));
        }
        if !absolute.is_dir() {
            return Err(CliError::InvalidArgument(format!(
                "Specified working directory is not a directory: {}",
                absolute.display()
            )));
        }

        return Ok(absolute);
    }

    std::env::current_dir().map_err(CliError::Io)
}
