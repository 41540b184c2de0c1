//! Configuration validation.
//!
//! Runs once at command start, before any filesystem mutation.

use crate::config::KilnConfig;
use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

impl KilnConfig {
    /// Validate configuration for logical consistency against a working
    /// directory.
    pub fn validate(&self, cwd: &Path) -> Result<()> {
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port".to_string(),
                value: "0".to_string(),
                hint: "Use a nonzero port".to_string(),
            }
            .into());
        }

        if self.watch_extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "watch_extensions".to_string(),
                value: "[]".to_string(),
                hint: "Provide at least one extension, e.g. [\"ts\", \"html\", \"css\"]"
                    .to_string(),
            }
            .into());
        }

        let source_root = resolve(&self.source_root, cwd);
        if !source_root.is_dir() {
            return Err(ConfigError::InvalidValue {
                field: "source_root".to_string(),
                value: self.source_root.display().to_string(),
                hint: format!("Source directory does not exist: {}", source_root.display()),
            }
            .into());
        }

        let core_entry = resolve(&self.core_entry, cwd);
        if !core_entry.is_file() {
            return Err(ConfigError::InvalidValue {
                field: "core_entry".to_string(),
                value: self.core_entry.display().to_string(),
                hint: format!("Core entry module does not exist: {}", core_entry.display()),
            }
            .into());
        }

        let components_dir = resolve(&self.components_dir, cwd);
        if !components_dir.is_dir() {
            return Err(ConfigError::InvalidValue {
                field: "components_dir".to_string(),
                value: self.components_dir.display().to_string(),
                hint: format!(
                    "Components directory does not exist: {}",
                    components_dir.display()
                ),
            }
            .into());
        }

        Ok(())
    }
}

fn resolve(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
