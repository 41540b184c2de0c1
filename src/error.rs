//! Error handling for the kiln CLI.
//!
//! This module provides a hierarchical error type system using `thiserror` for
//! structured error handling with actionable messages.
//!
//! # Architecture
//!
//! - **Top-level errors** (`CliError`) represent broad categories of failures
//! - **Domain-specific errors** (`ConfigError`, `BuildError`) carry detailed context
//! - **Error conversion** is automatic via `#[from]` attributes
//!
//! Errors below the fatal tier (compile failures, mirror failures, watch
//! anomalies) are contained at their component boundary and only surfaced
//! through logging; they never terminate the watch loop or the server.

pub mod miette;

use crate::build::mirror::MirrorError;
use crate::compiler::CompileError;
use std::path::PathBuf;
use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
///
/// This is the primary error type returned by CLI commands. It automatically
/// converts from domain-specific errors via `From` implementations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Build pipeline errors (discovery, compile, mirror, output reset)
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serving endpoint errors (bind failures, listener faults)
    #[error("Server error: {0}")]
    Server(String),

    /// File watching errors
    #[error("File watcher error: {0}")]
    Watch(#[from] notify::Error),
}

/// Configuration-specific errors.
///
/// These occur during config loading, merging, and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file doesn't exist at the requested location
    #[error("Config file not found: {}\n\nHint: Create a kiln.config.json file or pass --config <path>", .0.display())]
    NotFound(PathBuf),

    /// Invalid value for a configuration field
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },

    /// I/O error while reading config
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Build pipeline errors.
///
/// These cover the full build cycle: output directory lifecycle, entrypoint
/// discovery, the compile capability, and static asset mirroring.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Core entry module doesn't exist
    #[error("Entry module not found: {}\n\nHint: Check the 'core_entry' field in your config", .0.display())]
    EntryNotFound(PathBuf),

    /// Components root could not be enumerated
    #[error("Failed to enumerate components in {}: {source}\n\nHint: Check the 'components_dir' field in your config", .path.display())]
    Discover {
        /// The components root that failed to enumerate
        path: PathBuf,
        source: std::io::Error,
    },

    /// The compile capability reported a failure
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// A static asset failed to mirror into the output tree
    #[error(transparent)]
    Mirror(#[from] MirrorError),

    /// The output directory could not be removed or recreated
    #[error("Failed to reset output directory {}: {source}\n\nHint: Check directory permissions", .path.display())]
    OutputReset {
        /// The output directory being reset
        path: PathBuf,
        source: std::io::Error,
    },

    /// Output directory points at an unsafe or unusable location
    #[error("Output directory is not writable: {}\n\nHint: Choose a directory inside the project", .0.display())]
    OutputNotWritable(PathBuf),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Replace a not-found I/O error with a `FileNotFound` carrying the path.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Prefix the error with a custom message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::InvalidArgument(format!("{}: {}", msg, err))
        })
    }
}
