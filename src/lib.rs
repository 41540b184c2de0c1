//! kiln - build, watch, and serve toolchain for web-component libraries.
//!
//! kiln compiles a web-component library into browser-runnable bundles
//! through an external bundler, mirrors its static assets, rebuilds on
//! source changes, and serves the output over a local HTTP endpoint.
//!
//! # Architecture
//!
//! - [`build`] - Output directory lifecycle, entrypoint discovery, compile
//!   orchestration, and static asset mirroring
//! - [`compiler`] - The opaque compile capability and its external-process
//!   implementation
//! - [`dev`] - File watching, rebuild serialization, and the HTTP endpoint
//! - [`config`] - Layered immutable configuration
//! - [`error`] - Typed errors with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal status output and formatting
//! - `cli` / `commands` - Argument parsing and command implementations
//!
//! # Example
//!
//! ```rust
//! use kiln::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

// Public modules
pub mod build;
pub mod cli;
pub mod commands;
pub mod compiler;
pub mod config;
pub mod dev;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use config::KilnConfig;
pub use error::{BuildError, CliError, ConfigError, Result, ResultExt};
