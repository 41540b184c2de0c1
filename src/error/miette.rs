//! Miette diagnostic conversion for CLI errors.
//!
//! Fatal errors are rendered once at the top of `main` through miette for
//! readable terminal reports.

use crate::error::{BuildError, CliError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Build(e) => build_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        CliError::Server(msg) => miette::miette!("Server error: {}", msg),
        _ => miette::miette!("{}", err),
    }
}

/// Convert BuildError to miette Report
fn build_error_to_miette(err: BuildError) -> Report {
    match err {
        BuildError::Compile(e) => {
            miette::miette!("Compile failed:\n{}", e)
        }
        BuildError::Mirror(e) => {
            miette::miette!(
                "Static asset mirror failed: {}\n\nHint: Check source asset paths and output permissions",
                e
            )
        }
        _ => miette::miette!("{}", err),
    }
}
