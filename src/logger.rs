//! Logging infrastructure for the kiln CLI.
//!
//! Structured logging via the `tracing` ecosystem with verbosity flags and
//! environment-based overrides.
//!
//! # Verbosity Levels
//!
//! 1. `--verbose` flag: DEBUG level for kiln
//! 2. `--quiet` flag: ERROR level only
//! 3. `RUST_LOG` environment variable: custom filter
//! 4. Default: INFO level

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging (overrides `quiet`)
/// * `quiet` - Only show error-level logs
/// * `no_color` - Disable colored output
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("kiln=debug")
    } else if quiet {
        EnvFilter::new("kiln=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kiln=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
