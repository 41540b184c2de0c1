//! Command-line interface definition for kiln.
//!
//! Defines the CLI structure using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `kiln build` - Reset the output directory and run one full build
//! - `kiln serve` - Full orchestrator: build, watch (dev mode), and serve

mod commands;
mod tests;

use clap::Parser;

pub use commands::{BuildArgs, Command, CommonArgs, ServeArgs};

/// kiln - build, watch, and serve toolchain for web-component libraries
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    version,
    about = "Build, watch, and serve toolchain for web-component libraries",
    long_about = "kiln compiles a web-component library into browser-runnable bundles,\n\
                  mirrors its static assets, rebuilds on source changes, and serves the\n\
                  output over a local HTTP endpoint."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
