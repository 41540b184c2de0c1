use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available kiln subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one full build and exit
    ///
    /// Resets the output directory, compiles every entrypoint, mirrors the
    /// static assets, and prints a summary.
    Build(BuildArgs),

    /// Build, watch, and serve
    ///
    /// Resets the output directory, runs an initial full build, then serves
    /// the output over HTTP. In development mode the source tree is watched
    /// and qualifying changes trigger rebuilds.
    Serve(ServeArgs),
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Production mode: minified bundles, no file watching
    #[arg(long = "prod")]
    pub prod: bool,

    /// Path to a config file (defaults to kiln.config.json when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Working directory (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Output directory for bundles and mirrored assets
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Port for the HTTP endpoint
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,
}
