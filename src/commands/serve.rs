//! Serve command implementation: the build/watch/serve orchestrator.
//!
//! # Process Flow
//!
//! 1. Load and validate configuration
//! 2. Reset the output directory (fatal on failure)
//! 3. Run the initial full build (fatal on failure)
//! 4. Start the HTTP server
//! 5. Development mode only: watch the source tree and rebuild on
//!    qualifying changes until Ctrl+C
//!
//! After startup, build failures are logged and contained: the watcher
//! keeps running and the server keeps serving whatever the output tree
//! holds.

use crate::build::{BuildOrchestrator, OutputDir};
use crate::cli::ServeArgs;
use crate::commands::utils;
use crate::compiler::EsbuildCompiler;
use crate::config::KilnConfig;
use crate::dev::{FileWatcher, Rebuilder, StaticServer};
use crate::error::{CliError, Result};
use crate::ui;
use std::net::SocketAddr;
use tokio::signal;

/// Execute the serve command.
///
/// # Errors
///
/// Returns errors for invalid configuration, output reset failures, a
/// failed initial build, watcher subscription failures, and bind failures.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let mut config = KilnConfig::load(&args.common)?;
    if let Some(port) = args.port {
        config.port = port;
    }
    let config = config;

    let cwd = utils::resolve_working_dir(config.cwd.as_deref())?;
    config.validate(&cwd)?;

    let mode = if config.production {
        "production"
    } else {
        "development"
    };
    ui::info(&format!("starting kiln in {mode} mode"));

    // One-time output lifecycle: reset happens exactly once, before the
    // first build, and never again while the process lives.
    let output = OutputDir::new(&config.out_dir, &cwd)?;
    output.reset()?;

    let compiler = EsbuildCompiler::new(&config.bundler);
    let orchestrator = BuildOrchestrator::from_config(&config, &cwd, compiler);
    let rebuilder = Rebuilder::new(orchestrator);

    // Initial full build, before any concurrent triggers exist
    ui::info("running initial build...");
    let report = rebuilder.build_once().await.map_err(CliError::Build)?;
    ui::success(&format!(
        "initial build: {} entrypoints in {}",
        report.entrypoints,
        ui::format_duration(report.duration)
    ));

    // Bind before spawning so a bind failure stays a fatal startup error
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let bound = StaticServer::new(addr, output.path().to_path_buf())
        .bind()
        .await?;
    tracing::debug!(addr = %bound.addr(), "listener bound");
    let mut server_handle = tokio::spawn(bound.serve());

    if config.production {
        // No watch subscription at all in production mode
        ui::info("production mode: file watching disabled");
        ui::info("press Ctrl+C to stop");

        tokio::select! {
            _ = signal::ctrl_c() => {
                ui::info("shutting down...");
            }
            result = &mut server_handle => {
                report_server_exit(result);
            }
        }
    } else {
        let (watcher, mut change_rx) =
            FileWatcher::new(cwd.join(&config.source_root), config.watch_extensions.clone())?;
        ui::info(&format!("watching {}", watcher.root().display()));
        ui::info("press Ctrl+C to stop");

        loop {
            tokio::select! {
                Some(change) = change_rx.recv() => {
                    // Collapse a settled burst of events into one rebuild;
                    // events arriving mid-build queue up and drain as a
                    // single follow-up pass.
                    let mut latest = change;
                    while let Ok(more) = change_rx.try_recv() {
                        latest = more;
                    }
                    ui::info(&format!("change detected: {}", latest.path().display()));
                    rebuilder.rebuild().await;
                }

                _ = signal::ctrl_c() => {
                    ui::info("shutting down...");
                    break;
                }

                result = &mut server_handle => {
                    report_server_exit(result);
                    break;
                }
            }
        }
    }

    ui::success("stopped");
    Ok(())
}

fn report_server_exit(result: std::result::Result<Result<()>, tokio::task::JoinError>) {
    match result {
        Ok(Ok(())) => ui::warning("server task ended unexpectedly"),
        Ok(Err(e)) => ui::error(&format!("server error: {e}")),
        Err(e) => ui::error(&format!("server task panicked: {e}")),
    }
}
