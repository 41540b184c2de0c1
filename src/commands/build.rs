//! Build command implementation.
//!
//! Runs one full build: reset the output directory, compile every
//! entrypoint, mirror the static assets, and print a summary.

use crate::build::{BuildOrchestrator, OutputDir};
use crate::cli::BuildArgs;
use crate::commands::utils;
use crate::compiler::EsbuildCompiler;
use crate::config::KilnConfig;
use crate::error::Result;
use crate::ui;
use std::fs;
use std::path::Path;

/// Execute the build command.
///
/// # Build Process
///
/// 1. Load and validate configuration (CLI > Env > File > Defaults)
/// 2. Reset the output directory
/// 3. Run one full build pass
/// 4. Display the build summary
///
/// # Errors
///
/// Returns errors for invalid configuration, reset failures, and build
/// failures; all of them are fatal for this one-shot command.
pub async fn execute(args: BuildArgs) -> Result<()> {
    let config = KilnConfig::load(&args.common)?;
    let cwd = utils::resolve_working_dir(config.cwd.as_deref())?;
    config.validate(&cwd)?;

    let mode = if config.production {
        "production"
    } else {
        "development"
    };
    ui::info(&format!("building in {mode} mode"));

    let output = OutputDir::new(&config.out_dir, &cwd)?;
    ui::info(&format!("resetting {}", output.path().display()));
    output.reset()?;

    let compiler = EsbuildCompiler::new(&config.bundler);
    let orchestrator = BuildOrchestrator::from_config(&config, &cwd, compiler);

    let spinner = ui::Spinner::new("compiling bundles...");
    match orchestrator.build_all().await {
        Ok(report) => {
            spinner.finish(&format!(
                "built {} entrypoints in {}",
                report.entrypoints,
                ui::format_duration(report.duration)
            ));
            ui::print_build_summary(&collect_artifacts(output.path()), report.duration);
            Ok(())
        }
        Err(e) => {
            spinner.fail("build failed");
            Err(e.into())
        }
    }
}

/// Enumerate top-level output files with sizes for the summary table.
fn collect_artifacts(out_dir: &Path) -> Vec<(String, u64)> {
    let mut artifacts = Vec::new();

    let Ok(entries) = fs::read_dir(out_dir) else {
        return artifacts;
    };
    for entry in entries.flatten() {
        let Ok(meta) = entry.metadata() else { continue };
        if meta.is_file() {
            artifacts.push((entry.file_name().to_string_lossy().to_string(), meta.len()));
        }
    }

    artifacts.sort();
    artifacts
}
