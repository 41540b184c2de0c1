//! Terminal UI utilities for status output and formatting.
//!
//! Provides a small API for status messages, a spinner for long-running
//! steps, and human-readable formatting. Handles environment detection and
//! degrades gracefully when terminal features aren't available.
//!
//! # Examples
//!
//! ```no_run
//! use kiln::ui;
//!
//! ui::init_colors();
//!
//! let spinner = ui::Spinner::new("Compiling bundles...");
//! spinner.finish("Compile complete");
//!
//! ui::success("Build successful");
//! ui::error("Failed to copy asset");
//! ```

mod format;
mod messages;
mod spinner;

pub use format::{format_duration, format_size, print_build_summary};
pub use messages::{error, info, success, warning};
pub use spinner::Spinner;

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on environment.
///
/// Should be called early in the application lifecycle. `owo-colors`
/// automatically respects NO_COLOR and terminal capabilities; this performs
/// the detection up front.
pub fn init_colors() {
    let _ = should_use_color();
}
