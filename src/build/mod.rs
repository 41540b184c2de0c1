//! The build pipeline: output directory lifecycle, entrypoint discovery,
//! compile orchestration, and static asset mirroring.

pub mod entrypoints;
pub mod mirror;
pub mod orchestrator;
pub mod output;

pub use mirror::{AssetMirror, MirrorError, MirrorRoot};
pub use orchestrator::{BuildOrchestrator, BuildReport};
pub use output::OutputDir;
