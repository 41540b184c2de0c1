//! Rebuild serialization state.
//!
//! Rebuilds are serialized through an explicit two-state machine: `Idle`
//! and `Building`. The gate is the sole concurrency-control mechanism in
//! the system; it guarantees that at most one `build_all` pass is in
//! flight at any instant.
//!
//! A trigger that arrives while a build is in flight is not dropped:
//! the gate remembers at most one pending rebuild and drains it when the
//! current pass finishes, so every settled burst of changes is followed by
//! exactly one more build.

use crate::build::{BuildOrchestrator, BuildReport};
use crate::compiler::Compiler;
use crate::error::BuildError;
use crate::ui;
use parking_lot::Mutex;

/// Watcher-visible build state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// No build in flight; the next trigger starts one
    Idle,
    /// A build pass is running; triggers are coalesced into one pending
    /// rebuild
    Building,
}

#[derive(Debug)]
struct GateInner {
    state: WatchState,
    pending: bool,
}

/// The `Idle`/`Building` gate serializing build passes.
#[derive(Debug)]
pub struct RebuildGate {
    inner: Mutex<GateInner>,
}

impl RebuildGate {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(GateInner {
                state: WatchState::Idle,
                pending: false,
            }),
        }
    }

    /// Current state.
    pub fn state(&self) -> WatchState {
        self.inner.lock().state
    }

    /// Attempt the `Idle` → `Building` transition.
    ///
    /// Returns `false` when a build is already in flight; in that case the
    /// trigger is remembered as the single pending rebuild.
    pub fn try_begin(&self) -> bool {
        let mut inner = self.inner.lock();
        match inner.state {
            WatchState::Idle => {
                inner.state = WatchState::Building;
                true
            }
            WatchState::Building => {
                inner.pending = true;
                false
            }
        }
    }

    /// Mark the in-flight build finished.
    ///
    /// When a trigger arrived during the build, the gate stays `Building`
    /// and returns `true`: the caller runs one more pass immediately.
    /// Otherwise the gate returns to `Idle`.
    pub fn finish(&self) -> bool {
        let mut inner = self.inner.lock();
        debug_assert_eq!(inner.state, WatchState::Building);
        if inner.pending {
            inner.pending = false;
            true
        } else {
            inner.state = WatchState::Idle;
            false
        }
    }
}

impl Default for RebuildGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs build passes through the gate and reports their outcome.
///
/// Build failures are logged and contained here; they never propagate out
/// of the watch loop.
pub struct Rebuilder<C> {
    orchestrator: BuildOrchestrator<C>,
    gate: RebuildGate,
}

impl<C: Compiler> Rebuilder<C> {
    pub fn new(orchestrator: BuildOrchestrator<C>) -> Self {
        Self {
            orchestrator,
            gate: RebuildGate::new(),
        }
    }

    /// The serialization gate, exposed for observation.
    pub fn gate(&self) -> &RebuildGate {
        &self.gate
    }

    /// Trigger a rebuild.
    ///
    /// When a pass is already in flight the call returns immediately after
    /// registering the pending rebuild; the in-flight caller drains it.
    /// Runs passes until the gate settles back to `Idle`.
    pub async fn rebuild(&self) {
        if !self.gate.try_begin() {
            return;
        }

        loop {
            match self.orchestrator.build_all().await {
                Ok(report) => {
                    ui::success(&format!(
                        "rebuilt {} entrypoints in {}",
                        report.entrypoints,
                        ui::format_duration(report.duration)
                    ));
                }
                Err(e) => {
                    ui::error(&format!("rebuild failed: {e}"));
                    tracing::warn!(error = %e, "rebuild failed; serving last good output");
                }
            }

            if !self.gate.finish() {
                break;
            }
        }
    }

    /// Run one pass outside the watch loop, propagating failure.
    ///
    /// Used for the initial full build, before any concurrent triggers
    /// exist.
    pub async fn build_once(&self) -> Result<BuildReport, BuildError> {
        self.orchestrator.build_all().await
    }
}
