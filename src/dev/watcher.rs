//! File system watcher for development mode.
//!
//! Subscribes once, recursively, to the source tree and forwards
//! create/modify/remove notifications for files whose extension is in the
//! watched set. Notifications without an identifiable path are logged as a
//! warning and ignored. The watcher is never created in production mode.

use crate::error::{CliError, Result};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

/// File change event type.
#[derive(Debug, Clone)]
pub enum FileChange {
    /// File was created
    Created(PathBuf),
    /// File was modified or renamed
    Modified(PathBuf),
    /// File was removed
    Removed(PathBuf),
}

impl FileChange {
    /// Get the path affected by this change.
    pub fn path(&self) -> &Path {
        match self {
            FileChange::Created(p) | FileChange::Modified(p) | FileChange::Removed(p) => p,
        }
    }
}

/// Recursive watcher over the source tree with extension filtering.
pub struct FileWatcher {
    /// Underlying notify watcher; dropped together with the subscription
    _watcher: RecommendedWatcher,
    /// Root directory being watched
    root: PathBuf,
}

impl FileWatcher {
    /// Create a new file watcher.
    ///
    /// # Arguments
    ///
    /// * `root` - Root directory to watch recursively
    /// * `extensions` - Extensions (without dot) that qualify a change
    ///
    /// # Returns
    ///
    /// Tuple of (FileWatcher, receiver for change events)
    ///
    /// # Errors
    ///
    /// Returns an error if the root doesn't exist or the subscription
    /// cannot be created.
    pub fn new(root: PathBuf, extensions: Vec<String>) -> Result<(Self, mpsc::Receiver<FileChange>)> {
        if !root.exists() {
            return Err(CliError::FileNotFound(root));
        }

        let (tx, rx) = mpsc::channel(256);

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            match res {
                Ok(event) => {
                    for change in react(&event, &extensions) {
                        // The receiver only disappears on shutdown
                        let _ = tx.blocking_send(change);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "watch notification error");
                }
            }
        })
        .map_err(CliError::Watch)?;

        watcher
            .watch(&root, RecursiveMode::Recursive)
            .map_err(CliError::Watch)?;

        Ok((
            Self {
                _watcher: watcher,
                root,
            },
            rx,
        ))
    }

    /// Get the root directory being watched.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Turn one raw notification into qualifying change events.
///
/// A notification without any path is an anomaly of the watch
/// subscription: it is logged as a warning and produces nothing.
pub(crate) fn react(event: &Event, extensions: &[String]) -> Vec<FileChange> {
    if event.paths.is_empty() {
        tracing::warn!(kind = ?event.kind, "change notification without a path; ignoring");
        return Vec::new();
    }

    let mut changes = Vec::new();
    for path in &event.paths {
        if !has_watched_extension(path, extensions) {
            continue;
        }

        let change = match event.kind {
            EventKind::Create(_) => FileChange::Created(path.clone()),
            EventKind::Modify(_) => FileChange::Modified(path.clone()),
            EventKind::Remove(_) => FileChange::Removed(path.clone()),
            _ => continue,
        };
        changes.push(change);
    }
    changes
}

/// Check whether a path's extension is in the watched set.
pub fn has_watched_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|watched| watched == ext))
        .unwrap_or(false)
}
