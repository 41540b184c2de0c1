//! Development-mode services: file watching, rebuild serialization, and the
//! static HTTP endpoint.
//!
//! The server runs in every mode; the watcher and rebuild gate exist only
//! in development mode.

pub mod server;
pub mod state;
pub mod watcher;

pub use server::{BoundServer, StaticServer};
pub use state::{Rebuilder, RebuildGate, WatchState};
pub use watcher::{FileChange, FileWatcher};
