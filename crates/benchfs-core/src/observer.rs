//! Observation hooks for locator operations.
//!
//! The locator never writes log output itself. Every notable step is
//! reported to a [`LocatorObserver`]; the default [`TracingObserver`]
//! forwards those reports to the `tracing` facade so the host application
//! decides where they end up.

use std::io;
use std::path::Path;

use crate::error::LocatorError;
use crate::fs::content::StreamKind;

/// Receives notifications from a [`crate::FileLocator`].
///
/// All methods default to doing nothing, so implementors only override
/// the events they care about.
pub trait LocatorObserver: Send + Sync {
    /// Canonicalizing `path` failed; the caller received `None`.
    fn resolution_failed(&self, _path: &Path, _err: &io::Error) {}

    /// A content stream of the given kind was opened on `path`.
    fn stream_opened(&self, _path: &Path, _kind: StreamKind) {}

    /// `len` bytes are about to be read from `path`.
    fn bytes_reading(&self, _path: &Path, _len: u64) {}

    /// The upward search is scanning `dir`.
    fn search_step(&self, _dir: &Path) {}

    /// A temp file was allocated at `path`.
    fn temp_created(&self, _path: &Path, _delete_on_exit: bool) {}

    /// Removing an abandoned temp file at `path` failed; it is left behind.
    fn temp_cleanup_failed(&self, _path: &Path, _err: &LocatorError) {}
}

/// Forwards every event to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl LocatorObserver for TracingObserver {
    fn resolution_failed(&self, path: &Path, err: &io::Error) {
        tracing::warn!("Failed to resolve {}: {err}", path.display());
    }

    fn stream_opened(&self, path: &Path, kind: StreamKind) {
        match kind {
            StreamKind::Gzip => {
                tracing::debug!("Reading in the zipped contents of '{}'", path.display())
            }
            StreamKind::Plain => tracing::debug!("Reading in the contents of '{}'", path.display()),
        }
    }

    fn bytes_reading(&self, path: &Path, len: u64) {
        tracing::debug!("Reading {len} bytes from '{}'", path.display());
    }

    fn search_step(&self, dir: &Path) {
        tracing::debug!("Find current location = {}", dir.display());
    }

    fn temp_created(&self, path: &Path, delete_on_exit: bool) {
        tracing::debug!(
            "Temp file created: {} (delete_on_exit={delete_on_exit})",
            path.display()
        );
    }

    fn temp_cleanup_failed(&self, path: &Path, err: &LocatorError) {
        tracing::warn!("Leaving temp file {} behind: {err}", path.display());
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl LocatorObserver for NullObserver {}
