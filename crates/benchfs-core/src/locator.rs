//! The [`FileLocator`] handle.
//!
//! Operations live in the [`crate::fs`] submodules as `impl FileLocator`
//! blocks; this module only owns construction.

use std::fmt;
use std::sync::Arc;

use crate::config::LocatorConfig;
use crate::observer::{LocatorObserver, TracingObserver};

/// Stateless entry point for every filesystem helper in this crate.
///
/// A locator carries only its naming conventions and an observer, so it is
/// cheap to clone and safe to share across threads. It provides no mutual
/// exclusion: two threads writing the same path race at the OS level.
///
/// # Examples
///
/// ```no_run
/// use benchfs_core::FileLocator;
///
/// let locator = FileLocator::default();
/// let schema_dir = locator.find_directory("schemas").unwrap();
/// println!("{}", schema_dir.display());
/// ```
#[derive(Clone)]
pub struct FileLocator {
    pub(crate) config: LocatorConfig,
    pub(crate) observer: Arc<dyn LocatorObserver>,
}

impl FileLocator {
    /// Creates a locator with the given config that reports to `tracing`.
    pub fn new(config: LocatorConfig) -> Self {
        Self {
            config,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replaces the observer.
    pub fn with_observer(mut self, observer: Arc<dyn LocatorObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }
}

impl Default for FileLocator {
    fn default() -> Self {
        Self::new(LocatorConfig::default())
    }
}

impl fmt::Debug for FileLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileLocator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
