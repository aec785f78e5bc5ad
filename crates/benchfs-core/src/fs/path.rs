//! Path resolution helpers.

use std::path::{Component, Path, PathBuf};

use crate::locator::FileLocator;

impl FileLocator {
    /// Resolves `path` to its canonical absolute form.
    ///
    /// Relative components and symlinks are resolved against the current
    /// directory. Resolution is best-effort: on failure the error is
    /// reported to the observer and `None` is returned.
    pub fn resolve_canonical(&self, path: impl AsRef<Path>) -> Option<PathBuf> {
        let path = path.as_ref();
        match std::fs::canonicalize(path) {
            Ok(resolved) => Some(resolved),
            Err(e) => {
                self.observer.resolution_failed(path, &e);
                None
            }
        }
    }
}

/// Returns the final segment of `path` exactly as stored.
///
/// Never fails: a root or empty path yields an empty string, and `..`
/// yields `".."` as written.
pub fn base_name(path: impl AsRef<Path>) -> String {
    match path.as_ref().components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        Some(Component::ParentDir) => "..".to_string(),
        Some(Component::CurDir) => ".".to_string(),
        Some(Component::RootDir) | Some(Component::Prefix(_)) | None => String::new(),
    }
}
