//! Prefix-filtered directory listing.

use std::path::{Path, PathBuf};

use crate::error::{LocatorError, LocatorResult};
use crate::fs::path::base_name;

/// Returns the immediate children of `dir` whose names start with `prefix`.
///
/// Results come back in directory-listing order, which is
/// filesystem-defined. An empty prefix returns every child.
///
/// # Errors
///
/// - [`LocatorError::NotFound`] if `dir` does not exist.
/// - [`LocatorError::NotADirectory`] if `dir` is not a directory.
/// - [`LocatorError::PermissionDenied`] if `dir` cannot be listed.
/// - [`LocatorError::Io`] for any other failure.
///
/// # Examples
///
/// ```no_run
/// use benchfs_core::list_by_prefix;
/// use std::path::Path;
///
/// for trace in list_by_prefix(Path::new("/var/traces"), "wikipedia-").unwrap() {
///     println!("{}", trace.display());
/// }
/// ```
pub fn list_by_prefix(dir: &Path, prefix: &str) -> LocatorResult<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(LocatorError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(LocatorError::NotADirectory(dir.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(dir).map_err(|e| LocatorError::from_io(dir, e))?;
    let mut matches = Vec::new();

    for dir_entry in read_dir {
        let dir_entry = dir_entry?;
        let path = dir_entry.path();
        if base_name(&path).starts_with(prefix) {
            matches.push(path);
        }
    }

    Ok(matches)
}
