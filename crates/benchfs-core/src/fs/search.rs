//! Upward search for a named file or directory, bounded by the checkout.
//!
//! Starting from a directory, each level's immediate children are scanned
//! for the target. If the target is absent but the level contains the
//! checkout sentinel (e.g. `.svn`), the search moves to the parent. A level
//! without the sentinel means the search has left the checkout, which is
//! reported as [`LocatorError::SearchOverrun`] rather than "not found".

use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;

use crate::error::{LocatorError, LocatorResult};
use crate::fs::path::base_name;
use crate::locator::FileLocator;

/// What kind of entry a search is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    fn matches(self, path: &Path) -> bool {
        path.is_dir() == (self == EntryKind::Directory)
    }
}

/// Outcome of scanning one directory level.
#[derive(Debug, PartialEq, Eq)]
enum LevelScan {
    Found(PathBuf),
    InsideCheckout,
    OutsideCheckout,
}

impl FileLocator {
    /// Finds the nearest directory called `name`, starting from the current directory.
    ///
    /// # Errors
    ///
    /// See [`FileLocator::find_from`].
    pub fn find_directory(&self, name: &str) -> LocatorResult<PathBuf> {
        self.find_from(std::env::current_dir()?, name, EntryKind::Directory)
    }

    /// Finds the nearest file called `name`, starting from the current directory.
    ///
    /// # Errors
    ///
    /// See [`FileLocator::find_from`].
    pub fn find_file(&self, name: &str) -> LocatorResult<PathBuf> {
        self.find_from(std::env::current_dir()?, name, EntryKind::File)
    }

    /// Like [`FileLocator::find_directory`], starting from `start`.
    pub fn find_directory_from(
        &self,
        start: impl AsRef<Path>,
        name: &str,
    ) -> LocatorResult<PathBuf> {
        self.find_from(start, name, EntryKind::Directory)
    }

    /// Like [`FileLocator::find_file`], starting from `start`.
    pub fn find_file_from(&self, start: impl AsRef<Path>, name: &str) -> LocatorResult<PathBuf> {
        self.find_from(start, name, EntryKind::File)
    }

    /// Searches `start` and its ancestors for an entry called `name` of `kind`.
    ///
    /// The first matching child in directory-listing order wins, so callers
    /// must not rely on which of several candidates is returned. The result
    /// is canonical.
    ///
    /// # Errors
    ///
    /// - [`LocatorError::NotFound`] if `start` does not exist.
    /// - [`LocatorError::SearchOverrun`] if a level without the checkout
    ///   sentinel is reached, or the filesystem root is passed, before a match.
    /// - [`LocatorError::Io`] if a level cannot be listed.
    pub fn find_from(
        &self,
        start: impl AsRef<Path>,
        name: &str,
        kind: EntryKind,
    ) -> LocatorResult<PathBuf> {
        let start = start.as_ref();
        let mut current =
            std::fs::canonicalize(start).map_err(|e| LocatorError::from_io(start, e))?;
        let target: String = name.nfc().collect();

        loop {
            self.observer.search_step(&current);

            match scan_level(&current, &target, kind, &self.config.checkout_sentinel)? {
                LevelScan::Found(path) => return Ok(path),
                LevelScan::OutsideCheckout => break,
                LevelScan::InsideCheckout => {}
            }

            let Some(parent) = current.parent().map(Path::to_path_buf) else {
                break;
            };
            current = parent;
        }

        Err(LocatorError::SearchOverrun {
            name: name.to_string(),
            last_dir: current,
        })
    }
}

/// Scans the children of `dir` once, looking for both the target and the sentinel.
///
/// Children are compared by the NFC form of the final segment of their
/// canonical path.
/// Entries that vanish or cannot be resolved mid-scan are skipped.
fn scan_level(
    dir: &Path,
    target: &str,
    kind: EntryKind,
    sentinel: &str,
) -> LocatorResult<LevelScan> {
    let read_dir = std::fs::read_dir(dir).map_err(|e| LocatorError::from_io(dir, e))?;
    let mut has_sentinel = false;

    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let canonical = match std::fs::canonicalize(dir_entry.path()) {
            Ok(p) => p,
            Err(_) => continue,
        };

        let name: String = base_name(&canonical).nfc().collect();
        if name == target && kind.matches(&canonical) {
            return Ok(LevelScan::Found(canonical));
        }
        if name == sentinel {
            has_sentinel = true;
        }
    }

    Ok(if has_sentinel {
        LevelScan::InsideCheckout
    } else {
        LevelScan::OutsideCheckout
    })
}
