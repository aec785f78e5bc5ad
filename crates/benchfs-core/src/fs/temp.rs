//! Temporary file allocation.

use std::path::{Path, PathBuf};

use tempfile::TempPath;

use crate::error::{LocatorError, LocatorResult};
use crate::locator::FileLocator;

/// A uniquely named file in the system temp directory.
///
/// When allocated with `delete_on_exit`, the file is removed as soon as this
/// descriptor is dropped; holding it for the life of the process therefore
/// deletes it at teardown. Otherwise the file persists and cleanup is the
/// caller's job.
#[derive(Debug)]
#[must_use = "dropping a TempFile created with delete_on_exit removes the file"]
pub struct TempFile {
    path: PathBuf,
    guard: Option<TempPath>,
}

impl TempFile {
    /// Returns the absolute path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if dropping this descriptor removes the file.
    pub fn deletes_on_drop(&self) -> bool {
        self.guard.is_some()
    }

    /// Disarms automatic deletion and returns the path.
    ///
    /// # Errors
    ///
    /// - [`LocatorError::Io`] if the cleanup guard could not be released.
    pub fn keep(self) -> LocatorResult<PathBuf> {
        match self.guard {
            Some(guard) => guard.keep().map_err(|e| LocatorError::Io(e.error)),
            None => Ok(self.path),
        }
    }

    /// Deletes the file now.
    ///
    /// # Errors
    ///
    /// - [`LocatorError::NotFound`] if the file was already removed.
    /// - [`LocatorError::Io`] for any other failure.
    pub fn delete(self) -> LocatorResult<()> {
        let result = match self.guard {
            Some(guard) => guard.close(),
            None => std::fs::remove_file(&self.path),
        };
        result.map_err(|e| LocatorError::from_io(&self.path, e))
    }
}

impl AsRef<Path> for TempFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl FileLocator {
    /// Allocates an empty temp file named `<prefix><random>.<suffix>`.
    ///
    /// `suffix` is given without the leading period. Name uniqueness comes
    /// from the OS exclusive-create primitive; nothing is retried.
    ///
    /// # Errors
    ///
    /// - [`LocatorError::TempAllocation`] if the OS refuses the allocation.
    pub fn create_temp_file(&self, suffix: &str, delete_on_exit: bool) -> LocatorResult<TempFile> {
        let dotted = format!(".{suffix}");
        let temp_path = tempfile::Builder::new()
            .prefix(&self.config.temp_prefix)
            .suffix(&dotted)
            .tempfile()
            .map_err(LocatorError::TempAllocation)?
            .into_temp_path();

        let temp = if delete_on_exit {
            TempFile {
                path: temp_path.to_path_buf(),
                guard: Some(temp_path),
            }
        } else {
            let path = temp_path
                .keep()
                .map_err(|e| LocatorError::TempAllocation(e.error))?;
            TempFile { path, guard: None }
        };

        self.observer.temp_created(temp.path(), delete_on_exit);
        Ok(temp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::path::base_name;
    use std::collections::HashSet;

    #[test]
    fn temp_file_has_prefix_and_suffix() {
        let temp = FileLocator::default().create_temp_file("csv", true).unwrap();

        let name = base_name(temp.path());
        assert!(name.starts_with("hstore"), "unexpected name {name}");
        assert!(name.ends_with(".csv"), "unexpected name {name}");
        assert!(temp.path().is_file());
        assert_eq!(std::fs::metadata(temp.path()).unwrap().len(), 0);
    }

    #[test]
    fn delete_on_exit_removes_file_on_drop() {
        let temp = FileLocator::default().create_temp_file("tmp", true).unwrap();
        let path = temp.path().to_path_buf();
        assert!(temp.deletes_on_drop());
        assert!(path.exists());

        drop(temp);

        assert!(!path.exists());
    }

    #[test]
    fn delete_on_exit_file_lives_while_bound() {
        let locator = FileLocator::default();
        let temp = locator.create_temp_file("tmp", true).unwrap();

        locator.write_text(temp.path(), "scratch").unwrap();

        assert_eq!(locator.read_text(temp.path()).unwrap(), "scratch\n");
        assert!(temp.path().exists());
    }

    #[test]
    fn persistent_temp_file_survives_drop() {
        let temp = FileLocator::default().create_temp_file("tmp", false).unwrap();
        let path = temp.path().to_path_buf();
        assert!(!temp.deletes_on_drop());

        drop(temp);

        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn keep_disarms_deletion() {
        let temp = FileLocator::default().create_temp_file("tmp", true).unwrap();
        let path = temp.keep().unwrap();

        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn explicit_delete_removes_file() {
        let locator = FileLocator::default();
        for delete_on_exit in [true, false] {
            let temp = locator.create_temp_file("tmp", delete_on_exit).unwrap();
            let path = temp.path().to_path_buf();

            temp.delete().unwrap();

            assert!(!path.exists());
        }
    }

    #[test]
    fn custom_prefix_is_applied() {
        let config = crate::LocatorConfig {
            temp_prefix: "bench".to_string(),
            ..Default::default()
        };
        let temp = FileLocator::new(config).create_temp_file("log", true).unwrap();
        assert!(base_name(temp.path()).starts_with("bench"));
    }

    #[test]
    fn concurrent_allocations_are_unique() {
        let locator = FileLocator::default();
        let temps: Vec<TempFile> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..32)
                .map(|_| s.spawn(|| locator.create_temp_file("tmp", true).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let paths: HashSet<PathBuf> = temps.iter().map(|t| t.path().to_path_buf()).collect();
        assert_eq!(paths.len(), 32);
    }
}
