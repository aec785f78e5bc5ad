//! Error types for `benchfs-core`.
//!
//! All fallible operations return [`LocatorResult<T>`], an alias for
//! `Result<T, LocatorError>`. Canonicalization failures are deliberately
//! absent: [`crate::FileLocator::resolve_canonical`] reports them to the
//! observer and returns `None` instead.

use std::path::PathBuf;

/// Unified error type for all locator operations.
#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to something else.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// End of stream was reached before the file's declared length.
    #[error("short read on {path}: expected {expected} bytes, got {actual}")]
    ShortRead {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    /// The upward search left the checkout without finding its target.
    #[error("unable to find '{name}' [last_dir={}]", last_dir.display())]
    SearchOverrun { name: String, last_dir: PathBuf },

    /// The OS refused to allocate a temporary file.
    #[error("failed to allocate temp file: {0}")]
    TempAllocation(#[source] std::io::Error),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LocatorError {
    /// Maps an I/O error on `path` to the most specific variant.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => LocatorError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => {
                LocatorError::PermissionDenied(path.to_path_buf())
            }
            _ => LocatorError::Io(err),
        }
    }
}

/// Convenience alias used throughout `benchfs-core`.
pub type LocatorResult<T> = Result<T, LocatorError>;
