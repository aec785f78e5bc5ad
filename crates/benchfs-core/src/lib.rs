//! Filesystem helpers for the benchmark configuration layer.
//!
//! `benchfs-core` resolves canonical paths, hands out scratch temp files,
//! reads and writes whole-file text (gunzipping `.gz` inputs transparently),
//! and locates a named file or directory by walking up from the current
//! directory while staying inside a recognizable checkout.
//!
//! # Modules
//!
//! - [`fs`] — The operations themselves, grouped by concern.
//! - [`locator`] — [`FileLocator`], the handle every operation hangs off.
//! - [`config`] — Naming conventions ([`LocatorConfig`]), loadable from TOML.
//! - [`observer`] — Event hooks ([`LocatorObserver`]) with a `tracing` default.
//! - [`error`] — Unified error type ([`LocatorError`]) and result alias ([`LocatorResult`]).

pub mod config;
pub mod error;
pub mod fs;
pub mod locator;
pub mod observer;

pub use config::LocatorConfig;
pub use error::{LocatorError, LocatorResult};
pub use fs::{base_name, list_by_prefix, ContentStream, EntryKind, StreamKind, TempFile};
pub use locator::FileLocator;
pub use observer::{LocatorObserver, NullObserver, TracingObserver};
