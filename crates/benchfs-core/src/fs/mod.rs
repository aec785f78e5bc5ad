//! Filesystem operations of the [`crate::FileLocator`].
//!
//! - [`path`] — canonical resolution and base names.
//! - [`temp`] — uniquely named temp files ([`temp::TempFile`]).
//! - [`content`] — whole-file text/byte I/O with transparent gzip ([`content::ContentStream`]).
//! - [`search`] — upward, checkout-bounded search for a named entry.
//! - [`listing`] — prefix-filtered directory listing.

pub mod content;
pub mod listing;
pub mod path;
pub mod search;
pub mod temp;

pub use content::{ContentStream, StreamKind};
pub use listing::list_by_prefix;
pub use path::base_name;
pub use search::EntryKind;
pub use temp::TempFile;
