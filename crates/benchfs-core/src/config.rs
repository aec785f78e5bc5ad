//! Locator configuration loaded from a TOML file.
//!
//! Every field has a default, so a locator works without any config file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LocatorError, LocatorResult};

/// Naming conventions the locator relies on.
///
/// Call [`LocatorConfig::load`] to read overrides from a TOML path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// Prefix given to every temp file name.
    #[serde(default = "default_temp_prefix")]
    pub temp_prefix: String,
    /// Suffix (without the period) used when a temp write names none.
    #[serde(default = "default_temp_suffix")]
    pub default_temp_suffix: String,
    /// File-name ending that selects the gzip stream variant.
    #[serde(default = "default_compressed_suffix")]
    pub compressed_suffix: String,
    /// Marker directory present at every level of a checkout.
    #[serde(default = "default_checkout_sentinel")]
    pub checkout_sentinel: String,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            temp_prefix: default_temp_prefix(),
            default_temp_suffix: default_temp_suffix(),
            compressed_suffix: default_compressed_suffix(),
            checkout_sentinel: default_checkout_sentinel(),
        }
    }
}

impl LocatorConfig {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`LocatorError::NotFound`] if the file does not exist.
    /// - [`LocatorError::PermissionDenied`] if the file is not readable.
    /// - [`LocatorError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> LocatorResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| LocatorError::from_io(path, e))?;
        toml::from_str(&content).map_err(|e| LocatorError::ConfigParse(e.to_string()))
    }

    /// Returns `true` if `path` carries the compressed suffix.
    pub fn is_compressed(&self, path: &Path) -> bool {
        path.to_string_lossy().ends_with(&self.compressed_suffix)
    }
}

fn default_temp_prefix() -> String {
    "hstore".to_string()
}

fn default_temp_suffix() -> String {
    "tmp".to_string()
}

fn default_compressed_suffix() -> String {
    ".gz".to_string()
}

fn default_checkout_sentinel() -> String {
    ".svn".to_string()
}
