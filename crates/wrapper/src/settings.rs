//! Wrapper settings via `lumen.toml`
//!
//! Environments that are configured from a file describe their object
//! wrapper in a small TOML document. Unset flags fall back to the defaults
//! of the compatibility version.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use lumen_core::{LumenError, LumenResult, Version};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::ObjectWrapperBuilder;

/// Config file name placed in an environment's configuration directory.
pub const CONFIG_FILE_NAME: &str = "lumen.toml";

/// Object wrapper settings loaded from `lumen.toml`.
///
/// # Example
///
/// ```toml
/// compat_version = "2.3.23"
/// use_adapters_for_containers = true
/// use_adapters_for_non_list_collections = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapperSettings {
    /// Requested compatibility version, `"major.minor.micro"`.
    #[serde(default = "default_compat_version")]
    pub compat_version: Version,
    /// Maps, lists and arrays use adapters. Defaults by version when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_adapters_for_containers: Option<bool>,
    /// Sets use the collection adapter.
    #[serde(default)]
    pub use_adapters_for_non_list_collections: bool,
}

fn default_compat_version() -> Version {
    Version::CURRENT
}

impl Default for WrapperSettings {
    fn default() -> Self {
        Self {
            compat_version: default_compat_version(),
            use_adapters_for_containers: None,
            use_adapters_for_non_list_collections: false,
        }
    }
}

impl WrapperSettings {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Lumen object wrapper configuration
#
# Compatibility version; selects the wrapping behavior.
#   2.3.0 - 2.3.21 : maps, lists and arrays are deep-copied
#   2.3.22 and up  : maps, lists and arrays are adapted in place
compat_version = "2.3.23"

# Override the version default for map/list/array adapters.
# use_adapters_for_containers = true

# Adapt sets and other non-list collections instead of copying them
# (default: false, independent of the version).
use_adapters_for_non_list_collections = false
"#
    }

    /// Parse settings from TOML text and validate the version.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::InvalidConfig`] for malformed TOML and
    /// [`LumenError::VersionOutOfRange`] for an unsupported version.
    pub fn from_toml_str(content: &str) -> LumenResult<Self> {
        let settings: WrapperSettings = toml::from_str(content)
            .map_err(|e| LumenError::invalid_config(format!("Cannot parse wrapper settings: {}", e)))?;
        // Validate the version eagerly
        settings.builder()?;
        Ok(settings)
    }

    /// Read and parse settings from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> LumenResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| settings_io_error("read", path, e))?;
        let settings = Self::from_toml_str(&content).map_err(|e| match e {
            LumenError::InvalidConfig(message) => {
                LumenError::invalid_config(format!("{} ({})", message, path.display()))
            }
            other => other,
        })?;
        debug!(target: "lumen::config", path = %path.display(), "Loaded wrapper settings");
        Ok(settings)
    }

    /// Create `path` with [`default_toml`](Self::default_toml) unless a file
    /// is already there; an existing file is left untouched.
    pub fn write_default_if_missing(path: &Path) -> LumenResult<()> {
        let created = OpenOptions::new().write(true).create_new(true).open(path);
        match created {
            Ok(mut file) => file
                .write_all(Self::default_toml().as_bytes())
                .map_err(|e| settings_io_error("write", path, e)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(settings_io_error("create", path, e)),
        }
    }

    /// Save these settings to `path`, replacing any previous content.
    pub fn write_to_file(&self, path: &Path) -> LumenResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LumenError::invalid_config(format!("Cannot encode wrapper settings: {}", e)))?;
        std::fs::write(path, content).map_err(|e| settings_io_error("write", path, e))?;
        debug!(target: "lumen::config", path = %path.display(), "Saved wrapper settings");
        Ok(())
    }

    /// Builder configured from these settings.
    pub fn builder(&self) -> LumenResult<ObjectWrapperBuilder> {
        let mut builder = ObjectWrapperBuilder::new(self.compat_version)?
            .use_adapters_for_non_list_collections(self.use_adapters_for_non_list_collections);
        if let Some(enabled) = self.use_adapters_for_containers {
            builder = builder.use_adapters_for_containers(enabled);
        }
        Ok(builder)
    }
}

fn settings_io_error(action: &str, path: &Path, err: io::Error) -> LumenError {
    LumenError::invalid_config(format!(
        "Cannot {} settings file {}: {}",
        action,
        path.display(),
        err
    ))
}
