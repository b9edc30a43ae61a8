//! Config file discovery and loading.
//!
//! A missing or broken config file is never fatal: the launcher warns and
//! carries on with the defaults.

use super::config_struct::{Config, ConfigOverrides};
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file locations relative to the config base directory, in lookup
/// order. The second one is the legacy location.
pub const CONFIG_LOCATIONS: &[&str] = &["i3-quickterm/config.json", "i3/i3-quickterm.json"];

impl Config {
    /// Base directory config locations are resolved against.
    ///
    /// `$XDG_CONFIG_HOME`, then the legacy `$XDG_CONFIG_DIR`, then `~/.config`.
    pub fn config_base_dir() -> Option<PathBuf> {
        ["XDG_CONFIG_HOME", "XDG_CONFIG_DIR"]
            .into_iter()
            .filter_map(std::env::var_os)
            .find(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    }

    /// First existing config file under `base`.
    pub fn discover_in(base: &Path) -> Option<PathBuf> {
        CONFIG_LOCATIONS
            .iter()
            .map(|loc| base.join(loc))
            .find(|path| path.exists())
    }

    /// First existing config file under the config base directory.
    pub fn discover() -> Option<PathBuf> {
        Self::config_base_dir().and_then(|base| Self::discover_in(&base))
    }

    /// Parse the overrides stored in `path`.
    pub fn read_overrides(path: &Path) -> Result<ConfigOverrides, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Build the configuration from the defaults and the file at `path`.
    ///
    /// `None` means no file was found. Unreadable or invalid files are
    /// reported and ignored.
    pub fn load_from(path: Option<&Path>) -> Self {
        let mut config = Self::default();

        match path {
            None => log::warn!("no config file! using defaults"),
            Some(path) => {
                log::info!("Loading config from {:?}", path);
                match Self::read_overrides(path) {
                    Ok(overrides) => config.apply(overrides),
                    Err(e) => log::warn!("invalid config file: {e}"),
                }
            }
        }

        config.validate();
        config
    }

    /// Load the configuration for this invocation.
    ///
    /// An explicit path (from `-c`) skips discovery and is remembered so
    /// spawned terminals are started with the same file.
    pub fn load(explicit: Option<&Path>) -> Self {
        match explicit {
            Some(path) => Self::load_from(Some(path)).with_config_file(path),
            None => Self::load_from(Self::discover().as_deref()),
        }
    }
}
