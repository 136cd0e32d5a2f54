//! Settings manager
//!
//! Resolves the platform config location and wraps load/save with a
//! fall-back-to-defaults policy: a missing file yields defaults, a
//! corrupt file is reported rather than silently replaced.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::PathBuf;

/// Directory name under the platform config dir
const APP_DIR: &str = "probekit";

/// Default config file name
const CONFIG_FILE: &str = "config.toml";

/// Manages the application configuration file
pub struct SettingsManager {
    path: PathBuf,
    config: Config,
}

impl SettingsManager {
    /// Platform config file path (e.g. `~/.config/probekit/config.toml`)
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(base.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load the config at the platform path, or defaults if absent
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::config_file_path()?;
        Self::load_or_default_at(path)
    }

    /// Load the config at an explicit path, or defaults if absent
    pub fn load_or_default_at(path: PathBuf) -> SettingsResult<Self> {
        let config = if path.exists() {
            Config::load_from_file(&path)?
        } else {
            Config::default()
        };
        Ok(Self { path, config })
    }

    /// The managed configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access for settings edits; call [`save`](Self::save) after
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// The path this manager reads and writes
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Persist the current configuration
    pub fn save(&self) -> SettingsResult<()> {
        self.config.save_to_file(&self.path)
    }
}
