//! Configuration and settings management for Probekit
//!
//! Provides configuration file handling, settings management, and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Touch plate geometry (the probing reference object)
//! - Probing motion parameters (feeds, probe distances)
//! - Controller settings (wait policy)
//! - UI preferences (window size, status log)

use crate::error::{SettingsError, SettingsResult};
pub use probekit_core::controller::WaitPolicy;
pub use probekit_core::sequencer::{ProbingMotion, TouchPlate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Controller settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    /// Wait discipline applied to every blocking confirmation
    pub wait_policy: WaitPolicy,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            wait_policy: WaitPolicy::default(),
        }
    }
}

/// UI preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Window width
    pub window_width: u32,
    /// Window height
    pub window_height: u32,
    /// Show the status log below the panel
    pub show_status_log: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            window_width: 480,
            window_height: 420,
            show_status_log: true,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Touch plate geometry
    pub touch_plate: TouchPlate,
    /// Probing motion parameters
    pub probing: ProbingMotion,
    /// Controller settings
    pub controller: ControllerSettings,
    /// UI preferences
    pub ui: UiSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("Failed to read config file: {}", e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::UnsupportedFormat(
                path.extension()
                    .map(|e| e.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "<none>".to_string()),
            ));
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(format!("Failed to serialize config: {}", e)))?
        } else {
            return Err(SettingsError::UnsupportedFormat(
                path.extension()
                    .map(|e| e.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "<none>".to_string()),
            ));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// Probing against a zero-sized plate or with non-positive feeds is
    /// a configuration mistake, never a runtime condition.
    pub fn validate(&self) -> SettingsResult<()> {
        let positives = [
            ("touch_plate.plate_height", self.touch_plate.plate_height),
            ("touch_plate.plate_width", self.touch_plate.plate_width),
            ("touch_plate.travel_height", self.touch_plate.travel_height),
            ("touch_plate.lift_height", self.touch_plate.lift_height),
            ("probing.probe_feed", self.probing.probe_feed),
            ("probing.center_feed", self.probing.center_feed),
            ("probing.z_probe_distance", self.probing.z_probe_distance),
            ("probing.xy_probe_distance", self.probing.xy_probe_distance),
        ];
        for (key, value) in positives {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::InvalidSetting {
                    key: key.to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        }

        if let Some(0) = self.controller.wait_policy.bound_secs() {
            return Err(SettingsError::InvalidSetting {
                key: "controller.wait_policy".to_string(),
                reason: "bounded wait must be at least 1 second".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.touch_plate.plate_width, 2.205);
        assert_eq!(config.controller.wait_policy, WaitPolicy::Bounded(30));
    }

    #[test]
    fn test_validate_rejects_non_positive_geometry() {
        let mut config = Config::default();
        config.touch_plate.plate_width = 0.0;
        assert!(matches!(
            config.validate(),
            Err(SettingsError::InvalidSetting { key, .. }) if key == "touch_plate.plate_width"
        ));

        let mut config = Config::default();
        config.probing.probe_feed = -2.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_wait_bound() {
        let mut config = Config::default();
        config.controller.wait_policy = WaitPolicy::Bounded(0);
        assert!(config.validate().is_err());

        config.controller.wait_policy = WaitPolicy::Unbounded;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [touch_plate]
            plate_width = 2.0
            "#,
        )
        .unwrap();
        assert_eq!(config.touch_plate.plate_width, 2.0);
        assert_eq!(config.touch_plate.plate_height, 1.0);
        assert_eq!(config.probing.center_feed, 10.0);
    }

    #[test]
    fn test_wait_policy_round_trip() {
        let mut config = Config::default();
        config.controller.wait_policy = WaitPolicy::Unbounded;

        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.controller.wait_policy, WaitPolicy::Unbounded);

        config.controller.wait_policy = WaitPolicy::Bounded(45);
        let toml_text = toml::to_string(&config).unwrap();
        let back: Config = toml::from_str(&toml_text).unwrap();
        assert_eq!(back.controller.wait_policy, WaitPolicy::Bounded(45));
    }
}
