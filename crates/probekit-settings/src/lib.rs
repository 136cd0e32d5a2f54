//! Probekit Settings Crate
//!
//! Handles application configuration and settings persistence.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{Config, ControllerSettings, ProbingMotion, TouchPlate, UiSettings, WaitPolicy};
pub use error::{SettingsError, SettingsResult};
pub use manager::SettingsManager;
