//! # Probekit UI
//!
//! GTK-based user interface for Probekit.

pub mod gtk_app;
pub mod ui;

// Re-export settings for convenience if needed
pub use probekit_settings::{Config, SettingsManager, UiSettings};
