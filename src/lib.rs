//! # Probekit
//!
//! A Rust-based auto tool-zero probing panel for CNC machines.
//! One button press collects probing parameters from the operator and
//! drives a fixed, strictly sequential tool-zeroing procedure over an
//! injected machine-controller command interface.
//!
//! ## Architecture
//!
//! Probekit is organized as a workspace with multiple crates:
//!
//! 1. **probekit-core** - Probe data model, MDI vocabulary, capabilities, sequencer
//! 2. **probekit-settings** - Configuration and settings persistence
//! 3. **probekit-ui** - GTK panel and dialogs
//! 4. **probekit** - Main binary that integrates all crates

pub use probekit_core::{
    align_prompt, parse_diameter, Axis, ControllerError, ControllerMode, CornerPosition,
    DialogError, DialogResponse, Error, EventDispatcher, LoggingController, MachineController,
    ParameterDialog, ProbeRequest, ProbingMotion, PromptDialog, Result, SequencerEvent,
    ToolZeroOutcome, ToolZeroSequencer, TouchPlate, Units, WaitPolicy, JOG_PROMPT,
};

pub use probekit_settings::{
    Config, ControllerSettings, SettingsError, SettingsManager, UiSettings,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
