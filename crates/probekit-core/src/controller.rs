//! Machine controller capability
//!
//! The machine-control runtime (mode switching, MDI execution, motion,
//! the probing hardware itself) is an external collaborator. This module
//! defines the three primitives the sequencer is allowed to call, the
//! wait policy applied to every blocking confirmation, and a logging
//! implementation for running without hardware.

use crate::error::Result;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Machine controller operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControllerMode {
    /// Manual (jogging) mode
    Manual,
    /// Automatic (stored program) mode
    Auto,
    /// Manual Data Input mode: single lines executed immediately
    Mdi,
}

impl std::fmt::Display for ControllerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manual => write!(f, "manual"),
            Self::Auto => write!(f, "auto"),
            Self::Mdi => write!(f, "MDI"),
        }
    }
}

/// Wait discipline for command confirmations
///
/// One sequencer implementation, parameterized here, replaces the two
/// historical script variants (bounded vs unbounded waits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "policy", content = "seconds")]
pub enum WaitPolicy {
    /// Wait at most this many seconds for each confirmation
    Bounded(u64),
    /// Wait indefinitely
    Unbounded,
}

impl WaitPolicy {
    /// The timeout handed to [`MachineController::wait_complete`]
    pub fn timeout(&self) -> Option<Duration> {
        match self {
            Self::Bounded(secs) => Some(Duration::from_secs(*secs)),
            Self::Unbounded => None,
        }
    }

    /// The bound in seconds, if any
    pub fn bound_secs(&self) -> Option<u64> {
        match self {
            Self::Bounded(secs) => Some(*secs),
            Self::Unbounded => None,
        }
    }
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self::Bounded(30)
    }
}

/// Command interface to the machine controller
///
/// Implementations map these onto the host runtime's command channel.
/// All three calls are synchronous; `wait_complete` blocks until the
/// controller reports the previous command finished, or until `timeout`
/// elapses (`None` waits indefinitely). A timeout must surface as
/// [`crate::ControllerError::CommandTimeout`] or
/// [`crate::ControllerError::ModeSwitchTimeout`] so the sequencer can
/// halt instead of continuing blind.
pub trait MachineController: Send {
    /// Switch the controller operating mode
    fn set_mode(&mut self, mode: ControllerMode) -> Result<()>;

    /// Block until the last issued command reports completion
    fn wait_complete(&mut self, timeout: Option<Duration>) -> Result<()>;

    /// Issue one line of machine code for immediate execution
    fn send_mdi(&mut self, line: &str) -> Result<()>;
}

/// Shared, inspectable log of issued MDI lines
pub type MdiLog = Arc<Mutex<Vec<String>>>;

/// Controller that accepts everything and executes nothing
///
/// Logs each call through tracing, records the MDI stream, and reports
/// immediate completion. Used to exercise the full UI flow without
/// hardware and as a simulation target.
pub struct LoggingController {
    mode: Option<ControllerMode>,
    mdi_log: MdiLog,
}

impl LoggingController {
    /// Create a new logging controller
    pub fn new() -> Self {
        Self {
            mode: None,
            mdi_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle onto the recorded MDI stream
    pub fn mdi_log(&self) -> MdiLog {
        self.mdi_log.clone()
    }

    /// The last mode the controller was switched to
    pub fn mode(&self) -> Option<ControllerMode> {
        self.mode
    }
}

impl Default for LoggingController {
    fn default() -> Self {
        Self::new()
    }
}

impl MachineController for LoggingController {
    fn set_mode(&mut self, mode: ControllerMode) -> Result<()> {
        tracing::info!("controller mode -> {}", mode);
        self.mode = Some(mode);
        Ok(())
    }

    fn wait_complete(&mut self, _timeout: Option<Duration>) -> Result<()> {
        Ok(())
    }

    fn send_mdi(&mut self, line: &str) -> Result<()> {
        tracing::info!("MDI: {}", line);
        self.mdi_log.lock().push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_policy_timeout() {
        assert_eq!(
            WaitPolicy::Bounded(30).timeout(),
            Some(Duration::from_secs(30))
        );
        assert_eq!(WaitPolicy::Unbounded.timeout(), None);
        assert_eq!(WaitPolicy::default(), WaitPolicy::Bounded(30));
        assert_eq!(WaitPolicy::Bounded(5).bound_secs(), Some(5));
    }

    #[test]
    fn test_logging_controller_records_stream() {
        let mut controller = LoggingController::new();
        let log = controller.mdi_log();

        controller.set_mode(ControllerMode::Mdi).unwrap();
        controller.send_mdi("G20").unwrap();
        controller.wait_complete(None).unwrap();
        controller.send_mdi("G90").unwrap();

        assert_eq!(controller.mode(), Some(ControllerMode::Mdi));
        assert_eq!(*log.lock(), vec!["G20".to_string(), "G90".to_string()]);
    }
}
