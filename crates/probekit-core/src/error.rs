//! Error handling for Probekit
//!
//! Provides error types for the two layers of the application:
//! - Dialog errors (operator input)
//! - Controller errors (MDI command interface)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Dialog error type
///
/// Represents failures while collecting operator input, before any
/// machine motion has been issued.
#[derive(Error, Debug, Clone)]
pub enum DialogError {
    /// The operator dismissed a dialog without confirming it
    #[error("Dialog cancelled")]
    Cancelled,

    /// The tool diameter field did not parse to a positive finite number
    #[error("Invalid tool diameter '{input}': {reason}")]
    InvalidDiameter {
        /// The raw text the operator entered.
        input: String,
        /// The reason the text was rejected.
        reason: String,
    },
}

/// Controller error type
///
/// Represents errors surfaced by the machine-controller command
/// interface. Any of these occurring mid-sequence halts the remaining
/// probing steps, since later steps assume the machine reached the
/// position implied by the prior one.
#[derive(Error, Debug, Clone)]
pub enum ControllerError {
    /// Controller is not connected
    #[error("Controller not connected")]
    NotConnected,

    /// Mode switch was not confirmed within the wait bound
    #[error("Mode switch not confirmed after {timeout_s}s")]
    ModeSwitchTimeout {
        /// The wait bound in seconds.
        timeout_s: u64,
    },

    /// An MDI command was not confirmed within the wait bound
    #[error("Command '{command}' not confirmed after {timeout_s}s")]
    CommandTimeout {
        /// The MDI line that timed out.
        command: String,
        /// The wait bound in seconds.
        timeout_s: u64,
    },

    /// Command was rejected by the controller
    #[error("Command rejected: {reason}")]
    CommandRejected {
        /// The reason the command was rejected.
        reason: String,
    },

    /// A probing move completed its full travel without a contact event
    #[error("Probe move on {axis} completed without contact")]
    ProbeNoContact {
        /// The axis that was being probed.
        axis: String,
    },

    /// Generic controller error
    #[error("Controller error: {message}")]
    Other {
        /// The error message.
        message: String,
    },
}

/// Main error type for Probekit
///
/// A unified error type that can represent any error from both layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Dialog error
    #[error(transparent)]
    Dialog(#[from] DialogError),

    /// Controller error
    #[error(transparent)]
    Controller(#[from] ControllerError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Error::Controller(
                ControllerError::ModeSwitchTimeout { .. } | ControllerError::CommandTimeout { .. }
            )
        )
    }

    /// Check if this is an operator cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Dialog(DialogError::Cancelled))
    }

    /// Check if this is a controller error
    pub fn is_controller_error(&self) -> bool {
        matches!(self, Error::Controller(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_error_display() {
        let err = DialogError::InvalidDiameter {
            input: "abc".to_string(),
            reason: "not a number".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid tool diameter 'abc': not a number");

        assert_eq!(DialogError::Cancelled.to_string(), "Dialog cancelled");
    }

    #[test]
    fn test_controller_error_display() {
        let err = ControllerError::CommandTimeout {
            command: "G20".to_string(),
            timeout_s: 30,
        };
        assert_eq!(err.to_string(), "Command 'G20' not confirmed after 30s");

        let err = ControllerError::ProbeNoContact {
            axis: "X".to_string(),
        };
        assert_eq!(err.to_string(), "Probe move on X completed without contact");
    }

    #[test]
    fn test_error_classification() {
        let err: Error = ControllerError::ModeSwitchTimeout { timeout_s: 30 }.into();
        assert!(err.is_timeout());
        assert!(err.is_controller_error());
        assert!(!err.is_cancelled());

        let err: Error = DialogError::Cancelled.into();
        assert!(err.is_cancelled());
        assert!(!err.is_timeout());
    }
}
