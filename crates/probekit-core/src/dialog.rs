//! Dialog capabilities
//!
//! The sequencer never talks to a widget toolkit directly. It is handed
//! two capabilities at the call site: a blocking prompt and a parameter
//! collector. The GTK implementations live in the UI crate; tests
//! substitute doubles.

use crate::error::Result;
use crate::probe::ProbeRequest;

/// Outcome of a parameter-entry dialog
///
/// Cancellation is an explicit variant, never stale state: a cancelled
/// dialog yields `Cancelled` and the caller aborts before any machine
/// command is issued.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogResponse {
    /// The operator confirmed; the request is valid
    Confirmed(ProbeRequest),
    /// The operator cancelled; no request exists
    Cancelled,
}

/// Blocking informational prompt
///
/// `show` suspends the calling flow until the operator acknowledges the
/// message. Dismissing the prompt without acknowledging it surfaces
/// [`crate::DialogError::Cancelled`], which halts the sequence: no
/// probing move is issued without an explicit acknowledgement.
pub trait PromptDialog {
    /// Display `message` and block until acknowledged
    fn show(&self, message: &str) -> Result<()>;
}

/// Parameter-entry dialog for one tool-zeroing run
///
/// Implementations validate the diameter field before confirming:
/// non-numeric or non-positive input never reaches the sequencer.
pub trait ParameterDialog {
    /// Present the form and block until confirmed or cancelled
    fn collect(&self) -> Result<DialogResponse>;
}
