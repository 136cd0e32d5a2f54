//! # Probekit Core
//!
//! Core types and capabilities for Probekit.
//! Provides the probe request data model, the MDI command vocabulary,
//! the machine-controller and dialog capabilities, and the tool-zero
//! sequencer that drives them.

pub mod controller;
pub mod dialog;
pub mod error;
pub mod event;
pub mod gcode;
pub mod probe;
pub mod sequencer;
pub mod units;

pub use controller::{ControllerMode, LoggingController, MachineController, MdiLog, WaitPolicy};

pub use dialog::{DialogResponse, ParameterDialog, PromptDialog};

pub use error::{ControllerError, DialogError, Error, Result};

pub use event::{EventDispatcher, SequencerEvent};

pub use gcode::Axis;

pub use probe::{parse_diameter, CornerPosition, ProbeRequest};

pub use sequencer::{
    align_prompt, ProbingMotion, ToolZeroOutcome, ToolZeroSequencer, TouchPlate, JOG_PROMPT,
};

pub use units::Units;
