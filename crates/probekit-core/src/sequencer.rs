//! Tool-zero probing sequencer
//!
//! Drives the automatic tool-zeroing procedure: collect a request,
//! switch the controller to MDI, then issue a fixed series of probing
//! and offset commands, each blocking on the previous one's
//! confirmation. Ordering is strict program order; every probing step
//! depends physically on the machine position the prior step produced,
//! so any controller failure halts the remainder of the run.

use crate::controller::{ControllerMode, MachineController, WaitPolicy};
use crate::dialog::{DialogResponse, ParameterDialog, PromptDialog};
use crate::error::{ControllerError, Error, Result};
use crate::event::{EventDispatcher, SequencerEvent};
use crate::gcode::{self, Axis};
use crate::probe::ProbeRequest;
use serde::{Deserialize, Serialize};

/// Message shown before the Z probe
pub const JOG_PROMPT: &str = "Jog tool over touchplate and press OK";

/// Message shown before probing the given axis
pub fn align_prompt(axis: Axis) -> String {
    format!("Align tool flutes for {}-axis travel and press OK", axis)
}

/// Touch plate geometry, in inches
///
/// Set once at sequencer construction and read-only thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchPlate {
    /// Height of the touch plate
    pub plate_height: f64,
    /// Width of the touch plate
    pub plate_width: f64,
    /// How high to lift the tool above the plate while probing X and Y
    pub travel_height: f64,
    /// How high to lift the tool after probing is done
    pub lift_height: f64,
}

impl Default for TouchPlate {
    fn default() -> Self {
        Self {
            plate_height: 1.0,
            plate_width: 2.205,
            travel_height: 0.125,
            lift_height: 0.5,
        }
    }
}

/// Probing motion parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbingMotion {
    /// Feed rate for probing and retract moves
    pub probe_feed: f64,
    /// Feed rate for the return-toward-center move
    pub center_feed: f64,
    /// Maximum travel when probing down along Z
    pub z_probe_distance: f64,
    /// Maximum travel when probing along X or Y
    pub xy_probe_distance: f64,
    /// Coordinate to return to after an X/Y probe, in coordinate system 1
    pub center_return_target: f64,
}

impl Default for ProbingMotion {
    fn default() -> Self {
        Self {
            probe_feed: 2.0,
            center_feed: 10.0,
            z_probe_distance: 4.0,
            xy_probe_distance: 15.0,
            center_return_target: 1.0,
        }
    }
}

/// Outcome of one UI-triggered tool-zero attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolZeroOutcome {
    /// The full sequence ran
    Completed,
    /// The operator cancelled parameter entry; no machine command was issued
    Cancelled,
}

/// Orchestrates the tool-zeroing procedure over an injected controller
pub struct ToolZeroSequencer {
    controller: Box<dyn MachineController>,
    touch_plate: TouchPlate,
    motion: ProbingMotion,
    wait_policy: WaitPolicy,
    events: EventDispatcher,
}

impl ToolZeroSequencer {
    /// Create a new sequencer over the given controller handle
    pub fn new(
        controller: Box<dyn MachineController>,
        touch_plate: TouchPlate,
        motion: ProbingMotion,
        wait_policy: WaitPolicy,
    ) -> Self {
        Self {
            controller,
            touch_plate,
            motion,
            wait_policy,
            events: EventDispatcher::default_with_buffer(),
        }
    }

    /// Progress event dispatcher
    pub fn events(&self) -> &EventDispatcher {
        &self.events
    }

    /// The configured touch plate geometry
    pub fn touch_plate(&self) -> TouchPlate {
        self.touch_plate
    }

    /// Switch the controller to MDI mode and wait for the switch
    pub fn initialize(&mut self) -> Result<()> {
        self.controller.set_mode(ControllerMode::Mdi)?;
        let policy = self.wait_policy;
        self.controller.wait_complete(policy.timeout()).map_err(|e| {
            if e.is_timeout() {
                Error::Controller(ControllerError::ModeSwitchTimeout {
                    timeout_s: policy.bound_secs().unwrap_or(0),
                })
            } else {
                e
            }
        })?;
        self.events.publish(SequencerEvent::ModeChanged);
        Ok(())
    }

    /// Issue one MDI line and wait for its confirmation
    ///
    /// The sole primitive all motion helpers build on. A timeout is
    /// reported as [`ControllerError::CommandTimeout`] carrying the line
    /// that stalled.
    pub fn run_mdi(&mut self, line: &str) -> Result<()> {
        tracing::debug!("MDI: {}", line);
        self.controller.send_mdi(line)?;
        let policy = self.wait_policy;
        self.controller.wait_complete(policy.timeout()).map_err(|e| {
            if e.is_timeout() {
                Error::Controller(ControllerError::CommandTimeout {
                    command: line.to_string(),
                    timeout_s: policy.bound_secs().unwrap_or(0),
                })
            } else {
                e
            }
        })?;
        self.events.publish(SequencerEvent::MdiIssued(line.to_string()));
        Ok(())
    }

    /// Set absolute positioning, then issue the compound motion command
    pub fn move_absolute(&mut self, command: &str) -> Result<()> {
        self.run_mdi(gcode::ABSOLUTE)?;
        self.run_mdi(command)
    }

    /// Set incremental positioning, then issue the compound motion command
    pub fn move_incremental(&mut self, command: &str) -> Result<()> {
        self.run_mdi(gcode::INCREMENTAL)?;
        self.run_mdi(command)
    }

    /// Probe down along Z and establish the Z work offset
    ///
    /// The probing move is trusted to stop on contact; `G38.3` completes
    /// at its travel limit otherwise. Controllers that can detect the
    /// missing contact event report [`ControllerError::ProbeNoContact`].
    pub fn probe_z(&mut self) -> Result<()> {
        let descend = gcode::probe_toward(
            Axis::Z,
            -self.motion.z_probe_distance,
            self.motion.probe_feed,
        );
        self.run_mdi(&descend)?;

        let offset = gcode::set_work_offset(Axis::Z, self.touch_plate.plate_height);
        self.run_mdi(&offset)?;

        let retract = gcode::linear_move(
            Axis::Z,
            self.touch_plate.plate_height + self.touch_plate.travel_height,
            self.motion.probe_feed,
        );
        self.move_absolute(&retract)?;

        self.events.publish(SequencerEvent::AxisProbed(Axis::Z));
        Ok(())
    }

    /// Probe along X or Y and establish that axis' work offset
    ///
    /// The offset maps the contact position to `plate_width - tool_radius`,
    /// so the tool centerline ends up referenced to the plate edge.
    pub fn probe_axis(&mut self, axis: Axis, tool_radius: f64) -> Result<()> {
        let approach = gcode::probe_toward(
            axis,
            self.motion.xy_probe_distance,
            self.motion.probe_feed,
        );
        self.move_incremental(&approach)?;

        let offset =
            gcode::set_work_offset(axis, self.touch_plate.plate_width - tool_radius);
        self.run_mdi(&offset)?;

        let back = gcode::linear_move_cs1(
            axis,
            self.motion.center_return_target,
            self.motion.center_feed,
        );
        self.move_absolute(&back)?;

        self.events.publish(SequencerEvent::AxisProbed(axis));
        Ok(())
    }

    /// Run the full procedure for an already-collected request
    pub fn run(&mut self, request: &ProbeRequest, prompt: &dyn PromptDialog) -> Result<()> {
        tracing::info!(
            probe_x = request.probe_x,
            probe_y = request.probe_y,
            corner = %request.corner,
            unit = %request.unit,
            tool_radius = request.tool_radius,
            "starting tool zero"
        );
        self.events.publish(SequencerEvent::Started);

        let result = self.run_steps(request, prompt);
        match &result {
            Ok(()) => self.events.publish(SequencerEvent::Completed),
            Err(e) => self.events.publish(SequencerEvent::Failed(e.to_string())),
        }
        result
    }

    fn run_steps(&mut self, request: &ProbeRequest, prompt: &dyn PromptDialog) -> Result<()> {
        self.initialize()?;

        // The procedure geometry is defined in inches regardless of the
        // unit the diameter was entered in.
        self.run_mdi(gcode::SELECT_INCHES)?;

        prompt.show(JOG_PROMPT)?;
        self.probe_z()?;

        if request.probe_x {
            if request.pause_between_probes {
                prompt.show(&align_prompt(Axis::X))?;
            }
            self.probe_axis(Axis::X, request.tool_radius)?;
        }

        if request.probe_y {
            if request.pause_between_probes {
                prompt.show(&align_prompt(Axis::Y))?;
            }
            self.probe_axis(Axis::Y, request.tool_radius)?;
        }

        // Clear the tool before handing the machine back.
        let lift = gcode::linear_move(Axis::Z, self.touch_plate.lift_height, self.motion.probe_feed);
        self.move_incremental(&lift)
    }

    /// Top-level handler bound to the panel's single trigger
    ///
    /// Collects a request and runs it. Cancellation aborts before any
    /// machine command is issued.
    pub fn auto_tool_zero(
        &mut self,
        params: &dyn ParameterDialog,
        prompt: &dyn PromptDialog,
    ) -> Result<ToolZeroOutcome> {
        match params.collect()? {
            DialogResponse::Cancelled => {
                tracing::info!("tool zero cancelled before any motion");
                Ok(ToolZeroOutcome::Cancelled)
            }
            DialogResponse::Confirmed(request) => {
                self.run(&request, prompt)?;
                Ok(ToolZeroOutcome::Completed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::LoggingController;

    struct SilentPrompt;

    impl PromptDialog for SilentPrompt {
        fn show(&self, _message: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_align_prompt_names_axis() {
        assert_eq!(
            align_prompt(Axis::X),
            "Align tool flutes for X-axis travel and press OK"
        );
    }

    #[test]
    fn test_default_geometry() {
        let plate = TouchPlate::default();
        assert_eq!(plate.plate_height, 1.0);
        assert_eq!(plate.plate_width, 2.205);
        assert_eq!(plate.travel_height, 0.125);
        assert_eq!(plate.lift_height, 0.5);

        let motion = ProbingMotion::default();
        assert_eq!(motion.probe_feed, 2.0);
        assert_eq!(motion.center_feed, 10.0);
    }

    #[test]
    fn test_probe_z_emission() {
        let controller = LoggingController::new();
        let log = controller.mdi_log();
        let mut seq = ToolZeroSequencer::new(
            Box::new(controller),
            TouchPlate::default(),
            ProbingMotion::default(),
            WaitPolicy::default(),
        );

        seq.probe_z().unwrap();

        assert_eq!(
            *log.lock(),
            vec![
                "G38.3 Z-4 F2".to_string(),
                "G10 L20 P1 Z1".to_string(),
                "G90".to_string(),
                "G1 Z1.125 F2".to_string(),
            ]
        );
    }

    #[test]
    fn test_run_publishes_terminal_event() {
        let controller = LoggingController::new();
        let mut seq = ToolZeroSequencer::new(
            Box::new(controller),
            TouchPlate::default(),
            ProbingMotion::default(),
            WaitPolicy::default(),
        );
        let mut rx = seq.events().subscribe();

        let request = ProbeRequest::z_only(0.125);
        seq.run(&request, &SilentPrompt).unwrap();

        let mut saw_completed = false;
        while let Ok(event) = rx.try_recv() {
            if matches!(event, SequencerEvent::Completed) {
                saw_completed = true;
            }
        }
        assert!(saw_completed);
    }
}
