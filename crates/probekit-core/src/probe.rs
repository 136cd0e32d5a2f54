//! Probe request data model
//!
//! A [`ProbeRequest`] is produced by the parameter dialog on confirmation
//! and consumed exactly once by the sequencer. It has no persistence; a
//! fresh request is collected for every run.

use crate::error::DialogError;
use crate::units::Units;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Corner of the touch plate the probe sits at
///
/// Collected by the parameter dialog. The radio group falls through to
/// `RightRear` when no corner is explicitly selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerPosition {
    /// Left/front corner
    LeftFront,
    /// Left/rear corner
    LeftRear,
    /// Right/front corner
    RightFront,
    /// Right/rear corner
    RightRear,
}

impl Default for CornerPosition {
    fn default() -> Self {
        Self::RightRear
    }
}

impl fmt::Display for CornerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeftFront => write!(f, "Left/Front"),
            Self::LeftRear => write!(f, "Left/Rear"),
            Self::RightFront => write!(f, "Right/Front"),
            Self::RightRear => write!(f, "Right/Rear"),
        }
    }
}

/// One tool-zeroing request, collected from the operator
///
/// Invariant: `tool_radius` is a positive finite number. Construct the
/// radius from operator text with [`parse_diameter`]; the dialog divides
/// the validated diameter by two.
///
/// `corner` and `unit` are recorded for operator reference and logging
/// but do not alter the emitted command sequence. `pause_between_probes`
/// gates only the X/Y alignment prompts.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeRequest {
    /// Probe along X after Z
    pub probe_x: bool,
    /// Probe along Y after Z (and after X when both are set)
    pub probe_y: bool,
    /// Which corner of the touch plate the tool is over
    pub corner: CornerPosition,
    /// Show the alignment prompt before each X/Y probe
    pub pause_between_probes: bool,
    /// Tool radius (diameter / 2), in touch-plate units
    pub tool_radius: f64,
    /// Unit the diameter was entered in
    pub unit: Units,
}

impl ProbeRequest {
    /// Z-only request with the given tool radius, used as a baseline by
    /// callers that fill in the remaining fields
    pub fn z_only(tool_radius: f64) -> Self {
        Self {
            probe_x: false,
            probe_y: false,
            corner: CornerPosition::default(),
            pause_between_probes: false,
            tool_radius,
            unit: Units::default(),
        }
    }
}

/// Parse the tool diameter the operator typed
///
/// Accepts a decimal number with surrounding whitespace. Rejects
/// non-numeric input, non-finite values, and values that are not
/// strictly positive. Returns the diameter; callers halve it for the
/// radius.
pub fn parse_diameter(input: &str) -> Result<f64, DialogError> {
    let trimmed = input.trim();
    let value: f64 = trimmed.parse().map_err(|_| DialogError::InvalidDiameter {
        input: input.to_string(),
        reason: "not a number".to_string(),
    })?;

    if !value.is_finite() {
        return Err(DialogError::InvalidDiameter {
            input: input.to_string(),
            reason: "not finite".to_string(),
        });
    }
    if value <= 0.0 {
        return Err(DialogError::InvalidDiameter {
            input: input.to_string(),
            reason: "must be positive".to_string(),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_diameter_accepts_decimals() {
        assert_eq!(parse_diameter("0.5").unwrap(), 0.5);
        assert_eq!(parse_diameter(" 6.35 ").unwrap(), 6.35);
        assert_eq!(parse_diameter("3").unwrap(), 3.0);
    }

    #[test]
    fn test_parse_diameter_rejects_garbage() {
        assert!(parse_diameter("").is_err());
        assert!(parse_diameter("abc").is_err());
        assert!(parse_diameter("1/8").is_err());
        assert!(parse_diameter("NaN").is_err());
        assert!(parse_diameter("inf").is_err());
    }

    #[test]
    fn test_parse_diameter_rejects_non_positive() {
        assert!(parse_diameter("0").is_err());
        assert!(parse_diameter("0.0").is_err());
        assert!(parse_diameter("-0.5").is_err());
    }

    #[test]
    fn test_corner_fall_through_default() {
        assert_eq!(CornerPosition::default(), CornerPosition::RightRear);
        assert_eq!(CornerPosition::RightRear.to_string(), "Right/Rear");
        assert_eq!(CornerPosition::LeftFront.to_string(), "Left/Front");
    }
}
