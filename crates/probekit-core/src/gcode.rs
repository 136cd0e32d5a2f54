//! MDI command vocabulary
//!
//! Constructors for the fixed set of G-code lines the sequencer issues.
//! The emitted text must stay bit-exact for compatibility with the
//! target controller, so all formatting funnels through one place.
//!
//! Numbers are rendered with the shortest representation that round-trips
//! (`1.955`, `1.125`, `15`, `-4`), which is what the controller expects
//! on the MDI interface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine axis addressed by a motion or offset command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// The single-letter G-code address for this axis
    pub fn letter(&self) -> char {
        match self {
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Select inch units
pub const SELECT_INCHES: &str = "G20";

/// Absolute positioning mode
pub const ABSOLUTE: &str = "G90";

/// Incremental positioning mode
pub const INCREMENTAL: &str = "G91";

/// Render a coordinate or feed value in MDI form
fn num(value: f64) -> String {
    format!("{}", value)
}

/// Probe toward the workpiece, stopping on contact
///
/// `G38.3` does not error if no contact occurs; the move simply
/// completes at its travel limit.
pub fn probe_toward(axis: Axis, distance: f64, feed: f64) -> String {
    format!("G38.3 {}{} F{}", axis, num(distance), num(feed))
}

/// Set the work offset for coordinate system 1 so the current position
/// maps to `value` on the given axis
pub fn set_work_offset(axis: Axis, value: f64) -> String {
    format!("G10 L20 P1 {}{}", axis, num(value))
}

/// Linear move on a single axis
pub fn linear_move(axis: Axis, target: f64, feed: f64) -> String {
    format!("G1 {}{} F{}", axis, num(target), num(feed))
}

/// Linear move on a single axis, addressed in coordinate system 1
pub fn linear_move_cs1(axis: Axis, target: f64, feed: f64) -> String {
    format!("G54 G1 {}{} F{}", axis, num(target), num(feed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_toward_exact_text() {
        assert_eq!(probe_toward(Axis::Z, -4.0, 2.0), "G38.3 Z-4 F2");
        assert_eq!(probe_toward(Axis::X, 15.0, 2.0), "G38.3 X15 F2");
        assert_eq!(probe_toward(Axis::Y, 15.0, 2.0), "G38.3 Y15 F2");
    }

    #[test]
    fn test_set_work_offset_exact_text() {
        assert_eq!(set_work_offset(Axis::Z, 1.0), "G10 L20 P1 Z1");
        // 2.205 - 0.25: the radius flows unchanged into the offset
        assert_eq!(set_work_offset(Axis::X, 2.205 - 0.25), "G10 L20 P1 X1.955");
    }

    #[test]
    fn test_linear_moves_exact_text() {
        assert_eq!(linear_move(Axis::Z, 1.125, 2.0), "G1 Z1.125 F2");
        assert_eq!(linear_move(Axis::Z, 0.5, 2.0), "G1 Z0.5 F2");
        assert_eq!(linear_move_cs1(Axis::X, 1.0, 10.0), "G54 G1 X1 F10");
    }

    #[test]
    fn test_mode_constants() {
        assert_eq!(SELECT_INCHES, "G20");
        assert_eq!(ABSOLUTE, "G90");
        assert_eq!(INCREMENTAL, "G91");
    }
}
