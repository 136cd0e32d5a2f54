//! Measurement units
//!
//! The parameter dialog collects the unit the operator entered the tool
//! diameter in. The probing procedure itself always runs in inches
//! (`G20`), so the unit is carried on the request for operator reference
//! and logging only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Millimeters
    Mm,
    /// Inches
    Inch,
}

impl Default for Units {
    fn default() -> Self {
        Self::Mm
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mm => write!(f, "mm"),
            Self::Inch => write!(f, "inch"),
        }
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mm" | "metric" => Ok(Self::Mm),
            "inch" | "in" | "imperial" => Ok(Self::Inch),
            _ => Err(format!("Unknown unit: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("mm".parse::<Units>().unwrap(), Units::Mm);
        assert_eq!("in".parse::<Units>().unwrap(), Units::Inch);
        assert_eq!("Inch".parse::<Units>().unwrap(), Units::Inch);
        assert!("furlong".parse::<Units>().is_err());

        assert_eq!(Units::Mm.to_string(), "mm");
        assert_eq!(Units::Inch.to_string(), "inch");
        assert_eq!(Units::default(), Units::Mm);
    }
}
