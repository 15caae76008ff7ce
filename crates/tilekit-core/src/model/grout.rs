//! Grout width and color.

use super::color::Rgb;
use crate::constants::DEFAULT_GROUT_COLOR;
use crate::error::DesignError;
use crate::units::{format_fraction_inches, parse_inches};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tolerance when matching an inch value against a sixteenth step.
const GROUT_MATCH_TOLERANCE: f64 = 1e-6;

/// Grout joint width, quantized to sixteenths of an inch between 1/16" and 1/2".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct GroutWidth(u8);

impl GroutWidth {
    pub const MIN: GroutWidth = GroutWidth(1);
    pub const MAX: GroutWidth = GroutWidth(8);
    /// 1/8"
    pub const DEFAULT: GroutWidth = GroutWidth(2);

    /// Every selectable width, narrowest first.
    pub const ALL: [GroutWidth; 8] = [
        GroutWidth(1),
        GroutWidth(2),
        GroutWidth(3),
        GroutWidth(4),
        GroutWidth(5),
        GroutWidth(6),
        GroutWidth(7),
        GroutWidth(8),
    ];

    pub fn from_sixteenths(sixteenths: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&sixteenths)
            .then_some(Self(sixteenths))
    }

    /// Snap an arbitrary width to the nearest allowed step.
    ///
    /// Values outside the range clamp to 1/16" or 1/2"; non-finite input
    /// yields the default width.
    pub fn quantize(inches: f64) -> Self {
        if !inches.is_finite() {
            return Self::DEFAULT;
        }
        let steps = (inches * 16.0).round().clamp(Self::MIN.0 as f64, Self::MAX.0 as f64);
        Self(steps as u8)
    }

    pub fn sixteenths(self) -> u8 {
        self.0
    }

    pub fn inches(self) -> f64 {
        self.0 as f64 / 16.0
    }
}

impl Default for GroutWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for GroutWidth {
    type Error = DesignError;

    fn try_from(inches: f64) -> Result<Self, Self::Error> {
        let candidate = Self::quantize(inches);
        if (candidate.inches() - inches).abs() <= GROUT_MATCH_TOLERANCE {
            Ok(candidate)
        } else {
            Err(DesignError::UnsupportedGroutWidth(inches))
        }
    }
}

impl From<GroutWidth> for f64 {
    fn from(width: GroutWidth) -> Self {
        width.inches()
    }
}

impl FromStr for GroutWidth {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inches = parse_inches(s).map_err(|reason| DesignError::InvalidNumber {
            input: s.to_string(),
            reason,
        })?;
        Self::try_from(inches)
    }
}

impl fmt::Display for GroutWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_fraction_inches(self.inches()))
    }
}

/// Grout settings for a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroutSpec {
    pub width: GroutWidth,
    pub color: Rgb,
}

impl Default for GroutSpec {
    fn default() -> Self {
        Self {
            width: GroutWidth::DEFAULT,
            color: Rgb::from_hex(DEFAULT_GROUT_COLOR).unwrap_or(Rgb::new(0xCC, 0xCC, 0xCC)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_widths() {
        let inches: Vec<f64> = GroutWidth::ALL.iter().map(|w| w.inches()).collect();
        assert_eq!(
            inches,
            vec![0.0625, 0.125, 0.1875, 0.25, 0.3125, 0.375, 0.4375, 0.5]
        );
    }

    #[test]
    fn test_quantize() {
        assert_eq!(GroutWidth::quantize(0.125), GroutWidth::DEFAULT);
        assert_eq!(GroutWidth::quantize(0.13).inches(), 0.125);
        assert_eq!(GroutWidth::quantize(0.0).inches(), 0.0625);
        assert_eq!(GroutWidth::quantize(2.0).inches(), 0.5);
        assert_eq!(GroutWidth::quantize(f64::NAN), GroutWidth::DEFAULT);
    }

    #[test]
    fn test_try_from_is_strict() {
        assert_eq!(GroutWidth::try_from(0.375).unwrap().sixteenths(), 6);
        assert!(matches!(
            GroutWidth::try_from(0.2),
            Err(DesignError::UnsupportedGroutWidth(_))
        ));
        assert!(GroutWidth::try_from(0.75).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("3/16".parse::<GroutWidth>().unwrap().sixteenths(), 3);
        assert_eq!("0.5".parse::<GroutWidth>().unwrap(), GroutWidth::MAX);
        assert_eq!(GroutWidth::DEFAULT.to_string(), "1/8\"");
        assert_eq!(GroutWidth::MAX.to_string(), "1/2\"");
        assert!("wide".parse::<GroutWidth>().is_err());
    }

    #[test]
    fn test_from_sixteenths_bounds() {
        assert!(GroutWidth::from_sixteenths(0).is_none());
        assert!(GroutWidth::from_sixteenths(9).is_none());
        assert_eq!(GroutWidth::from_sixteenths(4).unwrap().inches(), 0.25);
    }

    #[test]
    fn test_default_spec() {
        let spec = GroutSpec::default();
        assert_eq!(spec.width.inches(), 0.125);
        assert_eq!(spec.color.to_string(), "#CCCCCC");
    }
}
