//! Tile layout patterns.

use crate::error::DesignError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six supported tile layouts.
///
/// The discriminants are stable and index the layout strategy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// Regular grid
    Straight = 0,
    /// Rows offset by half a tile
    Brick = 1,
    /// Alternating horizontal/vertical tile pairs
    Herringbone = 2,
    /// Straight grid rotated 45 degrees
    Diagonal = 3,
    /// 2x2 units of horizontal and vertical pairs
    Basketweave = 4,
    /// Every tile rotated 90 degrees
    Vertical = 5,
}

impl Pattern {
    /// Number of patterns.
    pub const COUNT: usize = 6;

    /// All patterns in selector order.
    pub const ALL: [Pattern; Self::COUNT] = [
        Pattern::Straight,
        Pattern::Brick,
        Pattern::Herringbone,
        Pattern::Diagonal,
        Pattern::Basketweave,
        Pattern::Vertical,
    ];

    /// Position in [`Pattern::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase identifier used in persisted records.
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Straight => "straight",
            Pattern::Brick => "brick",
            Pattern::Herringbone => "herringbone",
            Pattern::Diagonal => "diagonal",
            Pattern::Basketweave => "basketweave",
            Pattern::Vertical => "vertical",
        }
    }

    /// Human-readable title.
    pub fn title(self) -> &'static str {
        match self {
            Pattern::Straight => "Straight Pattern",
            Pattern::Brick => "Brick/Offset Pattern",
            Pattern::Herringbone => "Herringbone Pattern",
            Pattern::Diagonal => "Diagonal Pattern",
            Pattern::Basketweave => "Basketweave Pattern",
            Pattern::Vertical => "Vertical Pattern",
        }
    }

    /// Installer notes shown next to the pattern selector.
    pub fn description(self) -> &'static str {
        match self {
            Pattern::Straight => {
                "Classic grid layout. Easiest to install, minimal waste (5-10%). \
                 Works well with any tile size. Best for rectangular tiles."
            }
            Pattern::Brick => {
                "Each row offset by half tile width. Creates visual interest. \
                 Moderate waste (10-15%). Popular for subway tile."
            }
            Pattern::Herringbone => {
                "Tiles laid in zigzag pattern at 45 or 90 degrees. Adds visual complexity. \
                 Higher waste (15-20%). Requires precision cutting."
            }
            Pattern::Diagonal => {
                "Tiles rotated 45 degrees to room walls. Makes small spaces feel larger. \
                 Higher waste (15-20%) due to perimeter cuts."
            }
            Pattern::Basketweave => {
                "Pairs of tiles alternating horizontal/vertical. Traditional look. \
                 Moderate waste (10-15%). Works best with square tiles."
            }
            Pattern::Vertical => {
                "Tiles installed vertically (especially for rectangular). \
                 Makes ceilings appear higher. Similar waste to straight pattern."
            }
        }
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::Straight
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Pattern {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| DesignError::UnknownPattern(s.to_string()))
    }
}
