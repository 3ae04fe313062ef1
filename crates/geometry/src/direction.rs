use euclid::Angle;
use strum_macros::{Display, EnumIter, EnumString};

use crate::angle::FAngle;

/// Facing of a point, from the point file. The mapping to an angle is total;
/// anything outside these four names is rejected where the file is parsed.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq, Display, EnumIter, EnumString)]
pub enum CardinalDirection {
    East,
    North,
    West,
    South,
}

impl CardinalDirection {
    pub fn angle(&self) -> FAngle {
        Angle::degrees(match self {
            CardinalDirection::East => 0.0,
            CardinalDirection::North => 90.0,
            CardinalDirection::West => 180.0,
            CardinalDirection::South => 270.0,
        })
    }
}
