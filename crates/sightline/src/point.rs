use std::fmt::{Display, Formatter};

use derive_more::Constructor;
use euclid::point2;

use geometry::{CardinalDirection, WorldPos};

pub type PointList = Vec<Point>;

/// One record from the point file. The direction only matters when the point
/// is the reference of a query; for candidates it is carried but unused.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq, Constructor)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub id: i32,
    pub direction: CardinalDirection,
}

impl Point {
    pub fn pos(&self) -> WorldPos {
        point2(self.x, self.y)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{},{})", self.x, self.y, self.id, self.direction)
    }
}
