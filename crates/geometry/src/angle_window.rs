use euclid::Angle;
use getset::CopyGetters;

use crate::angle::{standardized_starting_at_zero, FAngle};

/// A circular angular range, built once per query from a center angle and a
/// half-width. Whether the window crosses the 0°/360° seam is decided here,
/// from the center and half-width alone, and never recomputed per tested
/// angle.
#[derive(Debug, Copy, Clone, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct AngleWindow {
    clockwise_end: FAngle,
    anticlockwise_end: FAngle,
    crosses_zero: bool,
}

impl AngleWindow {
    pub fn from_center_and_half_width(center: FAngle, half_width: FAngle) -> Self {
        AngleWindow {
            clockwise_end: standardized_starting_at_zero(center - half_width),
            anticlockwise_end: standardized_starting_at_zero(center + half_width),
            crosses_zero: center.to_degrees() < half_width.to_degrees(),
        }
    }

    pub fn from_degrees(center: f32, half_width: f32) -> Self {
        Self::from_center_and_half_width(Angle::degrees(center), Angle::degrees(half_width))
    }

    /// Both ends are inclusive. A crossing window is the union of two
    /// intervals, one on each side of the seam.
    pub fn contains_angle(&self, angle: FAngle) -> bool {
        let degrees = standardized_starting_at_zero(angle).to_degrees();
        let clockwise_end = self.clockwise_end.to_degrees();
        let anticlockwise_end = self.anticlockwise_end.to_degrees();
        if self.crosses_zero {
            (0.0 <= degrees && degrees <= anticlockwise_end)
                || (clockwise_end <= degrees && degrees <= 360.0)
        } else {
            clockwise_end <= degrees && degrees <= anticlockwise_end
        }
    }

    pub fn contains_degrees(&self, degrees: f32) -> bool {
        self.contains_angle(Angle::degrees(degrees))
    }
}
