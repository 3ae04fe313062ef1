use euclid::Angle;

use crate::grid::WorldPos;

pub type FAngle = Angle<f32>;

pub fn standardized_starting_at_zero(angle: FAngle) -> FAngle {
    Angle::degrees(angle.to_degrees().rem_euclid(360.0))
}

/// Angle from `from` to `to`, counter-clockwise from the positive x-axis,
/// in `[0°, 360°)`.
pub fn bearing_between(from: WorldPos, to: WorldPos) -> FAngle {
    standardized_starting_at_zero((to - from).to_f32().angle_from_x_axis())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use euclid::point2;

    use super::*;

    #[test]
    fn test_standardize() {
        [
            (0.0, 0.0),
            (360.0, 0.0),
            (450.0, 90.0),
            (-90.0, 270.0),
            (-360.0, 0.0),
            (359.0, 359.0),
            (720.5, 0.5),
        ]
        .into_iter()
        .for_each(|(raw, standardized)| {
            assert_relative_eq!(
                standardized_starting_at_zero(Angle::degrees(raw)).to_degrees(),
                standardized,
                epsilon = 1e-4
            );
        });
    }

    #[test]
    fn bearing_along_the_axes() {
        let origin: WorldPos = point2(0, 0);
        [
            ((1, 0), 0.0),
            ((0, 1), 90.0),
            ((-1, 0), 180.0),
            ((0, -1), 270.0),
            ((1, 1), 45.0),
            ((1, -1), 315.0),
        ]
        .into_iter()
        .for_each(|((x, y), degrees)| {
            assert_relative_eq!(
                bearing_between(origin, point2(x, y)).to_degrees(),
                degrees,
                epsilon = 1e-4
            );
        });
    }

    #[test]
    fn bearing_of_a_three_four_five_triangle() {
        assert_relative_eq!(
            bearing_between(point2(0, 0), point2(3, 4)).to_degrees(),
            53.13010,
            epsilon = 1e-3
        );
    }

    #[test]
    fn bearing_is_relative_to_the_start_point() {
        assert_relative_eq!(
            bearing_between(point2(5, 5), point2(5, 9)).to_degrees(),
            90.0,
            epsilon = 1e-4
        );
    }
}
