use geometry::{bearing_between, euclidean_distance, AngleWindow, FAngle, WorldPos};

use crate::error::{Result, SightlineError};
use crate::point::{Point, PointList};

/// Every point visible from the point with `reference_id`, in original list
/// order. The reference id itself (all carriers of it) is never emitted.
pub fn visible_points(
    points: &[Point],
    reference_id: i32,
    half_width: FAngle,
    max_distance: f32,
) -> Result<PointList> {
    let reference = points
        .iter()
        .find(|point| point.id == reference_id)
        .ok_or(SightlineError::PointNotFound(reference_id))?;
    let window = AngleWindow::from_center_and_half_width(reference.direction.angle(), half_width);
    Ok(points
        .iter()
        .filter(|candidate| candidate.id != reference_id)
        .filter(|candidate| is_visible(reference.pos(), candidate.pos(), max_distance, window))
        .copied()
        .collect())
}

/// Distance gate first, angle gate second. Exactly at `max_distance` is
/// still visible.
pub fn is_visible(
    reference: WorldPos,
    candidate: WorldPos,
    max_distance: f32,
    window: AngleWindow,
) -> bool {
    if euclidean_distance(reference, candidate) > max_distance {
        return false;
    }
    window.contains_angle(bearing_between(reference, candidate))
}
