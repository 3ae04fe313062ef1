use std::fs;
use std::path::Path;

use itertools::Itertools;

use geometry::CardinalDirection;

use crate::error::{Result, SightlineError};
use crate::point::{Point, PointList};

pub const DEFAULT_POINT_FILE: &str = "Points.txt";

/// Loads the point file as a flat token stream: `x y id direction`, repeated,
/// any whitespace between tokens. The first token that fails to parse ends
/// the stream; records before it stand, and a trailing partial record is
/// dropped.
pub fn load_points(path: impl AsRef<Path>) -> Result<PointList> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SightlineError::SourceUnavailable {
        path: path.to_owned(),
        source,
    })?;
    log::info!("reading points from {}", path.display());

    let mut points = PointList::new();
    for (x, y, id, direction) in text.split_whitespace().tuples() {
        match parse_record(x, y, id, direction) {
            Some(point) => points.push(point),
            None => break,
        }
    }
    Ok(points)
}

pub fn parse_direction(token: &str) -> Result<CardinalDirection> {
    token
        .parse()
        .map_err(|_| SightlineError::UnknownDirection(token.to_owned()))
}

fn parse_record(x: &str, y: &str, id: &str, direction: &str) -> Option<Point> {
    let direction = match parse_direction(direction) {
        Ok(direction) => direction,
        Err(error) => {
            log::warn!("{error}; dropping the rest of the stream");
            return None;
        }
    };
    Some(Point::new(
        x.parse().ok()?,
        y.parse().ok()?,
        id.parse().ok()?,
        direction,
    ))
}
