use euclid::{Point2D, Vector2D};

// empty struct for euclid typing
#[derive(Clone, PartialEq, Debug, Copy)]
pub struct PointGridInWorldFrame;

pub type WorldPos = Point2D<i32, PointGridInWorldFrame>;
pub type WorldMove = Vector2D<f32, PointGridInWorldFrame>;

pub fn euclidean_distance(a: WorldPos, b: WorldPos) -> f32 {
    (b - a).to_f32().length()
}
