pub mod convex_hull_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Z component of the cross product `(b - a) x (c - a)`.
///
/// Positive when `a -> b -> c` turns counter-clockwise, negative when it
/// turns clockwise, zero when the three points are collinear.
#[must_use]
pub fn orient_2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let ab: Vector2 = b - a;
    let ac: Vector2 = c - a;
    ab.perp(&ac)
}
