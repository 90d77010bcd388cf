//! Geometry primitives used by the simplifier.

use strokefit_core::Point;

/// Distance from `point` to the infinite line through `line_start` and
/// `line_end`.
///
/// The direction vector is normalised before projecting. A zero-length
/// direction stays the zero vector, so the result degenerates to the
/// distance between `point` and `line_start`.
pub fn perpendicular_distance(point: Point, line_start: Point, line_end: Point) -> f64 {
    let mut dx = line_end.x - line_start.x;
    let mut dy = line_end.y - line_start.y;

    let mag = dx.hypot(dy);
    if mag > 0.0 {
        dx /= mag;
        dy /= mag;
    }

    let pvx = point.x - line_start.x;
    let pvy = point.y - line_start.y;

    // Project onto the direction and keep the perpendicular remainder.
    let dot = dx * pvx + dy * pvy;
    let ax = pvx - dot * dx;
    let ay = pvy - dot * dy;

    ax.hypot(ay)
}
