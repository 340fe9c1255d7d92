use super::{Point2, TOLERANCE};

/// Result of projecting a point onto a bounded segment.
#[derive(Debug, Clone, Copy)]
pub struct NearestPoint {
    /// The closest point on the segment.
    pub point: Point2,
    /// Parametric position of the closest point, in `[0, 1]`.
    pub t: f64,
    /// Distance from the query point to the closest point.
    pub distance: f64,
}

/// Projects `p` onto the segment `a → b` and clamps to the segment bounds.
///
/// A zero-length segment yields `t = 0` with the distance to `a`.
#[must_use]
pub fn nearest_point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> NearestPoint {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < TOLERANCE * TOLERANCE {
        return NearestPoint {
            point: *a,
            t: 0.0,
            distance: ((p.x - a.x).powi(2) + (p.y - a.y).powi(2)).sqrt(),
        };
    }

    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    let closest = Point2::new(a.x + t * dx, a.y + t * dy);
    let distance = ((p.x - closest.x).powi(2) + (p.y - closest.y).powi(2)).sqrt();

    NearestPoint {
        point: closest,
        t,
        distance,
    }
}

/// Returns the minimum distance from `p` to the segment `a → b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    nearest_point_on_segment(p, a, b).distance
}
