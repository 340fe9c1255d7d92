use crate::math::distance_2d::nearest_point_on_segment;
use crate::math::Point2;
use crate::model::{Wall, WallId};

/// Result of a wall pick query.
#[derive(Debug, Clone, Copy)]
pub struct WallHit {
    /// The wall closest to the query point.
    pub wall: WallId,
    /// The closest point on the wall centerline.
    pub point: Point2,
    /// Parametric position of the closest point along the wall, `[0, 1]`.
    pub t: f64,
    /// Distance from the query point to the centerline.
    pub distance: f64,
}

/// Finds the wall nearest to a point, within a pick threshold.
///
/// Each wall's effective threshold is `threshold + thickness / 2`, so thick
/// walls are easier to hit. Ties break by minimum centerline distance.
pub struct FindWallAtPoint {
    point: Point2,
    threshold: f64,
}

impl FindWallAtPoint {
    /// Creates a new wall pick query.
    #[must_use]
    pub fn new(point: Point2, threshold: f64) -> Self {
        Self { point, threshold }
    }

    /// Executes the query against a wall set.
    ///
    /// Degenerate walls are skipped. Returns `None` when no wall is within
    /// its effective threshold.
    #[must_use]
    pub fn execute(&self, walls: &[Wall]) -> Option<WallHit> {
        let mut best: Option<WallHit> = None;

        for wall in walls.iter().filter(|w| !w.is_degenerate()) {
            let near = nearest_point_on_segment(&self.point, &wall.start, &wall.end);
            let effective = self.threshold + wall.thickness / 2.0;
            if near.distance > effective {
                continue;
            }
            if best.is_none_or(|b| near.distance < b.distance) {
                best = Some(WallHit {
                    wall: wall.id,
                    point: near.point,
                    t: near.t,
                    distance: near.distance,
                });
            }
        }

        best
    }
}
