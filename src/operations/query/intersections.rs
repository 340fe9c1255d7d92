use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::Point2;
use crate::model::{Wall, WallId};

/// One crossing between a probe segment and an existing wall.
#[derive(Debug, Clone, Copy)]
pub struct WallCrossing {
    /// The wall that is crossed.
    pub wall: WallId,
    /// The intersection point.
    pub point: Point2,
    /// Parametric position on the probe segment, `[0, 1]`.
    pub t_new: f64,
    /// Parametric position on the crossed wall, `[0, 1]`.
    pub t_wall: f64,
}

/// Finds every wall crossed by a new wall segment being drawn.
///
/// Drawing tools use the result to auto-junction: split each crossed wall at
/// its `t_wall`, then commit the new wall in pieces between the hits (the
/// commit itself stays with the tool).
pub struct FindWallIntersections {
    start: Point2,
    end: Point2,
}

impl FindWallIntersections {
    /// Creates a new intersection scan for the probe segment `start → end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Executes the scan, returning hits sorted ascending by `t_new`.
    ///
    /// Walls parallel to the probe (and degenerate walls) produce no hit.
    #[must_use]
    pub fn execute(&self, walls: &[Wall]) -> Vec<WallCrossing> {
        let mut crossings: Vec<WallCrossing> = walls
            .iter()
            .filter(|w| !w.is_degenerate())
            .filter_map(|wall| {
                segment_segment_intersect_2d(&self.start, &self.end, &wall.start, &wall.end).map(
                    |(point, t_new, t_wall)| WallCrossing {
                        wall: wall.id,
                        point,
                        t_new,
                        t_wall,
                    },
                )
            })
            .collect();

        crossings.sort_by(|a, b| {
            a.t_new
                .partial_cmp(&b.t_new)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        crossings
    }
}
