use crate::error::{OperationError, Result};
use crate::math::distance_2d::nearest_point_on_segment;
use crate::math::Point2;
use crate::model::{Wall, WallId};
use crate::topology::MERGE_EPSILON;

/// Splits a wall into two at a point on (or near) its centerline.
///
/// The split point is the projection of the given point onto the wall, and
/// becomes the shared boundary: `first.end == second.start`. Both halves
/// inherit thickness and height and carry fresh ids; **openings are
/// cleared**, not copied — the caller reassigns each opening to the half
/// whose span now contains it, as part of its commit transaction (remove
/// old wall, insert both halves, reattach openings).
pub struct SplitWallAtPoint {
    point: Point2,
}

impl SplitWallAtPoint {
    /// Creates a new split operation at the given point.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self { point }
    }

    /// Executes the split, returning the two halves in centerline order.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the wall is degenerate or
    /// the projected split point lands on an endpoint (either half would be
    /// degenerate).
    pub fn execute(&self, wall: &Wall) -> Result<(Wall, Wall)> {
        if wall.is_degenerate() {
            return Err(
                OperationError::InvalidInput("cannot split a zero-length wall".to_owned()).into(),
            );
        }

        let near = nearest_point_on_segment(&self.point, &wall.start, &wall.end);
        let len = wall.length();
        if near.t * len < MERGE_EPSILON || (1.0 - near.t) * len < MERGE_EPSILON {
            return Err(OperationError::InvalidInput(format!(
                "split point at t = {} coincides with a wall endpoint",
                near.t
            ))
            .into());
        }

        let first = Wall {
            id: WallId::fresh(),
            start: wall.start,
            end: near.point,
            thickness: wall.thickness,
            height: wall.height,
            openings: Vec::new(),
        };
        let second = Wall {
            id: WallId::fresh(),
            start: near.point,
            end: wall.end,
            thickness: wall.thickness,
            height: wall.height,
            openings: Vec::new(),
        };

        Ok((first, second))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::OpeningId;

    fn wall_4m() -> Wall {
        Wall::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0), 0.2, 2.5)
    }

    #[test]
    fn halves_share_the_split_point() {
        let wall = wall_4m();
        let (a, b) = SplitWallAtPoint::new(Point2::new(1.0, 0.0))
            .execute(&wall)
            .unwrap();

        assert!((a.end - b.start).norm() < 1e-12);
        assert!((a.end.x - 1.0).abs() < 1e-12);
        assert!((a.length() + b.length() - wall.length()).abs() < 1e-9);
        assert!((a.thickness - wall.thickness).abs() < 1e-12);
        assert!((b.height - wall.height).abs() < 1e-12);
    }

    #[test]
    fn off_axis_point_projects_onto_the_centerline() {
        let wall = wall_4m();
        let (a, b) = SplitWallAtPoint::new(Point2::new(3.0, 0.4))
            .execute(&wall)
            .unwrap();
        assert!((a.end.x - 3.0).abs() < 1e-12);
        assert!(a.end.y.abs() < 1e-12);
        assert!((a.length() + b.length() - wall.length()).abs() < 1e-9);
    }

    #[test]
    fn ids_are_fresh_and_distinct() {
        let wall = wall_4m();
        let (a, b) = SplitWallAtPoint::new(Point2::new(2.0, 0.0))
            .execute(&wall)
            .unwrap();
        assert_ne!(a.id, wall.id);
        assert_ne!(b.id, wall.id);
        assert_ne!(a.id, b.id);

        // Splitting the same wall twice never reuses an id.
        let (c, d) = SplitWallAtPoint::new(Point2::new(2.0, 0.0))
            .execute(&wall)
            .unwrap();
        assert_ne!(a.id, c.id);
        assert_ne!(b.id, d.id);
    }

    #[test]
    fn openings_are_cleared() {
        let mut wall = wall_4m();
        wall.openings.push(OpeningId::fresh());
        let (a, b) = SplitWallAtPoint::new(Point2::new(2.0, 0.0))
            .execute(&wall)
            .unwrap();
        assert!(a.openings.is_empty());
        assert!(b.openings.is_empty());
    }

    #[test]
    fn endpoint_split_is_rejected() {
        let wall = wall_4m();
        assert!(SplitWallAtPoint::new(Point2::new(0.0, 0.0))
            .execute(&wall)
            .is_err());
        assert!(SplitWallAtPoint::new(Point2::new(4.0, 0.0))
            .execute(&wall)
            .is_err());
        // Beyond the end clamps onto the endpoint, also rejected.
        assert!(SplitWallAtPoint::new(Point2::new(5.0, 0.0))
            .execute(&wall)
            .is_err());
    }

    #[test]
    fn degenerate_wall_is_rejected() {
        let wall = Wall::new(Point2::new(1.0, 1.0), Point2::new(1.0, 1.0), 0.2, 2.5);
        assert!(SplitWallAtPoint::new(Point2::new(1.0, 1.0))
            .execute(&wall)
            .is_err());
    }
}
