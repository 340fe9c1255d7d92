use crate::math::Point2;
use crate::model::{clamp_opening_position, Wall, WallId};
use crate::operations::query::FindWallAtPoint;

/// A snapped opening placement: host wall and clamped parametric position.
#[derive(Debug, Clone, Copy)]
pub struct OpeningSnap {
    pub wall: WallId,
    /// Center position on the wall, clamped so the opening span stays
    /// within the wall.
    pub position: f64,
}

/// Snaps a candidate door/window position onto the nearest wall.
///
/// Placement tools call this on every pointer move to preview where the
/// opening would land.
pub struct SnapOpening {
    position: Point2,
    default_width: f64,
    threshold: f64,
}

impl SnapOpening {
    /// Creates a new snap query for an opening of `default_width` meters.
    #[must_use]
    pub fn new(position: Point2, default_width: f64, threshold: f64) -> Self {
        Self {
            position,
            default_width,
            threshold,
        }
    }

    /// Executes the snap against a wall set.
    ///
    /// Returns `None` when no wall is within the snap radius. On a hit, the
    /// parametric position is clamped so the opening's half-width span stays
    /// inside `[0, 1]`; walls shorter than the opening width snap to the
    /// wall center.
    #[must_use]
    pub fn execute(&self, walls: &[Wall]) -> Option<OpeningSnap> {
        let hit = FindWallAtPoint::new(self.position, self.threshold).execute(walls)?;
        let wall = walls.iter().find(|w| w.id == hit.wall)?;

        Some(OpeningSnap {
            wall: hit.wall,
            position: clamp_opening_position(hit.t, self.default_width, wall.length()),
        })
    }
}
