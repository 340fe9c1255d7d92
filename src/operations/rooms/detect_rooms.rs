use slotmap::SecondaryMap;

use crate::math::polygon_2d::{point_in_polygon_2d, rotate_to_canonical_start, signed_area_2d};
use crate::math::Point2;
use crate::model::{Wall, WallId};
use crate::topology::{HalfEdgeId, PlanarGraph};

/// Faces smaller than this are drawing noise, not rooms (m²).
pub const MIN_ROOM_AREA: f64 = 0.1;

/// A closed polygon discovered in the wall graph — not yet a committed
/// [`crate::model::Room`].
#[derive(Debug, Clone)]
pub struct CandidateRoom {
    /// Closed polygon, counter-clockwise, canonical start vertex.
    pub polygon: Vec<Point2>,
    /// Walls bounding the face, in traversal order, deduplicated.
    pub walls: Vec<WallId>,
    /// Enclosed area in m².
    pub area: f64,
}

/// Extracts candidate rooms from a wall set.
///
/// Builds the half-edge planar graph and traces every face orbit with the
/// sharpest-clockwise-turn walk; bounded faces come out counter-clockwise
/// (positive area) and the unbounded outer face clockwise, so sign alone
/// separates them. Faces below the area floor are discarded.
pub struct DetectRooms {
    min_area: f64,
}

impl Default for DetectRooms {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectRooms {
    /// Creates a room detection pass with the default area floor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_area: MIN_ROOM_AREA,
        }
    }

    /// Overrides the minimum face area.
    #[must_use]
    pub fn with_min_area(mut self, min_area: f64) -> Self {
        self.min_area = min_area;
        self
    }

    /// Executes the detection against a wall set.
    #[must_use]
    pub fn execute(&self, walls: &[Wall]) -> Vec<CandidateRoom> {
        let graph = PlanarGraph::from_walls(walls);
        let mut visited: SecondaryMap<HalfEdgeId, ()> = SecondaryMap::new();
        let mut rooms = Vec::new();

        for (start, _) in graph.half_edges() {
            if visited.contains_key(start) {
                continue;
            }

            let mut polygon: Vec<Point2> = Vec::new();
            let mut wall_ids: Vec<WallId> = Vec::new();
            let mut current = start;
            loop {
                visited.insert(current, ());
                if let Ok(edge) = graph.half_edge(current) {
                    if let Ok(node) = graph.node(edge.origin) {
                        polygon.push(node.position);
                    }
                    if !wall_ids.contains(&edge.wall) {
                        wall_ids.push(edge.wall);
                    }
                }
                current = graph.face_successor(current);
                if current == start {
                    break;
                }
            }

            if polygon.len() < 3 {
                continue;
            }
            let area = signed_area_2d(&polygon);
            // Negative area = the unbounded outer face of this component.
            if area < self.min_area {
                continue;
            }

            rooms.push(CandidateRoom {
                polygon: rotate_to_canonical_start(&polygon),
                walls: wall_ids,
                area,
            });
        }

        rooms
    }
}

/// Returns the first candidate room containing `point`.
///
/// The query a room-creation tool runs at the click location before
/// committing a [`crate::model::Room`].
#[must_use]
pub fn find_room_at<'a>(point: &Point2, rooms: &'a [CandidateRoom]) -> Option<&'a CandidateRoom> {
    rooms.iter().find(|r| point_in_polygon_2d(point, &r.polygon))
}
