use log::warn;
use serde::{Deserialize, Serialize};

use super::{Door, FloorElements, Furniture, Room, Wall, Window};

/// Cross-referenced, read-only model of one floor.
///
/// Rebuilt fresh from the host element store on demand; never persisted and
/// never mutated by a view generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanModel {
    pub walls: Vec<Wall>,
    pub doors: Vec<Door>,
    pub windows: Vec<Window>,
    pub rooms: Vec<Room>,
    pub furniture: Vec<Furniture>,
    pub floor_height: f64,
}

impl PlanModel {
    /// Looks up a wall by id.
    #[must_use]
    pub fn wall(&self, id: super::WallId) -> Option<&Wall> {
        self.walls.iter().find(|w| w.id == id)
    }
}

/// Assembles raw per-floor element collections into a [`PlanModel`].
///
/// Pure transform: openings whose host wall is missing are dropped (mid-edit
/// dangling references are expected, not an error), and each wall's opening
/// list is rebuilt from the surviving doors and windows. Cheap enough to run
/// on every interactive frame; no caching.
#[derive(Debug, Default)]
pub struct BuildPlanModel;

impl BuildPlanModel {
    /// Creates a new build operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the build against one floor's raw elements.
    #[must_use]
    pub fn execute(&self, floor: &FloorElements) -> PlanModel {
        let walls: Vec<Wall> = floor
            .walls
            .iter()
            .map(|w| Wall {
                openings: Vec::new(),
                ..w.clone()
            })
            .collect();

        let doors: Vec<Door> = floor
            .doors
            .iter()
            .filter(|d| {
                let resolved = walls.iter().any(|w| w.id == d.wall);
                if !resolved {
                    warn!("dropping door {} referencing missing wall {}", d.id, d.wall);
                }
                resolved
            })
            .cloned()
            .collect();

        let windows: Vec<Window> = floor
            .windows
            .iter()
            .filter(|w| {
                let resolved = walls.iter().any(|wall| wall.id == w.wall);
                if !resolved {
                    warn!(
                        "dropping window {} referencing missing wall {}",
                        w.id, w.wall
                    );
                }
                resolved
            })
            .cloned()
            .collect();

        // Rebuild each wall's opening list from the surviving openings,
        // doors first, preserving element order.
        let walls = walls
            .into_iter()
            .map(|mut wall| {
                for d in &doors {
                    if d.wall == wall.id {
                        wall.openings.push(d.id);
                    }
                }
                for w in &windows {
                    if w.wall == wall.id {
                        wall.openings.push(w.id);
                    }
                }
                wall
            })
            .collect();

        PlanModel {
            walls,
            doors,
            windows,
            rooms: floor.rooms.clone(),
            furniture: floor.furniture.clone(),
            floor_height: floor.floor_height,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::model::{HingeEnd, OpeningId, SwingSide, WallId};

    fn door(wall: WallId, position: f64) -> Door {
        Door {
            id: OpeningId::fresh(),
            wall,
            position,
            width: 0.9,
            height: 2.1,
            swing: SwingSide::Left,
            hinge: HingeEnd::Start,
            open_angle: 90.0,
        }
    }

    fn floor_with_one_wall() -> (FloorElements, WallId) {
        let wall = Wall::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0), 0.2, 2.5);
        let id = wall.id;
        let floor = FloorElements {
            walls: vec![wall],
            floor_height: 2.8,
            ..FloorElements::default()
        };
        (floor, id)
    }

    #[test]
    fn resolves_openings_onto_walls() {
        let (mut floor, wall_id) = floor_with_one_wall();
        floor.doors.push(door(wall_id, 0.5));

        let model = BuildPlanModel::new().execute(&floor);
        assert_eq!(model.doors.len(), 1);
        assert_eq!(model.walls[0].openings, vec![model.doors[0].id]);
    }

    #[test]
    fn drops_dangling_references() {
        let (mut floor, wall_id) = floor_with_one_wall();
        floor.doors.push(door(wall_id, 0.3));
        floor.doors.push(door(WallId::fresh(), 0.5));
        floor.windows.push(Window {
            id: OpeningId::fresh(),
            wall: WallId::fresh(),
            position: 0.5,
            width: 1.2,
            height: 1.4,
            sill_height: 0.9,
        });

        let model = BuildPlanModel::new().execute(&floor);
        assert_eq!(model.doors.len(), 1);
        assert!(model.windows.is_empty());
        assert_eq!(model.walls[0].openings.len(), 1);
    }

    #[test]
    fn build_is_idempotent() {
        let (mut floor, wall_id) = floor_with_one_wall();
        floor.doors.push(door(wall_id, 0.5));
        floor.furniture.push(crate::model::Furniture {
            id: crate::model::FurnitureId::fresh(),
            symbol: "sofa".to_owned(),
            position: Point2::new(1.0, 1.0),
            rotation_deg: 0.0,
            width: 2.0,
            depth: 1.0,
            height: 0.8,
        });

        let a = BuildPlanModel::new().execute(&floor);
        let b = BuildPlanModel::new().execute(&floor);
        assert_eq!(a, b);
    }

    #[test]
    fn does_not_mutate_input() {
        let (mut floor, wall_id) = floor_with_one_wall();
        floor.doors.push(door(WallId::fresh(), 0.5));
        floor.doors.push(door(wall_id, 0.5));
        let before = floor.clone();

        let _ = BuildPlanModel::new().execute(&floor);
        assert_eq!(floor, before);
    }

    #[test]
    fn stale_wall_opening_lists_are_rebuilt() {
        // The host may hand over walls whose opening lists still name
        // deleted openings; the builder discards and rebuilds them.
        let (mut floor, wall_id) = floor_with_one_wall();
        floor.walls[0].openings.push(OpeningId::fresh());
        floor.doors.push(door(wall_id, 0.5));

        let model = BuildPlanModel::new().execute(&floor);
        assert_eq!(model.walls[0].openings, vec![model.doors[0].id]);
    }
}
