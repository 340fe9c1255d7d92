use super::{ColorKey, CompassDirection, ElementKind, SilhouetteShape, ViewElement};
use crate::model::{Furniture, PlanModel, Wall};

/// Minimum |outward-normal · facade-normal| for a wall to face the viewer,
/// either orientation. cos 73° — walls up to 17° off parallel still count.
const FACING_THRESHOLD: f64 = 0.292;

/// Walls within this distance of the front plane belong to the facade.
const FRONT_BAND: f64 = 0.3;

/// Furniture is silhouetted up to this far behind the front plane…
const INTERIOR_BAND: f64 = 4.0;

/// …and this far in front of it (yard trees, parked cars).
const EXTERIOR_BAND: f64 = 8.0;

/// Horizontal padding of the ground and roof lines, meters.
const PADDING: f64 = 1.0;

/// Span used when nothing projects onto the facade.
const DEFAULT_SPAN: (f64, f64) = (-6.0, 6.0);

/// Generates an elevation view of the walls facing one compass direction.
pub struct GenerateFacade {
    direction: CompassDirection,
}

impl GenerateFacade {
    /// Creates a facade generator for the given viewing direction.
    #[must_use]
    pub fn new(direction: CompassDirection) -> Self {
        Self { direction }
    }

    /// Executes the generator against a plan model.
    #[must_use]
    pub fn execute(&self, model: &PlanModel) -> Vec<ViewElement> {
        let normal = self.direction.normal_axis();
        let axis = self.direction.facade_axis();
        let mut elements = Vec::new();

        // 1. Walls roughly parallel to the view plane, either orientation.
        let facing: Vec<&Wall> = model
            .walls
            .iter()
            .filter(|w| !w.is_degenerate())
            .filter(|w| {
                w.outward_normal()
                    .is_some_and(|n| n.dot(&normal).abs() > FACING_THRESHOLD)
            })
            .collect();

        // 2. The front plane is the most extreme signed depth along the
        //    facade normal; keep walls within a small band of it.
        let front = facing
            .iter()
            .map(|w| wall_depth(w, &self.direction))
            .fold(f64::NEG_INFINITY, f64::max);
        let kept: Vec<&Wall> = facing
            .iter()
            .filter(|w| front - wall_depth(w, &self.direction) <= FRONT_BAND)
            .copied()
            .collect();

        // 3./4. Project the kept walls and their openings onto the facade
        //    axis.
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        let mut roof_height: f64 = 0.0;
        for wall in &kept {
            let s0 = wall.start.coords.dot(&axis);
            let s1 = wall.end.coords.dot(&axis);
            let (span_lo, span_hi) = if s0 <= s1 { (s0, s1) } else { (s1, s0) };
            elements.push(ViewElement {
                kind: ElementKind::WallFace,
                x: span_lo,
                y: 0.0,
                width: span_hi - span_lo,
                height: wall.height,
                color_key: ColorKey::Wall,
                filled: true,
            });
            lo = lo.min(span_lo);
            hi = hi.max(span_hi);
            roof_height = roof_height.max(wall.height);

            self.push_openings(model, wall, s0, s1, &mut elements);
        }

        // 5. Furniture silhouettes within the depth bands.
        for item in &model.furniture {
            if let Some(el) = self.silhouette(item, front) {
                lo = lo.min(el.x);
                hi = hi.max(el.x + el.width);
                elements.push(el);
            }
        }

        // 6. Ground and roof lines over the full extent.
        let (lo, hi) = if lo > hi {
            DEFAULT_SPAN
        } else {
            (lo - PADDING, hi + PADDING)
        };
        if roof_height <= 0.0 {
            roof_height = model.floor_height;
        }
        elements.push(ViewElement {
            kind: ElementKind::Ground,
            x: lo,
            y: 0.0,
            width: hi - lo,
            height: 0.0,
            color_key: ColorKey::Ground,
            filled: false,
        });
        elements.push(ViewElement {
            kind: ElementKind::RoofLine,
            x: lo,
            y: roof_height,
            width: hi - lo,
            height: 0.0,
            color_key: ColorKey::Roof,
            filled: false,
        });

        elements
    }

    /// Interpolates each opening's facade span from its parametric position
    /// and the wall-to-facade projection scale.
    fn push_openings(
        &self,
        model: &PlanModel,
        wall: &Wall,
        s0: f64,
        s1: f64,
        elements: &mut Vec<ViewElement>,
    ) {
        let len = wall.length();
        let scale = (s1 - s0).abs() / len;

        for door in model.doors.iter().filter(|d| d.wall == wall.id) {
            let center = s0 + (s1 - s0) * door.position;
            let half = door.width / 2.0 * scale;
            elements.push(ViewElement {
                kind: ElementKind::Door,
                x: center - half,
                y: 0.0,
                width: half * 2.0,
                height: door.height,
                color_key: ColorKey::Opening,
                filled: true,
            });
        }
        for window in model.windows.iter().filter(|w| w.wall == wall.id) {
            let center = s0 + (s1 - s0) * window.position;
            let half = window.width / 2.0 * scale;
            elements.push(ViewElement {
                kind: ElementKind::Window,
                x: center - half,
                y: window.sill_height,
                width: half * 2.0,
                height: window.height,
                color_key: ColorKey::Glass,
                filled: true,
            });
        }
    }

    /// Classifies and sizes one furniture item, or `None` when it falls
    /// outside the depth bands.
    fn silhouette(&self, item: &Furniture, front: f64) -> Option<ViewElement> {
        let normal = self.direction.normal_axis();
        let axis = self.direction.facade_axis();

        // Signed distance of the item center from the front plane, positive
        // in front of the facade; the rotated footprint widens both bands.
        let depth = item.position.coords.dot(&normal) - front;
        let extent = item.half_extent_along(&normal);
        if depth + extent < -INTERIOR_BAND || depth - extent > EXTERIOR_BAND {
            return None;
        }

        let shape = classify_symbol(&item.symbol);
        let (height, width) = match shape {
            SilhouetteShape::Person => (1.8, 0.6),
            SilhouetteShape::Tree => (3.5, 2.5),
            SilhouetteShape::Car => (1.5, 4.5),
            SilhouetteShape::Generic => (item.height, 2.0 * item.half_extent_along(&axis)),
        };
        let center = item.position.coords.dot(&axis);

        Some(ViewElement {
            kind: ElementKind::Silhouette { shape, depth },
            x: center - width / 2.0,
            y: 0.0,
            width,
            height,
            color_key: ColorKey::Silhouette,
            filled: true,
        })
    }
}

/// Signed depth of a wall along the facade normal; the front wall has the
/// maximum depth.
fn wall_depth(wall: &Wall, direction: &CompassDirection) -> f64 {
    let mid = crate::math::vector_2d::midpoint(&wall.start, &wall.end);
    mid.coords.dot(&direction.normal_axis())
}

/// Maps a symbol library key to its elevation silhouette class.
fn classify_symbol(symbol: &str) -> SilhouetteShape {
    let key = symbol.to_ascii_lowercase();
    if key.contains("person") || key.contains("human") || key.contains("people") {
        SilhouetteShape::Person
    } else if key.contains("tree") || key.contains("plant") || key.contains("bush") {
        SilhouetteShape::Tree
    } else if key.contains("car") || key.contains("vehicle") || key.contains("truck") {
        SilhouetteShape::Car
    } else {
        SilhouetteShape::Generic
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::model::{
        BuildPlanModel, Door, FloorElements, FurnitureId, HingeEnd, OpeningId, SwingSide,
    };

    fn build(floor: &FloorElements) -> PlanModel {
        BuildPlanModel::new().execute(floor)
    }

    /// A wall along +x whose outward normal (left of travel) points north.
    fn north_facing_wall() -> Wall {
        Wall::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0), 0.2, 3.0)
    }

    fn wall_faces(elements: &[ViewElement]) -> Vec<&ViewElement> {
        elements
            .iter()
            .filter(|e| matches!(e.kind, ElementKind::WallFace))
            .collect()
    }

    #[test]
    fn single_north_wall_projects_once() {
        let floor = FloorElements {
            walls: vec![north_facing_wall()],
            floor_height: 2.8,
            ..FloorElements::default()
        };
        let model = build(&floor);
        let elements = GenerateFacade::new(CompassDirection::North).execute(&model);

        let faces = wall_faces(&elements);
        assert_eq!(faces.len(), 1);
        assert!((faces[0].width - 4.0).abs() < 1e-10);
        assert!((faces[0].height - 3.0).abs() < 1e-10);
    }

    #[test]
    fn perpendicular_wall_is_not_facing() {
        // A wall along +y has a normal along −x: invisible from the north.
        let floor = FloorElements {
            walls: vec![Wall::new(
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 4.0),
                0.2,
                3.0,
            )],
            floor_height: 2.8,
            ..FloorElements::default()
        };
        let model = build(&floor);
        let elements = GenerateFacade::new(CompassDirection::North).execute(&model);
        assert!(wall_faces(&elements).is_empty());
    }

    #[test]
    fn back_wall_is_hidden_behind_the_front_plane() {
        let front = Wall::new(Point2::new(0.0, 5.0), Point2::new(4.0, 5.0), 0.2, 3.0);
        let back = Wall::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0), 0.2, 3.0);
        let floor = FloorElements {
            walls: vec![back, front],
            floor_height: 2.8,
            ..FloorElements::default()
        };
        let model = build(&floor);
        let elements = GenerateFacade::new(CompassDirection::North).execute(&model);
        // Only the y = 5 wall is on the north front plane.
        assert_eq!(wall_faces(&elements).len(), 1);
    }

    #[test]
    fn south_projection_flips_the_axis() {
        let floor = FloorElements {
            walls: vec![north_facing_wall()],
            floor_height: 2.8,
            ..FloorElements::default()
        };
        let model = build(&floor);
        let elements = GenerateFacade::new(CompassDirection::South).execute(&model);

        let faces = wall_faces(&elements);
        assert_eq!(faces.len(), 1);
        // Wall x ∈ [0, 4] lands on facade x ∈ [−4, 0].
        assert!((faces[0].x + 4.0).abs() < 1e-10);
        assert!((faces[0].width - 4.0).abs() < 1e-10);
    }

    #[test]
    fn door_span_midpoint_matches_wall_face_midpoint() {
        let host = north_facing_wall();
        let door = Door {
            id: OpeningId::fresh(),
            wall: host.id,
            position: 0.5,
            width: 0.9,
            height: 2.1,
            swing: SwingSide::Left,
            hinge: HingeEnd::Start,
            open_angle: 90.0,
        };
        let floor = FloorElements {
            walls: vec![host],
            doors: vec![door],
            floor_height: 2.8,
            ..FloorElements::default()
        };
        let model = build(&floor);
        let elements = GenerateFacade::new(CompassDirection::North).execute(&model);

        let face = wall_faces(&elements)[0];
        let door_el = elements
            .iter()
            .find(|e| matches!(e.kind, ElementKind::Door))
            .unwrap();
        let face_mid = face.x + face.width / 2.0;
        let door_mid = door_el.x + door_el.width / 2.0;
        assert!((face_mid - door_mid).abs() < 1e-10);
        assert!((door_el.width - 0.9).abs() < 1e-10);
        assert!((door_el.height - 2.1).abs() < 1e-10);
    }

    #[test]
    fn furniture_depth_bands_select_silhouettes() {
        let mut near_tree = furniture("tree-oak", 2.0, 7.0);
        near_tree.width = 1.0;
        near_tree.depth = 1.0;
        let far_tree = furniture("tree-oak", 2.0, 30.0);
        let deep_interior = furniture("sofa-2seat", 2.0, -20.0);
        let floor = FloorElements {
            walls: vec![north_facing_wall()],
            furniture: vec![near_tree, far_tree, deep_interior],
            floor_height: 2.8,
            ..FloorElements::default()
        };
        let model = build(&floor);
        let elements = GenerateFacade::new(CompassDirection::North).execute(&model);

        let silhouettes: Vec<_> = elements
            .iter()
            .filter_map(|e| match e.kind {
                ElementKind::Silhouette { shape, depth } => Some((shape, depth, e)),
                _ => None,
            })
            .collect();
        assert_eq!(silhouettes.len(), 1);
        let (shape, depth, el) = silhouettes[0];
        assert_eq!(shape, SilhouetteShape::Tree);
        // Front plane is y = 0; the tree stands 7 m in front of it.
        assert!((depth - 7.0).abs() < 1e-10);
        assert!((el.height - 3.5).abs() < 1e-10);
    }

    #[test]
    fn ground_and_roof_follow_the_wall_extent() {
        let floor = FloorElements {
            walls: vec![north_facing_wall()],
            floor_height: 2.8,
            ..FloorElements::default()
        };
        let model = build(&floor);
        let elements = GenerateFacade::new(CompassDirection::North).execute(&model);

        let ground = elements
            .iter()
            .find(|e| matches!(e.kind, ElementKind::Ground))
            .unwrap();
        assert!((ground.x + 1.0).abs() < 1e-10);
        assert!((ground.width - 6.0).abs() < 1e-10);
        let roof = elements
            .iter()
            .find(|e| matches!(e.kind, ElementKind::RoofLine))
            .unwrap();
        assert!((roof.y - 3.0).abs() < 1e-10);
    }

    fn furniture(symbol: &str, x: f64, y: f64) -> Furniture {
        Furniture {
            id: FurnitureId::fresh(),
            symbol: symbol.to_owned(),
            position: Point2::new(x, y),
            rotation_deg: 0.0,
            width: 2.0,
            depth: 1.0,
            height: 0.8,
        }
    }
}
