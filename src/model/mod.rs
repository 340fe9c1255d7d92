pub mod plan;

pub use plan::{BuildPlanModel, PlanModel};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::math::{vector_2d, Point2, Vector2, TOLERANCE};

macro_rules! element_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(Uuid);

        impl $name {
            /// Mints a fresh random id.
            #[must_use]
            pub fn fresh() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

element_id!(
    /// Identity of a wall.
    WallId
);
element_id!(
    /// Identity of a door or window.
    OpeningId
);
element_id!(
    /// Identity of a committed room.
    RoomId
);
element_id!(
    /// Identity of a furniture item.
    FurnitureId
);

/// A straight wall segment in plan coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: WallId,
    pub start: Point2,
    pub end: Point2,
    /// Wall thickness in meters, > 0.
    pub thickness: f64,
    /// Wall height in meters, > 0.
    pub height: f64,
    /// Openings hosted by this wall, in document order.
    pub openings: Vec<OpeningId>,
}

impl Wall {
    /// Creates a wall with a fresh id and no openings.
    #[must_use]
    pub fn new(start: Point2, end: Point2, thickness: f64, height: f64) -> Self {
        Self {
            id: WallId::fresh(),
            start,
            end,
            thickness,
            height,
            openings: Vec::new(),
        }
    }

    /// Centerline length in meters.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// A wall whose endpoints coincide. Degenerate walls are excluded from
    /// all topology operations.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length() < TOLERANCE
    }

    /// Unit direction along the centerline, `None` when degenerate.
    #[must_use]
    pub fn direction(&self) -> Option<Vector2> {
        let d = self.end - self.start;
        let len = d.norm();
        if len < TOLERANCE {
            None
        } else {
            Some(d / len)
        }
    }

    /// Outward normal: the centerline direction rotated 90° CCW.
    /// `None` when degenerate.
    #[must_use]
    pub fn outward_normal(&self) -> Option<Vector2> {
        self.direction().map(|d| vector_2d::left_normal(&d))
    }

    /// Point on the centerline at parametric position `t ∈ [0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        vector_2d::lerp(&self.start, &self.end, t)
    }
}

/// Which side a door leaf swings toward, seen along the wall direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwingSide {
    Left,
    Right,
}

/// Which end of the opening carries the hinge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HingeEnd {
    Start,
    End,
}

/// A door hosted by exactly one wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub id: OpeningId,
    pub wall: WallId,
    /// Parametric position of the opening center along the wall, `[0, 1]`.
    pub position: f64,
    pub width: f64,
    pub height: f64,
    pub swing: SwingSide,
    pub hinge: HingeEnd,
    /// Leaf opening angle in degrees, for the plan symbol.
    pub open_angle: f64,
}

/// A window hosted by exactly one wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub id: OpeningId,
    pub wall: WallId,
    /// Parametric position of the opening center along the wall, `[0, 1]`.
    pub position: f64,
    pub width: f64,
    pub height: f64,
    /// Bottom of the window above the floor datum.
    pub sill_height: f64,
}

/// Common geometry of doors and windows: a centered parametric span on the
/// host wall.
pub trait Opening {
    fn id(&self) -> OpeningId;
    fn wall(&self) -> WallId;
    /// Center position along the host wall, `[0, 1]`.
    fn position(&self) -> f64;
    /// Opening width in meters.
    fn width(&self) -> f64;

    /// Parametric span `[t0, t1]` of the opening on a wall of the given
    /// length. `None` for a degenerate wall length.
    fn span_on(&self, wall_length: f64) -> Option<(f64, f64)> {
        if wall_length < TOLERANCE {
            return None;
        }
        let half = self.width() / (2.0 * wall_length);
        Some((self.position() - half, self.position() + half))
    }
}

impl Opening for Door {
    fn id(&self) -> OpeningId {
        self.id
    }
    fn wall(&self) -> WallId {
        self.wall
    }
    fn position(&self) -> f64 {
        self.position
    }
    fn width(&self) -> f64 {
        self.width
    }
}

impl Opening for Window {
    fn id(&self) -> OpeningId {
        self.id
    }
    fn wall(&self) -> WallId {
        self.wall
    }
    fn position(&self) -> f64 {
        self.position
    }
    fn width(&self) -> f64 {
        self.width
    }
}

/// Clamps an opening's center position so its half-width span stays inside
/// `[0, 1]` on a wall of the given length. Walls shorter than the opening
/// width pin the opening to the wall center.
#[must_use]
pub fn clamp_opening_position(position: f64, width: f64, wall_length: f64) -> f64 {
    if wall_length < TOLERANCE {
        return 0.5;
    }
    let half = width / (2.0 * wall_length);
    if half >= 0.5 {
        0.5
    } else {
        position.clamp(half, 1.0 - half)
    }
}

/// A committed room: a closed polygon over the wall graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Closed polygon, ≥ 3 vertices, non-zero signed area.
    pub polygon: Vec<Point2>,
    /// Walls bounding this room.
    pub walls: Vec<WallId>,
    /// Enclosed area in m², derived from the polygon.
    pub area: f64,
    pub label: String,
}

impl Room {
    /// Creates a room with a fresh id, deriving the area from the polygon.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the polygon has fewer than 3
    /// vertices or encloses no area.
    pub fn new(polygon: Vec<Point2>, walls: Vec<WallId>, label: String) -> crate::Result<Self> {
        if polygon.len() < 3 {
            return Err(crate::error::GeometryError::Degenerate(format!(
                "room polygon needs at least 3 vertices, got {}",
                polygon.len()
            ))
            .into());
        }
        let area = crate::math::polygon_2d::signed_area_2d(&polygon).abs();
        if area < TOLERANCE {
            return Err(crate::error::GeometryError::Degenerate(
                "room polygon encloses no area".to_owned(),
            )
            .into());
        }
        Ok(Self {
            id: RoomId::fresh(),
            polygon,
            walls,
            area,
            label,
        })
    }
}

/// A furniture or fixture item with a rectangular footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    pub id: FurnitureId,
    /// Symbol library key, e.g. `"tree-oak"` or `"sofa-2seat"`.
    pub symbol: String,
    /// Footprint center in plan coordinates.
    pub position: Point2,
    /// Rotation of the footprint in degrees, CCW.
    pub rotation_deg: f64,
    /// Footprint extent along the item's local x axis.
    pub width: f64,
    /// Footprint extent along the item's local y axis.
    pub depth: f64,
    /// Item height above the floor.
    pub height: f64,
}

impl Furniture {
    /// Half-extent of the rotated footprint projected onto a unit `axis`.
    #[must_use]
    pub fn half_extent_along(&self, axis: &Vector2) -> f64 {
        let theta = self.rotation_deg.to_radians();
        let local_x = Vector2::new(theta.cos(), theta.sin());
        let local_y = vector_2d::left_normal(&local_x);
        (self.width / 2.0 * local_x.dot(axis)).abs() + (self.depth / 2.0 * local_y.dot(axis)).abs()
    }
}

/// Raw per-floor element collections as handed over by the host element
/// store. Input to [`plan::BuildPlanModel`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorElements {
    pub walls: Vec<Wall>,
    pub doors: Vec<Door>,
    pub windows: Vec<Window>,
    pub rooms: Vec<Room>,
    pub furniture: Vec<Furniture>,
    /// Storey height: the elevation of the floor slab above this one.
    pub floor_height: f64,
}
