pub mod facade;
pub mod isometric;
pub mod section;

pub use facade::GenerateFacade;
pub use isometric::{project_point, GenerateIsometric, IsoFace};
pub use section::GenerateSection;

use serde::{Deserialize, Serialize};

use crate::math::{Point2, Vector2};
use crate::model::PlanModel;

/// Which derived representation to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Plan,
    Section,
    Facade,
    Isometric,
}

/// Compass direction a facade is viewed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompassDirection {
    #[default]
    North,
    South,
    East,
    West,
}

impl CompassDirection {
    /// Outward facade normal in world coordinates.
    #[must_use]
    pub fn normal_axis(self) -> Vector2 {
        match self {
            Self::North => Vector2::new(0.0, 1.0),
            Self::South => Vector2::new(0.0, -1.0),
            Self::East => Vector2::new(1.0, 0.0),
            Self::West => Vector2::new(-1.0, 0.0),
        }
    }

    /// Horizontal facade axis in world coordinates, sign-flipped for south
    /// and east so the view reads left-to-right for a viewer facing the
    /// facade.
    #[must_use]
    pub fn facade_axis(self) -> Vector2 {
        match self {
            Self::North => Vector2::new(1.0, 0.0),
            Self::South => Vector2::new(-1.0, 0.0),
            Self::East => Vector2::new(0.0, -1.0),
            Self::West => Vector2::new(0.0, 1.0),
        }
    }
}

/// Orientation of a section cut line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SectionDirection {
    /// Cut line parallel to the x axis, at `y = offset`.
    #[default]
    Horizontal,
    /// Cut line parallel to the y axis, at `x = offset`.
    Vertical,
}

/// View parameters handed over by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewParams {
    pub mode: ViewMode,
    pub facade_direction: CompassDirection,
    pub section_direction: SectionDirection,
    /// Perpendicular offset of the section cut line, meters.
    pub section_offset: f64,
    /// Isometric azimuth, degrees.
    pub iso_rotation_deg: f64,
    /// Isometric elevation above ground, degrees (90 = top-down).
    pub iso_elevation_deg: f64,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            mode: ViewMode::Plan,
            facade_direction: CompassDirection::North,
            section_direction: SectionDirection::Horizontal,
            section_offset: 0.0,
            iso_rotation_deg: 30.0,
            iso_elevation_deg: 35.0,
        }
    }
}

/// Paint hint for a derived element. The renderer owns the actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorKey {
    Wall,
    WallCap,
    Opening,
    Glass,
    Ground,
    Slab,
    Floor,
    Roof,
    Silhouette,
}

/// Elevation-silhouette class of a furniture item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SilhouetteShape {
    Person,
    Tree,
    Car,
    Generic,
}

/// Discriminant of a section/facade element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ElementKind {
    /// Cut wall slice (section).
    Wall,
    /// Door void in a cut wall (section).
    DoorOpening,
    /// Window void in a cut wall (section).
    WindowOpening,
    /// Ground line at the datum.
    Ground,
    /// Floor slab band (section).
    FloorSlab,
    /// Projected wall face (facade).
    WallFace,
    /// Door face on a facade.
    Door,
    /// Window face on a facade.
    Window,
    /// Roof line over a facade.
    RoofLine,
    /// Furniture silhouette on a facade, with its signed distance from the
    /// front plane (negative = behind) for the renderer's fade/ordering.
    Silhouette { shape: SilhouetteShape, depth: f64 },
}

/// One rectangle of a section or facade, in view-local coordinates:
/// `x` runs along the cut/facade axis, `y` is elevation above the datum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewElement {
    pub kind: ElementKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color_key: ColorKey,
    pub filled: bool,
}

/// A derived representation of one floor — the closed set of scene shapes
/// the renderer switches over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DerivedScene {
    /// The plan model itself, passed through untouched.
    Plan(PlanModel),
    Section {
        cut_start: Point2,
        cut_end: Point2,
        direction: SectionDirection,
        elements: Vec<ViewElement>,
    },
    Facade {
        direction: CompassDirection,
        elements: Vec<ViewElement>,
    },
    Isometric {
        faces: Vec<IsoFace>,
    },
}

/// Dispatches a plan model and view parameters to the matching generator.
///
/// Pure: the model is an immutable snapshot, every scene a fresh value. Safe
/// to run on every animation frame.
pub struct DeriveView {
    params: ViewParams,
}

impl DeriveView {
    /// Creates a new view derivation with the given parameters.
    #[must_use]
    pub fn new(params: ViewParams) -> Self {
        Self { params }
    }

    /// Executes the derivation, returning the tagged scene.
    #[must_use]
    pub fn execute(&self, model: &PlanModel) -> DerivedScene {
        match self.params.mode {
            ViewMode::Plan => DerivedScene::Plan(model.clone()),
            ViewMode::Section => {
                let (cut_start, cut_end) = section_cut_line(
                    model,
                    self.params.section_direction,
                    self.params.section_offset,
                );
                DerivedScene::Section {
                    cut_start,
                    cut_end,
                    direction: self.params.section_direction,
                    elements: GenerateSection::new(cut_start, cut_end).execute(model),
                }
            }
            ViewMode::Facade => DerivedScene::Facade {
                direction: self.params.facade_direction,
                elements: GenerateFacade::new(self.params.facade_direction).execute(model),
            },
            ViewMode::Isometric => DerivedScene::Isometric {
                faces: GenerateIsometric::new(
                    self.params.iso_rotation_deg,
                    self.params.iso_elevation_deg,
                )
                .execute(model),
            },
        }
    }
}

/// Builds the section cut line across the whole model at the given offset,
/// overshooting the wall bounds so no wall is missed. An empty model gets
/// the default ±6 m span.
fn section_cut_line(
    model: &PlanModel,
    direction: SectionDirection,
    offset: f64,
) -> (Point2, Point2) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for wall in model.walls.iter().filter(|w| !w.is_degenerate()) {
        let (a, b) = match direction {
            SectionDirection::Horizontal => (wall.start.x, wall.end.x),
            SectionDirection::Vertical => (wall.start.y, wall.end.y),
        };
        lo = lo.min(a.min(b));
        hi = hi.max(a.max(b));
    }
    if lo > hi {
        lo = -6.0;
        hi = 6.0;
    } else {
        lo -= 1.0;
        hi += 1.0;
    }

    match direction {
        SectionDirection::Horizontal => (Point2::new(lo, offset), Point2::new(hi, offset)),
        SectionDirection::Vertical => (Point2::new(offset, lo), Point2::new(offset, hi)),
    }
}
