use serde::{Deserialize, Serialize};

use super::ColorKey;
use crate::math::{vector_2d, Point2, Point3};
use crate::model::PlanModel;

/// One planar face of an extruded solid, projected to view coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsoFace {
    /// Ordered outline, ≥ 3 points.
    pub points: Vec<Point2>,
    pub color_key: ColorKey,
}

/// Rotates a 3D point by `azimuth` about the vertical axis, tilts it by
/// `elevation`, and projects orthographically to view coordinates.
///
/// Returns the projected point and its viewing depth (larger = farther).
/// At 90° elevation the projection degenerates to the plan view; at 0° to a
/// true elevation. Angles are radians.
#[must_use]
pub fn project_point(p: &Point3, azimuth: f64, elevation: f64) -> (Point2, f64) {
    let (sa, ca) = azimuth.sin_cos();
    let x = p.x * ca - p.y * sa;
    let y = p.x * sa + p.y * ca;

    let (se, ce) = elevation.sin_cos();
    let screen = Point2::new(x, y * se + p.z * ce);
    let depth = y * ce - p.z * se;
    (screen, depth)
}

/// Generates a 2.5D isometric projection of one floor.
///
/// Walls extrude their plan footprints up to their height (four sides plus a
/// top cap), rooms contribute floor and roof faces, and every face is
/// projected through [`project_point`] and sorted back-to-front by mean
/// depth. No hidden-surface removal beyond that ordering.
pub struct GenerateIsometric {
    rotation_deg: f64,
    elevation_deg: f64,
}

impl GenerateIsometric {
    /// Creates an isometric generator at the given azimuth and elevation,
    /// in degrees.
    #[must_use]
    pub fn new(rotation_deg: f64, elevation_deg: f64) -> Self {
        Self {
            rotation_deg,
            elevation_deg,
        }
    }

    /// Executes the generator against a plan model.
    #[must_use]
    pub fn execute(&self, model: &PlanModel) -> Vec<IsoFace> {
        let azimuth = self.rotation_deg.to_radians();
        let elevation = self.elevation_deg.to_radians();
        let mut faces: Vec<(IsoFace, f64)> = Vec::new();

        let mut push = |outline: &[Point3], color_key: ColorKey| {
            if outline.len() < 3 {
                return;
            }
            let mut points = Vec::with_capacity(outline.len());
            let mut depth_sum = 0.0;
            for p in outline {
                let (screen, depth) = project_point(p, azimuth, elevation);
                points.push(screen);
                depth_sum += depth;
            }
            #[allow(clippy::cast_precision_loss)]
            let depth = depth_sum / outline.len() as f64;
            faces.push((IsoFace { points, color_key }, depth));
        };

        for room in &model.rooms {
            let floor: Vec<Point3> = room
                .polygon
                .iter()
                .map(|p| Point3::new(p.x, p.y, 0.0))
                .collect();
            push(&floor, ColorKey::Floor);
        }

        for wall in model.walls.iter().filter(|w| !w.is_degenerate()) {
            let Some(dir) = wall.direction() else {
                continue;
            };
            let offset = vector_2d::left_normal(&dir) * (wall.thickness / 2.0);
            let corners = [
                wall.start + offset,
                wall.end + offset,
                wall.end - offset,
                wall.start - offset,
            ];
            let h = wall.height;

            for i in 0..4 {
                let a = corners[i];
                let b = corners[(i + 1) % 4];
                push(
                    &[
                        Point3::new(a.x, a.y, 0.0),
                        Point3::new(b.x, b.y, 0.0),
                        Point3::new(b.x, b.y, h),
                        Point3::new(a.x, a.y, h),
                    ],
                    ColorKey::Wall,
                );
            }
            let top: Vec<Point3> = corners
                .iter()
                .map(|c| Point3::new(c.x, c.y, h))
                .collect();
            push(&top, ColorKey::WallCap);
        }

        for room in &model.rooms {
            let roof: Vec<Point3> = room
                .polygon
                .iter()
                .map(|p| Point3::new(p.x, p.y, model.floor_height))
                .collect();
            push(&roof, ColorKey::Roof);
        }

        // Back-to-front: farthest faces first, so the renderer paints in
        // list order.
        faces.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        faces.into_iter().map(|(face, _)| face).collect()
    }
}
