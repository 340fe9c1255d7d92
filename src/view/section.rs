use super::{ColorKey, ElementKind, ViewElement};
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::Point2;
use crate::model::{Opening, PlanModel, Wall};

/// Horizontal padding added around the cut walls, meters.
const PADDING: f64 = 1.0;

/// Span used when the cut line misses every wall.
const DEFAULT_SPAN: (f64, f64) = (-6.0, 6.0);

/// Drawn thickness of a floor slab band, meters.
const SLAB_THICKNESS: f64 = 0.3;

/// Generates a vertical cross-section along a cut line.
///
/// Every wall whose centerline crosses the cut contributes a filled slice;
/// openings hosted at the crossing point punch door/window voids on the same
/// x-span so they align exactly. Walls parallel to the cut never intersect
/// and drop out naturally.
pub struct GenerateSection {
    cut_start: Point2,
    cut_end: Point2,
}

impl GenerateSection {
    /// Creates a section generator for the cut line `cut_start → cut_end`.
    #[must_use]
    pub fn new(cut_start: Point2, cut_end: Point2) -> Self {
        Self { cut_start, cut_end }
    }

    /// Executes the generator against a plan model.
    #[must_use]
    pub fn execute(&self, model: &PlanModel) -> Vec<ViewElement> {
        let cut_len = (self.cut_end - self.cut_start).norm();
        let mut elements = Vec::new();
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;

        for wall in model.walls.iter().filter(|w| !w.is_degenerate()) {
            let Some((_, t_cut, t_wall)) = segment_segment_intersect_2d(
                &self.cut_start,
                &self.cut_end,
                &wall.start,
                &wall.end,
            ) else {
                continue;
            };

            let x_center = t_cut * cut_len;
            let half = wall.thickness / 2.0;
            elements.push(ViewElement {
                kind: ElementKind::Wall,
                x: x_center - half,
                y: 0.0,
                width: wall.thickness,
                height: wall.height,
                color_key: ColorKey::Wall,
                filled: true,
            });
            lo = lo.min(x_center - half);
            hi = hi.max(x_center + half);

            self.push_openings(model, wall, t_wall, x_center, &mut elements);
        }

        let (lo, hi) = if lo > hi {
            DEFAULT_SPAN
        } else {
            (lo - PADDING, hi + PADDING)
        };

        elements.push(ViewElement {
            kind: ElementKind::Ground,
            x: lo,
            y: 0.0,
            width: hi - lo,
            height: 0.0,
            color_key: ColorKey::Ground,
            filled: false,
        });
        // Slab of the current floor hangs below the datum; the floor above
        // sits at the storey height.
        elements.push(ViewElement {
            kind: ElementKind::FloorSlab,
            x: lo,
            y: -SLAB_THICKNESS,
            width: hi - lo,
            height: SLAB_THICKNESS,
            color_key: ColorKey::Slab,
            filled: true,
        });
        elements.push(ViewElement {
            kind: ElementKind::FloorSlab,
            x: lo,
            y: model.floor_height,
            width: hi - lo,
            height: SLAB_THICKNESS,
            color_key: ColorKey::Slab,
            filled: true,
        });

        elements
    }

    /// Emits a void for every opening whose span contains the cut position.
    fn push_openings(
        &self,
        model: &PlanModel,
        wall: &Wall,
        t_wall: f64,
        x_center: f64,
        elements: &mut Vec<ViewElement>,
    ) {
        let half = wall.thickness / 2.0;
        let len = wall.length();

        for door in model.doors.iter().filter(|d| d.wall == wall.id) {
            if let Some((t0, t1)) = door.span_on(len) {
                if t_wall >= t0 && t_wall <= t1 {
                    elements.push(ViewElement {
                        kind: ElementKind::DoorOpening,
                        x: x_center - half,
                        y: 0.0,
                        width: wall.thickness,
                        height: door.height,
                        color_key: ColorKey::Opening,
                        filled: true,
                    });
                }
            }
        }
        for window in model.windows.iter().filter(|w| w.wall == wall.id) {
            if let Some((t0, t1)) = window.span_on(len) {
                if t_wall >= t0 && t_wall <= t1 {
                    elements.push(ViewElement {
                        kind: ElementKind::WindowOpening,
                        x: x_center - half,
                        y: window.sill_height,
                        width: wall.thickness,
                        height: window.height,
                        color_key: ColorKey::Glass,
                        filled: true,
                    });
                }
            }
        }
    }
}
