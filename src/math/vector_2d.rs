use super::{Point2, Vector2, TOLERANCE};

/// Linear interpolation between two points: `a + (b - a) * t`.
#[must_use]
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    Point2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// Midpoint of two points.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    lerp(a, b, 0.5)
}

/// Rotates a vector counter-clockwise by `angle` radians.
#[must_use]
pub fn rotate(v: &Vector2, angle: f64) -> Vector2 {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Returns the angle of a vector in radians, measured from the +x axis.
#[must_use]
pub fn angle(v: &Vector2) -> f64 {
    v.y.atan2(v.x)
}

/// Unsigned angle between two vectors, in `[0, π]`.
///
/// The cosine is clamped to `[-1, 1]` to absorb floating-point drift from
/// nearly-parallel inputs. Symmetric in its arguments. Zero-length inputs
/// yield an angle of 0.
#[must_use]
pub fn angle_between(a: &Vector2, b: &Vector2) -> f64 {
    let denom = a.norm() * b.norm();
    if denom < TOLERANCE {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos()
}

/// 2D cross product: the z component of the 3D cross of `a` and `b`.
#[must_use]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns the left-pointing normal of a vector (90° CCW rotation).
#[must_use]
pub fn left_normal(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Normalizes a vector, returning the zero vector when the input has
/// (near-)zero length instead of producing NaN components.
#[must_use]
pub fn normalize_or_zero(v: &Vector2) -> Vector2 {
    let len = v.norm();
    if len < TOLERANCE {
        Vector2::zeros()
    } else {
        v / len
    }
}

/// Compares two points for equality within `epsilon` (per-axis distance).
#[must_use]
pub fn approx_eq(a: &Point2, b: &Point2, epsilon: f64) -> bool {
    (a.x - b.x).abs() <= epsilon && (a.y - b.y).abs() <= epsilon
}
