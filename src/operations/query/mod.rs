mod find_wall;
mod intersections;

pub use find_wall::{FindWallAtPoint, WallHit};
pub use intersections::{FindWallIntersections, WallCrossing};
