mod split_wall;

pub use split_wall::SplitWallAtPoint;
