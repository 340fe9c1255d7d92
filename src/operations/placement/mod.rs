mod snap_opening;

pub use snap_opening::{OpeningSnap, SnapOpening};
