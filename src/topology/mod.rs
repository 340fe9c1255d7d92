mod graph;

pub use graph::{HalfEdgeData, HalfEdgeId, NodeData, NodeId, PlanarGraph};

/// Distance under which wall endpoints merge into one graph vertex.
///
/// Interactive drawing snaps to millimeter-ish precision; anything closer
/// than a micrometer is the same junction.
pub const MERGE_EPSILON: f64 = 1e-6;
