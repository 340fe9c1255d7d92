use slotmap::{new_key_type, SlotMap};

use super::MERGE_EPSILON;
use crate::error::TopologyError;
use crate::math::Point2;
use crate::model::{Wall, WallId};

new_key_type! {
    /// Key of a merged wall-endpoint vertex.
    pub struct NodeId;
    /// Key of a directed half-edge.
    pub struct HalfEdgeId;
}

/// A merged vertex of the wall graph.
#[derive(Debug)]
pub struct NodeData {
    pub position: Point2,
    /// Outgoing half-edges, sorted ascending by direction angle.
    pub outgoing: Vec<HalfEdgeId>,
}

/// One direction of a wall centerline between two graph vertices.
#[derive(Debug)]
pub struct HalfEdgeData {
    pub origin: NodeId,
    pub target: NodeId,
    /// The oppositely-directed half-edge of the same wall.
    pub twin: HalfEdgeId,
    /// The wall this half-edge was built from.
    pub wall: WallId,
    /// Direction angle at the origin, radians in `(-π, π]`.
    pub angle: f64,
}

/// Half-edge planar graph over a wall set.
///
/// Vertices are wall endpoints deduplicated within [`MERGE_EPSILON`]; every
/// non-degenerate wall contributes a twin pair of directed half-edges. Built
/// fresh from a wall slice — room detection and adjacency queries share this
/// one topology instead of recomputing their own.
#[derive(Debug, Default)]
pub struct PlanarGraph {
    nodes: SlotMap<NodeId, NodeData>,
    half_edges: SlotMap<HalfEdgeId, HalfEdgeData>,
}

impl PlanarGraph {
    /// Builds the graph from a wall set.
    ///
    /// Degenerate walls, and walls whose endpoints merge into the same
    /// vertex, are skipped.
    #[must_use]
    pub fn from_walls(walls: &[Wall]) -> Self {
        let mut graph = Self::default();

        for wall in walls.iter().filter(|w| !w.is_degenerate()) {
            let a = graph.ensure_node(wall.start);
            let b = graph.ensure_node(wall.end);
            if a == b {
                continue;
            }
            graph.add_edge_pair(a, b, wall.id);
        }

        // Sort each vertex's outgoing fan by angle so rotational walks are
        // a neighbor lookup, not a search.
        let angles: Vec<(NodeId, Vec<HalfEdgeId>)> = graph
            .nodes
            .iter()
            .map(|(id, node)| {
                let mut fan = node.outgoing.clone();
                fan.sort_by(|&a, &b| {
                    graph.half_edges[a]
                        .angle
                        .partial_cmp(&graph.half_edges[b].angle)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
                (id, fan)
            })
            .collect();
        for (id, fan) in angles {
            graph.nodes[id].outgoing = fan;
        }

        graph
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the graph.
    pub fn node(&self, id: NodeId) -> Result<&NodeData, TopologyError> {
        self.nodes
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("node".into()))
    }

    /// Returns a reference to the half-edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the graph.
    pub fn half_edge(&self, id: HalfEdgeId) -> Result<&HalfEdgeData, TopologyError> {
        self.half_edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("half-edge".into()))
    }

    /// Iterates all vertices.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.nodes.iter()
    }

    /// Iterates all half-edges.
    pub fn half_edges(&self) -> impl Iterator<Item = (HalfEdgeId, &HalfEdgeData)> {
        self.half_edges.iter()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    /// The half-edge following `edge` around its face.
    ///
    /// At the target vertex, picks the outgoing half-edge making the
    /// sharpest clockwise turn from the reversed incoming direction — the
    /// rotational predecessor of the twin; the twin itself is a last resort
    /// (dead ends bounce back). Orbits of this successor traverse bounded
    /// faces counter-clockwise and the unbounded face clockwise.
    #[must_use]
    pub fn face_successor(&self, edge: HalfEdgeId) -> HalfEdgeId {
        let twin = self.half_edges[edge].twin;
        let reverse_angle = self.half_edges[twin].angle;
        let node = &self.nodes[self.half_edges[edge].target];

        let mut best = twin;
        let mut best_delta = 0.0;
        for &candidate in &node.outgoing {
            if candidate == twin {
                continue;
            }
            let delta = normalize_angle(self.half_edges[candidate].angle - reverse_angle);
            if delta > best_delta {
                best = candidate;
                best_delta = delta;
            }
        }
        best
    }

    fn ensure_node(&mut self, position: Point2) -> NodeId {
        let eps_sq = MERGE_EPSILON * MERGE_EPSILON;
        for (id, node) in &self.nodes {
            let d = node.position - position;
            if d.norm_squared() < eps_sq {
                return id;
            }
        }
        self.nodes.insert(NodeData {
            position,
            outgoing: Vec::new(),
        })
    }

    fn add_edge_pair(&mut self, a: NodeId, b: NodeId, wall: WallId) {
        let pa = self.nodes[a].position;
        let pb = self.nodes[b].position;
        let forward_angle = (pb.y - pa.y).atan2(pb.x - pa.x);
        let backward_angle = (pa.y - pb.y).atan2(pa.x - pb.x);

        let forward = self.half_edges.insert(HalfEdgeData {
            origin: a,
            target: b,
            twin: HalfEdgeId::default(),
            wall,
            angle: forward_angle,
        });
        let backward = self.half_edges.insert(HalfEdgeData {
            origin: b,
            target: a,
            twin: forward,
            wall,
            angle: backward_angle,
        });
        self.half_edges[forward].twin = backward;

        self.nodes[a].outgoing.push(forward);
        self.nodes[b].outgoing.push(backward);
    }
}

/// Normalizes an angle to `[0, 2π)`.
fn normalize_angle(a: f64) -> f64 {
    let two_pi = 2.0 * std::f64::consts::PI;
    let mut r = a % two_pi;
    if r < 0.0 {
        r += two_pi;
    }
    r
}
