use serde::Serialize;

/// Vertex identifier: an index in `[0, vertex_count)`.
pub type VertexId = usize;

/// Edge weight. Negative weights are rejected at insertion time, so stored
/// weights are unsigned.
pub type Weight = u64;

/// Accumulated path length. Wide enough that a simple path of `u64` weights
/// cannot overflow it.
pub type Distance = u128;

/// One entry in a vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub to: VertexId,
    pub weight: Weight,
}

/// A vertex emitted by a traversal, in visitation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visit {
    pub id: VertexId,
    pub label: String,
}

/// A vertex reached by BFS, together with the vertex it was discovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Discovery {
    pub vertex: VertexId,
    pub parent: VertexId,
}

/// A two-hop connection suggestion: `candidate` is a neighbor of `via`,
/// which is a direct neighbor of the vertex suggestions were computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub candidate: VertexId,
    pub via: VertexId,
}

/// Outcome of a single-pair shortest path query.
///
/// An unreachable target is an expected answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ShortestPath {
    Reachable {
        distance: Distance,
        /// Vertices from source to target, both inclusive.
        path: Vec<VertexId>,
    },
    Unreachable,
}

impl ShortestPath {
    pub fn is_reachable(&self) -> bool {
        matches!(self, ShortestPath::Reachable { .. })
    }

    pub fn distance(&self) -> Option<Distance> {
        match self {
            ShortestPath::Reachable { distance, .. } => Some(*distance),
            ShortestPath::Unreachable => None,
        }
    }

    /// The path, or an empty slice when the target is unreachable.
    pub fn path(&self) -> &[VertexId] {
        match self {
            ShortestPath::Reachable { path, .. } => path,
            ShortestPath::Unreachable => &[],
        }
    }
}

/// One row of the adjacency listing: a vertex and its neighbors in
/// adjacency order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyRow {
    pub id: VertexId,
    pub label: String,
    pub neighbors: Vec<Edge>,
}
