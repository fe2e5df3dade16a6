use crate::error::Result;
use crate::graph::algos::path::reconstruct_path;
use crate::graph::types::{Distance, ShortestPath, VertexId, Weight};
use crate::graph::visited::VisitMarks;
use crate::graph::WeightedGraph;

/// Single-source shortest distances and the predecessor chain that
/// realises them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: VertexId,
    distances: Vec<Option<Distance>>,
    predecessors: Vec<Option<VertexId>>,
}

impl ShortestPathTree {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Shortest distance from the source, or `None` if `vertex` is
    /// unreachable or out of range.
    pub fn distance_to(&self, vertex: VertexId) -> Option<Distance> {
        self.distances.get(vertex).copied().flatten()
    }

    /// The vertex preceding `vertex` on its shortest path.
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(vertex).copied().flatten()
    }

    /// Shortest path from the source to `vertex`, both inclusive.
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        self.distance_to(vertex)?;
        reconstruct_path(&self.predecessors, self.source, vertex)
    }

    /// Package the answer for a single target.
    pub fn to_shortest_path(&self, target: VertexId) -> ShortestPath {
        match (self.distance_to(target), self.path_to(target)) {
            (Some(distance), Some(path)) => ShortestPath::Reachable { distance, path },
            _ => ShortestPath::Unreachable,
        }
    }
}

/// State tracked during Dijkstra search
struct DijkstraState {
    distances: Vec<Option<Distance>>,
    predecessors: Vec<Option<VertexId>>,
    settled: VisitMarks,
}

impl DijkstraState {
    fn new(vertex_count: usize, source: VertexId) -> Self {
        let mut distances = vec![None; vertex_count];
        distances[source] = Some(0);
        Self {
            distances,
            predecessors: vec![None; vertex_count],
            settled: VisitMarks::new(vertex_count),
        }
    }

    /// Linear left-to-right scan for the unsettled vertex with the smallest
    /// finite distance. Strict `<` keeps the lowest id among equal minimums.
    fn min_distance(&self) -> Option<(VertexId, Distance)> {
        let mut best: Option<(VertexId, Distance)> = None;
        for (vertex, distance) in self.distances.iter().enumerate() {
            let Some(distance) = *distance else {
                continue;
            };
            if self.settled.is_visited(vertex) {
                continue;
            }
            if best.is_none_or(|(_, min)| distance < min) {
                best = Some((vertex, distance));
            }
        }
        best
    }

    /// Strict relaxation: equal-cost alternatives never replace the
    /// recorded predecessor.
    fn relax(&mut self, from: VertexId, base: Distance, to: VertexId, weight: Weight) {
        if self.settled.is_visited(to) {
            return;
        }
        let candidate = base + Distance::from(weight);
        if self.distances[to].is_none_or(|current| candidate < current) {
            self.distances[to] = Some(candidate);
            self.predecessors[to] = Some(from);
        }
    }
}

/// Dense Dijkstra from `source` over non-negative weights.
///
/// Settles at most `vertex_count - 1` vertices, choosing the closest
/// unsettled vertex by linear scan (lowest id on ties), and stops early once
/// no unsettled vertex has a finite distance.
#[tracing::instrument(skip(graph), fields(vertex_count = graph.vertex_count()))]
pub fn dijkstra(graph: &WeightedGraph, source: VertexId) -> Result<ShortestPathTree> {
    graph.check_vertex(source)?;

    let vertex_count = graph.vertex_count();
    let mut state = DijkstraState::new(vertex_count, source);
    let mut rounds = 0;

    for _ in 0..vertex_count.saturating_sub(1) {
        let Some((current, base)) = state.min_distance() else {
            break;
        };
        state.settled.try_visit(current);
        rounds += 1;

        for (neighbor, weight) in graph.adjacent(current) {
            state.relax(current, base, neighbor, weight);
        }
    }

    tracing::debug!(
        source,
        rounds,
        reached = state.distances.iter().filter(|d| d.is_some()).count(),
        "dijkstra_complete"
    );

    Ok(ShortestPathTree {
        source,
        distances: state.distances,
        predecessors: state.predecessors,
    })
}

/// Minimal-weight path from `source` to `target`.
///
/// `source == target` yields distance 0 and the single-vertex path. A
/// disconnected target yields `ShortestPath::Unreachable`.
#[tracing::instrument(skip(graph), fields(vertex_count = graph.vertex_count()))]
pub fn shortest_path(
    graph: &WeightedGraph,
    source: VertexId,
    target: VertexId,
) -> Result<ShortestPath> {
    graph.check_vertex(target)?;
    let tree = dijkstra(graph, source)?;
    Ok(tree.to_shortest_path(target))
}
