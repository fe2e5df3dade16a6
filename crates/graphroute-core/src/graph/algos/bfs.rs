use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::types::{Discovery, VertexId, Visit};
use crate::graph::visited::VisitMarks;
use crate::graph::WeightedGraph;

/// State tracked during BFS traversal
struct BfsState {
    marks: VisitMarks,
    queue: VecDeque<VertexId>,
    order: Vec<VertexId>,
    discoveries: Vec<Discovery>,
}

impl BfsState {
    fn new(vertex_count: usize) -> Self {
        Self {
            marks: VisitMarks::new(vertex_count),
            queue: VecDeque::new(),
            order: Vec::new(),
            discoveries: Vec::new(),
        }
    }
}

/// Level-order walk from `start`. Neighbors are enqueued in adjacency order
/// and marked when enqueued, so each reachable vertex appears exactly once.
fn bfs_search(graph: &WeightedGraph, start: VertexId) -> Result<BfsState> {
    graph.check_vertex(start)?;

    let mut state = BfsState::new(graph.vertex_count());
    state.marks.try_visit(start);
    state.queue.push_back(start);

    while let Some(current) = state.queue.pop_front() {
        state.order.push(current);

        for (neighbor, _) in graph.adjacent(current) {
            if state.marks.try_visit(neighbor) {
                state.discoveries.push(Discovery {
                    vertex: neighbor,
                    parent: current,
                });
                state.queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(
        start,
        visited = state.marks.visited_count(),
        "bfs_complete"
    );

    Ok(state)
}

/// Breadth-first traversal from `start`.
///
/// Returns every vertex reachable from `start` (including `start`) in
/// visitation order. Unreachable vertices are simply absent.
#[tracing::instrument(skip(graph), fields(vertex_count = graph.vertex_count()))]
pub fn bfs(graph: &WeightedGraph, start: VertexId) -> Result<Vec<Visit>> {
    let state = bfs_search(graph, start)?;
    Ok(state.order.into_iter().map(|v| graph.visit(v)).collect())
}

/// The discovery events of a breadth-first traversal from `start`: each
/// reachable vertex other than `start`, with the vertex it was found from.
#[tracing::instrument(skip(graph), fields(vertex_count = graph.vertex_count()))]
pub fn bfs_discoveries(graph: &WeightedGraph, start: VertexId) -> Result<Vec<Discovery>> {
    Ok(bfs_search(graph, start)?.discoveries)
}
