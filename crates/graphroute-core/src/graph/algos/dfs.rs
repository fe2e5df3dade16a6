use crate::error::Result;
use crate::graph::types::{VertexId, Visit};
use crate::graph::visited::VisitMarks;
use crate::graph::WeightedGraph;

/// Lazy depth-first pre-order walk.
///
/// Yields vertices in the same order as the recursive formulation (visit a
/// vertex, then descend into each neighbor that is still unvisited when its
/// adjacency entry is reached). The stack holds one adjacency cursor per
/// vertex on the current path instead of a call frame.
pub struct DfsIter<'g> {
    graph: &'g WeightedGraph,
    marks: VisitMarks,
    stack: Vec<(VertexId, usize)>,
    pending: Option<VertexId>,
}

impl<'g> DfsIter<'g> {
    fn new(graph: &'g WeightedGraph, start: VertexId) -> Self {
        let mut marks = VisitMarks::new(graph.vertex_count());
        marks.try_visit(start);
        Self {
            graph,
            marks,
            stack: vec![(start, 0)],
            pending: Some(start),
        }
    }
}

impl Iterator for DfsIter<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.pending.take() {
            return Some(start);
        }

        loop {
            let (vertex, cursor) = self.stack.last_mut()?;
            match self.graph.edge_at(*vertex, *cursor) {
                Some(edge) => {
                    *cursor += 1;
                    if self.marks.try_visit(edge.to) {
                        self.stack.push((edge.to, 0));
                        return Some(edge.to);
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Depth-first vertex iterator from `start`.
pub fn dfs_iter(graph: &WeightedGraph, start: VertexId) -> Result<DfsIter<'_>> {
    graph.check_vertex(start)?;
    Ok(DfsIter::new(graph, start))
}

/// Depth-first traversal from `start`, in pre-order.
///
/// Like `bfs`, every call starts from fresh visitation marks.
#[tracing::instrument(skip(graph), fields(vertex_count = graph.vertex_count()))]
pub fn dfs(graph: &WeightedGraph, start: VertexId) -> Result<Vec<Visit>> {
    let visits: Vec<Visit> = dfs_iter(graph, start)?
        .map(|v| graph.visit(v))
        .collect();

    tracing::debug!(start, visited = visits.len(), "dfs_complete");
    Ok(visits)
}
