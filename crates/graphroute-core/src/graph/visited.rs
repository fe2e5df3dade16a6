//! Per-call visitation marks.
//!
//! Every traversal allocates its own `VisitMarks`, so no mark survives
//! from one call to the next and every entry point starts clean.

use crate::graph::types::VertexId;

/// State of a single vertex during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Mark {
    #[default]
    Unvisited,
    Visited,
    /// Direct neighbor of the vertex suggestions are computed for.
    Direct,
}

#[derive(Debug, Clone)]
pub(crate) struct VisitMarks {
    marks: Vec<Mark>,
}

impl VisitMarks {
    /// All `vertex_count` vertices start unvisited.
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            marks: vec![Mark::Unvisited; vertex_count],
        }
    }

    /// Returns `true` iff the vertex was unvisited, marking it visited.
    pub(crate) fn try_visit(&mut self, vertex: VertexId) -> bool {
        if self.marks[vertex] == Mark::Unvisited {
            self.marks[vertex] = Mark::Visited;
            true
        } else {
            false
        }
    }

    pub(crate) fn is_visited(&self, vertex: VertexId) -> bool {
        self.marks[vertex] != Mark::Unvisited
    }

    pub(crate) fn mark(&mut self, vertex: VertexId, mark: Mark) {
        self.marks[vertex] = mark;
    }

    pub(crate) fn get(&self, vertex: VertexId) -> Mark {
        self.marks[vertex]
    }

    pub(crate) fn visited_count(&self) -> usize {
        self.marks.iter().filter(|m| **m != Mark::Unvisited).count()
    }
}
