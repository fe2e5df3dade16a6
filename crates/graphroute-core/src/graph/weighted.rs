use std::collections::vec_deque;
use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::config::EngineConfig;
use crate::error::{GraphError, Result};
use crate::graph::types::{AdjacencyRow, Edge, VertexId, Visit, Weight};

/// Weight used for friendship edges.
pub const FRIENDSHIP_WEIGHT: i64 = 1;

/// Fixed-capacity, undirected, weighted graph with labeled vertices.
///
/// Vertices are the ids `0..vertex_count()`, fixed at construction. Each
/// vertex owns an adjacency list ordered most-recent-edge first: `add_edge`
/// prepends an entry on both endpoints. Parallel edges are kept.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    labels: Vec<String>,
    adjacency: Vec<VecDeque<Edge>>,
    edge_count: usize,
    max_label_len: usize,
}

impl WeightedGraph {
    /// Create a graph with `capacity` vertices under the default limits.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(capacity, &EngineConfig::default())
    }

    /// Create a graph with `capacity` vertices, no edges and empty labels.
    pub fn with_config(capacity: usize, config: &EngineConfig) -> Result<Self> {
        if capacity == 0 || capacity > config.max_vertices {
            return Err(GraphError::Capacity {
                requested: capacity,
                max: config.max_vertices,
            });
        }

        tracing::trace!(capacity, "graph_created");

        Ok(Self {
            labels: vec![String::new(); capacity],
            adjacency: vec![VecDeque::new(); capacity],
            edge_count: 0,
            max_label_len: config.max_label_len,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of `add_edge` calls that succeeded (each undirected edge once).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Fail with `InvalidVertex` unless `vertex` is in `[0, vertex_count)`.
    pub fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::invalid_vertex(vertex, self.vertex_count()))
        }
    }

    /// Assign a display label to a vertex, replacing any previous one.
    pub fn set_label(&mut self, vertex: VertexId, label: impl Into<String>) -> Result<()> {
        self.check_vertex(vertex)?;
        let label = label.into();

        let len = label.chars().count();
        if len > self.max_label_len {
            return Err(GraphError::LabelTooLong {
                vertex,
                len,
                max: self.max_label_len,
            });
        }

        tracing::trace!(vertex, label = %label, "label_set");
        self.labels[vertex] = label;
        Ok(())
    }

    /// The label of a vertex; empty until `set_label` is called.
    pub fn label(&self, vertex: VertexId) -> Result<&str> {
        self.check_vertex(vertex)?;
        Ok(&self.labels[vertex])
    }

    /// Insert an undirected edge between `u` and `v`.
    ///
    /// Both endpoints get a new entry at the front of their adjacency list.
    /// A self-loop (`u == v`) adds two entries to the same list.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: i64) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let weight = Weight::try_from(weight).map_err(|_| GraphError::InvalidWeight { weight })?;

        self.adjacency[u].push_front(Edge { to: v, weight });
        self.adjacency[v].push_front(Edge { to: u, weight });
        self.edge_count += 1;

        tracing::trace!(u, v, weight, "edge_added");
        Ok(())
    }

    /// Insert a friendship: an undirected edge of weight 1.
    pub fn add_friendship(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.add_edge(u, v, FRIENDSHIP_WEIGHT)
    }

    /// Neighbors of `vertex` as `(neighbor, weight)` pairs, most recent edge first.
    ///
    /// The iterator borrows the graph, so it cannot observe mutation; calling
    /// `neighbors` again yields the same sequence.
    pub fn neighbors(&self, vertex: VertexId) -> Result<Neighbors<'_>> {
        self.check_vertex(vertex)?;
        Ok(self.adjacent(vertex))
    }

    /// Number of adjacency entries of `vertex` (parallel edges count separately).
    pub fn degree(&self, vertex: VertexId) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex].len())
    }

    /// Every vertex with its label and neighbors, in id order.
    pub fn adjacency(&self) -> Vec<AdjacencyRow> {
        self.labels
            .iter()
            .zip(&self.adjacency)
            .enumerate()
            .map(|(id, (label, edges))| AdjacencyRow {
                id,
                label: label.clone(),
                neighbors: edges.iter().copied().collect(),
            })
            .collect()
    }

    /// Neighbors of an already-validated vertex.
    pub(crate) fn adjacent(&self, vertex: VertexId) -> Neighbors<'_> {
        Neighbors {
            inner: self.adjacency[vertex].iter(),
        }
    }

    /// The `index`-th adjacency entry of an already-validated vertex.
    pub(crate) fn edge_at(&self, vertex: VertexId, index: usize) -> Option<Edge> {
        self.adjacency[vertex].get(index).copied()
    }

    /// Traversal record for an already-validated vertex.
    pub(crate) fn visit(&self, vertex: VertexId) -> Visit {
        Visit {
            id: vertex,
            label: self.labels[vertex].clone(),
        }
    }
}

/// Iterator over `(neighbor, weight)` pairs of one vertex.
#[derive(Debug, Clone)]
pub struct Neighbors<'g> {
    inner: vec_deque::Iter<'g, Edge>,
}

impl Iterator for Neighbors<'_> {
    type Item = (VertexId, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (e.to, e.weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

impl FusedIterator for Neighbors<'_> {}
