//! Weighted graph and the algorithms that run over it
//!
//! - `WeightedGraph`: fixed-capacity, undirected, labeled adjacency lists
//! - BFS and DFS traversals, two-hop suggestions
//! - Dijkstra shortest paths with path reconstruction
//! - Preset sample graphs

pub mod algos;
pub mod presets;
pub mod types;
mod visited;
pub mod weighted;

pub use algos::{
    bfs, bfs_discoveries, dfs, dfs_iter, dijkstra, shortest_path, suggest, DfsIter,
    ShortestPathTree,
};
pub use types::{
    AdjacencyRow, Discovery, Distance, Edge, ShortestPath, Suggestion, VertexId, Visit, Weight,
};
pub use weighted::{Neighbors, WeightedGraph, FRIENDSHIP_WEIGHT};
