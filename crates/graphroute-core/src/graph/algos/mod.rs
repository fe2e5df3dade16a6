//! Graph algorithm implementations
//!
//! Stateless functions over a `WeightedGraph`:
//! - `bfs`: Breadth-first traversal
//! - `dfs`: Depth-first traversal
//! - `suggest`: Two-hop connection suggestions
//! - `dijkstra`: Weighted shortest paths
//! - `path`: Predecessor-chain path reconstruction

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
mod path;
pub mod suggest;

pub use bfs::{bfs, bfs_discoveries};
pub use dfs::{dfs, dfs_iter, DfsIter};
pub use dijkstra::{dijkstra, shortest_path, ShortestPathTree};
pub use suggest::suggest;
