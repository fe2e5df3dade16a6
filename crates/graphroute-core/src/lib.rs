//! graphroute core library
//!
//! An undirected weighted graph with fixed vertex capacity, plus the
//! algorithms that run over it: breadth-first and depth-first traversal,
//! two-hop connection suggestion, and single-source shortest paths.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;

pub use error::{GraphError, Result};
pub use graph::WeightedGraph;
