//! Shared helpers for command output

use serde::Serialize;

use graphroute_core::error::Result;
use graphroute_core::graph::{VertexId, WeightedGraph};

/// Display name for a vertex: its label, or `[id]` when unlabeled.
pub fn vertex_name(graph: &WeightedGraph, vertex: VertexId) -> String {
    match graph.label(vertex) {
        Ok(label) if !label.is_empty() => label.to_string(),
        _ => format!("[{}]", vertex),
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// A vertex as `Label [id]`, or `[id]` when unlabeled.
pub fn vertex_ref(graph: &WeightedGraph, vertex: VertexId) -> String {
    match graph.label(vertex) {
        Ok(label) if !label.is_empty() => format!("{} [{}]", label, vertex),
        _ => format!("[{}]", vertex),
    }
}
