//! `graphroute show` command - adjacency listing

use serde_json::json;

use graphroute_core::error::Result;
use graphroute_core::graph::{AdjacencyRow, WeightedGraph};

use crate::cli::Cli;
use crate::commands::helpers::{print_json, vertex_name};

/// Execute the show command
pub fn execute(cli: &Cli, graph: &WeightedGraph, all: bool) -> Result<()> {
    let rows: Vec<AdjacencyRow> = graph
        .adjacency()
        .into_iter()
        .filter(|row| all || !row.label.is_empty() || !row.neighbors.is_empty())
        .collect();

    crate::output_by_format_result!(cli.format,
        json => print_json(&json!({
            "vertex_count": graph.vertex_count(),
            "edge_count": graph.edge_count(),
            "vertices": rows,
        })),
        human => {
            for row in &rows {
                println!("{}", render_row(graph, row));
            }
        }
    )
}

/// `Label [id]: -> Neighbor (w) -> Neighbor (w)`
fn render_row(graph: &WeightedGraph, row: &AdjacencyRow) -> String {
    let mut line = format!("{} [{}]:", row.label, row.id);
    for edge in &row.neighbors {
        line.push_str(&format!(" -> {} ({})", vertex_name(graph, edge.to), edge.weight));
    }
    line
}
