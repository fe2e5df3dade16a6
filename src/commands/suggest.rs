//! `graphroute suggest` command - friends of friends

use serde_json::json;

use graphroute_core::error::Result;
use graphroute_core::graph::{suggest, VertexId, WeightedGraph};

use crate::cli::Cli;
use crate::commands::helpers::{print_json, vertex_name};

/// Execute the suggest command
pub fn execute(cli: &Cli, graph: &WeightedGraph, vertex: VertexId) -> Result<()> {
    let suggestions = suggest(graph, vertex)?;

    crate::output_by_format_result!(cli.format,
        json => {
            let entries: Vec<_> = suggestions
                .iter()
                .map(|s| {
                    json!({
                        "candidate": s.candidate,
                        "candidate_label": vertex_name(graph, s.candidate),
                        "via": s.via,
                        "via_label": vertex_name(graph, s.via),
                    })
                })
                .collect();
            print_json(&json!({
                "vertex": vertex,
                "suggestions": entries,
            }))
        },
        human => {
            if !cli.quiet {
                println!("Suggestions for {}:", vertex_name(graph, vertex));
            }
            for s in &suggestions {
                println!(
                    "Maybe you know: {} (friend of {})",
                    vertex_name(graph, s.candidate),
                    vertex_name(graph, s.via)
                );
            }
            if suggestions.is_empty() && !cli.quiet {
                println!("No suggestions");
            }
        }
    )
}
