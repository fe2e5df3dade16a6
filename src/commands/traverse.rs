//! `graphroute bfs` and `graphroute dfs` commands - visit order

use serde_json::json;

use graphroute_core::error::Result;
use graphroute_core::graph::{bfs, bfs_discoveries, dfs, Discovery, VertexId, Visit, WeightedGraph};

use crate::cli::Cli;
use crate::commands::helpers::{print_json, vertex_name, vertex_ref};

/// Execute the bfs command
pub fn execute_bfs(cli: &Cli, graph: &WeightedGraph, start: VertexId, parents: bool) -> Result<()> {
    let order = bfs(graph, start)?;
    let discoveries = if parents {
        bfs_discoveries(graph, start)?
    } else {
        Vec::new()
    };

    crate::output_by_format_result!(cli.format,
        json => {
            let mut output = json!({
                "algorithm": "bfs",
                "start": start,
                "order": order,
            });
            if parents {
                output["discoveries"] = json!(discoveries);
            }
            print_json(&output)
        },
        human => {
            if !cli.quiet {
                println!("Connections of {} (BFS):", vertex_name(graph, start));
            }
            let parent_of = parents.then(|| parent_table(graph, &discoveries));
            for visit in &order {
                println!("{}", render_visit(graph, visit, parent_of.as_deref()));
            }
        }
    )
}

/// Execute the dfs command
pub fn execute_dfs(cli: &Cli, graph: &WeightedGraph, start: VertexId) -> Result<()> {
    let order = dfs(graph, start)?;

    crate::output_by_format_result!(cli.format,
        json => print_json(&json!({
            "algorithm": "dfs",
            "start": start,
            "order": order,
        })),
        human => {
            if !cli.quiet {
                println!("Connections of {} (DFS):", vertex_name(graph, start));
            }
            for visit in &order {
                println!("{}", render_visit(graph, visit, None));
            }
        }
    )
}

/// Parent of each vertex, indexed by vertex id. `None` for the start and
/// for vertices the traversal never reached.
fn parent_table(graph: &WeightedGraph, discoveries: &[Discovery]) -> Vec<Option<VertexId>> {
    let mut parent_of = vec![None; graph.vertex_count()];
    for discovery in discoveries {
        parent_of[discovery.vertex] = Some(discovery.parent);
    }
    parent_of
}

/// `Label [id]`, followed by `(from Parent [id])` when a parent table is
/// given and the vertex has a parent in it.
fn render_visit(
    graph: &WeightedGraph,
    visit: &Visit,
    parent_of: Option<&[Option<VertexId>]>,
) -> String {
    let line = vertex_ref(graph, visit.id);
    let parent = parent_of.and_then(|table| table.get(visit.id).copied().flatten());

    match parent {
        Some(parent) => format!("{} (from {})", line, vertex_ref(graph, parent)),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_visit_with_parent() {
        let mut graph = WeightedGraph::new(2).unwrap();
        graph.set_label(0, "Alice").unwrap();
        graph.set_label(1, "Bob").unwrap();
        graph.add_friendship(0, 1).unwrap();

        let order = bfs(&graph, 0).unwrap();
        let parent_of = parent_table(&graph, &bfs_discoveries(&graph, 0).unwrap());

        assert_eq!(render_visit(&graph, &order[0], Some(parent_of.as_slice())), "Alice [0]");
        assert_eq!(
            render_visit(&graph, &order[1], Some(parent_of.as_slice())),
            "Bob [1] (from Alice [0])"
        );
        assert_eq!(render_visit(&graph, &order[1], None), "Bob [1]");
    }

    #[test]
    fn test_parent_table_from_social_preset() {
        let graph = graphroute_core::graph::presets::social_network().unwrap();
        let parent_of = parent_table(&graph, &bfs_discoveries(&graph, 0).unwrap());

        assert_eq!(parent_of.len(), graph.vertex_count());
        assert_eq!(&parent_of[..5], &[None, Some(0), Some(0), Some(1), Some(2)]);
        assert!(parent_of[5..].iter().all(Option::is_none));
    }
}
