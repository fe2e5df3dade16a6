//! `graphroute route` command - shortest route between two vertices

use serde::Serialize;

use graphroute_core::error::Result;
use graphroute_core::graph::{shortest_path, ShortestPath, VertexId, WeightedGraph};

use crate::cli::Cli;
use crate::commands::helpers::{print_json, vertex_name};

/// JSON shape of a route answer. Serialized straight to text, since
/// distances may exceed the `u64` range of `serde_json::Value` numbers.
#[derive(Serialize)]
struct RouteOutput<'a> {
    from: VertexId,
    to: VertexId,
    result: &'a ShortestPath,
    route: Vec<String>,
}

/// Execute the route command
pub fn execute(cli: &Cli, graph: &WeightedGraph, from: VertexId, to: VertexId) -> Result<()> {
    let result = shortest_path(graph, from, to)?;

    crate::output_by_format_result!(cli.format,
        json => print_json(&RouteOutput {
            from,
            to,
            route: result.path().iter().map(|&v| vertex_name(graph, v)).collect(),
            result: &result,
        }),
        human => {
            for line in render_route(graph, from, to, &result) {
                println!("{}", line);
            }
        }
    )
}

fn render_route(
    graph: &WeightedGraph,
    from: VertexId,
    to: VertexId,
    result: &ShortestPath,
) -> Vec<String> {
    match result {
        ShortestPath::Reachable { distance, path } => {
            let names: Vec<String> = path.iter().map(|&v| vertex_name(graph, v)).collect();
            vec![
                format!("Total distance: {}", distance),
                format!("Route: {}", names.join(" -> ")),
            ]
        }
        ShortestPath::Unreachable => vec![format!(
            "No route from {} to {}",
            vertex_name(graph, from),
            vertex_name(graph, to)
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphroute_core::graph::presets;

    #[test]
    fn test_render_route() {
        let graph = presets::route_map().unwrap();
        let result = shortest_path(&graph, 0, 4).unwrap();
        assert_eq!(
            render_route(&graph, 0, 4, &result),
            vec![
                "Total distance: 2748".to_string(),
                "Route: Sao Paulo -> Belo Horizonte -> Brasilia -> Salvador".to_string(),
            ]
        );
    }

    #[test]
    fn test_route_output_keeps_large_distances() {
        let mut graph = WeightedGraph::new(4).unwrap();
        graph.add_edge(0, 1, i64::MAX).unwrap();
        graph.add_edge(1, 2, i64::MAX).unwrap();
        graph.add_edge(2, 3, i64::MAX).unwrap();
        let result = shortest_path(&graph, 0, 3).unwrap();

        let output = RouteOutput {
            from: 0,
            to: 3,
            result: &result,
            route: vec![],
        };
        let text = serde_json::to_string(&output).unwrap();
        assert!(text.contains("\"distance\":27670116110564327421"));
        assert_eq!(
            render_route(&graph, 0, 3, &result)[0],
            "Total distance: 27670116110564327421"
        );
    }

    #[test]
    fn test_render_unreachable_route() {
        let graph = presets::route_map().unwrap();
        let result = shortest_path(&graph, 0, 7).unwrap();
        assert_eq!(
            render_route(&graph, 0, 7, &result),
            vec!["No route from Sao Paulo to [7]".to_string()]
        );
    }
}
