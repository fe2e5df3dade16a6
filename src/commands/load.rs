//! Graph loading: definition files and built-in presets
//!
//! A definition file is TOML:
//!
//! ```toml
//! vertices = 3
//!
//! [[labels]]
//! id = 0
//! label = "Alice"
//!
//! [[edges]]
//! from = 0
//! to = 1
//! weight = 4   # optional, defaults to 1
//! ```

use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::Deserialize;

use graphroute_core::bail_usage;
use graphroute_core::config::EngineConfig;
use graphroute_core::error::Result;
use graphroute_core::graph::{presets, VertexId, WeightedGraph, FRIENDSHIP_WEIGHT};
use graphroute_core::trace_time;

use crate::cli::{Cli, Preset};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphFile {
    vertices: usize,
    #[serde(default)]
    labels: Vec<LabelEntry>,
    #[serde(default)]
    edges: Vec<EdgeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LabelEntry {
    id: VertexId,
    label: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeEntry {
    from: VertexId,
    to: VertexId,
    #[serde(default = "default_weight")]
    weight: i64,
}

fn default_weight() -> i64 {
    FRIENDSHIP_WEIGHT
}

/// Build the graph selected by `--graph` or `--preset`.
pub fn load_graph(cli: &Cli, config: &EngineConfig) -> Result<WeightedGraph> {
    match (&cli.graph, cli.preset) {
        (Some(path), _) => load_file(path, config),
        (None, Some(Preset::Social)) => presets::social_network(),
        (None, Some(Preset::Routes)) => presets::route_map(),
        (None, None) => {
            bail_usage!("no graph selected: pass --graph <file> or --preset <social|routes>")
        }
    }
}

/// Read a graph definition file and build the graph it describes.
pub fn load_file(path: &Path, config: &EngineConfig) -> Result<WeightedGraph> {
    let start = Instant::now();
    let content = fs::read_to_string(path)?;
    let graph = parse_definition(&content, config)?;
    trace_time!(start, "load_file", edges = graph.edge_count());
    Ok(graph)
}

/// Build a graph from definition-file text.
///
/// Labels are applied before edges, each in file order.
pub fn parse_definition(content: &str, config: &EngineConfig) -> Result<WeightedGraph> {
    let file: GraphFile = toml::from_str(content)?;

    let mut graph = WeightedGraph::with_config(file.vertices, config)?;
    for entry in file.labels {
        graph.set_label(entry.id, entry.label)?;
    }
    for edge in file.edges {
        graph.add_edge(edge.from, edge.to, edge.weight)?;
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphroute_core::error::GraphError;

    const TRIANGLE: &str = r#"
vertices = 3

[[labels]]
id = 0
label = "A"

[[labels]]
id = 1
label = "B"

[[edges]]
from = 0
to = 1
weight = 4

[[edges]]
from = 1
to = 2
"#;

    #[test]
    fn test_parse_definition() {
        let graph = parse_definition(TRIANGLE, &EngineConfig::default()).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.label(1).unwrap(), "B");
        assert_eq!(graph.label(2).unwrap(), "");
        let from_one: Vec<_> = graph.neighbors(1).unwrap().collect();
        assert_eq!(from_one, vec![(2, 1), (0, 4)]);
    }

    #[test]
    fn test_parse_definition_without_edges() {
        let graph = parse_definition("vertices = 2", &EngineConfig::default()).unwrap();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_parse_definition_rejects_bad_vertex() {
        let content = "vertices = 2\n[[edges]]\nfrom = 0\nto = 2\n";
        let err = parse_definition(content, &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, GraphError::InvalidVertex { vertex: 2, .. }));
    }

    #[test]
    fn test_parse_definition_rejects_negative_weight() {
        let content = "vertices = 2\n[[edges]]\nfrom = 0\nto = 1\nweight = -3\n";
        let err = parse_definition(content, &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { weight: -3 }));
    }

    #[test]
    fn test_parse_definition_respects_config_capacity() {
        let config = EngineConfig {
            max_vertices: 2,
            ..EngineConfig::default()
        };
        let err = parse_definition("vertices = 3", &config).unwrap_err();
        assert!(matches!(
            err,
            GraphError::Capacity {
                requested: 3,
                max: 2
            }
        ));
    }

    #[test]
    fn test_parse_definition_rejects_unknown_keys() {
        let err = parse_definition("vertices = 2\nnodes = 3\n", &EngineConfig::default())
            .unwrap_err();
        assert!(matches!(err, GraphError::Toml(_)));
    }
}
