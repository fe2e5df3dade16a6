//! Configuration type definitions

use serde::Deserialize;

/// Default ceiling for the number of vertices in a graph
pub const DEFAULT_MAX_VERTICES: usize = 100;

/// Default maximum label length, in characters
pub const DEFAULT_MAX_LABEL_LEN: usize = 50;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Largest capacity a `WeightedGraph` may be created with
    #[serde(default = "default_max_vertices")]
    pub max_vertices: usize,

    /// Longest vertex label accepted by `set_label`
    #[serde(default = "default_max_label_len")]
    pub max_label_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            max_label_len: DEFAULT_MAX_LABEL_LEN,
        }
    }
}

fn default_max_vertices() -> usize {
    DEFAULT_MAX_VERTICES
}

fn default_max_label_len() -> usize {
    DEFAULT_MAX_LABEL_LEN
}
