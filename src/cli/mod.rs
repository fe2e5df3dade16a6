//! CLI argument parsing for graphroute
//!
//! Global flags pick the graph (`--graph` file or `--preset`), engine limits
//! (`--config`), output format and logging. Each subcommand runs one query.

pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use graphroute_core::graph::VertexId;
pub use graphroute_core::format::OutputFormat;
use parse::parse_format;

/// graphroute - friend suggestions, traversals and shortest routes over a weighted graph
#[derive(Parser, Debug)]
#[command(name = "graphroute")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph definition file (TOML)
    #[arg(long, global = true, conflicts_with = "preset")]
    pub graph: Option<PathBuf>,

    /// Built-in sample graph
    #[arg(long, global = true, value_enum)]
    pub preset: Option<Preset>,

    /// Engine configuration file (defaults to the user config directory)
    #[arg(long, global = true, env = "GRAPHROUTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace or a directive list)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Built-in graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Five users joined by friendships
    Social,
    /// Five Brazilian cities joined by roads (km)
    Routes,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print vertices with their neighbors and edge weights
    Show {
        /// Include unlabeled vertices that have no edges
        #[arg(long)]
        all: bool,
    },

    /// Breadth-first visit order from a start vertex
    Bfs {
        /// Start vertex id
        start: VertexId,

        /// Also report the vertex each one was discovered from
        #[arg(long)]
        parents: bool,
    },

    /// Depth-first visit order from a start vertex
    Dfs {
        /// Start vertex id
        start: VertexId,
    },

    /// Suggest friends of friends who are not yet direct connections
    Suggest {
        /// Vertex to compute suggestions for
        vertex: VertexId,
    },

    /// Shortest route between two vertices
    Route {
        /// Source vertex id
        from: VertexId,

        /// Target vertex id
        to: VertexId,
    },
}
