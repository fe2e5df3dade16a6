//! Command dispatch logic for graphroute

use std::time::Instant;

use graphroute_core::config::EngineConfig;
use graphroute_core::error::Result;
use graphroute_core::graph::WeightedGraph;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands::{load, route, show, suggest, traverse};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: EngineConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: EngineConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    pub fn load_graph(&self) -> Result<WeightedGraph> {
        load::load_graph(self.cli, &self.config)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let graph = ctx.load_graph()?;
        debug!(
            elapsed = ?ctx.start.elapsed(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "load_graph"
        );

        match self {
            Commands::Show { all } => show::execute(ctx.cli, &graph, *all),
            Commands::Bfs { start, parents } => {
                traverse::execute_bfs(ctx.cli, &graph, *start, *parents)
            }
            Commands::Dfs { start } => traverse::execute_dfs(ctx.cli, &graph, *start),
            Commands::Suggest { vertex } => suggest::execute(ctx.cli, &graph, *vertex),
            Commands::Route { from, to } => route::execute(ctx.cli, &graph, *from, *to),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::discover()?,
    };

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);
    let result = cli.command.execute(&ctx);

    debug!(elapsed = ?start.elapsed(), ok = result.is_ok(), "command_complete");
    result
}
