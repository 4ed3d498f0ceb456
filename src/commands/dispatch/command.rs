//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use roadmap_core::codec::{self, LoadMode};
use roadmap_core::config::RoadmapConfig;
use roadmap_core::error::Result;
use roadmap_core::graph::Graph;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: RoadmapConfig,
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: RoadmapConfig, format: OutputFormat, start: Instant) -> Self {
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    pub fn load_map(&self, path: &Path, mode: LoadMode) -> Result<Graph> {
        let graph = codec::load_map_with(path, mode)?;
        if self.cli.verbose {
            tracing::debug!(elapsed = ?self.start.elapsed(), "load_map");
        }
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("roadmap {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Build road maps and find routes through them.");
        println!();
        println!("Run `roadmap --help` for usage information.");
        Ok(())
    }
}
