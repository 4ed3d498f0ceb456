//! `roadmap add` - insert an edge and save the map
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use roadmap_core::codec::{self, LoadMode};
use roadmap_core::error::{Result, RoadmapError};
use roadmap_core::graph::{Direction, Graph};

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;

/// Edge as given on the command line, before validation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EdgeSpec {
    pub src: i64,
    pub dst: i64,
    pub weight: u32,
    pub direction: Direction,
}

impl EdgeSpec {
    fn reversed(&self) -> Self {
        Self {
            src: self.dst,
            dst: self.src,
            weight: self.weight,
            direction: self.direction.opposite(),
        }
    }
}

fn open_or_start(ctx: &CommandContext, map: &Path) -> Result<Graph> {
    // Saved back as read, so never two-way
    match ctx.load_map(map, LoadMode::Directed) {
        Ok(graph) => Ok(graph),
        Err(RoadmapError::MapNotFound { .. }) => {
            debug!(
                path = %map.display(),
                vertices = ctx.config.default_vertices,
                "starting new map"
            );
            Graph::new(ctx.config.default_vertices)
        }
        Err(e) => Err(e),
    }
}

pub fn execute(ctx: &CommandContext, map: &Path, edge: EdgeSpec, both: bool) -> Result<()> {
    let mut graph = open_or_start(ctx, map)?;
    let both = both || ctx.config.bidirectional;

    let mut added = vec![edge];
    if both {
        graph.add_road(edge.src, edge.dst, edge.weight, edge.direction)?;
        added.push(edge.reversed());
    } else {
        graph.add_edge(edge.src, edge.dst, edge.weight, edge.direction)?;
    }

    codec::save_map(&graph, map)?;

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "map": map.display().to_string(),
                "vertices": graph.vertex_count(),
                "added": added,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                for e in &added {
                    println!(
                        "Added edge {} -> {} ({}, {})",
                        e.src, e.dst, e.weight, e.direction
                    );
                }
            }
        }
    }

    Ok(())
}
