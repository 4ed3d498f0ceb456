//! `roadmap show` - print adjacency lists
use std::path::Path;

use roadmap_core::codec::LoadMode;
use roadmap_core::error::Result;
use roadmap_core::graph::{Edge, Graph};

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;

fn adjacency_line(graph: &Graph, vertex: usize) -> String {
    let mut line = format!("Adjacency list of vertex {}: ", vertex);
    for edge in graph.edges_of(vertex) {
        line.push_str(&format!("{} ({}, {}) -> ", edge.to, edge.weight, edge.direction));
    }
    line.push_str("NULL");
    line
}

pub fn execute(ctx: &CommandContext, map: &Path, mode: LoadMode) -> Result<()> {
    let graph = ctx.load_map(map, mode)?;

    match ctx.format {
        OutputFormat::Json => {
            let adjacency: Vec<serde_json::Value> = (0..graph.vertex_count())
                .map(|v| {
                    let edges: Vec<&Edge> = graph.edges_of(v).collect();
                    serde_json::json!({ "vertex": v, "edges": edges })
                })
                .collect();
            let output = serde_json::json!({
                "vertices": graph.vertex_count(),
                "edges": graph.edge_count(),
                "adjacency": adjacency,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Map representation:");
            }
            for v in 0..graph.vertex_count() {
                println!("{}", adjacency_line(&graph, v));
            }
        }
    }

    Ok(())
}
