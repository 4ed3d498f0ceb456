//! `roadmap new` - start an empty map file
use std::path::Path;

use roadmap_core::bail_usage;
use roadmap_core::codec;
use roadmap_core::error::Result;
use roadmap_core::graph::Graph;

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;

pub fn execute(
    ctx: &CommandContext,
    map: &Path,
    vertices: Option<usize>,
    force: bool,
) -> Result<()> {
    if map.exists() && !force {
        bail_usage!(format!(
            "map already exists: {} (use --force to overwrite)",
            map.display()
        ));
    }

    let vertices = vertices.unwrap_or(ctx.config.default_vertices);
    let graph = Graph::new(vertices)?;
    codec::save_map(&graph, map)?;

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "map": map.display().to_string(),
                "vertices": graph.vertex_count(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "Created map {} with {} vertices",
                    map.display(),
                    graph.vertex_count()
                );
            }
        }
    }

    Ok(())
}
