//! `roadmap shortest` - shortest routes from one vertex
use std::path::Path;

use roadmap_core::codec::LoadMode;
use roadmap_core::error::Result;
use roadmap_core::graph::{shortest_paths, ShortestRoute};

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;

fn format_route(route: &ShortestRoute) -> String {
    if route.route.is_empty() {
        return "no route".to_string();
    }
    route
        .route
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn execute(ctx: &CommandContext, map: &Path, src: usize, mode: LoadMode) -> Result<()> {
    let graph = ctx.load_map(map, mode)?;
    let result = shortest_paths(&graph, src)?;

    match ctx.format {
        OutputFormat::Json => {
            let routes: Vec<ShortestRoute> = result.routes().collect();
            let output = serde_json::json!({
                "source": result.source(),
                "routes": routes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Shortest paths from node {}:", src);
            for route in result.routes() {
                println!(
                    "Path from {} to {}: {} (Distance: {})",
                    src,
                    route.to,
                    format_route(&route),
                    route.distance
                );
            }
        }
    }

    Ok(())
}
