//! `roadmap paths` - every simple path between two vertices
use std::path::Path;

use roadmap_core::codec::LoadMode;
use roadmap_core::error::Result;
use roadmap_core::graph::{enumerate_paths, for_each_path, RoutePath};

use super::dispatch::CommandContext;
use crate::cli::OutputFormat;

/// `0 (right) -> 1 (straight) -> 2`
fn format_route(path: &RoutePath) -> String {
    let mut out = String::new();
    for (i, vertex) in path.vertices.iter().enumerate() {
        out.push_str(&vertex.to_string());
        if let Some(direction) = path.directions.get(i) {
            out.push_str(&format!(" ({}) -> ", direction));
        }
    }
    out
}

pub fn execute(
    ctx: &CommandContext,
    map: &Path,
    src: usize,
    dest: usize,
    mode: LoadMode,
) -> Result<()> {
    let graph = ctx.load_map(map, mode)?;

    match ctx.format {
        OutputFormat::Json => {
            let paths = enumerate_paths(&graph, src, dest)?;
            let output = serde_json::json!({
                "from": src,
                "to": dest,
                "count": paths.len(),
                "paths": paths,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            let mut header_printed = false;
            let mut found = 0usize;
            for_each_path(&graph, src, dest, |path| {
                if !header_printed {
                    println!("Paths from node {} to node {}:", src, dest);
                    header_printed = true;
                }
                println!("Path: {}", format_route(path));
                println!("Total Distance: {}", path.total_distance);
                found += 1;
            })?;
            if found == 0 && !ctx.cli.quiet {
                println!("No paths found from node {} to node {}", src, dest);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadmap_core::graph::Direction;

    #[test]
    fn test_format_route() {
        let path = RoutePath {
            vertices: vec![0, 1, 2],
            directions: vec![Direction::Right, Direction::Straight],
            total_distance: 7,
        };
        assert_eq!(format_route(&path), "0 (right) -> 1 (straight) -> 2");
    }

    #[test]
    fn test_format_single_vertex() {
        let path = RoutePath {
            vertices: vec![4],
            directions: vec![],
            total_distance: 0,
        };
        assert_eq!(format_route(&path), "4");
    }
}
