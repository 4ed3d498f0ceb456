//! Command dispatch logic for roadmap

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::commands;
use roadmap_core::codec::LoadMode;
use roadmap_core::config::RoadmapConfig;
use roadmap_core::error::Result;

mod command;

pub use command::{Command, CommandContext, NoCommand};

fn load_mode(both: bool) -> LoadMode {
    if both {
        LoadMode::TwoWay
    } else {
        LoadMode::Directed
    }
}

pub fn run(cli: &Cli, config: RoadmapConfig, format: OutputFormat, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, format, start);

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),

        Some(Commands::New {
            map,
            vertices,
            force,
        }) => commands::new::execute(&ctx, map, *vertices, *force),

        Some(Commands::Add {
            map,
            src,
            dst,
            weight,
            direction,
            both,
        }) => commands::add::execute(
            &ctx,
            map,
            commands::add::EdgeSpec {
                src: *src,
                dst: *dst,
                weight: *weight,
                direction: *direction,
            },
            *both,
        ),

        Some(Commands::Show { map, both }) => commands::show::execute(&ctx, map, load_mode(*both)),

        Some(Commands::Paths {
            map,
            src,
            dest,
            both,
        }) => commands::paths::execute(&ctx, map, *src, *dest, load_mode(*both)),

        Some(Commands::Shortest { map, src, both }) => {
            commands::shortest::execute(&ctx, map, *src, load_mode(*both))
        }
    };

    debug!(elapsed = ?start.elapsed(), "execute_command");
    result
}
