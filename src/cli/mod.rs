//! CLI argument parsing for roadmap
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --config

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::{parse_direction, parse_format};
use roadmap_core::graph::Direction;

pub use roadmap_core::format::OutputFormat;

/// Roadmap - build road maps and find routes through them
#[derive(Parser, Debug)]
#[command(name = "roadmap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human or json (defaults to the configured format)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (default: ~/.config/roadmap/config.toml)
    #[arg(long, global = true, env = "ROADMAP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty map file
    New {
        /// Map file to create
        map: PathBuf,

        /// Initial vertex count (default from config)
        #[arg(long)]
        vertices: Option<usize>,

        /// Overwrite an existing map file
        #[arg(long)]
        force: bool,
    },

    /// Add a directed edge to a map, creating the map if needed
    Add {
        /// Map file to update
        map: PathBuf,

        /// Source vertex
        #[arg(allow_negative_numbers = true)]
        src: i64,

        /// Destination vertex
        #[arg(allow_negative_numbers = true)]
        dst: i64,

        /// Distance along the edge
        weight: u32,

        /// Turn direction: right, left, straight or back
        #[arg(value_parser = parse_direction)]
        direction: Direction,

        /// Also add the reverse edge with the opposite direction
        #[arg(long)]
        both: bool,
    },

    /// Print a map's adjacency lists
    Show {
        /// Map file to read
        map: PathBuf,

        /// Read every edge as a two-way road, adding the opposite edge
        #[arg(long)]
        both: bool,
    },

    /// List every simple path between two vertices
    Paths {
        /// Map file to read
        map: PathBuf,

        /// Source vertex
        src: usize,

        /// Destination vertex
        dest: usize,

        /// Read every edge as a two-way road, adding the opposite edge
        #[arg(long)]
        both: bool,
    },

    /// Shortest routes from one vertex to every other vertex
    Shortest {
        /// Map file to read
        map: PathBuf,

        /// Source vertex
        src: usize,

        /// Read every edge as a two-way road, adding the opposite edge
        #[arg(long)]
        both: bool,
    },
}
