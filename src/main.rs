//! Roadmap - road map builder and navigator
//!
//! Builds direction-annotated road maps one edge at a time, stores them in a
//! flat text format, and answers route queries over them: every simple path
//! between two locations, or shortest routes from one location.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use roadmap_core::config::RoadmapConfig;
use roadmap_core::error::{ExitCode as RoadmapExitCode, RoadmapError, Result};
use roadmap_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Clap fails before `Cli.format` exists; honour a JSON request anyway
            if argv_format_json {
                let roadmap_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => RoadmapError::UsageError(err.to_string()),
                };

                eprintln!("{}", roadmap_error.to_json());
                return ExitCode::from(roadmap_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => return report(&cli, cli.format.unwrap_or_default(), e),
    };
    let format = cli.format.unwrap_or(config.format);

    match commands::dispatch::run(&cli, config, format, start) {
        Ok(()) => ExitCode::from(RoadmapExitCode::Success as u8),
        Err(e) => report(&cli, format, e),
    }
}

fn load_config(cli: &Cli) -> Result<RoadmapConfig> {
    match &cli.config {
        Some(path) => RoadmapConfig::load(path),
        None => RoadmapConfig::load_default(),
    }
}

fn report(cli: &Cli, format: OutputFormat, e: RoadmapError) -> ExitCode {
    let exit_code = e.exit_code();

    if format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", e);
    }

    ExitCode::from(exit_code as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
