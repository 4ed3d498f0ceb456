use roadmap_core::format::OutputFormat;
use roadmap_core::graph::Direction;

/// Parse a turn direction from string
pub fn parse_direction(s: &str) -> std::result::Result<Direction, String> {
    s.parse::<Direction>().map_err(|e| e.to_string())
}

/// Parse an output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
