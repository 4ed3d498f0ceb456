//! Line-oriented map file format
//!
//! ```text
//! <V>
//! <src> <dst> <weight> <direction>
//! ...
//! ```
//!
//! The header is mandatory. Malformed edge lines are skipped with a warning,
//! and edges whose endpoints fall outside `[0, V)` are dropped: loading never
//! grows the graph past the header's vertex count.
//!
//! [`LoadMode::TwoWay`] reads every record as a two-way road: the opposite
//! edge, labelled with [`Direction::opposite`], is inserted alongside it.

use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, warn};

use crate::error::{Result, RoadmapError};
use crate::graph::{Direction, Edge, Graph, VertexId};
use crate::trace_time;

/// A skipped line in a map file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWarning {
    /// 1-based line number
    pub line: usize,
    pub content: String,
    pub reason: String,
}

impl std::fmt::Display for LineWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {} ({:?})", self.line, self.reason, self.content)
    }
}

/// Result of decoding a map file
#[derive(Debug, Clone)]
pub struct DecodedMap {
    pub graph: Graph,
    /// Lines skipped because they could not be parsed
    pub warnings: Vec<LineWarning>,
    /// Well-formed edges dropped for pointing outside the vertex range
    pub dropped: usize,
}

/// How edge records are turned into graph edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// One edge per record
    #[default]
    Directed,
    /// Each record also inserts the reverse edge
    TwoWay,
}

struct EdgeRecord {
    src: i64,
    dst: i64,
    weight: u32,
    direction: Direction,
}

/// Render a graph in map file format
pub fn encode(graph: &Graph) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", graph.vertex_count());
    for (src, edge) in graph.edges() {
        let _ = writeln!(
            out,
            "{} {} {} {}",
            src, edge.to, edge.weight, edge.direction
        );
    }
    out
}

/// Write a graph in map file format
pub fn write_map<W: Write>(graph: &Graph, mut writer: W) -> Result<()> {
    writer.write_all(encode(graph).as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn parse_header(line: Option<&str>) -> Result<usize> {
    let header = line.unwrap_or("").trim();
    if header.is_empty() {
        return Err(RoadmapError::InvalidHeader {
            header: header.to_string(),
            reason: "missing vertex count".to_string(),
        });
    }
    header
        .parse::<usize>()
        .map_err(|e| RoadmapError::InvalidHeader {
            header: header.to_string(),
            reason: e.to_string(),
        })
}

fn parse_record(line: &str) -> std::result::Result<EdgeRecord, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [src, dst, weight, direction] = fields.as_slice() else {
        return Err(format!(
            "expected 4 fields (src dst weight direction), found {}",
            fields.len()
        ));
    };

    let src = src
        .parse::<i64>()
        .map_err(|e| format!("invalid source {:?}: {}", src, e))?;
    let dst = dst
        .parse::<i64>()
        .map_err(|e| format!("invalid destination {:?}: {}", dst, e))?;
    let weight = weight
        .parse::<u32>()
        .map_err(|e| format!("invalid weight {:?}: {}", weight, e))?;
    let direction = direction
        .parse::<Direction>()
        .map_err(|e| e.to_string())?;

    Ok(EdgeRecord {
        src,
        dst,
        weight,
        direction,
    })
}

fn in_range(index: i64, vertex_count: usize) -> Option<VertexId> {
    VertexId::try_from(index)
        .ok()
        .filter(|&v| v < vertex_count)
}

/// Parse map file contents.
///
/// Fails only when the header is missing or not a vertex count; no partial
/// graph is produced in that case. Edge lines keep their file order as the
/// iteration order of each vertex's edges.
pub fn decode(input: &str) -> Result<DecodedMap> {
    decode_with(input, LoadMode::Directed)
}

/// Parse map file contents, inserting edges according to `mode`
pub fn decode_with(input: &str, mode: LoadMode) -> Result<DecodedMap> {
    let mut lines = input.lines();
    let vertex_count = parse_header(lines.next())?;

    let mut lists: Vec<Vec<Edge>> = Vec::new();
    lists
        .try_reserve_exact(vertex_count)
        .map_err(|e| RoadmapError::allocation("vertices", e))?;
    lists.resize_with(vertex_count, Vec::new);

    let mut warnings = Vec::new();
    let mut dropped = 0;

    for (offset, line) in lines.enumerate() {
        let line_number = offset + 2;
        if line.trim().is_empty() {
            continue;
        }

        let record = match parse_record(line) {
            Ok(record) => record,
            Err(reason) => {
                warn!(line = line_number, %reason, "skipping malformed edge line");
                warnings.push(LineWarning {
                    line: line_number,
                    content: line.to_string(),
                    reason,
                });
                continue;
            }
        };

        match (
            in_range(record.src, vertex_count),
            in_range(record.dst, vertex_count),
        ) {
            (Some(src), Some(dst)) => {
                lists[src].push(Edge::new(dst, record.weight, record.direction));
                if mode == LoadMode::TwoWay {
                    let reverse = record.direction.opposite();
                    lists[dst].push(Edge::new(src, record.weight, reverse));
                }
            }
            _ => {
                debug!(
                    line = line_number,
                    src = record.src,
                    dst = record.dst,
                    vertex_count,
                    "dropping out-of-range edge"
                );
                dropped += 1;
            }
        }
    }

    Ok(DecodedMap {
        graph: Graph::from_head_first(lists),
        warnings,
        dropped,
    })
}

/// Load a map file, reporting skipped lines alongside the graph
pub fn load_map_with_report(path: &Path, mode: LoadMode) -> Result<DecodedMap> {
    let start = Instant::now();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RoadmapError::MapNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RoadmapError::io_operation("read map", path.display(), e)
        }
    })?;

    let decoded = decode_with(&content, mode)?;
    debug!(
        path = %path.display(),
        ?mode,
        vertices = decoded.graph.vertex_count(),
        edges = decoded.graph.edge_count(),
        skipped = decoded.warnings.len(),
        dropped = decoded.dropped,
        "load_map"
    );
    trace_time!(start, "load_map");
    Ok(decoded)
}

/// Load a map file; skipped lines are logged and otherwise ignored
pub fn load_map(path: &Path) -> Result<Graph> {
    load_map_with(path, LoadMode::Directed)
}

/// Load a map file, inserting edges according to `mode`
pub fn load_map_with(path: &Path, mode: LoadMode) -> Result<Graph> {
    load_map_with_report(path, mode).map(|decoded| decoded.graph)
}

/// Save a graph to a map file, replacing any existing file
pub fn save_map(graph: &Graph, path: &Path) -> Result<()> {
    fs::write(path, encode(graph))
        .map_err(|e| RoadmapError::io_operation("write map", path.display(), e))?;
    debug!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "save_map"
    );
    Ok(())
}
