use serde::{Serialize, Serializer};

use crate::error::{Result, RoadmapError};
use crate::graph::types::VertexId;
use crate::graph::Graph;

/// Best known distance to a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(u64),
    /// Not reachable from the source; orders after every finite distance
    Unreachable,
}

impl Distance {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreachable => f.write_str("unreachable"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(d) => serializer.serialize_u64(*d),
            Distance::Unreachable => serializer.serialize_none(),
        }
    }
}

/// Route from the source to one destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestRoute {
    pub to: VertexId,
    pub distance: Distance,
    /// Vertices from source to `to` inclusive; empty when unreachable
    pub route: Vec<VertexId>,
}

/// Single-source shortest path result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: VertexId,
    distances: Vec<Distance>,
    parents: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Final distance to `vertex` (unreachable for out-of-range vertices)
    pub fn distance(&self, vertex: VertexId) -> Distance {
        self.distances
            .get(vertex)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    /// Predecessor of `vertex` on its shortest route
    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.parents.get(vertex).copied().flatten()
    }

    /// Vertices from the source to `vertex` inclusive, following parent links
    pub fn route(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        if !self.distance(vertex).is_reachable() {
            return None;
        }
        let mut route = vec![vertex];
        let mut current = vertex;
        while let Some(parent) = self.parent(current) {
            route.push(parent);
            current = parent;
        }
        route.reverse();
        Some(route)
    }

    /// One entry per vertex other than the source, ascending
    pub fn routes(&self) -> impl Iterator<Item = ShortestRoute> + '_ {
        (0..self.distances.len())
            .filter(move |&v| v != self.source)
            .map(move |v| ShortestRoute {
                to: v,
                distance: self.distance(v),
                route: self.route(v).unwrap_or_default(),
            })
    }
}

/// Unvisited vertex with the smallest finite distance, lowest index on ties
fn select_closest(distances: &[Distance], visited: &[bool]) -> Option<(VertexId, u64)> {
    let mut best: Option<(VertexId, u64)> = None;
    for (v, distance) in distances.iter().enumerate() {
        if visited[v] {
            continue;
        }
        if let Distance::Finite(d) = *distance {
            if best.map_or(true, |(_, b)| d < b) {
                best = Some((v, d));
            }
        }
    }
    best
}

/// Dijkstra shortest paths from `src` using linear-scan selection.
///
/// Runs at most `V - 1` selection rounds and stops as soon as no reachable
/// unvisited vertex remains; everything left is `Distance::Unreachable`.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn shortest_paths(graph: &Graph, src: VertexId) -> Result<ShortestPaths> {
    let vertex_count = graph.vertex_count();
    if !graph.contains(src) {
        return Err(RoadmapError::InvalidSource { src, vertex_count });
    }

    let mut distances = vec![Distance::Unreachable; vertex_count];
    let mut parents = vec![None; vertex_count];
    let mut visited = vec![false; vertex_count];
    distances[src] = Distance::Finite(0);

    for _ in 1..vertex_count {
        let Some((u, base)) = select_closest(&distances, &visited) else {
            break;
        };
        visited[u] = true;

        for edge in graph.edges_of(u) {
            let v = edge.to;
            if visited[v] {
                continue;
            }
            let candidate = Distance::Finite(base.saturating_add(u64::from(edge.weight)));
            if candidate < distances[v] {
                distances[v] = candidate;
                parents[v] = Some(u);
            }
        }
    }

    let reachable = distances.iter().filter(|d| d.is_reachable()).count();
    tracing::debug!(src, reachable, "shortest_paths");

    Ok(ShortestPaths {
        source: src,
        distances,
        parents,
    })
}
