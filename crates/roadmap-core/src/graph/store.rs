//! Adjacency-list graph store
//!
//! Each vertex owns a contiguous list of outgoing edges. Lists are kept
//! oldest-first in memory and read back newest-first, so the most recently
//! added edge is always the first one visited.

use tracing::debug;

use crate::error::{Result, RoadmapError};
use crate::graph::types::{Direction, Edge, VertexId};

/// Iterator over a vertex's outgoing edges, most recently added first
pub type EdgesOf<'a> = std::iter::Rev<std::slice::Iter<'a, Edge>>;

/// Directed, weighted multigraph over vertices `[0, V)`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Result<Self> {
        let mut graph = Graph::default();
        graph.grow(vertex_count)?;
        Ok(graph)
    }

    /// Build a graph from per-vertex edge lists given in iteration order
    pub(crate) fn from_head_first(lists: Vec<Vec<Edge>>) -> Self {
        let adjacency = lists
            .into_iter()
            .map(|mut list| {
                list.reverse();
                list
            })
            .collect();
        Graph { adjacency }
    }

    /// Current vertex count `V`
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Whether `vertex` is a valid index
    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex < self.adjacency.len()
    }

    /// Insert one directed edge `src -> dst`.
    ///
    /// Negative indices are rejected without touching the graph. Indices at or
    /// beyond the current vertex count grow the graph to `max(src, dst) + 1`.
    pub fn add_edge(
        &mut self,
        src: i64,
        dst: i64,
        weight: u32,
        direction: Direction,
    ) -> Result<()> {
        let (from, to) = checked_pair(src, dst)?;
        self.grow(from.max(to) + 1)?;
        self.push(from, Edge::new(to, weight, direction))
    }

    /// Insert a two-way road: `src -> dst` labelled `direction` and
    /// `dst -> src` labelled with the opposite direction.
    pub fn add_road(
        &mut self,
        src: i64,
        dst: i64,
        weight: u32,
        direction: Direction,
    ) -> Result<()> {
        let (from, to) = checked_pair(src, dst)?;
        self.grow(from.max(to) + 1)?;
        self.push(from, Edge::new(to, weight, direction))?;
        self.push(to, Edge::new(from, weight, direction.opposite()))
    }

    /// Outgoing edges of `vertex`, most recently added first.
    /// An out-of-range vertex has no edges.
    pub fn edges_of(&self, vertex: VertexId) -> EdgesOf<'_> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .rev()
    }

    /// First edge `from -> to` in iteration order
    pub fn first_edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.edges_of(from).find(|edge| edge.to == to)
    }

    /// Every edge as `(src, edge)`, by ascending source then iteration order
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, &Edge)> + '_ {
        (0..self.vertex_count()).flat_map(move |src| self.edges_of(src).map(move |e| (src, e)))
    }

    fn grow(&mut self, vertex_count: usize) -> Result<()> {
        let current = self.adjacency.len();
        if vertex_count <= current {
            return Ok(());
        }
        self.adjacency
            .try_reserve_exact(vertex_count - current)
            .map_err(|e| RoadmapError::allocation("vertices", e))?;
        self.adjacency.resize_with(vertex_count, Vec::new);
        debug!(from = current, to = vertex_count, "grow_graph");
        Ok(())
    }

    fn push(&mut self, from: VertexId, edge: Edge) -> Result<()> {
        let list = &mut self.adjacency[from];
        list.try_reserve(1)
            .map_err(|e| RoadmapError::allocation("edges", e))?;
        list.push(edge);
        Ok(())
    }
}

fn checked_pair(src: i64, dst: i64) -> Result<(VertexId, VertexId)> {
    let invalid = || RoadmapError::InvalidNodes { src, dst };
    let from = VertexId::try_from(src).map_err(|_| invalid())?;
    let to = VertexId::try_from(dst).map_err(|_| invalid())?;
    // `max + 1` must stay representable
    if from.max(to) == VertexId::MAX {
        return Err(invalid());
    }
    Ok((from, to))
}
