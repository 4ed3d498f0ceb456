//! Simple-path enumeration by depth-first backtracking

use serde::Serialize;

use crate::error::{Result, RoadmapError};
use crate::graph::types::{Direction, VertexId};
use crate::graph::{EdgesOf, Graph};

/// One simple path from source to destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePath {
    /// Vertices from source to destination inclusive
    pub vertices: Vec<VertexId>,
    /// Turn taken on each hop; one shorter than `vertices`
    pub directions: Vec<Direction>,
    pub total_distance: u64,
}

/// A vertex on the current path and the edges still to try from it
struct Frame<'g> {
    vertex: VertexId,
    edges: EdgesOf<'g>,
    /// Weight of the edge that led here
    weight: u64,
}

/// Backtracking state, kept on an explicit frame stack
struct PathSearch<'g> {
    graph: &'g Graph,
    dest: VertexId,
    visited: Vec<bool>,
    path: Vec<VertexId>,
    stack: Vec<Frame<'g>>,
    total_distance: u64,
}

impl<'g> PathSearch<'g> {
    fn new(graph: &'g Graph, dest: VertexId) -> Self {
        Self {
            graph,
            dest,
            visited: vec![false; graph.vertex_count()],
            path: Vec::new(),
            stack: Vec::new(),
            total_distance: 0,
        }
    }

    fn run<F: FnMut(&RoutePath)>(&mut self, src: VertexId, emit: &mut F) {
        self.enter(src, 0, emit);

        while let Some(frame) = self.stack.last_mut() {
            let next = if frame.vertex == self.dest {
                None
            } else {
                let visited = &self.visited;
                frame.edges.find(|edge| !visited[edge.to]).copied()
            };

            match next {
                Some(edge) => self.enter(edge.to, u64::from(edge.weight), emit),
                None => self.leave(),
            }
        }
    }

    fn enter<F: FnMut(&RoutePath)>(&mut self, vertex: VertexId, weight: u64, emit: &mut F) {
        self.visited[vertex] = true;
        self.path.push(vertex);
        self.total_distance += weight;
        self.stack.push(Frame {
            vertex,
            edges: self.graph.edges_of(vertex),
            weight,
        });

        if vertex == self.dest {
            emit(&self.current_route());
        }
    }

    fn leave(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.path.pop();
            self.visited[frame.vertex] = false;
            self.total_distance -= frame.weight;
        }
    }

    fn current_route(&self) -> RoutePath {
        // Parallel edges display the label of the first match in edge order
        let directions = self
            .path
            .windows(2)
            .filter_map(|hop| self.graph.first_edge(hop[0], hop[1]))
            .map(|edge| edge.direction)
            .collect();

        RoutePath {
            vertices: self.path.clone(),
            directions,
            total_distance: self.total_distance,
        }
    }
}

/// Call `emit` for every simple path from `src` to `dest`, in DFS order.
///
/// Both endpoints must be vertices of the graph. An unreachable destination
/// is not an error; `emit` is simply never called.
#[tracing::instrument(skip(graph, emit), fields(vertices = graph.vertex_count()))]
pub fn for_each_path<F>(graph: &Graph, src: VertexId, dest: VertexId, mut emit: F) -> Result<()>
where
    F: FnMut(&RoutePath),
{
    if !graph.contains(src) || !graph.contains(dest) {
        return Err(RoadmapError::InvalidEndpoints {
            src,
            dest,
            vertex_count: graph.vertex_count(),
        });
    }

    let mut search = PathSearch::new(graph, dest);
    search.run(src, &mut emit);
    Ok(())
}

/// Collect every simple path from `src` to `dest`
pub fn enumerate_paths(graph: &Graph, src: VertexId, dest: VertexId) -> Result<Vec<RoutePath>> {
    let mut paths = Vec::new();
    for_each_path(graph, src, dest, |path| paths.push(path.clone()))?;
    tracing::debug!(src, dest, found = paths.len(), "enumerate_paths");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertices(paths: &[RoutePath]) -> Vec<Vec<VertexId>> {
        paths.iter().map(|p| p.vertices.clone()).collect()
    }

    #[test]
    fn test_same_source_and_destination() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_edge(0, 1, 4, Direction::Right).unwrap();
        graph.add_edge(1, 0, 4, Direction::Left).unwrap();

        let paths = enumerate_paths(&graph, 1, 1).unwrap();
        assert_eq!(
            paths,
            vec![RoutePath {
                vertices: vec![1],
                directions: vec![],
                total_distance: 0,
            }]
        );
    }

    #[test]
    fn test_three_cycle_terminates() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_edge(0, 1, 1, Direction::Right).unwrap();
        graph.add_edge(1, 2, 2, Direction::Straight).unwrap();
        graph.add_edge(2, 0, 3, Direction::Back).unwrap();

        let paths = enumerate_paths(&graph, 0, 2).unwrap();
        assert_eq!(vertices(&paths), vec![vec![0, 1, 2]]);
        assert_eq!(paths[0].total_distance, 3);
        assert_eq!(
            paths[0].directions,
            vec![Direction::Right, Direction::Straight]
        );
    }

    #[test]
    fn test_all_simple_paths_in_edge_order() {
        // 0 -> 1 -> 3, 0 -> 2 -> 3, 0 -> 3, plus 1 <-> 2
        let mut graph = Graph::new(4).unwrap();
        graph.add_edge(0, 1, 1, Direction::Right).unwrap();
        graph.add_edge(0, 2, 2, Direction::Left).unwrap();
        graph.add_edge(0, 3, 10, Direction::Straight).unwrap();
        graph.add_edge(1, 3, 1, Direction::Straight).unwrap();
        graph.add_edge(2, 3, 1, Direction::Straight).unwrap();
        graph.add_edge(1, 2, 1, Direction::Left).unwrap();
        graph.add_edge(2, 1, 1, Direction::Right).unwrap();

        let paths = enumerate_paths(&graph, 0, 3).unwrap();
        assert_eq!(
            vertices(&paths),
            vec![
                vec![0, 3],
                vec![0, 2, 1, 3],
                vec![0, 2, 3],
                vec![0, 1, 2, 3],
                vec![0, 1, 3],
            ]
        );
        let distances: Vec<u64> = paths.iter().map(|p| p.total_distance).collect();
        assert_eq!(distances, vec![10, 4, 3, 3, 2]);
    }

    #[test]
    fn test_vertex_reused_across_branches() {
        // vertex 1 appears in two distinct paths
        let mut graph = Graph::new(4).unwrap();
        graph.add_edge(0, 1, 1, Direction::Right).unwrap();
        graph.add_edge(0, 2, 1, Direction::Left).unwrap();
        graph.add_edge(2, 1, 1, Direction::Straight).unwrap();
        graph.add_edge(1, 3, 1, Direction::Straight).unwrap();

        let paths = enumerate_paths(&graph, 0, 3).unwrap();
        assert_eq!(vertices(&paths), vec![vec![0, 2, 1, 3], vec![0, 1, 3]]);
    }

    #[test]
    fn test_unreachable_destination_yields_nothing() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_edge(0, 1, 1, Direction::Right).unwrap();

        let mut calls = 0;
        for_each_path(&graph, 0, 2, |_| calls += 1).unwrap();
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_parallel_edges_show_first_label() {
        let mut graph = Graph::new(2).unwrap();
        graph.add_edge(0, 1, 5, Direction::Right).unwrap();
        graph.add_edge(0, 1, 2, Direction::Left).unwrap();

        let paths = enumerate_paths(&graph, 0, 1).unwrap();
        // one path per parallel edge, distances from each edge,
        // label from the first edge in iteration order
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].total_distance, 2);
        assert_eq!(paths[1].total_distance, 5);
        assert!(paths
            .iter()
            .all(|p| p.directions == vec![Direction::Left]));
    }

    #[test]
    fn test_long_chain_uses_heap_stack() {
        const LEN: usize = 200_000;
        let mut graph = Graph::new(LEN).unwrap();
        for v in 0..LEN as i64 - 1 {
            graph.add_edge(v, v + 1, 2, Direction::Straight).unwrap();
        }

        let paths = enumerate_paths(&graph, 0, LEN - 1).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].vertices.len(), LEN);
        assert_eq!(paths[0].directions.len(), LEN - 1);
        assert_eq!(paths[0].total_distance, 2 * (LEN as u64 - 1));
    }

    #[test]
    fn test_invalid_endpoints() {
        let graph = Graph::new(3).unwrap();
        let err = enumerate_paths(&graph, 0, 3).unwrap_err();
        assert!(matches!(
            err,
            RoadmapError::InvalidEndpoints {
                src: 0,
                dest: 3,
                vertex_count: 3
            }
        ));
        assert!(enumerate_paths(&graph, 5, 0).is_err());
    }
}
