//! Road network graph and route-finding operations
//!
//! Provides the graph store and the algorithms that read it:
//! - Adjacency-list store with auto-growing vertex range
//! - Simple-path enumeration by backtracking DFS
//! - Dijkstra single-source shortest paths

pub mod algos;
pub mod store;
pub mod types;

pub use algos::{enumerate_paths, for_each_path, shortest_paths};
pub use algos::{Distance, RoutePath, ShortestPaths, ShortestRoute};
pub use store::{EdgesOf, Graph};
pub use types::{Direction, Edge, VertexId};
