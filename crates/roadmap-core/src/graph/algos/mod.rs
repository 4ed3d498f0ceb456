//! Graph algorithm implementations
//!
//! Contains the two read-only queries over a [`Graph`](crate::graph::Graph):
//! - `paths`: every simple path between two vertices
//! - `dijkstra`: weighted shortest paths from one source

pub mod dijkstra;
pub mod paths;

pub use dijkstra::{shortest_paths, Distance, ShortestPaths, ShortestRoute};
pub use paths::{enumerate_paths, for_each_path, RoutePath};
