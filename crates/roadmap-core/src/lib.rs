//! Roadmap Core Library
//!
//! Graph store, map file codec and route queries for the roadmap
//! builder and navigator.

pub mod codec;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
