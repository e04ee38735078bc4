//! # graphkit
//!
//! Small in-memory graph toolkit: an adjacency-list [`Graph`] with
//! breadth-first traversal, plus the supporting pieces a caller typically
//! wires around it — a structured [`Error`] type, a `tracing` subscriber
//! initializer, a TTL key-value cache, and a configuration loader.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphkit::Graph;
//!
//! let mut graph = Graph::new(false);
//! graph.add_edge(0, 1);
//! graph.add_edge(0, 2);
//! graph.add_edge(2, 3);
//!
//! assert_eq!(graph.bfs(0), vec![0, 1, 2, 3]);
//! ```
//!
//! The graph accepts any `i64` vertex identifier (negatives included),
//! creates vertices implicitly on edge insertion, and never fails: both
//! `add_edge` and `bfs` are total functions over their inputs.

#![warn(missing_docs)]

pub mod cache;
pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod graph;
pub mod logging;

pub use error::{Error, Result};
pub use graph::{Graph, VertexId};
