//! In-memory graph with adjacency-list storage and breadth-first traversal.
//!
//! [`Graph`] stores per-vertex neighbor lists in insertion order; traversal
//! reads them through the [`Traversable`] trait, so alternative stores can
//! reuse [`bfs`] without reimplementation.
//!
//! # Example
//!
//! ```rust
//! use graphkit::graph::Graph;
//!
//! let mut graph = Graph::new(true);
//! graph.add_edge(0, 1);
//! graph.add_edge(1, 2);
//!
//! assert_eq!(graph.bfs(0), vec![0, 1, 2]);
//! // Vertex 2 has no outgoing edges: traversal visits just the start.
//! assert_eq!(graph.bfs(2), vec![2]);
//! ```

mod store;
pub mod traversal;


pub use store::{Graph, VertexId};
pub use traversal::{bfs, Traversable};
