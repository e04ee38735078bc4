//! Adjacency-list storage for integer-identified vertices.

use std::collections::HashMap;

/// Identifier of a vertex. Any value is accepted, including negatives.
pub type VertexId = i64;

/// An adjacency-list graph with directedness fixed at construction.
///
/// Vertices are created implicitly by [`Graph::add_edge`]; there is no
/// removal operation. Neighbor lists preserve insertion order, which
/// determines the visitation order among same-depth vertices during
/// traversal, and are never deduplicated.
///
/// Note that a vertex referenced only as an edge destination in a directed
/// graph is not recorded as a key: [`Graph::neighbors`] returns an empty
/// slice for it and traversal degrades gracefully.
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    adjacency: HashMap<VertexId, Vec<VertexId>>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            adjacency: HashMap::new(),
        }
    }

    /// Creates an empty graph with pre-allocated vertex capacity.
    #[must_use]
    pub fn with_capacity(directed: bool, vertices: usize) -> Self {
        Self {
            directed,
            adjacency: HashMap::with_capacity(vertices),
        }
    }

    /// Adds an edge from `u` to `v`.
    ///
    /// For undirected graphs the reverse edge is recorded as well; an
    /// undirected self-loop therefore yields two entries in the same
    /// neighbor list. Inserting the same edge twice produces duplicate
    /// entries, which traversal tolerates via its visited set.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) {
        self.adjacency.entry(u).or_default().push(v);
        if !self.directed {
            self.adjacency.entry(v).or_default().push(u);
        }
    }

    /// Returns true if edges are one-directional.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the neighbors of `v` in insertion order.
    ///
    /// Unknown vertices have no neighbors.
    #[must_use]
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        self.adjacency.get(&v).map_or(&[], Vec::as_slice)
    }

    /// Returns the number of vertices with a recorded neighbor list.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if the graph has no vertices at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the recorded vertex identifiers, in no particular order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Returns the breadth-first visitation order from `start`.
    ///
    /// See [`super::traversal::bfs`] for the exact semantics.
    #[must_use]
    pub fn bfs(&self, start: VertexId) -> Vec<VertexId> {
        super::traversal::bfs(self, start)
    }
}
