//! Breadth-first traversal over adjacency-list graphs.
//!
//! [`bfs`] is generic over the [`Traversable`] trait, so any store exposing
//! ordered neighbor lists can be traversed without reimplementation.

use std::collections::{HashSet, VecDeque};

use tracing::trace;

use super::store::{Graph, VertexId};

/// Adjacency access required by the traversal routines.
pub trait Traversable {
    /// Returns the neighbors of `v` in stored (insertion) order.
    ///
    /// Unknown vertices must be reported as having no neighbors.
    fn neighbors(&self, v: VertexId) -> &[VertexId];

    /// Returns true if the graph contains any vertices at all.
    fn has_vertices(&self) -> bool;
}

impl Traversable for Graph {
    fn neighbors(&self, v: VertexId) -> &[VertexId] {
        Graph::neighbors(self, v)
    }

    fn has_vertices(&self) -> bool {
        !self.is_empty()
    }
}

/// Returns the breadth-first visitation order of all vertices reachable
/// from `start`.
///
/// A graph with no vertices at all yields an empty vector. A `start` vertex
/// unknown to a non-empty graph yields just `[start]`. Each reachable vertex
/// appears exactly once, with ties among same-depth vertices broken by
/// edge-insertion order; unreachable vertices never appear. The result is
/// fully deterministic for a given sequence of insertions.
pub fn bfs<G: Traversable>(graph: &G, start: VertexId) -> Vec<VertexId> {
    if !graph.has_vertices() {
        return Vec::new();
    }

    let mut order = Vec::new();
    let mut visited = HashSet::from([start]);
    let mut frontier = VecDeque::from([start]);

    while let Some(vertex) = frontier.pop_front() {
        order.push(vertex);
        for &neighbor in graph.neighbors(vertex) {
            if visited.insert(neighbor) {
                frontier.push_back(neighbor);
            }
        }
    }

    trace!(start, visited = order.len(), "bfs complete");
    order
}
