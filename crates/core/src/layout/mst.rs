//! Kruskal minimum spanning forest extraction over a layout graph.

use slotmap::SecondaryMap;

use super::graph::{Edge, LayoutGraph};
use crate::types::RoomId;

/// Union-find over room ids: path-compressing find, unbalanced union.
pub struct DisjointSets {
    parent: SecondaryMap<RoomId, RoomId>,
}

impl DisjointSets {
    pub fn new(nodes: &[RoomId]) -> Self {
        let mut parent = SecondaryMap::new();
        for &node in nodes {
            parent.insert(node, node);
        }
        Self { parent }
    }

    /// Representative of `node`'s set. Every node visited on the way up is
    /// re-pointed directly at the root.
    pub fn find(&mut self, node: RoomId) -> RoomId {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = node;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    pub fn union(&mut self, a: RoomId, b: RoomId) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent[root_b] = root_a;
        }
    }
}

/// Minimum-weight edge subset connecting every component of `graph`: a
/// spanning tree when the graph is connected, otherwise one tree per
/// component. Equal weights keep their insertion order (stable sort), so
/// the result is deterministic for a deterministic edge order. Returned
/// edges are in ascending-weight order.
pub fn minimum_spanning_forest(graph: &LayoutGraph) -> Vec<Edge> {
    let mut sets = DisjointSets::new(graph.nodes());
    let mut sorted_edges = graph.edges().to_vec();
    sorted_edges.sort_by_key(|edge| edge.weight);

    let mut accepted = Vec::new();
    for edge in sorted_edges {
        if sets.find(edge.from) != sets.find(edge.to) {
            accepted.push(edge);
            sets.union(edge.from, edge.to);
        }
    }
    accepted
}
