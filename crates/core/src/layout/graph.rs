//! Weighted undirected room graph with a one-edge-per-unordered-pair
//! invariant, enforced silently at insertion.

use crate::types::RoomId;

/// Undirected connection between two rooms, stored once per unordered
/// pair. The weight is the ceiling of the Euclidean distance between the
/// endpoints at creation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: RoomId,
    pub to: RoomId,
    pub weight: u32,
}

impl Edge {
    pub fn touches(&self, room: RoomId) -> bool {
        self.from == room || self.to == room
    }

    pub fn connects(&self, a: RoomId, b: RoomId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

#[derive(Clone, Debug, Default)]
pub struct LayoutGraph {
    nodes: Vec<RoomId>,
    edges: Vec<Edge>,
}

impl LayoutGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends in insertion order and hands the id back for chaining.
    /// Callers must not add the same room twice.
    pub fn add_node(&mut self, node: RoomId) -> RoomId {
        self.nodes.push(node);
        node
    }

    /// Silent no-op when `{from, to}` is already connected in either
    /// orientation.
    pub fn add_edge(&mut self, from: RoomId, to: RoomId, weight: u32) {
        if !self.edges.iter().any(|edge| edge.connects(from, to)) {
            self.edges.push(Edge { from, to, weight });
        }
    }

    pub fn nodes(&self) -> &[RoomId] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
