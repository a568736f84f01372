//! Layout pipeline: placement, overlap relaxation, neighbor distance
//! capping, edge synthesis, and corridor extraction, strictly in that
//! order. Every phase reads positions the previous phase finished
//! mutating, and within a relaxation pass later pairs see the pushes of
//! earlier pairs, so node iteration order (insertion order) is part of
//! the determinism contract.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use super::config::LayoutConfig;
use super::graph::LayoutGraph;
use super::model::{CorridorSegment, GeneratedLayout};
use super::mst::minimum_spanning_forest;
use super::rooms::{RoomArena, RoomNode};
use super::sampling::{fallback_push_direction, uniform_f32, uniform_index};
use crate::types::{RoomId, Vec3};

pub struct LayoutGenerator {
    config: LayoutConfig,
    rng: ChaCha8Rng,
    rooms: RoomArena,
    graph: LayoutGraph,
    relaxation_converged: bool,
}

impl LayoutGenerator {
    pub fn new(config: LayoutConfig) -> Self {
        let config = config.clamped();
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            rooms: RoomArena::with_key(),
            graph: LayoutGraph::new(),
            relaxation_converged: true,
        }
    }

    /// Runs the full pipeline. State is reset and the stream reseeded
    /// first, so repeated calls reproduce the same layout bit for bit.
    pub fn generate(&mut self) -> GeneratedLayout {
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.rooms.clear();
        self.graph = LayoutGraph::new();
        self.relaxation_converged = true;

        self.place_rooms();
        self.resolve_overlaps();
        self.adjust_room_distances();
        self.synthesize_edges();

        let corridors = minimum_spanning_forest(&self.graph)
            .into_iter()
            .map(|edge| CorridorSegment {
                a: self.rooms[edge.from].position,
                b: self.rooms[edge.to].position,
            })
            .collect();

        GeneratedLayout {
            room_positions: self
                .graph
                .nodes()
                .iter()
                .map(|&id| self.rooms[id].position)
                .collect(),
            corridors,
            relaxation_converged: self.relaxation_converged,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn graph(&self) -> &LayoutGraph {
        &self.graph
    }

    pub fn rooms(&self) -> &RoomArena {
        &self.rooms
    }

    /// Placement is unconditional: overlap is resolved afterwards, never
    /// re-rolled here.
    fn place_rooms(&mut self) {
        let extent = self.config.horizontal_extent;
        let floor_heights: Vec<f32> = (0..self.config.floor_count)
            .map(|index| index as f32 * self.config.floor_spacing)
            .collect();

        for slot in 0..self.config.room_count {
            // Fixed draw order (x, floor, z): the seed fully determines the run.
            let x = uniform_f32(&mut self.rng, -extent, extent);
            let floor = uniform_index(&mut self.rng, floor_heights.len());
            let z = uniform_f32(&mut self.rng, -extent, extent);

            let position = Vec3::new(x, floor_heights[floor], z);
            let id = self.rooms.insert(RoomNode { id: slot as u32 + 1, position });
            self.graph.add_node(id);
        }
    }

    /// Pairwise repulsion passes until a pass pushes no pair or the
    /// iteration budget runs out. Convergence is heuristic; the budget is
    /// the only divergence guard.
    fn resolve_overlaps(&mut self) {
        let node_ids: Vec<RoomId> = self.graph.nodes().to_vec();
        if node_ids.len() <= 1 {
            return;
        }

        let min_distance = self.config.min_room_distance;
        let epsilon = self.config.epsilon;
        let strength = self.config.separation_strength.max(0.05);

        for _pass in 0..self.config.max_relax_iterations {
            let mut any_pushed = false;

            for i in 0..node_ids.len() {
                for j in (i + 1)..node_ids.len() {
                    let (a, b) = (node_ids[i], node_ids[j]);
                    let delta = self.rooms[b].position - self.rooms[a].position;
                    let distance = delta.length();
                    if distance >= min_distance - epsilon {
                        continue;
                    }

                    let direction = if distance < 1e-6 {
                        fallback_push_direction(&mut self.rng)
                    } else {
                        delta * (1.0 / distance)
                    };

                    let deficit = min_distance - distance;
                    let push = deficit * 0.5 * strength;
                    self.rooms[a].position -= direction * push;
                    self.rooms[b].position += direction * push;
                    any_pushed = true;
                }
            }

            if !any_pushed {
                return;
            }
        }

        self.relaxation_converged = false;
        log::warn!(
            "overlap relaxation still pushing after {} passes; layout may keep overlaps",
            self.config.max_relax_iterations
        );
    }

    /// Pulls each room toward its nearest neighbor when that neighbor is
    /// beyond the cap. Rooms are handled one at a time against the current
    /// positions of all others, so iteration order matters.
    fn adjust_room_distances(&mut self) {
        let node_ids: Vec<RoomId> = self.graph.nodes().to_vec();
        if node_ids.len() <= 1 {
            return;
        }

        let min_distance = self.config.min_room_distance;
        let epsilon = self.config.epsilon;

        for i in 0..node_ids.len() {
            let node = node_ids[i];
            let node_position = self.rooms[node].position;

            let mut nearest: Option<RoomId> = None;
            let mut nearest_distance = f32::MAX;
            for (j, &other) in node_ids.iter().enumerate() {
                if i == j {
                    continue;
                }
                let distance = node_position.distance(self.rooms[other].position);
                if distance < nearest_distance {
                    nearest_distance = distance;
                    nearest = Some(other);
                }
            }

            let Some(nearest) = nearest else { continue };
            if nearest_distance <= self.config.max_neighbor_distance {
                continue;
            }

            let direction = (self.rooms[nearest].position - node_position).normalized();
            let desired_move = nearest_distance - self.config.max_neighbor_distance;

            // Largest known-safe move toward the nearest neighbor, found by
            // binary search over [0, desired_move] and applied once at the
            // end. Eight halvings land well inside the epsilon tolerance.
            let mut low = 0.0_f32;
            let mut high = desired_move;
            let mut safe_move = 0.0_f32;
            for _ in 0..8 {
                let mid = (low + high) * 0.5;
                let test_position = node_position + direction * mid;

                let violates = node_ids.iter().enumerate().any(|(k, &other)| {
                    k != i
                        && test_position.distance(self.rooms[other].position)
                            < min_distance - epsilon
                });

                if violates {
                    high = mid;
                } else {
                    safe_move = mid;
                    low = mid;
                }
            }

            if safe_move > 0.0 {
                self.rooms[node].position += direction * safe_move;
            }
        }
    }

    /// All-pairs edges weighted by ceil(distance), deduplicated by the
    /// graph. The trailing fallback guarantees a forward edge to the
    /// nearest later-indexed room whenever the scan so far left a room
    /// untouched; it only inspects edges already added, so a room reached
    /// solely as the `to` side of earlier pairs would not trigger it.
    fn synthesize_edges(&mut self) {
        let node_ids: Vec<RoomId> = self.graph.nodes().to_vec();

        for i in 0..node_ids.len() {
            let a = node_ids[i];
            let a_position = self.rooms[a].position;

            let mut nearest: Option<RoomId> = None;
            let mut nearest_distance = f32::MAX;

            for &b in &node_ids[i + 1..] {
                let distance = a_position.distance(self.rooms[b].position);
                self.graph.add_edge(a, b, distance.ceil() as u32);

                if distance < nearest_distance {
                    nearest_distance = distance;
                    nearest = Some(b);
                }
            }

            if !self.graph.edges().iter().any(|edge| edge.touches(a)) {
                if let Some(nearest) = nearest {
                    self.graph.add_edge(a, nearest, nearest_distance.ceil() as u32);
                }
            }
        }
    }
}
