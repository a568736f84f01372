//! Caller-supplied layout parameters, normalized by clamping rather than
//! rejection: the generator always produces some layout.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Number of rooms to place.
    pub room_count: usize,
    /// Rooms are placed inside `[-horizontal_extent, horizontal_extent]`
    /// on the two horizontal axes.
    pub horizontal_extent: f32,
    /// Minimum distance overlap relaxation tries to enforce between rooms.
    pub min_room_distance: f32,
    /// Rooms farther than this from their nearest neighbor are pulled closer.
    pub max_neighbor_distance: f32,
    /// Push factor for overlap relaxation (0.5 pushes half of the deficit).
    pub separation_strength: f32,
    /// Tolerance under which a residual deficit counts as resolved,
    /// avoiding jitter around the exact minimum distance.
    pub epsilon: f32,
    /// Iteration budget for overlap relaxation.
    pub max_relax_iterations: u32,
    /// Number of discrete floor levels.
    pub floor_count: usize,
    /// Height difference between consecutive floor levels.
    pub floor_spacing: f32,
    /// Seed for the generator's single random stream.
    pub seed: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            room_count: 10,
            horizontal_extent: 10.0,
            min_room_distance: 2.0,
            max_neighbor_distance: 15.0,
            separation_strength: 0.5,
            epsilon: 0.001,
            max_relax_iterations: 40,
            floor_count: 4,
            floor_spacing: 25.0,
            seed: 0,
        }
    }
}

impl LayoutConfig {
    /// Clamps every field into the range the generator assumes.
    pub fn clamped(mut self) -> Self {
        self.horizontal_extent = self.horizontal_extent.max(0.0);
        self.min_room_distance = self.min_room_distance.max(0.0);
        self.max_neighbor_distance = self.max_neighbor_distance.max(self.min_room_distance);
        self.separation_strength = self.separation_strength.clamp(0.0, 1.0);
        self.epsilon = self.epsilon.max(0.0);
        self.floor_count = self.floor_count.max(1);
        self
    }
}
