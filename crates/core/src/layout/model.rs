//! Public data model for a generated room layout.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::types::Vec3;

/// One corridor's endpoint positions, handed to a renderer as the
/// connection to visualize.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorridorSegment {
    pub a: Vec3,
    pub b: Vec3,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedLayout {
    /// Final room positions in creation order.
    pub room_positions: Vec<Vec3>,
    /// Corridor segments in ascending-weight order, one per accepted
    /// spanning-forest edge.
    pub corridors: Vec<CorridorSegment>,
    /// False when overlap relaxation exhausted its iteration budget before
    /// reaching a pass with no pushes.
    pub relaxation_converged: bool,
}

impl GeneratedLayout {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.room_positions.len() as u32).to_le_bytes());
        for position in &self.room_positions {
            push_vec3(&mut bytes, *position);
        }
        bytes.extend((self.corridors.len() as u32).to_le_bytes());
        for segment in &self.corridors {
            push_vec3(&mut bytes, segment.a);
            push_vec3(&mut bytes, segment.b);
        }
        bytes.push(u8::from(self.relaxation_converged));
        bytes
    }

    /// Stable digest over the canonical byte form, for determinism checks.
    pub fn digest(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

fn push_vec3(bytes: &mut Vec<u8>, v: Vec3) {
    bytes.extend(v.x.to_le_bytes());
    bytes.extend(v.y.to_le_bytes());
    bytes.extend(v.z.to_le_bytes());
}
