//! Room arena: stable ids addressing mutable position records.

use slotmap::SlotMap;

use crate::types::{RoomId, Vec3};

/// One placed room. Identity for graph purposes is the arena key, never
/// the position or the display id, so two rooms at the same coordinates
/// stay distinct nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomNode {
    /// Sequential 1-based id, unique within one generation run.
    pub id: u32,
    /// Mutable while the generator runs, frozen once generation completes.
    pub position: Vec3,
}

pub type RoomArena = SlotMap<RoomId, RoomNode>;
