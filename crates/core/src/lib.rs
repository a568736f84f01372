pub mod layout;
pub mod types;

pub use layout::{CorridorSegment, GeneratedLayout, LayoutConfig, LayoutGenerator, generate_layout};
pub use types::*;
