//! Procedural room layout domain split into coherent submodules.

pub mod config;
pub mod graph;
pub mod model;
pub mod mst;
pub mod rooms;

mod generator;
mod sampling;

pub use config::LayoutConfig;
pub use generator::LayoutGenerator;
pub use model::{CorridorSegment, GeneratedLayout};

/// Runs the whole placement/relaxation/corridor pipeline for one configuration.
pub fn generate_layout(config: LayoutConfig) -> GeneratedLayout {
    let mut generator = LayoutGenerator::new(config);
    generator.generate()
}
