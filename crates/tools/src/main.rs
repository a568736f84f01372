use anyhow::Result;
use clap::Parser;
use layout_core::{LayoutConfig, LayoutGenerator};

/// Generates a room layout and prints a summary or the full layout as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the generator's random stream
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Number of rooms to place
    #[arg(short, long, default_value_t = 10)]
    rooms: usize,

    /// Half-width of the square placement region
    #[arg(long, default_value_t = 10.0)]
    extent: f32,

    /// Minimum distance between rooms
    #[arg(long, default_value_t = 2.0)]
    min_distance: f32,

    /// Maximum allowed distance to a room's nearest neighbor
    #[arg(long, default_value_t = 15.0)]
    max_neighbor_distance: f32,

    /// Number of floor levels
    #[arg(long, default_value_t = 4)]
    floors: usize,

    /// Vertical spacing between floor levels
    #[arg(long, default_value_t = 25.0)]
    floor_spacing: f32,

    /// Iteration budget for overlap relaxation
    #[arg(long, default_value_t = 40)]
    relax_iterations: u32,

    /// Emit the full layout as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = LayoutConfig {
        room_count: args.rooms,
        horizontal_extent: args.extent,
        min_room_distance: args.min_distance,
        max_neighbor_distance: args.max_neighbor_distance,
        floor_count: args.floors,
        floor_spacing: args.floor_spacing,
        max_relax_iterations: args.relax_iterations,
        seed: args.seed,
        ..LayoutConfig::default()
    };

    let mut generator = LayoutGenerator::new(config);
    let layout = generator.generate();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
        return Ok(());
    }

    println!("Rooms placed: {}", layout.room_positions.len());
    println!("Graph edges: {}", generator.graph().edge_count());
    println!("Corridors: {}", layout.corridors.len());
    println!("Layout digest: {:016x}", layout.digest());
    if !layout.relaxation_converged {
        println!("Warning: overlap relaxation exhausted its iteration budget.");
    }

    Ok(())
}
