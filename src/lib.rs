#![warn(missing_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Terrain
//!
//! The terrain substrate of a block-based 3D world: deterministic voxel
//! terrain generation, per-chunk face-culled mesh construction, and
//! incremental chunk streaming around a moving observer.
//!
//! ## Key Modules
//!
//! * `voxel_data` - Shared dimensional constants and geometry lookup tables
//! * `block` - The face enum, texture atlas tiles, and the block-type catalog
//! * `terrain` - Seeded noise fields, biome profiles, and the pure
//!   position-to-block-id generator
//! * `chunk` - Chunk columns, their mesh output buffers, and the
//!   ring-difference streaming algorithm
//! * `world` - The chunk grid: active-set bookkeeping, the deferred mesh
//!   queue, and observer movement handling
//! * `config` - Seed and biome configuration, loadable from JSON
//!
//! ## Architecture
//!
//! The world partitions an unbounded plane into fixed-size vertical chunk
//! columns. A chunk's voxels come from a pure function of world position, so
//! any query - including a neighbor lookup into a chunk that has not been
//! built yet - can fall back to the generator and still agree with what that
//! chunk will eventually contain. Meshing culls every cube face that rests
//! against a solid voxel and emits one quad per visible face. When the
//! observer crosses a chunk boundary, the streaming algorithm computes just
//! the newly exposed and newly hidden coordinate strips instead of
//! re-enumerating the whole view square.
//!
//! Everything runs single-threaded; mesh construction triggered by streaming
//! is amortized through a FIFO queue drained one chunk per scheduling tick.
//!
//! ## Usage
//!
//! ```no_run
//! use voxel_terrain::chunk::chunk_coordinate::ChunkCoordinate;
//! use voxel_terrain::config::WorldConfig;
//! use voxel_terrain::world::World;
//!
//! let mut world = World::new(WorldConfig::default());
//! world.generate_world();
//!
//! // Each frame: report the observer's chunk and drain one deferred mesh.
//! world.on_observer_moved(ChunkCoordinate::of(51, 50));
//! world.process_mesh_queue();
//! ```

use log::info;

use crate::chunk::Chunk;
use crate::config::WorldConfig;
use crate::world::World;

pub mod block;
pub mod chunk;
pub mod config;
pub mod terrain;
pub mod voxel_data;
pub mod world;

/// The environment variable naming an optional JSON config file.
pub const CONFIG_PATH_ENV: &str = "VOXEL_TERRAIN_CONFIG";

/// Runs the demo: generates the initial world region, walks the observer
/// along a scripted path, and logs streaming and meshing statistics.
///
/// Configuration is read from the JSON file named by `VOXEL_TERRAIN_CONFIG`
/// when that variable is set; otherwise the defaults are used.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => match WorldConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(error) => {
                log::error!("Could not load config from {path}: {error}");
                return;
            }
        },
        Err(_) => WorldConfig::default(),
    };

    info!(
        "Building world with seed {} in biome '{}'",
        config.seed, config.biome.name
    );

    let mut world = World::new(config);
    world.generate_world();
    log_world_stats(&world);

    // Walk the observer east, then diagonally, then teleport; drain the
    // deferred mesh queue one build per simulated tick.
    let path = [(51, 50), (52, 50), (53, 51), (60, 60)];
    for (x, z) in path {
        let coordinate = chunk::chunk_coordinate::ChunkCoordinate::of(x, z);
        world.on_observer_moved(coordinate);
        while world.process_mesh_queue() {}
        info!(
            "Observer at {}: {} active chunks",
            coordinate,
            world.active_chunks().len()
        );
    }

    log_world_stats(&world);
}

fn log_world_stats(world: &World) {
    let built: Vec<&Chunk> = world
        .active_chunks()
        .iter()
        .filter_map(|&coordinate| world.chunk(coordinate))
        .collect();
    let quads: usize = built
        .iter()
        .filter_map(|chunk| chunk.mesh())
        .map(|mesh| mesh.quad_count())
        .sum();
    info!(
        "{} active chunks, {} quads ({} vertices)",
        built.len(),
        quads,
        quads * 4
    );
}
