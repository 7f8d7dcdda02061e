//! # Terrain Generator Module
//!
//! The pure `world position -> block id` function that defines the shape of
//! the world. The world grid calls it while populating chunks, and falls back
//! to it directly when a solidity query lands in a chunk that has not been
//! built yet; because generation is deterministic, both paths always agree.
//!
//! ## Passes
//!
//! 1. **Invariant pass**: out-of-world positions are air, the world floor at
//!    `y == 0` is bedrock, unconditionally.
//! 2. **Stratigraphy pass**: 2D noise picks a surface height per column;
//!    above it is air, at it grass, the three voxels below it dirt, and
//!    everything further down generic stone.
//! 3. **Vein overlay pass**: lode rules rewrite generic stone where their
//!    height band and 3D noise threshold both match, in declaration order
//!    with last match winning.

use cgmath::{Vector2, Vector3};

use crate::block::block_type::BlockKind;
use crate::block::BlockId;
use crate::voxel_data::{CHUNK_HEIGHT, WORLD_SIZE_IN_VOXELS};

use super::biome::BiomeAttributes;
use super::noise::{NoiseField, WorldNoise};

/// The number of dirt layers between the grass surface and generic stone.
const DIRT_DEPTH: i32 = 4;

/// Deterministic voxel terrain generation for one world.
///
/// Holds the biome profile and the seeded noise field; both are threaded in
/// explicitly at construction so there is no global generation state.
pub struct TerrainGenerator {
    biome: BiomeAttributes,
    noise: Box<dyn NoiseField>,
}

impl TerrainGenerator {
    /// Creates a generator from a biome profile and an explicit noise field.
    pub fn new(biome: BiomeAttributes, noise: Box<dyn NoiseField>) -> Self {
        TerrainGenerator { biome, noise }
    }

    /// Creates a generator backed by Perlin noise for the given world seed.
    pub fn with_seed(biome: BiomeAttributes, seed: u32) -> Self {
        Self::new(biome, Box::new(WorldNoise::new(seed)))
    }

    /// The biome profile this generator was built with.
    pub fn biome(&self) -> &BiomeAttributes {
        &self.biome
    }

    /// Returns the block id of the voxel at the given world position.
    ///
    /// Pure and total: repeated calls with the same position return the same
    /// id, and the id is always a valid index into the default catalog. There
    /// are no error paths.
    pub fn generate(&self, position: Vector3<f32>) -> BlockId {
        if !Self::is_voxel_in_world(position) {
            return BlockKind::AIR.id();
        }

        let y = position.y.floor() as i32;
        if y == 0 {
            return BlockKind::BEDROCK.id();
        }

        let surface_height = (self.biome.terrain_height as f32
            * self.noise.sample_2d(
                Vector2::new(position.x, position.z),
                0.0,
                self.biome.terrain_scale,
            ))
        .floor() as i32
            + self.biome.solid_ground_height;

        if y > surface_height {
            return BlockKind::AIR.id();
        }
        if y == surface_height {
            return BlockKind::GRASS.id();
        }
        if y > surface_height - DIRT_DEPTH {
            return BlockKind::DIRT.id();
        }

        // Generic stone below the dirt layer; lodes may rewrite it.
        let mut block_id = BlockKind::STONE.id();
        for lode in &self.biome.lodes {
            if y >= lode.min_height
                && y <= lode.max_height
                && self
                    .noise
                    .sample_3d(position, lode.noise_offset, lode.scale, lode.threshold)
            {
                block_id = lode.block_id;
            }
        }

        block_id
    }

    /// Whether a world position lies inside the hard world bounds.
    ///
    /// Queries beyond the bounds degrade to air rather than failing.
    pub fn is_voxel_in_world(position: Vector3<f32>) -> bool {
        position.x >= 0.0
            && (position.x as i64) < WORLD_SIZE_IN_VOXELS
            && position.y >= 0.0
            && (position.y as i32) < CHUNK_HEIGHT
            && position.z >= 0.0
            && (position.z as i64) < WORLD_SIZE_IN_VOXELS
    }
}
