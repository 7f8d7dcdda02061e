//! # Voxel Data Module
//!
//! Shared dimensional constants and geometry lookup tables for the voxel world.
//!
//! Everything in this module is compile-time configuration: the size of a
//! chunk, the size of the world in chunks, the view distance used by chunk
//! streaming, and the unit-cube corner table used when emitting mesh quads.
//! All other modules read these values rather than carrying their own copies,
//! so the coordinate arithmetic in terrain generation, meshing, and streaming
//! always agrees.

/// The width and depth of a chunk in voxels (the X and Z extent).
pub const CHUNK_WIDTH: i32 = 10;
/// The height of a chunk in voxels (the Y extent). Chunks are full-height
/// columns, so this is also the height of the world.
pub const CHUNK_HEIGHT: i32 = 25;
/// The total number of voxels held by a single chunk.
pub const CHUNK_VOLUME: usize = (CHUNK_WIDTH * CHUNK_HEIGHT * CHUNK_WIDTH) as usize;

/// The number of chunk columns along each horizontal axis of the world.
pub const WORLD_SIZE_IN_CHUNKS: i32 = 100;
/// The number of voxels along each horizontal axis of the world.
pub const WORLD_SIZE_IN_VOXELS: i64 = (WORLD_SIZE_IN_CHUNKS * CHUNK_WIDTH) as i64;

/// The number of texture tiles along each axis of the square texture atlas.
pub const TEXTURE_ATLAS_SIZE_IN_BLOCKS: u32 = 4;
/// The normalized UV extent of a single atlas tile.
pub const NORMALIZED_BLOCK_TEXTURE_SIZE: f32 = 1.0 / TEXTURE_ATLAS_SIZE_IN_BLOCKS as f32;

/// View distance in chunks: the radius of the square region of active chunks
/// kept around the observer.
pub const VIEW_DISTANCE: i32 = 10;
/// The full edge length of the active square, `2 * VIEW_DISTANCE + 1`.
pub const ABSOLUTE_DISTANCE_LENGTH: i32 = VIEW_DISTANCE * 2 + 1;

/// The eight corners of a unit cube, in the fixed order referenced by the
/// per-face corner index tables in [`crate::block::face::Face`].
///
/// Corners 0-3 are the `z = 0` square walked counter-clockwise from the
/// origin; corners 4-7 are the same square at `z = 1`.
pub const VOXEL_VERTICES: [[f32; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0],
];
