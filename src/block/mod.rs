//! # Block Module
//!
//! Block-level definitions for the voxel world: the closed set of cube faces,
//! the texture-atlas tiles, and the block-type catalog that maps a voxel's
//! block id to its solidity and per-face textures.

use block_texture::BlockTexture;
use block_type::{BlockKind, BlockType};

pub mod block_texture;
pub mod block_type;
pub mod face;

/// The underlying integer type used to store block ids in chunk voxel grids.
/// Id `0` is always air.
pub type BlockId = u16;

/// Builds the default block-type catalog.
///
/// The catalog is a fixed ordered list; a voxel's block id is its index into
/// this list, and the indices agree with [`BlockKind`]. The entry order must
/// therefore never be rearranged without updating `BlockKind` to match.
///
/// # Returns
/// The catalog of all block types known to the terrain generator.
pub fn default_block_catalog() -> Vec<BlockType> {
    let catalog = vec![
        BlockType::with_single_texture_and_solidity("Air", BlockTexture::BEDROCK, false),
        BlockType::with_single_texture("Bedrock", BlockTexture::BEDROCK),
        BlockType::with_single_texture("Stone", BlockTexture::STONE),
        BlockType::with_single_texture("Dirt", BlockTexture::DIRT),
        BlockType::with_single_texture("Planks", BlockTexture::PLANK),
        BlockType::with_wrapped_side_texture("Log", BlockTexture::LOG_SIDE, BlockTexture::LOG_TOP),
        BlockType::with_split_side_texture(
            "Grass",
            BlockTexture::GRASS_SIDE,
            BlockTexture::GRASS_TOP,
            BlockTexture::DIRT,
        ),
        BlockType::with_single_texture("Coal Ore", BlockTexture::COAL),
    ];

    debug_assert_eq!(catalog.len(), BlockKind::COUNT);
    catalog
}
