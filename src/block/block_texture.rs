//! # Block Texture Module
//!
//! Identifies tiles in the square texture atlas and converts a tile id into
//! the normalized UV rectangle an external renderer samples from.
//!
//! The atlas is `TEXTURE_ATLAS_SIZE_IN_BLOCKS` tiles on a side, with tile ids
//! assigned row-major from the top-left. UV space has its origin at the
//! bottom-left, so the rectangle computation flips vertically: tile row 0
//! maps to the top of UV space.

use crate::voxel_data::{NORMALIZED_BLOCK_TEXTURE_SIZE, TEXTURE_ATLAS_SIZE_IN_BLOCKS};

/// A single tile in the texture atlas.
///
/// Only the stable integer id participates in UV computation; the name exists
/// for logging and debugging.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlockTexture {
    id: u32,
    name: &'static str,
}

impl BlockTexture {
    /// The stone tile.
    pub const STONE: BlockTexture = BlockTexture::new(0, "Stone");
    /// The dirt tile.
    pub const DIRT: BlockTexture = BlockTexture::new(1, "Dirt");
    /// The grass-on-dirt side tile.
    pub const GRASS_SIDE: BlockTexture = BlockTexture::new(2, "Grass Side");
    /// The coal ore tile.
    pub const COAL: BlockTexture = BlockTexture::new(3, "Coal");
    /// The wooden plank tile.
    pub const PLANK: BlockTexture = BlockTexture::new(4, "Plank");
    /// The log bark tile.
    pub const LOG_SIDE: BlockTexture = BlockTexture::new(5, "Log Side");
    /// The log end-grain tile.
    pub const LOG_TOP: BlockTexture = BlockTexture::new(6, "Log Top");
    /// The grass top tile.
    pub const GRASS_TOP: BlockTexture = BlockTexture::new(7, "Grass Top");
    /// The cobblestone tile.
    pub const COBBLESTONE: BlockTexture = BlockTexture::new(8, "Cobblestone");
    /// The bedrock tile.
    pub const BEDROCK: BlockTexture = BlockTexture::new(9, "Bedrock");
    /// The sand tile.
    pub const SAND: BlockTexture = BlockTexture::new(10, "Sand");
    /// The brick tile.
    pub const BRICKS: BlockTexture = BlockTexture::new(11, "Bricks");
    /// The unlit furnace front tile.
    pub const FURNACE_COLD: BlockTexture = BlockTexture::new(12, "Furnace Cold");
    /// The furnace back tile.
    pub const FURNACE_BACK: BlockTexture = BlockTexture::new(13, "Furnace Back");
    /// The lit furnace front tile.
    pub const FURNACE_HOT: BlockTexture = BlockTexture::new(14, "Furnace Hot");
    /// The furnace side tile.
    pub const FURNACE_SIDE: BlockTexture = BlockTexture::new(15, "Furnace Side");

    const fn new(id: u32, name: &'static str) -> Self {
        BlockTexture { id, name }
    }

    /// The stable atlas tile id.
    pub fn id(self) -> u32 {
        self.id
    }

    /// The human-readable tile name.
    pub fn name(self) -> &'static str {
        self.name
    }

    /// Computes the four UV corners for this tile, in the quad corner order
    /// used by mesh construction: bottom-left, top-left, bottom-right,
    /// top-right.
    ///
    /// # Returns
    /// Four normalized `[u, v]` coordinates spanning one atlas tile.
    pub fn uvs(self) -> [[f32; 2]; 4] {
        let column = self.id % TEXTURE_ATLAS_SIZE_IN_BLOCKS;
        let row = self.id / TEXTURE_ATLAS_SIZE_IN_BLOCKS;

        let x = column as f32 * NORMALIZED_BLOCK_TEXTURE_SIZE;
        // Flip vertically so atlas row 0 lands at the top of UV space.
        let y = 1.0 - row as f32 * NORMALIZED_BLOCK_TEXTURE_SIZE - NORMALIZED_BLOCK_TEXTURE_SIZE;

        [
            [x, y],
            [x, y + NORMALIZED_BLOCK_TEXTURE_SIZE],
            [x + NORMALIZED_BLOCK_TEXTURE_SIZE, y],
            [
                x + NORMALIZED_BLOCK_TEXTURE_SIZE,
                y + NORMALIZED_BLOCK_TEXTURE_SIZE,
            ],
        ]
    }

    /// All known atlas tiles, in id order.
    pub fn all() -> [BlockTexture; 16] {
        [
            BlockTexture::STONE,
            BlockTexture::DIRT,
            BlockTexture::GRASS_SIDE,
            BlockTexture::COAL,
            BlockTexture::PLANK,
            BlockTexture::LOG_SIDE,
            BlockTexture::LOG_TOP,
            BlockTexture::GRASS_TOP,
            BlockTexture::COBBLESTONE,
            BlockTexture::BEDROCK,
            BlockTexture::SAND,
            BlockTexture::BRICKS,
            BlockTexture::FURNACE_COLD,
            BlockTexture::FURNACE_BACK,
            BlockTexture::FURNACE_HOT,
            BlockTexture::FURNACE_SIDE,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_ids_are_dense_and_ordered() {
        for (expected_id, texture) in BlockTexture::all().into_iter().enumerate() {
            assert_eq!(texture.id(), expected_id as u32);
        }
    }

    #[test]
    fn tile_zero_maps_to_the_top_left_of_uv_space() {
        let uvs = BlockTexture::STONE.uvs();
        assert_eq!(uvs[0], [0.0, 0.75]); // bottom-left
        assert_eq!(uvs[1], [0.0, 1.0]); // top-left
        assert_eq!(uvs[2], [0.25, 0.75]); // bottom-right
        assert_eq!(uvs[3], [0.25, 1.0]); // top-right
    }

    #[test]
    fn uv_rectangles_are_one_tile_wide_and_inside_the_atlas() {
        for texture in BlockTexture::all() {
            let uvs = texture.uvs();
            assert!((uvs[2][0] - uvs[0][0] - NORMALIZED_BLOCK_TEXTURE_SIZE).abs() < 1e-6);
            assert!((uvs[1][1] - uvs[0][1] - NORMALIZED_BLOCK_TEXTURE_SIZE).abs() < 1e-6);
            for [u, v] in uvs {
                assert!((0.0..=1.0).contains(&u));
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }
}
