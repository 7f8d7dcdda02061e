//! # Block Type Module
//!
//! Catalog entries describing each kind of block: a display name, a solidity
//! flag, and the atlas texture used by each of the six faces. Block types are
//! immutable once constructed; voxels refer to them by catalog index.

use num_derive::FromPrimitive;

use super::block_texture::BlockTexture;
use super::face::Face;
use super::BlockId;

/// The well-known block ids of the default catalog.
///
/// Variants convert to and from raw [`BlockId`] values; the numeric order
/// must match the entry order of [`super::default_block_catalog`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockKind {
    /// Air, id 0. The only non-solid block.
    AIR,

    /// Bedrock, the unbreakable world floor at `y == 0`.
    BEDROCK,

    /// Generic stone, the fill below the dirt layer. Lode rules only ever
    /// overwrite voxels of this kind.
    STONE,

    /// Dirt, the strata directly beneath the surface.
    DIRT,

    /// Wooden planks.
    PLANKS,

    /// A log with bark sides and end-grain top and bottom.
    LOG,

    /// Grass, the surface block.
    GRASS,

    /// Coal ore placed by the default lode rules.
    COAL,
}

impl BlockKind {
    /// The number of entries in the default catalog.
    pub const COUNT: usize = 8;

    /// Converts a raw block id back into a well-known kind.
    ///
    /// # Returns
    /// `None` if the id lies outside the default catalog.
    pub fn from_id(id: BlockId) -> Option<Self> {
        num::FromPrimitive::from_u16(id)
    }

    /// This kind's catalog index as a raw block id.
    pub fn id(self) -> BlockId {
        self as BlockId
    }
}

/// An immutable catalog entry describing one kind of block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockType {
    name: &'static str,
    is_solid: bool,
    back_texture: BlockTexture,
    front_texture: BlockTexture,
    top_texture: BlockTexture,
    bottom_texture: BlockTexture,
    left_texture: BlockTexture,
    right_texture: BlockTexture,
}

impl BlockType {
    /// Creates a block type with fully independent per-face textures.
    ///
    /// # Arguments
    /// * `name` - The display name of the block
    /// * `is_solid` - Whether the block occludes neighboring faces
    /// * `back_texture` .. `right_texture` - One atlas tile per face, in the
    ///   fixed face order Back, Front, Top, Bottom, Left, Right
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &'static str,
        is_solid: bool,
        back_texture: BlockTexture,
        front_texture: BlockTexture,
        top_texture: BlockTexture,
        bottom_texture: BlockTexture,
        left_texture: BlockTexture,
        right_texture: BlockTexture,
    ) -> Self {
        BlockType {
            name,
            is_solid,
            back_texture,
            front_texture,
            top_texture,
            bottom_texture,
            left_texture,
            right_texture,
        }
    }

    /// Creates a solid block type with one texture on every face.
    pub fn with_single_texture(name: &'static str, texture: BlockTexture) -> Self {
        Self::with_single_texture_and_solidity(name, texture, true)
    }

    /// Creates a block type with one texture on every face and an explicit
    /// solidity flag. Only air uses a non-solid entry.
    pub fn with_single_texture_and_solidity(
        name: &'static str,
        texture: BlockTexture,
        is_solid: bool,
    ) -> Self {
        Self::new(
            name, is_solid, texture, texture, texture, texture, texture, texture,
        )
    }

    /// Creates a solid block type with one texture wrapped around the four
    /// sides and a shared texture for both top and bottom.
    pub fn with_wrapped_side_texture(
        name: &'static str,
        side_texture: BlockTexture,
        top_bottom_texture: BlockTexture,
    ) -> Self {
        Self::new(
            name,
            true,
            side_texture,
            side_texture,
            top_bottom_texture,
            top_bottom_texture,
            side_texture,
            side_texture,
        )
    }

    /// Creates a solid block type with wrapped sides and distinct top and
    /// bottom textures.
    pub fn with_split_side_texture(
        name: &'static str,
        side_texture: BlockTexture,
        top_texture: BlockTexture,
        bottom_texture: BlockTexture,
    ) -> Self {
        Self::new(
            name,
            true,
            side_texture,
            side_texture,
            top_texture,
            bottom_texture,
            side_texture,
            side_texture,
        )
    }

    /// The display name of the block.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this block occludes the faces of neighboring voxels.
    pub fn is_solid(&self) -> bool {
        self.is_solid
    }

    /// Looks up the atlas texture for one face of the block.
    ///
    /// The match is exhaustive over the closed [`Face`] set, so there is no
    /// invalid-face error path.
    pub fn texture_for(&self, face: Face) -> BlockTexture {
        match face {
            Face::BACK => self.back_texture,
            Face::FRONT => self.front_texture,
            Face::TOP => self.top_texture,
            Face::BOTTOM => self.bottom_texture,
            Face::LEFT => self.left_texture,
            Face::RIGHT => self.right_texture,
        }
    }
}
