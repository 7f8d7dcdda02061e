//! # Biome Module
//!
//! Static terrain-shaping configuration: the base ground height, the noise
//! amplitude and scale applied on top of it, and the ordered list of lode
//! rules that place ore veins inside generic stone.

use serde::{Deserialize, Serialize};

use crate::block::block_type::BlockKind;
use crate::block::BlockId;

/// The terrain profile of a biome.
///
/// `solid_ground_height` is the guaranteed ground level; `terrain_height` is
/// the maximum noise-driven elevation above it. Lodes are evaluated in
/// declaration order, later rules overwriting earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomeAttributes {
    /// The display name of the biome.
    pub name: String,
    /// The ground height every column reaches regardless of noise.
    pub solid_ground_height: i32,
    /// The maximum height added above `solid_ground_height` by terrain noise.
    pub terrain_height: i32,
    /// The horizontal scale fed to the 2D terrain noise.
    pub terrain_scale: f32,
    /// Ore-vein placement rules, applied to generic stone in declaration
    /// order.
    pub lodes: Vec<Lode>,
}

/// A single ore-vein placement rule.
///
/// A stone voxel becomes `block_id` when its height lies inside the rule's
/// inclusive band and the 3D noise field exceeds the rule's threshold there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lode {
    /// The display name of the lode.
    pub name: String,
    /// The block id written where this rule matches.
    pub block_id: BlockId,
    /// The lowest height (inclusive) the lode can spawn at.
    pub min_height: i32,
    /// The highest height (inclusive) the lode can spawn at.
    pub max_height: i32,
    /// The scale fed to the 3D vein noise.
    pub scale: f32,
    /// The `[0, 1]` noise threshold above which the vein is placed.
    pub threshold: f32,
    /// A per-lode offset decorrelating this rule's noise from other lodes.
    pub noise_offset: f32,
}

impl Default for BiomeAttributes {
    fn default() -> Self {
        BiomeAttributes {
            name: "Plains".to_string(),
            solid_ground_height: 5,
            terrain_height: 12,
            terrain_scale: 0.25,
            lodes: vec![
                Lode {
                    name: "Dirt Pocket".to_string(),
                    block_id: BlockKind::DIRT.id(),
                    min_height: 1,
                    max_height: 20,
                    scale: 0.1,
                    threshold: 0.6,
                    noise_offset: 555.0,
                },
                Lode {
                    name: "Coal Seam".to_string(),
                    block_id: BlockKind::COAL.id(),
                    min_height: 1,
                    max_height: 12,
                    scale: 0.12,
                    threshold: 0.55,
                    noise_offset: 345.0,
                },
            ],
        }
    }
}
