//! # Terrain Module
//!
//! Deterministic voxel terrain generation: seeded noise fields, the biome
//! profile describing the stratigraphy, and the pure generator that maps any
//! world position to a block id. Everything here is regenerated on demand
//! from `seed` + configuration; nothing is persisted.

pub mod biome;
pub mod generator;
pub mod noise;
