//! # Noise Module
//!
//! Deterministic coherent-noise fields over 2D and 3D world coordinates.
//!
//! Terrain generation and cross-chunk solidity queries both sample these
//! fields, sometimes for chunks that have not been built yet, so the contract
//! is strict determinism: identical `(seed, position, offset, scale)` inputs
//! always produce identical outputs. The generator instance and its seed are
//! threaded explicitly through the terrain generator; there is no process-wide
//! noise state.

use cgmath::{Vector2, Vector3};
use noise::{NoiseFn, Perlin};

use crate::voxel_data::CHUNK_WIDTH;

/// A deterministic scalar noise field sampled by terrain generation.
///
/// The trait exists so tests can substitute constant fields for the
/// Perlin-backed [`WorldNoise`] and pin terrain heights exactly.
pub trait NoiseField {
    /// Samples the 2D field at a world-space XZ position.
    ///
    /// The position is first mapped into chunk-normalized space
    /// (`position / CHUNK_WIDTH`), then scaled and offset. The field's native
    /// `[-1, 1]` output is remapped to `[0, 1]`.
    fn sample_2d(&self, position: Vector2<f32>, offset: f32, scale: f32) -> f32;

    /// Samples the 3D field at `(position + offset) * scale` and reports
    /// whether the `[0, 1]`-remapped value exceeds `threshold`.
    fn sample_3d(&self, position: Vector3<f32>, offset: f32, scale: f32, threshold: f32) -> bool;
}

/// The production noise field: Perlin noise seeded once per world.
#[derive(Debug, Clone)]
pub struct WorldNoise {
    seed: u32,
    perlin: Perlin,
}

impl WorldNoise {
    /// Creates a noise field for the given world seed.
    pub fn new(seed: u32) -> Self {
        WorldNoise {
            seed,
            perlin: Perlin::new(seed),
        }
    }

    /// The world seed this field was constructed with.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl NoiseField for WorldNoise {
    fn sample_2d(&self, position: Vector2<f32>, offset: f32, scale: f32) -> f32 {
        let x = (position.x / CHUNK_WIDTH as f32) * scale + offset;
        let y = (position.y / CHUNK_WIDTH as f32) * scale + offset;
        (self.perlin.get([x as f64, y as f64]) * 0.5 + 0.5) as f32
    }

    fn sample_3d(&self, position: Vector3<f32>, offset: f32, scale: f32, threshold: f32) -> bool {
        let x = ((position.x + offset) * scale) as f64;
        let y = ((position.y + offset) * scale) as f64;
        let z = ((position.z + offset) * scale) as f64;
        let sample = self.perlin.get([x, y, z]) * 0.5 + 0.5;
        sample > threshold as f64
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_seeds_produce_identical_fields() {
        let a = WorldNoise::new(1337);
        let b = WorldNoise::new(1337);

        for _ in 0..200 {
            let position = Vector2::new(
                fastrand::f32() * 1000.0,
                fastrand::f32() * 1000.0,
            );
            assert_eq!(
                a.sample_2d(position, 0.0, 0.25),
                b.sample_2d(position, 0.0, 0.25)
            );
        }
    }

    #[test]
    fn repeated_samples_are_pure() {
        let noise = WorldNoise::new(42);
        let position = Vector3::new(123.0, 7.0, 456.0);

        let first = noise.sample_3d(position, 345.0, 0.12, 0.55);
        for _ in 0..10 {
            assert_eq!(noise.sample_3d(position, 345.0, 0.12, 0.55), first);
        }
    }

    #[test]
    fn differing_seeds_diverge_somewhere() {
        let a = WorldNoise::new(1);
        let b = WorldNoise::new(2);

        let diverged = (0..200).any(|i| {
            let position = Vector2::new(i as f32 * 3.7, i as f32 * 11.3);
            a.sample_2d(position, 0.0, 0.5) != b.sample_2d(position, 0.0, 0.5)
        });
        assert!(diverged);
    }

    #[test]
    fn samples_stay_in_the_unit_interval() {
        let noise = WorldNoise::new(99);
        for i in 0..500 {
            let position = Vector2::new(i as f32 * 1.91, i as f32 * 0.73);
            let sample = noise.sample_2d(position, 0.0, 0.8);
            assert!((-0.001..=1.001).contains(&sample), "sample {sample} out of range");
        }
    }
}
