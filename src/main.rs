//! # Voxel Terrain Demo Entry Point
//!
//! Generates a world, walks the observer through it, and logs what the
//! terrain core did. All real functionality lives in the library.

fn main() {
    voxel_terrain::run();
}
