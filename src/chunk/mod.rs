//! # Chunk Module
//!
//! The `Chunk` struct and its supporting pieces: coordinates, the mesh output
//! buffers, and the ring-difference streaming algorithm. A chunk is one
//! fixed-size vertical column of the world, `CHUNK_WIDTH` x `CHUNK_HEIGHT` x
//! `CHUNK_WIDTH` voxels, and is the unit of generation, meshing, and
//! streaming.
//!
//! ## Lifecycle
//!
//! A chunk is constructed for a coordinate, its voxel grid is populated from
//! the terrain generator, and its surface mesh is built by culling every face
//! that rests against a solid neighbor. Once built it is immutable except for
//! its activation flag: deactivated chunks keep their voxels and mesh and are
//! only toggled out of visibility, never rebuilt or freed.
//!
//! ## Neighbor lookups
//!
//! Face culling at chunk boundaries needs the solidity of voxels owned by
//! adjacent chunks, which may not have been built yet. Those lookups go
//! through the world, which falls back to the pure terrain generator for
//! unbuilt chunks; determinism guarantees the answer matches whatever the
//! neighbor will later contain.

use cgmath::Vector3;

use crate::block::block_type::BlockType;
use crate::block::face::Face;
use crate::block::BlockId;
use crate::terrain::generator::TerrainGenerator;
use crate::voxel_data::{CHUNK_HEIGHT, CHUNK_VOLUME, CHUNK_WIDTH};
use crate::world::World;

use chunk_coordinate::ChunkCoordinate;
use chunk_mesh::ChunkMesh;

pub mod chunk_coordinate;
pub mod chunk_mesh;
pub mod chunk_streaming;

/// One vertical column of voxels and its renderable surface.
#[derive(Debug)]
pub struct Chunk {
    coordinate: ChunkCoordinate,
    /// The world-space position of the chunk's `(0, 0, 0)` corner.
    position: Vector3<f32>,
    /// The voxel grid, indexed `[x][y][z]` flattened row-major.
    block_ids: Vec<BlockId>,
    mesh: Option<ChunkMesh>,
    is_active: bool,
    populated: bool,
}

impl Chunk {
    /// Creates an unpopulated chunk for the given coordinate.
    ///
    /// New chunks start active; streaming only creates chunks it intends to
    /// show.
    pub fn new(coordinate: ChunkCoordinate) -> Self {
        Chunk {
            coordinate,
            position: Vector3::new(
                (coordinate.x * CHUNK_WIDTH) as f32,
                0.0,
                (coordinate.z * CHUNK_WIDTH) as f32,
            ),
            block_ids: vec![0; CHUNK_VOLUME],
            mesh: None,
            is_active: true,
            populated: false,
        }
    }

    /// The coordinate of this chunk in the world grid.
    pub fn coordinate(&self) -> ChunkCoordinate {
        self.coordinate
    }

    /// The world-space origin of this chunk.
    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    /// Whether this chunk is currently visible.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Sets the visibility flag. The chunk's data is unaffected.
    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    /// Whether the voxel grid has been filled by the terrain generator.
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// The built surface mesh, or `None` while the chunk is still waiting in
    /// the mesh construction queue.
    pub fn mesh(&self) -> Option<&ChunkMesh> {
        self.mesh.as_ref()
    }

    /// Installs the built surface mesh.
    pub fn set_mesh(&mut self, mesh: ChunkMesh) {
        self.mesh = Some(mesh);
    }

    /// Fills the voxel grid by querying the terrain generator at this chunk's
    /// world offset plus every local coordinate.
    pub fn populate(&mut self, generator: &TerrainGenerator) {
        for x in 0..CHUNK_WIDTH {
            for y in 0..CHUNK_HEIGHT {
                for z in 0..CHUNK_WIDTH {
                    let world_position =
                        self.position + Vector3::new(x as f32, y as f32, z as f32);
                    self.block_ids[Self::voxel_index(x, y, z)] =
                        generator.generate(world_position);
                }
            }
        }
        self.populated = true;
    }

    /// Builds the face-culled surface mesh for this chunk.
    ///
    /// For every solid voxel, each of the six faces is emitted as one quad
    /// unless the voxel resting against that face is solid. In-chunk
    /// neighbors are read from the local grid; neighbors across the chunk
    /// boundary are resolved through the world, which may consult the pure
    /// terrain generator for chunks that have not been built.
    pub fn build_mesh(&self, world: &World) -> ChunkMesh {
        let mut mesh = ChunkMesh::new();

        for y in 0..CHUNK_HEIGHT {
            for x in 0..CHUNK_WIDTH {
                for z in 0..CHUNK_WIDTH {
                    let block_position = Vector3::new(x, y, z);
                    let block_type = world.block_type(self.block_id_at(block_position));
                    if !block_type.is_solid() {
                        continue;
                    }

                    for face in Face::all() {
                        if self.is_face_hidden(block_position, face, world) {
                            continue;
                        }
                        mesh.add_face(block_position, face, block_type.texture_for(face));
                    }
                }
            }
        }

        mesh
    }

    /// Whether the given face of the voxel at `block_position` is obscured by
    /// a solid neighbor.
    fn is_face_hidden(&self, block_position: Vector3<i32>, face: Face, world: &World) -> bool {
        let neighbor = block_position + face.neighbor_offset();

        if !Self::is_local_position_in_chunk(neighbor) {
            // The neighbor belongs to another chunk (or lies outside the
            // world); ask the world, which can fall back to the generator.
            let world_position = self.position
                + Vector3::new(neighbor.x as f32, neighbor.y as f32, neighbor.z as f32);
            return world.is_voxel_solid(world_position);
        }

        world.block_type(self.block_id_at(neighbor)).is_solid()
    }

    /// The block id of the voxel at a chunk-local coordinate.
    ///
    /// # Panics
    /// Panics if the coordinate lies outside the chunk.
    pub fn block_id_at(&self, local: Vector3<i32>) -> BlockId {
        self.block_ids[Self::voxel_index(local.x, local.y, local.z)]
    }

    /// The block id of the voxel at a world position, or air if this chunk
    /// has not been populated or the position falls outside it.
    pub fn voxel_id_from_world_position(&self, position: Vector3<f32>) -> BlockId {
        if !self.populated {
            return 0;
        }

        let local = Vector3::new(
            position.x.floor() as i32 - self.position.x as i32,
            position.y.floor() as i32,
            position.z.floor() as i32 - self.position.z as i32,
        );

        if !Self::is_local_position_in_chunk(local) {
            return 0;
        }

        self.block_id_at(local)
    }

    /// Whether the voxel at a world position is solid according to this
    /// chunk's grid. Returns `false` while unpopulated.
    pub fn is_voxel_solid_at_world_position(
        &self,
        position: Vector3<f32>,
        block_types: &[BlockType],
    ) -> bool {
        block_types[self.voxel_id_from_world_position(position) as usize].is_solid()
    }

    /// Whether a chunk-local coordinate lies inside the chunk bounds.
    pub fn is_local_position_in_chunk(position: Vector3<i32>) -> bool {
        position.x >= 0
            && position.x < CHUNK_WIDTH
            && position.y >= 0
            && position.y < CHUNK_HEIGHT
            && position.z >= 0
            && position.z < CHUNK_WIDTH
    }

    fn voxel_index(x: i32, y: i32, z: i32) -> usize {
        ((x * CHUNK_HEIGHT + y) * CHUNK_WIDTH + z) as usize
    }
}

/// Chunks are identified by where they sit in the world, not by their
/// contents.
impl PartialEq for Chunk {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}
