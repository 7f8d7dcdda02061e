//! # Chunk Mesh Module
//!
//! The renderable surface of one chunk: three parallel flat buffers holding
//! vertex positions, triangle indices, and atlas UVs. The buffers use
//! `bytemuck`-castable element types so an external renderer can upload them
//! to the GPU without copying; normals are recomputed externally from the
//! triangle data and are not part of the mesh.
//!
//! Every visible face contributes exactly one quad. The quad's two triangles
//! reuse its second and third vertices, so four vertices and six indices are
//! stored per face. No merging across voxels is performed.

use cgmath::Vector3;

use crate::block::block_texture::BlockTexture;
use crate::block::face::Face;
use crate::voxel_data::VOXEL_VERTICES;

/// The mesh output buffers of one chunk.
///
/// Invariants, with `q = quad_count()`:
/// `positions.len() == 4 * q`, `triangles.len() == 6 * q`,
/// `uvs.len() == positions.len()`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ChunkMesh {
    positions: Vec<[f32; 3]>,
    triangles: Vec<u32>,
    uvs: Vec<[f32; 2]>,
    vertex_index: u32,
}

impl ChunkMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        ChunkMesh::default()
    }

    /// Appends one quad for a visible voxel face.
    ///
    /// # Arguments
    /// * `block_position` - The voxel's chunk-local position
    /// * `face` - Which face of the voxel is visible
    /// * `texture` - The atlas tile drawn on the face
    ///
    /// The four corners come from the unit-cube corner table in the face's
    /// fixed order; the triangle indices are [i, i+1, i+2] and [i+2, i+1, i+3]
    /// so the shared corners are stored once.
    pub fn add_face(&mut self, block_position: Vector3<i32>, face: Face, texture: BlockTexture) {
        for corner in face.quad_corners() {
            let vertex = VOXEL_VERTICES[corner];
            self.positions.push([
                block_position.x as f32 + vertex[0],
                block_position.y as f32 + vertex[1],
                block_position.z as f32 + vertex[2],
            ]);
        }

        let i = self.vertex_index;
        self.triangles
            .extend_from_slice(&[i, i + 1, i + 2, i + 2, i + 1, i + 3]);
        self.vertex_index += 4;

        self.uvs.extend_from_slice(&texture.uvs());
    }

    /// The number of quads (visible faces) in the mesh.
    pub fn quad_count(&self) -> usize {
        self.positions.len() / 4
    }

    /// Whether the mesh holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The flat vertex position buffer, one `[x, y, z]` per vertex.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// The flat triangle index buffer, CCW winding, six indices per quad.
    pub fn triangles(&self) -> &[u32] {
        &self.triangles
    }

    /// The flat UV buffer, parallel to the position buffer.
    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    /// The position buffer as raw bytes for GPU upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// The triangle index buffer as raw bytes for GPU upload.
    pub fn triangle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// The UV buffer as raw bytes for GPU upload.
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }
}
