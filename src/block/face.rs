//! # Face Module
//!
//! The closed set of six cube faces, together with the lookup tables the mesh
//! builder needs: the neighbor offset used to decide whether a face is hidden,
//! and the unit-cube corner indices used to emit the face's quad.
//!
//! Faces always appear in the fixed order Back, Front, Top, Bottom, Left,
//! Right. Because `Face` is a closed enum matched exhaustively, an invalid
//! face value cannot reach the lookup paths at all.

use cgmath::Vector3;

/// One of the six faces of a voxel cube.
///
/// Back/Front run along the Z axis, Top/Bottom along Y, Left/Right along X.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Face {
    /// The back face (facing negative Z)
    BACK,

    /// The front face (facing positive Z)
    FRONT,

    /// The top face (facing positive Y)
    TOP,

    /// The bottom face (facing negative Y)
    BOTTOM,

    /// The left face (facing negative X)
    LEFT,

    /// The right face (facing positive X)
    RIGHT,
}

impl Face {
    /// Returns all six faces in the fixed order used by mesh construction:
    /// [BACK, FRONT, TOP, BOTTOM, LEFT, RIGHT].
    pub fn all() -> [Face; 6] {
        [
            Face::BACK,
            Face::FRONT,
            Face::TOP,
            Face::BOTTOM,
            Face::LEFT,
            Face::RIGHT,
        ]
    }

    /// The offset from a voxel to the neighbor resting against this face.
    ///
    /// A face is hidden exactly when the voxel at `position + offset` is
    /// solid, so this is the lookup direction for face culling.
    pub fn neighbor_offset(self) -> Vector3<i32> {
        match self {
            Face::BACK => Vector3::new(0, 0, -1),
            Face::FRONT => Vector3::new(0, 0, 1),
            Face::TOP => Vector3::new(0, 1, 0),
            Face::BOTTOM => Vector3::new(0, -1, 0),
            Face::LEFT => Vector3::new(-1, 0, 0),
            Face::RIGHT => Vector3::new(1, 0, 0),
        }
    }

    /// The four unit-cube corner indices describing this face's quad, indexing
    /// into [`crate::voxel_data::VOXEL_VERTICES`].
    ///
    /// The quad is listed as bottom-left, top-left, bottom-right, top-right.
    /// Two triangles cover it by reusing the second and third corners:
    /// [0, 1, 2] and [2, 1, 3] of this four-corner window.
    pub fn quad_corners(self) -> [usize; 4] {
        match self {
            Face::BACK => [0, 3, 1, 2],
            Face::FRONT => [5, 6, 4, 7],
            Face::TOP => [3, 7, 2, 6],
            Face::BOTTOM => [1, 5, 0, 4],
            Face::LEFT => [4, 7, 0, 3],
            Face::RIGHT => [1, 2, 5, 6],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_offsets_are_unit_axis_steps() {
        for face in Face::all() {
            let offset = face.neighbor_offset();
            assert_eq!(offset.x.abs() + offset.y.abs() + offset.z.abs(), 1);
        }
    }

    #[test]
    fn opposite_faces_have_opposite_offsets() {
        assert_eq!(Face::BACK.neighbor_offset(), -Face::FRONT.neighbor_offset());
        assert_eq!(Face::TOP.neighbor_offset(), -Face::BOTTOM.neighbor_offset());
        assert_eq!(Face::LEFT.neighbor_offset(), -Face::RIGHT.neighbor_offset());
    }

    #[test]
    fn quad_corners_lie_on_the_face_plane() {
        use crate::voxel_data::VOXEL_VERTICES;

        for face in Face::all() {
            let offset = face.neighbor_offset();
            // The axis the face moves along; every corner of the quad shares
            // the same coordinate on that axis.
            let (axis, expected) = if offset.x != 0 {
                (0, (offset.x + 1) / 2)
            } else if offset.y != 0 {
                (1, (offset.y + 1) / 2)
            } else {
                (2, (offset.z + 1) / 2)
            };

            for corner in face.quad_corners() {
                assert_eq!(VOXEL_VERTICES[corner][axis] as i32, expected, "{face:?}");
            }
        }
    }
}
