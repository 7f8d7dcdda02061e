//! # Chunk Streaming Module
//!
//! The ring-difference algorithm behind chunk streaming: when the observer
//! crosses from one chunk to another, compute exactly the coordinates that
//! newly enter (or leave) the square view region, without re-enumerating the
//! chunks that stay inside it.
//!
//! ## Bands
//!
//! Movement along one axis exposes a band of columns on that axis, crossed
//! with the full perpendicular view span. Diagonal movement is the union of
//! the X band and the Z band; the set result collapses the shared corner.
//! A move of one chunk exposes the single leading-edge column; a longer move
//! exposes `|distance|` columns, and a jump past the whole view span exposes
//! the complete new square. This keeps a boundary crossing at O(R) (or O(R²)
//! for the diagonal/jump cases) instead of re-walking the full square.

use std::collections::HashSet;

use crate::voxel_data::{ABSOLUTE_DISTANCE_LENGTH, VIEW_DISTANCE};

use super::chunk_coordinate::ChunkCoordinate;

/// The horizontal axis a band computation moves along.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ChunkAxis {
    X,
    Z,
}

/// Computes the chunk coordinates that must newly become active when the
/// observer moves from `previous` to `current`.
pub fn chunks_to_load(
    previous: ChunkCoordinate,
    current: ChunkCoordinate,
) -> HashSet<ChunkCoordinate> {
    find_chunks(previous, current)
}

/// Computes the chunk coordinates that fall out of view when the observer
/// moves from `previous` to `current`.
///
/// Unloading is loading in reverse: the same routine with the arguments
/// swapped.
pub fn chunks_to_unload(
    previous: ChunkCoordinate,
    current: ChunkCoordinate,
) -> HashSet<ChunkCoordinate> {
    find_chunks(current, previous)
}

fn find_chunks(start: ChunkCoordinate, end: ChunkCoordinate) -> HashSet<ChunkCoordinate> {
    let distance = end - start;
    let x_direction = distance.x.signum();
    let z_direction = distance.z.signum();

    if x_direction == 0 && z_direction == 0 {
        return HashSet::new();
    }

    if x_direction == 0 {
        // Movement was purely along Z.
        return find_chunks_in_direction(end, distance.z, z_direction, ChunkAxis::Z);
    }

    if z_direction == 0 {
        // Movement was purely along X.
        return find_chunks_in_direction(end, distance.x, x_direction, ChunkAxis::X);
    }

    // Diagonal movement: union of the independent X and Z bands.
    let mut coordinates = find_chunks_in_direction(end, distance.x, x_direction, ChunkAxis::X);
    coordinates.extend(find_chunks_in_direction(
        end,
        distance.z,
        z_direction,
        ChunkAxis::Z,
    ));
    coordinates
}

/// Computes the newly exposed band along one axis.
///
/// # Arguments
/// * `coordinate` - The end coordinate of the movement
/// * `distance` - The signed distance moved on the band's axis
/// * `direction` - The sign of `distance`, -1 or 1
/// * `axis` - Which axis the band moves along
fn find_chunks_in_direction(
    coordinate: ChunkCoordinate,
    distance: i32,
    direction: i32,
    axis: ChunkAxis,
) -> HashSet<ChunkCoordinate> {
    let (range_coordinate, direction_coordinate) = match axis {
        ChunkAxis::X => (coordinate.z, coordinate.x),
        ChunkAxis::Z => (coordinate.x, coordinate.z),
    };

    let mut coordinates = HashSet::new();

    if distance.abs() == 1 {
        // A single-chunk step exposes exactly the leading-edge column.
        let d = direction_coordinate + VIEW_DISTANCE * direction;
        for r in (range_coordinate - VIEW_DISTANCE)..=(range_coordinate + VIEW_DISTANCE) {
            coordinates.insert(construct_coordinate(axis, d, r));
        }
    } else {
        let leading_edge = determine_leading_edge(distance, direction_coordinate, direction);
        let far_edge = direction_coordinate + VIEW_DISTANCE * direction;

        let min_edge = leading_edge.min(far_edge);
        let max_edge = leading_edge.max(far_edge);

        for r in (range_coordinate - VIEW_DISTANCE)..=(range_coordinate + VIEW_DISTANCE) {
            for d in min_edge..=max_edge {
                coordinates.insert(construct_coordinate(axis, d, r));
            }
        }
    }

    coordinates
}

/// Determines the edge of the previously active square that the movement is
/// heading away from, on the moving axis.
///
/// A jump longer than the full view span leaves no overlap between the old
/// and new squares, so the band degenerates to the complete new square.
fn determine_leading_edge(distance: i32, coordinate: i32, direction: i32) -> i32 {
    if distance.abs() > ABSOLUTE_DISTANCE_LENGTH {
        coordinate - VIEW_DISTANCE * direction
    } else {
        coordinate - VIEW_DISTANCE * direction + ABSOLUTE_DISTANCE_LENGTH * direction - distance
    }
}

fn construct_coordinate(axis: ChunkAxis, d: i32, r: i32) -> ChunkCoordinate {
    match axis {
        ChunkAxis::X => ChunkCoordinate::of(d, r),
        ChunkAxis::Z => ChunkCoordinate::of(r, d),
    }
}
