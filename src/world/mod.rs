//! # World Module
//!
//! The `World` struct owns the sparse grid of chunks, the set of currently
//! active chunk coordinates, the queue of chunks awaiting mesh construction,
//! and the observer's last-known chunk coordinate. It is the single
//! coordinator between terrain generation, per-chunk meshing, and chunk
//! streaming.
//!
//! ## Scheduling
//!
//! Everything runs on one logical thread. Initial world generation builds
//! every mesh synchronously, in coordinate order. Meshes requested later by
//! streaming are deferred into a FIFO work queue and drained at most one
//! chunk per [`World::process_mesh_queue`] call, so a boundary crossing never
//! stalls the caller with a burst of construction work. Queued builds are
//! never cancelled; a chunk the observer has already left still gets its
//! mesh.
//!
//! ## Memory
//!
//! Chunks are never freed: deactivation only clears the visibility flag and
//! keeps the voxel grid and mesh resident. This is acceptable for the
//! bounded `WORLD_SIZE_IN_CHUNKS`² world; an unbounded world would need an
//! eviction policy instead.

use std::collections::{HashSet, VecDeque};

use cgmath::Vector3;
use log::{debug, info, trace};

use crate::block::block_type::BlockType;
use crate::block::{default_block_catalog, BlockId};
use crate::chunk::chunk_coordinate::ChunkCoordinate;
use crate::chunk::chunk_streaming;
use crate::chunk::Chunk;
use crate::config::WorldConfig;
use crate::terrain::generator::TerrainGenerator;
use crate::voxel_data::{CHUNK_WIDTH, VIEW_DISTANCE, WORLD_SIZE_IN_CHUNKS};

/// The voxel world: a bounded grid of lazily created chunk columns.
pub struct World {
    block_types: Vec<BlockType>,
    generator: TerrainGenerator,
    /// Dense `WORLD_SIZE_IN_CHUNKS`² array of chunk slots, indexed by
    /// coordinate. A slot stays `None` until streaming or initial generation
    /// first requests it.
    chunks: Vec<Option<Chunk>>,
    /// Invariant: a coordinate is in this set iff its slot holds a chunk
    /// whose activation flag is set.
    active_chunks: HashSet<ChunkCoordinate>,
    /// Chunks whose voxels exist but whose meshes are still pending, FIFO.
    mesh_queue: VecDeque<ChunkCoordinate>,
    observer_chunk: ChunkCoordinate,
}

impl World {
    /// Creates an empty world from its configuration.
    ///
    /// No chunks exist until [`World::generate_world`] or streaming requests
    /// them. The observer starts at the world's midpoint chunk.
    pub fn new(config: WorldConfig) -> Self {
        Self::with_generator(TerrainGenerator::with_seed(config.biome, config.seed))
    }

    /// Creates an empty world around an explicit terrain generator.
    ///
    /// This is the seam for supplying a custom noise field; [`World::new`]
    /// wires in the Perlin-backed field for the configured seed.
    pub fn with_generator(generator: TerrainGenerator) -> Self {
        let slots = (WORLD_SIZE_IN_CHUNKS * WORLD_SIZE_IN_CHUNKS) as usize;
        let midpoint = WORLD_SIZE_IN_CHUNKS / 2;
        World {
            block_types: default_block_catalog(),
            generator,
            chunks: (0..slots).map(|_| None).collect(),
            active_chunks: HashSet::new(),
            mesh_queue: VecDeque::new(),
            observer_chunk: ChunkCoordinate::of(midpoint, midpoint),
        }
    }

    /// Generates the initial active region: every chunk within the view
    /// distance of the world midpoint, populated and meshed synchronously in
    /// coordinate order.
    pub fn generate_world(&mut self) {
        let midpoint = WORLD_SIZE_IN_CHUNKS / 2;
        info!(
            "Generating initial world region around chunk {},{}",
            midpoint, midpoint
        );

        for x in (midpoint - VIEW_DISTANCE)..=(midpoint + VIEW_DISTANCE) {
            for z in (midpoint - VIEW_DISTANCE)..=(midpoint + VIEW_DISTANCE) {
                let coordinate = ChunkCoordinate::of(x, z);
                self.create_chunk(coordinate);
                self.build_chunk_mesh(coordinate);
            }
        }

        self.observer_chunk = ChunkCoordinate::of(midpoint, midpoint);
        info!(
            "Initial generation complete: {} active chunks",
            self.active_chunks.len()
        );
    }

    /// The block-type catalog.
    pub fn block_types(&self) -> &[BlockType] {
        &self.block_types
    }

    /// Looks up a catalog entry by block id.
    ///
    /// # Panics
    /// Panics on an out-of-catalog id; the terrain generator never produces
    /// one, so this is a caller contract violation.
    pub fn block_type(&self, id: BlockId) -> &BlockType {
        &self.block_types[id as usize]
    }

    /// The terrain generator this world regenerates itself from.
    pub fn generator(&self) -> &TerrainGenerator {
        &self.generator
    }

    /// The chunk at a coordinate, if it has been created.
    pub fn chunk(&self, coordinate: ChunkCoordinate) -> Option<&Chunk> {
        if !Self::is_chunk_in_world(coordinate) {
            return None;
        }
        self.chunks[Self::chunk_index(coordinate)].as_ref()
    }

    fn chunk_mut(&mut self, coordinate: ChunkCoordinate) -> Option<&mut Chunk> {
        if !Self::is_chunk_in_world(coordinate) {
            return None;
        }
        self.chunks[Self::chunk_index(coordinate)].as_mut()
    }

    /// The set of currently active chunk coordinates.
    pub fn active_chunks(&self) -> &HashSet<ChunkCoordinate> {
        &self.active_chunks
    }

    /// The chunk coordinate the observer was last seen in.
    pub fn observer_chunk(&self) -> ChunkCoordinate {
        self.observer_chunk
    }

    /// The number of chunks still waiting for mesh construction.
    pub fn pending_mesh_builds(&self) -> usize {
        self.mesh_queue.len()
    }

    /// Activates the chunk at `coordinate`, creating and populating it on
    /// first request.
    ///
    /// Out-of-world coordinates are a no-op. Newly created chunks get their
    /// voxels immediately but their mesh construction is deferred to the
    /// work queue.
    pub fn activate_chunk(&mut self, coordinate: ChunkCoordinate) {
        if !Self::is_chunk_in_world(coordinate) {
            return;
        }

        if let Some(chunk) = self.chunks[Self::chunk_index(coordinate)].as_mut() {
            if !chunk.is_active() {
                chunk.set_active(true);
                self.active_chunks.insert(coordinate);
            }
            return;
        }

        self.create_chunk(coordinate);
        self.mesh_queue.push_back(coordinate);
    }

    /// Deactivates the chunk at `coordinate`.
    ///
    /// The chunk's voxels and mesh are retained; only visibility changes.
    /// Out-of-world coordinates and never-created slots are a no-op.
    pub fn deactivate_chunk(&mut self, coordinate: ChunkCoordinate) {
        if !Self::is_chunk_in_world(coordinate) {
            return;
        }
        if let Some(chunk) = self.chunks[Self::chunk_index(coordinate)].as_mut() {
            chunk.set_active(false);
            self.active_chunks.remove(&coordinate);
        }
    }

    /// Reacts to the observer entering a new chunk.
    ///
    /// Runs the ring-difference streaming computation against the previous
    /// observer chunk, activates every newly exposed coordinate, deactivates
    /// every in-range coordinate that fell out of view, and records the new
    /// position. A call with an unchanged coordinate does nothing.
    pub fn on_observer_moved(&mut self, current: ChunkCoordinate) {
        if current == self.observer_chunk {
            return;
        }

        let to_load = chunk_streaming::chunks_to_load(self.observer_chunk, current);
        let to_unload = chunk_streaming::chunks_to_unload(self.observer_chunk, current);
        debug!(
            "Observer moved {} -> {}: {} chunks to load, {} to unload",
            self.observer_chunk,
            current,
            to_load.len(),
            to_unload.len()
        );

        for coordinate in to_load {
            self.activate_chunk(coordinate);
        }
        for coordinate in to_unload {
            self.deactivate_chunk(coordinate);
        }

        self.observer_chunk = current;
    }

    /// Builds at most one queued chunk mesh.
    ///
    /// Called once per scheduling tick by the host loop so that streaming
    /// bursts are amortized over frames. Returns whether a mesh was built.
    pub fn process_mesh_queue(&mut self) -> bool {
        let Some(coordinate) = self.mesh_queue.pop_front() else {
            return false;
        };
        trace!("Building deferred mesh for chunk {}", coordinate);
        self.build_chunk_mesh(coordinate);
        true
    }

    /// Whether the voxel at a world position is solid.
    ///
    /// Out-of-world positions are not solid. If the owning chunk exists and
    /// has been populated, its grid answers; otherwise the pure terrain
    /// generator is consulted directly, which keeps collision and visibility
    /// queries correct for chunks that have not been streamed in yet.
    pub fn is_voxel_solid(&self, position: Vector3<f32>) -> bool {
        if !TerrainGenerator::is_voxel_in_world(position) {
            return false;
        }
        self.block_type(self.voxel_id_at(position)).is_solid()
    }

    /// The block id of the voxel at a world position, falling back to the
    /// terrain generator for unbuilt chunks. Out-of-world positions are air.
    pub fn voxel_id_at(&self, position: Vector3<f32>) -> BlockId {
        if let Some(chunk) = self.chunk(Self::find_chunk_coordinate(position)) {
            if chunk.is_populated() {
                return chunk.voxel_id_from_world_position(position);
            }
        }
        self.generator.generate(position)
    }

    /// The coordinate of the chunk column containing a world position.
    pub fn find_chunk_coordinate(position: Vector3<f32>) -> ChunkCoordinate {
        ChunkCoordinate::of(
            (position.x / CHUNK_WIDTH as f32).floor() as i32,
            (position.z / CHUNK_WIDTH as f32).floor() as i32,
        )
    }

    /// Whether a chunk coordinate lies inside the bounded world grid.
    pub fn is_chunk_in_world(coordinate: ChunkCoordinate) -> bool {
        coordinate.x >= 0
            && coordinate.x < WORLD_SIZE_IN_CHUNKS
            && coordinate.z >= 0
            && coordinate.z < WORLD_SIZE_IN_CHUNKS
    }

    fn chunk_index(coordinate: ChunkCoordinate) -> usize {
        (coordinate.x * WORLD_SIZE_IN_CHUNKS + coordinate.z) as usize
    }

    /// Creates, populates, and activates the chunk at `coordinate`. The mesh
    /// is not built here.
    fn create_chunk(&mut self, coordinate: ChunkCoordinate) {
        let mut chunk = Chunk::new(coordinate);
        chunk.populate(&self.generator);
        self.chunks[Self::chunk_index(coordinate)] = Some(chunk);
        self.active_chunks.insert(coordinate);
    }

    /// Builds and installs the mesh for a populated chunk. Missing or
    /// unpopulated slots are skipped.
    fn build_chunk_mesh(&mut self, coordinate: ChunkCoordinate) {
        let mesh = match self.chunk(coordinate) {
            Some(chunk) if chunk.is_populated() => chunk.build_mesh(self),
            _ => return,
        };
        if let Some(chunk) = self.chunk_mut(coordinate) {
            chunk.set_mesh(mesh);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::block_type::BlockKind;
    use crate::terrain::biome::BiomeAttributes;
    use crate::terrain::noise::testing::ConstNoise;

    /// A world over flat terrain: surface height 11 everywhere, no veins.
    fn flat_world() -> World {
        World::with_generator(TerrainGenerator::new(
            BiomeAttributes::default(),
            Box::new(ConstNoise::flat()),
        ))
    }

    fn assert_active_set_invariant(world: &World) {
        for x in 0..WORLD_SIZE_IN_CHUNKS {
            for z in 0..WORLD_SIZE_IN_CHUNKS {
                let coordinate = ChunkCoordinate::of(x, z);
                let flagged = world
                    .chunk(coordinate)
                    .map(Chunk::is_active)
                    .unwrap_or(false);
                assert_eq!(
                    world.active_chunks().contains(&coordinate),
                    flagged,
                    "invariant broken at {coordinate}"
                );
            }
        }
    }

    #[test]
    fn activation_out_of_world_is_a_no_op() {
        let mut world = flat_world();
        world.activate_chunk(ChunkCoordinate::of(-1, 5));
        world.activate_chunk(ChunkCoordinate::of(5, WORLD_SIZE_IN_CHUNKS));
        assert!(world.active_chunks().is_empty());
        assert_eq!(world.pending_mesh_builds(), 0);
    }

    #[test]
    fn activation_creates_populates_and_defers_meshing() {
        let mut world = flat_world();
        let coordinate = ChunkCoordinate::of(50, 50);

        world.activate_chunk(coordinate);

        let chunk = world.chunk(coordinate).unwrap();
        assert!(chunk.is_active());
        assert!(chunk.is_populated());
        assert!(chunk.mesh().is_none());
        assert_eq!(world.pending_mesh_builds(), 1);

        assert!(world.process_mesh_queue());
        assert!(world.chunk(coordinate).unwrap().mesh().is_some());
        assert!(!world.process_mesh_queue());
    }

    #[test]
    fn reactivation_of_an_existing_chunk_only_flips_the_flag() {
        let mut world = flat_world();
        let coordinate = ChunkCoordinate::of(50, 50);

        world.activate_chunk(coordinate);
        while world.process_mesh_queue() {}
        world.deactivate_chunk(coordinate);

        let chunk = world.chunk(coordinate).unwrap();
        assert!(!chunk.is_active());
        assert!(chunk.mesh().is_some(), "mesh must be retained");
        assert!(!world.active_chunks().contains(&coordinate));

        world.activate_chunk(coordinate);
        assert!(world.chunk(coordinate).unwrap().is_active());
        // No second mesh build was queued.
        assert_eq!(world.pending_mesh_builds(), 0);
    }

    #[test]
    fn mesh_queue_drains_in_fifo_order() {
        let mut world = flat_world();
        let first = ChunkCoordinate::of(50, 50);
        let second = ChunkCoordinate::of(52, 50);

        world.activate_chunk(first);
        world.activate_chunk(second);

        assert!(world.process_mesh_queue());
        assert!(world.chunk(first).unwrap().mesh().is_some());
        assert!(world.chunk(second).unwrap().mesh().is_none());
        assert!(world.process_mesh_queue());
        assert!(world.chunk(second).unwrap().mesh().is_some());
    }

    #[test]
    fn flat_interior_chunk_meshes_exactly_top_and_bottom() {
        let mut world = flat_world();
        let coordinate = ChunkCoordinate::of(50, 50);
        world.activate_chunk(coordinate);
        while world.process_mesh_queue() {}

        // Flat terrain: every side face is hidden by the (conceptual)
        // neighbor columns, leaving 100 top faces at y = 11 and 100 bottom
        // faces against the world edge below y = 0.
        let chunk = world.chunk(coordinate).unwrap();
        let mesh = chunk.mesh().unwrap();
        assert_eq!(mesh.quad_count(), 200);
        assert_eq!(mesh.positions().len(), 4 * 200);
        assert_eq!(mesh.triangles().len(), 6 * 200);
        assert_eq!(mesh.uvs().len(), 4 * 200);
    }

    #[test]
    fn world_edge_chunk_exposes_its_outward_side_faces() {
        let mut world = flat_world();
        let coordinate = ChunkCoordinate::of(0, 50);
        world.activate_chunk(coordinate);
        while world.process_mesh_queue() {}

        // Beyond x = 0 the world is air, so the 12-voxel-tall western wall
        // of the column becomes visible: 12 * 10 extra quads.
        let mesh = world.chunk(coordinate).unwrap().mesh().unwrap();
        assert_eq!(mesh.quad_count(), 200 + 12 * 10);
    }

    #[test]
    fn solidity_queries_agree_across_a_built_chunk_boundary() {
        let mut world = World::new(crate::config::WorldConfig::default());
        let west = ChunkCoordinate::of(50, 50);
        let east = ChunkCoordinate::of(51, 50);
        world.activate_chunk(west);
        world.activate_chunk(east);

        // The boundary runs at world x = 510. Both chunks and the raw
        // generator must agree on every voxel along it.
        for y in 0..25 {
            for z in 500..510 {
                let position = Vector3::new(510.0, y as f32, z as f32);
                let from_world = world.is_voxel_solid(position);
                let from_chunk = world
                    .chunk(east)
                    .unwrap()
                    .is_voxel_solid_at_world_position(position, world.block_types());
                let from_generator = world
                    .block_type(world.generator().generate(position))
                    .is_solid();
                assert_eq!(from_world, from_chunk);
                assert_eq!(from_world, from_generator);
            }
        }
    }

    #[test]
    fn unbuilt_chunks_fall_back_to_the_generator() {
        let world = flat_world();
        let position = Vector3::new(123.0, 7.0, 456.0);

        assert!(world.chunk(World::find_chunk_coordinate(position)).is_none());
        assert_eq!(
            world.voxel_id_at(position),
            world.generator().generate(position)
        );
        // Flat terrain: y = 7 is below the surface, so solid.
        assert!(world.is_voxel_solid(position));
    }

    #[test]
    fn out_of_world_positions_are_never_solid() {
        let world = flat_world();
        assert!(!world.is_voxel_solid(Vector3::new(-1.0, 5.0, 5.0)));
        assert!(!world.is_voxel_solid(Vector3::new(5.0, 25.0, 5.0)));
        assert!(!world.is_voxel_solid(Vector3::new(5.0, -1.0, 5.0)));
        assert!(!world.is_voxel_solid(Vector3::new(5.0, 5.0, 1000.0)));
        assert_eq!(
            world.voxel_id_at(Vector3::new(-1.0, 5.0, 5.0)),
            BlockKind::AIR.id()
        );
    }

    #[test]
    fn initial_generation_activates_the_full_view_square() {
        let mut world = flat_world();
        world.generate_world();

        assert_eq!(world.active_chunks().len(), 21 * 21);
        assert_eq!(world.pending_mesh_builds(), 0);
        assert_eq!(world.observer_chunk(), ChunkCoordinate::of(50, 50));

        // Synchronous generation: every chunk already has its mesh.
        for &coordinate in world.active_chunks() {
            let chunk = world.chunk(coordinate).unwrap();
            assert!(chunk.is_populated());
            assert!(chunk.mesh().is_some());
        }
    }

    #[test]
    fn observer_movement_streams_the_ring_difference() {
        let mut world = flat_world();
        world.generate_world();

        world.on_observer_moved(ChunkCoordinate::of(51, 50));

        // One column entered, one left; the active count is unchanged.
        assert_eq!(world.active_chunks().len(), 21 * 21);
        assert_eq!(world.observer_chunk(), ChunkCoordinate::of(51, 50));
        assert_eq!(world.pending_mesh_builds(), 21);

        for z in 40..=60 {
            let entered = ChunkCoordinate::of(61, z);
            assert!(world.active_chunks().contains(&entered));
            assert!(world.chunk(entered).unwrap().is_populated());
        }
        for z in 40..=60 {
            let left = ChunkCoordinate::of(40, z);
            assert!(!world.active_chunks().contains(&left));
            // The chunk itself survives deactivation.
            assert!(world.chunk(left).is_some());
        }

        while world.process_mesh_queue() {}
        for z in 40..=60 {
            let entered = ChunkCoordinate::of(61, z);
            assert!(world.chunk(entered).unwrap().mesh().is_some());
        }
        assert_active_set_invariant(&world);
    }

    #[test]
    fn repeated_observer_position_does_nothing() {
        let mut world = flat_world();
        world.generate_world();
        let active_before = world.active_chunks().clone();

        world.on_observer_moved(ChunkCoordinate::of(50, 50));

        assert_eq!(world.active_chunks(), &active_before);
        assert_eq!(world.pending_mesh_builds(), 0);
    }

    #[test]
    fn streaming_near_the_world_edge_clips_to_the_grid() {
        let mut world = flat_world();
        // Jump far past the view span: the full new square loads, clipped
        // against the eastern world edge (x <= 99).
        world.on_observer_moved(ChunkCoordinate::of(95, 50));

        assert_eq!(world.active_chunks().len(), 15 * 21);
        for &coordinate in world.active_chunks() {
            assert!(World::is_chunk_in_world(coordinate));
        }
        assert_active_set_invariant(&world);
    }
}
